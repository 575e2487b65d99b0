#![no_main]

use libfuzzer_sys::fuzz_target;

use graph_search::algorithms::Algorithm;
use graph_search::algorithms::astar;
use graph_search::algorithms::bfs;
use graph_search::algorithms::ucs;
use graph_search::problem::NullHeuristic;
use graph_search::problems::graph::TextGraphProblem;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(problem) = TextGraphProblem::try_from(text) else {
        return;
    };

    // A* without an estimate is UCS.
    assert_eq!(ucs(&problem), astar(&problem, &NullHeuristic));

    // No plan has fewer actions than the BFS one.
    let shortest = bfs(&problem).map(|plan| plan.len());
    for algorithm in Algorithm::ALL {
        let plan = algorithm.search(&problem, &NullHeuristic);
        assert_eq!(plan.is_ok(), shortest.is_ok(), "{algorithm}");
        if let (Ok(plan), Ok(shortest)) = (plan, &shortest) {
            assert!(plan.len() >= *shortest, "{algorithm}: {plan:?}");
        }
    }
});
