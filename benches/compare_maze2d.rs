use std::time::Duration;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use glob::glob;
use hrsw::Stopwatch;
use human_duration::human_duration;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use graph_search::algorithms::Algorithm;
use graph_search::problems::maze_2d::Maze2DHeuristicManhattan;
use graph_search::problems::maze_2d::Maze2DProblem;

const NUM_INSTANCES: u64 = 3;
/// Maximum time willing to wait for a single benchmark instance.
/// Experiments are carried out at least 5s and at least 100 times, so running a
/// 1s instance takes 1m40s.
const MAX_INSTANCE_TIME: Duration = Duration::from_secs(1);

fn solve(algorithm: Algorithm, problem: &Maze2DProblem) -> usize {
    algorithm
        .search(problem, &Maze2DHeuristicManhattan)
        .map(|plan| plan.len())
        .unwrap_or_default()
}

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maze2D Search");

    for path in glob("data/layouts/*.lay")
        .unwrap()
        .filter_map(std::result::Result::ok)
    {
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        let base_problem = Maze2DProblem::try_from(path.as_path()).unwrap();
        let (x, y) = base_problem.space().dimensions();

        let mut instances = vec![(format!("{name}[{x}x{y}]"), base_problem.clone())];
        for i in 0..NUM_INSTANCES {
            let mut rng = ChaCha8Rng::seed_from_u64(i);
            if let Some(problem) = base_problem.randomize(&mut rng) {
                instances.push((format!("{name}[{x}x{y}]:{i}"), problem));
            }
        }

        for (instance_name, problem) in &instances {
            for algorithm in Algorithm::ALL {
                let mut stopwatch = Stopwatch::new_started();
                let plan_len = solve(algorithm, problem);
                stopwatch.stop();
                let elapsed = stopwatch.elapsed();
                if elapsed > MAX_INSTANCE_TIME {
                    log::warn!(
                        "Skipping {instance_name} as it takes too long with {algorithm} ({})",
                        human_duration(&elapsed)
                    );
                    continue;
                }
                log::info!("{algorithm} on {instance_name}: {plan_len} actions");

                group.bench_with_input(
                    BenchmarkId::new(algorithm.alias(), instance_name),
                    problem,
                    |b, p| b.iter(|| solve(algorithm, p)),
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
