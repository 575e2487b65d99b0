use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anstream::println;
use clap::Parser;
use indoc::indoc;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use graph_search::algorithms::Algorithm;
use graph_search::algorithms::astar::AStarSearch;
use graph_search::algorithms::astar::HeuristicCost;
use graph_search::algorithms::breadth_first::BreadthFirstSearch;
use graph_search::algorithms::depth_first::DepthFirstSearch;
use graph_search::algorithms::graph_search::GraphSearch;
use graph_search::algorithms::graph_search::Node;
use graph_search::algorithms::graph_search::Ranking;
use graph_search::algorithms::graph_search::Unranked;
use graph_search::algorithms::uniform_cost::PathCost;
use graph_search::algorithms::uniform_cost::UniformCostSearch;
use graph_search::cost::Cost;
use graph_search::data_structures::Frontier;
use graph_search::data_structures::PriorityQueue;
use graph_search::data_structures::Queue;
use graph_search::data_structures::Stack;
use graph_search::error::SearchError;
use graph_search::problem::Heuristic;
use graph_search::problem::NullHeuristic;
use graph_search::problem::SearchProblem;
use graph_search::problems::maze_2d::Maze2DCostFn;
use graph_search::problems::maze_2d::Maze2DHeuristicEuclidean;
use graph_search::problems::maze_2d::Maze2DHeuristicManhattan;
use graph_search::problems::maze_2d::Maze2DProblem;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum HeuristicChoice {
    Null,
    #[default]
    Manhattan,
    Euclidean,
}

impl HeuristicChoice {
    fn heuristic(&self) -> &'static dyn Heuristic<Maze2DProblem> {
        match self {
            HeuristicChoice::Null => &NullHeuristic,
            HeuristicChoice::Manhattan => &Maze2DHeuristicManhattan,
            HeuristicChoice::Euclidean => &Maze2DHeuristicEuclidean,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = graph_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, env = "LOGS_SEARCH", default_value = "logs/search.org")]
    pub output: PathBuf,

    /// Maze layouts, either text or `.png`. Solves a small demo maze if empty.
    #[arg()]
    pub problems: Vec<PathBuf>,

    #[arg(short = 'f', long = "fn", value_enum, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,
    /// Only used by A*.
    #[arg(long, value_enum, default_value_t = HeuristicChoice::default())]
    pub heuristic: HeuristicChoice,
    #[arg(long, value_enum, default_value_t = Maze2DCostFn::default())]
    pub cost_fn: Maze2DCostFn,

    /// Random start/goal instances to solve on each layout besides its own.
    #[arg(long, default_value_t = 0u64)]
    pub num_instances: u64,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn run<P, F, R, W>(
    out: &mut W,
    search: Result<GraphSearch<'_, P, F, R>, SearchError>,
) -> std::io::Result<Result<Vec<P::Action>, SearchError>>
where
    P: SearchProblem,
    F: Frontier<Node<P>, R::Priority>,
    R: Ranking<P>,
    W: Write,
{
    let mut search = match search {
        Ok(search) => search,
        Err(e) => return Ok(Err(e)),
    };
    let plan = search.run();
    writeln!(out, "#+begin_src ron\n{search:?}\n#+end_src")?;
    writeln!(out, "#+begin_example")?;
    search.write_memory_stats(&mut *out)?;
    writeln!(out, "#+end_example")?;
    Ok(plan)
}

fn solve<W: Write>(
    out: &mut W,
    args: &Args,
    name: &str,
    problem: &Maze2DProblem,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "#+begin_example\n{problem}#+end_example")?;
    writeln!(out, "**** {}", args.algorithm)?;

    let heuristic = args.heuristic.heuristic();
    let plan = match args.algorithm {
        Algorithm::DepthFirst => run(
            out,
            DepthFirstSearch::new(problem, Stack::new(), Unranked),
        )?,
        Algorithm::BreadthFirst => run(
            out,
            BreadthFirstSearch::new(problem, Queue::new(), Unranked),
        )?,
        Algorithm::UniformCost => run(
            out,
            UniformCostSearch::new(problem, PriorityQueue::new(), PathCost),
        )?,
        Algorithm::AStar => run(
            out,
            AStarSearch::new(problem, PriorityQueue::new(), HeuristicCost::new(heuristic)),
        )?,
    };

    match plan.and_then(|plan| problem.cost_of_actions(&plan).map(|c| (plan, c))) {
        Ok((plan, cost)) => {
            writeln!(out, "- Actions: {}", plan.len())?;
            if cost.valid() {
                writeln!(out, "- Cost: {cost}")?;
            } else {
                writeln!(out, "- Cost: overflowed")?;
            }
            writeln!(out, "#+begin_example\n{}#+end_example", problem.render_plan(&plan))?;
            println!(
                "{name}: {} actions, cost {}",
                plan.len().green(),
                cost.green()
            );
        }
        Err(e) => {
            writeln!(out, "- Failed: {e}")?;
            println!("{name}: {}", e.red());
            if e.is_fatal() {
                return Err(e.into());
            }
        }
    }
    Ok(())
}

fn demo_problem() -> Result<Maze2DProblem, Box<dyn std::error::Error>> {
    let maze_str = indoc! {"
      #######
      #S    #
      # ### #
      #   #G#
      #######
    "};
    Ok(Maze2DProblem::try_from(maze_str)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.color.write_global();
    println!("Logging to {:?}", args.output.yellow());

    if let Some(dir) = args.output.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = File::create(&args.output)?;
    let mut out = BufWriter::new(file);

    writeln!(out, ":PROPERTIES:")?;
    writeln!(out, ":VERSION: {:?}", graph_search::build::PKG_VERSION)?;
    writeln!(out, ":ALGORITHM: {}", args.algorithm)?;
    writeln!(out, ":COST_FN: {}", args.cost_fn)?;
    writeln!(out, ":END:")?;
    writeln!(out, "* Runs")?;

    let mut layouts = vec![];
    if args.problems.is_empty() {
        layouts.push(("demo".to_string(), demo_problem()?));
    }
    for p in &args.problems {
        layouts.push((p.display().to_string(), Maze2DProblem::try_from(p.as_path())?));
    }

    for (name, problem) in layouts {
        let problem = problem.with_cost_fn(args.cost_fn);
        let (x, y) = problem.space().dimensions();
        writeln!(out, "** Layout {name} ({x}x{y})")?;
        writeln!(out, "*** Problem")?;
        if let Err(e) = solve(&mut out, &args, &name, &problem) {
            out.flush()?;
            return Err(e);
        }

        for instance in 0..args.num_instances {
            let mut rng = ChaCha8Rng::seed_from_u64(instance);
            writeln!(out, "*** Instance {instance}")?;
            match problem.randomize(&mut rng) {
                Some(random_problem) => {
                    let instance_name = format!("{name}:{instance}");
                    if let Err(e) = solve(&mut out, &args, &instance_name, &random_problem) {
                        out.flush()?;
                        return Err(e);
                    }
                }
                None => {
                    writeln!(out, "- No free cells to pick a start and goal from")?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
