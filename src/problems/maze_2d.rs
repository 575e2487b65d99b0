use derive_more::Display;
use thiserror::Error;

use crate::error::SearchError;
use crate::float_cost::FloatCost;
use crate::problem::Heuristic;
use crate::problem::SearchProblem;
use crate::space::Successors;

const MAX_ELEMENTS_DISPLAYED: usize = 80;
const RANDOM_STATE_MAX_TRIES: usize = 10_000;

// Simple colours
const WHITE: [u8; 3] = [u8::MAX, u8::MAX, u8::MAX];
const BLACK: [u8; 3] = [u8::MIN, u8::MIN, u8::MIN];
const GREEN: [u8; 3] = [u8::MIN, u8::MAX, u8::MIN];
const BLUE: [u8; 3] = [u8::MIN, u8::MIN, u8::MAX];

/// The tiny maze layout.
pub const TINY_MAZE: &str = include_str!("../../data/layouts/tinyMaze.lay");

pub type Coord = u32;

/// A position in the maze.
///
/// `x` grows to the East and `y` grows to the South, so `(0,0)` is the top
/// left corner of the layout.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({x},{y})")]
pub struct Maze2DState {
    pub x: Coord,
    pub y: Coord,
}

impl Maze2DState {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
    pub fn new_from_usize(x: usize, y: usize) -> Option<Maze2DState> {
        Some(Maze2DState {
            x: Coord::try_from(x).ok()?,
            y: Coord::try_from(y).ok()?,
        })
    }

    /// The position after moving once towards `a`, if it's not off the map.
    #[inline(always)]
    pub fn moved(&self, a: Maze2DAction) -> Option<Maze2DState> {
        let (x, y) = (self.x, self.y);

        #[rustfmt::skip]
        let (x, y) = match a {
            Maze2DAction::North => (x,                  y.checked_sub(1)?),
            Maze2DAction::South => (x,                  y.checked_add(1)?),
            Maze2DAction::East  => (x.checked_add(1)?, y                  ),
            Maze2DAction::West  => (x.checked_sub(1)?, y                  ),
        };
        Some(Maze2DState { x, y })
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maze2DAction {
    #[display("↑")]
    North = 0, // y--
    #[display("↓")]
    South = 1, // y++
    #[display("→")]
    East = 2, // x++
    #[display("←")]
    West = 3, // x--
}

impl Maze2DAction {
    /// The order successors are generated in.
    pub const ALL: [Maze2DAction; 4] = [
        Maze2DAction::North,
        Maze2DAction::South,
        Maze2DAction::East,
        Maze2DAction::West,
    ];
}

pub type Maze2DCost = FloatCost<f64>;

/// How much stepping into a position costs.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, clap::ValueEnum)]
pub enum Maze2DCostFn {
    /// Every step costs 1.
    #[default]
    #[display("uniform")]
    Uniform,
    /// Stepping into column `x` costs `0.5^x`, so the East is cheap.
    #[display("stay-east")]
    StayEast,
    /// Stepping into column `x` costs `2^x`, so the West is cheap.
    #[display("stay-west")]
    StayWest,
}

impl Maze2DCostFn {
    #[inline(always)]
    pub fn cost(&self, to: &Maze2DState) -> Maze2DCost {
        let x = to.x as i32;
        match self {
            Maze2DCostFn::Uniform => Maze2DCost::new(1.0),
            Maze2DCostFn::StayEast => Maze2DCost::new(0.5f64.powi(x)),
            Maze2DCostFn::StayWest => Maze2DCost::new(2.0f64.powi(x)),
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Maze2DCell {
    #[display(" ")]
    Empty,
    #[display("%")]
    Wall,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Maze2DCellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Maze2DCell {
    type Error = Maze2DCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' | '.' | 'o' => Ok(Maze2DCell::Empty),
            '%' | '#' | '█' => Ok(Maze2DCell::Wall),
            ch => Err(Maze2DCellParseError::InvalidCharacter(ch)),
        }
    }
}

/// The walls of a maze.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze2DSpace {
    pub(crate) map: Vec<Vec<Maze2DCell>>,
}

impl Maze2DSpace {
    /// Takes rows of cells, all of them the same width.
    pub fn new_from_map(map: Vec<Vec<Maze2DCell>>) -> Result<Self, Maze2DProblemParseError> {
        let expected = map.first().map(Vec::len).unwrap_or_default();
        if let Some((y, row)) = map.iter().enumerate().find(|(_, row)| row.len() != expected) {
            return Err(Maze2DProblemParseError::Ragged {
                y,
                width: row.len(),
                expected,
            });
        }
        Ok(Self { map })
    }
    pub(crate) fn new_empty_with_dimensions(x: usize, y: usize) -> Self {
        Self {
            map: vec![vec![Maze2DCell::Empty; x]; y],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        if self.map.is_empty() {
            return (0, 0);
        }
        (self.map[0].len(), self.map.len())
    }

    /// The cell at `state`, if it's on the map.
    #[inline(always)]
    pub fn at(&self, state: &Maze2DState) -> Option<Maze2DCell> {
        self.map
            .get(state.y as usize)?
            .get(state.x as usize)
            .copied()
    }

    #[inline(always)]
    pub fn is_free(&self, state: &Maze2DState) -> bool {
        self.at(state) == Some(Maze2DCell::Empty)
    }

    /// Gets the free neighbours of a given position.
    pub fn neighbours(&self, state: &Maze2DState) -> Vec<(Maze2DState, Maze2DAction)> {
        Maze2DAction::ALL
            .iter()
            .filter_map(|a| state.moved(*a).map(|s| (s, *a)))
            .filter(|(s, _)| self.is_free(s))
            .collect()
    }

    pub fn random_state<R: rand::Rng>(&self, r: &mut R) -> Option<Maze2DState> {
        let (max_x, max_y) = self.dimensions();
        if max_x == 0 || max_y == 0 {
            return None;
        }

        for _tries in 0..RANDOM_STATE_MAX_TRIES {
            let x = r.random::<u64>() as usize % max_x;
            let y = r.random::<u64>() as usize % max_y;
            let state = Maze2DState::new_from_usize(x, y)?;
            if self.is_free(&state) {
                return Some(state);
            }
        }

        None
    }
}

impl std::fmt::Display for Maze2DSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.dimensions();
        writeln!(f, "Maze2D({}x{}):", d.0, d.1)?;
        for line in self.map.iter().take(MAX_ELEMENTS_DISPLAYED) {
            for cell in line.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Maze2DSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Maze2D{:?}", self.dimensions())
    }
}

/// Finding a way from a start position to any goal position in a maze.
#[derive(Clone, Debug)]
pub struct Maze2DProblem {
    space: Maze2DSpace,
    start: Maze2DState,
    goals: Vec<Maze2DState>,
    cost_fn: Maze2DCostFn,
}

impl Maze2DProblem {
    pub fn new(space: Maze2DSpace, start: Maze2DState, goals: Vec<Maze2DState>) -> Self {
        Self {
            space,
            start,
            goals,
            cost_fn: Maze2DCostFn::default(),
        }
    }

    #[must_use]
    pub fn with_cost_fn(mut self, cost_fn: Maze2DCostFn) -> Self {
        self.cost_fn = cost_fn;
        self
    }

    pub fn space(&self) -> &Maze2DSpace {
        &self.space
    }
    pub fn start(&self) -> &Maze2DState {
        &self.start
    }
    pub fn goals(&self) -> &[Maze2DState] {
        &self.goals
    }
    pub fn cost_fn(&self) -> Maze2DCostFn {
        self.cost_fn
    }

    /// A new instance on the same maze with a random start and goal.
    pub fn randomize<R: rand::Rng>(&self, r: &mut R) -> Option<Maze2DProblem> {
        let start = self.space.random_state(r)?;
        for _tries in 0..RANDOM_STATE_MAX_TRIES {
            let goal = self.space.random_state(r)?;
            if goal != start {
                return Some(Maze2DProblem {
                    space: self.space.clone(),
                    start,
                    goals: vec![goal],
                    cost_fn: self.cost_fn,
                });
            }
        }

        None
    }

    /// Draws the maze with `plan` traced over it.
    pub fn render_plan(&self, plan: &[Maze2DAction]) -> String {
        use std::fmt::Write;

        let mut steps = rustc_hash::FxHashMap::<Maze2DState, Maze2DAction>::default();
        let mut s = self.start;
        for a in plan {
            steps.insert(s, *a);
            match s.moved(*a) {
                Some(next) => s = next,
                None => break,
            }
        }

        let mut out = String::new();
        for (y, line) in self.space.map.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (x, cell) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                let here = Maze2DState::new(x as Coord, y as Coord);
                let _ = match (here == self.start, self.goals.contains(&here), steps.get(&here)) {
                    (true, _, _) => write!(out, "P"),
                    (false, true, _) => write!(out, "."),
                    (false, false, Some(a)) => write!(out, "{a}"),
                    (false, false, None) => write!(out, "{cell}"),
                };
            }
            out.push('\n');
        }
        out
    }
}

impl SearchProblem for Maze2DProblem {
    type State = Maze2DState;
    type Action = Maze2DAction;
    type Cost = Maze2DCost;

    fn start_state(&self) -> Result<Maze2DState, SearchError> {
        Ok(self.start)
    }

    fn is_goal_state(&self, s: &Maze2DState) -> Result<bool, SearchError> {
        Ok(self.goals.contains(s))
    }

    fn successors(
        &self,
        s: &Maze2DState,
    ) -> Result<Successors<Maze2DState, Maze2DAction, Maze2DCost>, SearchError> {
        Ok(self
            .space
            .neighbours(s)
            .into_iter()
            .map(|(next, a)| (next, a, self.cost_fn.cost(&next)))
            .collect())
    }

    /// Walls can't be walked into.
    fn cost_of_actions(&self, actions: &[Maze2DAction]) -> Result<Maze2DCost, SearchError> {
        let mut s = self.start;
        let mut cost = Maze2DCost::new(0.0);
        for (step, a) in actions.iter().enumerate() {
            s = s
                .moved(*a)
                .filter(|next| self.space.is_free(next))
                .ok_or_else(|| SearchError::IllegalAction {
                    action: format!("{a:?}"),
                    step,
                })?;
            cost += self.cost_fn.cost(&s);
        }
        Ok(cost)
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum Maze2DProblemCell {
    Cell(Maze2DCell),
    #[display("P")]
    Start,
    #[display(".")]
    Goal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Maze2DProblemCellParseError {
    #[error("Invalid cell {e}")]
    InvalidCell { e: Maze2DCellParseError },
}

impl std::convert::TryFrom<char> for Maze2DProblemCell {
    type Error = Maze2DProblemCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'P' | 'S' => Ok(Maze2DProblemCell::Start),
            '.' | 'G' => Ok(Maze2DProblemCell::Goal),
            ch => {
                let cell = Maze2DCell::try_from(ch)
                    .map_err(|e| Maze2DProblemCellParseError::InvalidCell { e })?;
                Ok(Maze2DProblemCell::Cell(cell))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Maze2DProblemParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell {
        e: Maze2DProblemCellParseError,
        x: usize,
        y: usize,
    },
    #[error("Line {y} is {width} cells wide, expected {expected}")]
    Ragged {
        y: usize,
        width: usize,
        expected: usize,
    },
    #[error("No start position")]
    MissingStart,
    #[error("Extra start position at {0}")]
    ExtraStart(Maze2DState),
    #[error("Maze too large")]
    TooLarge,
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
    #[error("Image error when loading '{p}': {e}")]
    ImageError {
        p: std::path::PathBuf,
        e: image::ImageError,
    },
}

/// Collects the start and goals while a map is being read.
#[derive(Default)]
struct Maze2DProblemBuilder {
    start: Option<Maze2DState>,
    goals: Vec<Maze2DState>,
}

impl Maze2DProblemBuilder {
    fn mark(
        &mut self,
        cell: Maze2DProblemCell,
        x: usize,
        y: usize,
    ) -> Result<Maze2DCell, Maze2DProblemParseError> {
        let s = Maze2DState::new_from_usize(x, y).ok_or(Maze2DProblemParseError::TooLarge)?;
        match cell {
            Maze2DProblemCell::Start => {
                if self.start.is_some() {
                    return Err(Maze2DProblemParseError::ExtraStart(s));
                }
                self.start = Some(s);
                Ok(Maze2DCell::Empty)
            }
            Maze2DProblemCell::Goal => {
                self.goals.push(s);
                Ok(Maze2DCell::Empty)
            }
            Maze2DProblemCell::Cell(c) => Ok(c),
        }
    }

    fn build(self, space: Maze2DSpace) -> Result<Maze2DProblem, Maze2DProblemParseError> {
        let start = self.start.ok_or(Maze2DProblemParseError::MissingStart)?;
        Ok(Maze2DProblem::new(space, start, self.goals))
    }
}

/// Reads a text layout.
///
/// `%`, `#` and `█` are walls. `P` or `S` marks the start, `.` or `G` the
/// goals, and spaces are free.
impl std::convert::TryFrom<&str> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();

        if lines.is_empty() {
            return Err(Maze2DProblemParseError::EmptyInput);
        }

        let mut builder = Maze2DProblemBuilder::default();
        let mut map = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.iter().enumerate() {
                let cell = Maze2DProblemCell::try_from(*ch)
                    .map_err(|e| Maze2DProblemParseError::InvalidCell { e, x, y })?;
                row.push(builder.mark(cell, x, y)?);
            }
            map.push(row);
        }

        builder.build(Maze2DSpace::new_from_map(map)?)
    }
}

/// Reads an image, or a text layout from any file that's not a `.png`.
///
/// Images are read as black walls, white free cells, a blue start and green
/// goals.
impl std::convert::TryFrom<&std::path::Path> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        use image::ImageReader;
        use image::Rgb;

        if p.extension().is_none_or(|e| e != "png") {
            let text = std::fs::read_to_string(p).map_err(|e| Maze2DProblemParseError::IOError {
                p: p.to_path_buf(),
                e,
            })?;
            return Maze2DProblem::try_from(text.as_str());
        }

        let img = ImageReader::open(p)
            .map_err(|e| Maze2DProblemParseError::IOError {
                p: p.to_path_buf(),
                e,
            })?
            .decode()
            .map_err(|e| Maze2DProblemParseError::ImageError {
                p: p.to_path_buf(),
                e,
            })?
            .into_rgb8();

        let max_x = img.width() as usize;
        let max_y = img.height() as usize;
        let mut space = Maze2DSpace::new_empty_with_dimensions(max_x, max_y);
        let mut builder = Maze2DProblemBuilder::default();

        for y in 0..max_y {
            for x in 0..max_x {
                let px: &Rgb<u8> = img.get_pixel(x as u32, y as u32);
                let cell = match px.0 {
                    BLACK => Maze2DProblemCell::Cell(Maze2DCell::Wall),
                    WHITE => Maze2DProblemCell::Cell(Maze2DCell::Empty),
                    GREEN => Maze2DProblemCell::Goal,
                    BLUE => Maze2DProblemCell::Start,
                    _ => Maze2DProblemCell::Cell(Maze2DCell::Empty),
                };
                space.map[y][x] = builder.mark(cell, x, y)?;
            }
        }

        builder.build(space)
    }
}

impl std::fmt::Display for Maze2DProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.space.dimensions();
        writeln!(
            f,
            "Maze2DProblem({}x{}, {}) (s:{}, g:{:?}):",
            d.0, d.1, self.cost_fn, self.start, self.goals
        )?;
        write!(f, "{}", self.render_plan(&[]))
    }
}

/// The hand-written plan for [`TINY_MAZE`].
///
/// Any other maze will likely reject it.
pub fn tiny_maze_plan() -> Vec<Maze2DAction> {
    use Maze2DAction::*;
    vec![South, South, West, South, West, West, South, West]
}

fn nearest_goal<F>(p: &Maze2DProblem, s: &Maze2DState, distance: F) -> Maze2DCost
where
    F: Fn(f64, f64) -> f64,
{
    p.goals
        .iter()
        .map(|g| {
            let dx = (g.x as f64 - s.x as f64).abs();
            let dy = (g.y as f64 - s.y as f64).abs();
            Maze2DCost::new(distance(dx, dy))
        })
        .min()
        .unwrap_or(Maze2DCost::new(0.0))
}

/// The distance of following straight lines to the nearest goal.
///
/// Admissible with uniform costs.
#[derive(Copy, Clone, Debug, Default)]
pub struct Maze2DHeuristicManhattan;

impl Heuristic<Maze2DProblem> for Maze2DHeuristicManhattan {
    #[inline(always)]
    fn h(&self, s: &Maze2DState, p: &Maze2DProblem) -> Result<Maze2DCost, SearchError> {
        Ok(nearest_goal(p, s, |dx, dy| dx + dy))
    }
}

/// The straight-line distance to the nearest goal.
#[derive(Copy, Clone, Debug, Default)]
pub struct Maze2DHeuristicEuclidean;

impl Heuristic<Maze2DProblem> for Maze2DHeuristicEuclidean {
    #[inline(always)]
    fn h(&self, s: &Maze2DState, p: &Maze2DProblem) -> Result<Maze2DCost, SearchError> {
        Ok(nearest_goal(p, s, f64::hypot))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::algorithms::Algorithm;
    use crate::algorithms::astar;
    use crate::algorithms::bfs;
    use crate::algorithms::ucs;
    use crate::problem::NullHeuristic;

    const EAST_WEST: &str = indoc! {"
        %%%%%%%%%
        %   P   %
        % %%%%% %
        % %%%%% %
        %   .   %
        %%%%%%%%%
    "};

    fn tiny() -> Maze2DProblem {
        Maze2DProblem::try_from(TINY_MAZE).unwrap()
    }

    #[test]
    fn parse_tiny_maze() {
        let p = tiny();
        assert_eq!(p.space().dimensions(), (7, 7));
        assert_eq!(p.start(), &Maze2DState::new(5, 1));
        assert_eq!(p.goals(), &[Maze2DState::new(1, 5)]);
        assert!(p.space().is_free(&Maze2DState::new(1, 1)));
        assert!(!p.space().is_free(&Maze2DState::new(0, 0)));
        assert!(!p.space().is_free(&Maze2DState::new(70, 0)));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Maze2DProblem::try_from(""),
            Err(Maze2DProblemParseError::EmptyInput)
        ));
        assert!(matches!(
            Maze2DProblem::try_from("%%%\n%.%\n%%%\n"),
            Err(Maze2DProblemParseError::MissingStart)
        ));
        assert!(matches!(
            Maze2DProblem::try_from("%%%%\n%PP%\n%%%%\n"),
            Err(Maze2DProblemParseError::ExtraStart(_))
        ));
        assert!(matches!(
            Maze2DProblem::try_from("%%%%\n%P.\n%%%%\n"),
            Err(Maze2DProblemParseError::Ragged { y: 1, width: 3, expected: 4 })
        ));
        assert!(matches!(
            Maze2DProblem::try_from("%%%\n%P?\n%%%\n"),
            Err(Maze2DProblemParseError::InvalidCell { x: 2, y: 1, .. })
        ));
    }

    #[test]
    fn spaces_must_be_rectangular() {
        use Maze2DCell::*;

        assert!(matches!(
            Maze2DSpace::new_from_map(vec![vec![Empty; 5], vec![Wall]]),
            Err(Maze2DProblemParseError::Ragged { y: 1, width: 1, expected: 5 })
        ));

        let space = Maze2DSpace::new_from_map(vec![vec![Wall, Empty], vec![Empty, Wall]]).unwrap();
        assert_eq!(space.dimensions(), (2, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let s = space.random_state(&mut rng).unwrap();
            assert!(space.is_free(&s));
        }

        let walls = Maze2DSpace::new_from_map(vec![vec![Wall; 3]; 2]).unwrap();
        assert_eq!(walls.random_state(&mut rng), None);
        let empty = Maze2DSpace::new_from_map(vec![]).unwrap();
        assert_eq!(empty.dimensions(), (0, 0));
        assert_eq!(empty.random_state(&mut rng), None);
    }

    #[test]
    fn successors_go_north_south_east_west() {
        let p = Maze2DProblem::try_from(indoc! {"
            %%%%%
            %   %
            % P %
            %   %
            %%%%%
        "})
        .unwrap();
        let successors = p.successors(&Maze2DState::new(2, 2)).unwrap();
        let actions: Vec<Maze2DAction> = successors.iter().map(|(_, a, _)| *a).collect();
        assert_eq!(actions, Maze2DAction::ALL.to_vec());
        assert_eq!(successors[0].0, Maze2DState::new(2, 1));
        assert_eq!(successors[3].0, Maze2DState::new(1, 2));

        // Corners only have two ways out.
        assert_eq!(p.successors(&Maze2DState::new(1, 1)).unwrap().len(), 2);
    }

    #[test]
    fn tiny_maze_plan_solves_tiny_maze() {
        let p = tiny();
        let plan = tiny_maze_plan();
        assert_eq!(p.is_solution(&plan), Ok(true));
        assert_eq!(p.cost_of_actions(&plan), Ok(Maze2DCost::new(8.0)));
        assert!(matches!(
            p.cost_of_actions(&[Maze2DAction::North]),
            Err(SearchError::IllegalAction { step: 0, .. })
        ));
    }

    #[test]
    fn search_tiny_maze() {
        let p = tiny();
        for a in Algorithm::ALL {
            let plan = a.search(&p, &Maze2DHeuristicManhattan).unwrap();
            assert_eq!(p.is_solution(&plan), Ok(true), "{a}");
        }

        assert_eq!(bfs(&p), Ok(tiny_maze_plan()));
        assert_eq!(ucs(&p).map(|plan| plan.len()), Ok(8));
        assert_eq!(
            astar(&p, &Maze2DHeuristicManhattan).map(|plan| plan.len()),
            Ok(8)
        );
        assert_eq!(
            astar(&p, &Maze2DHeuristicEuclidean).map(|plan| plan.len()),
            Ok(8)
        );
    }

    #[test]
    fn cost_functions_pick_a_side() {
        let east = Maze2DProblem::try_from(EAST_WEST)
            .unwrap()
            .with_cost_fn(Maze2DCostFn::StayEast);
        let west = east.clone().with_cost_fn(Maze2DCostFn::StayWest);

        let east_plan = ucs(&east).unwrap();
        let west_plan = ucs(&west).unwrap();
        assert_eq!(east_plan.first(), Some(&Maze2DAction::East));
        assert_eq!(west_plan.first(), Some(&Maze2DAction::West));
        assert_eq!(east_plan.len(), 9);
        assert_eq!(west_plan.len(), 9);

        assert!(east.cost_of_actions(&east_plan).unwrap() < east.cost_of_actions(&west_plan).unwrap());
        assert!(west.cost_of_actions(&west_plan).unwrap() < west.cost_of_actions(&east_plan).unwrap());

        // Without an estimate A* is UCS.
        assert_eq!(astar(&east, &NullHeuristic), Ok(east_plan));
        assert_eq!(astar(&west, &NullHeuristic), Ok(west_plan));
    }

    #[test]
    fn heuristics() {
        let p = Maze2DProblem::try_from(EAST_WEST).unwrap();
        let s = Maze2DState::new(7, 0);
        assert_eq!(Maze2DHeuristicManhattan.h(&s, &p), Ok(Maze2DCost::new(7.0)));
        assert_eq!(Maze2DHeuristicEuclidean.h(&s, &p), Ok(Maze2DCost::new(5.0)));
        assert_eq!(
            Maze2DHeuristicManhattan.h(&Maze2DState::new(4, 4), &p),
            Ok(Maze2DCost::new(0.0))
        );
    }

    #[test]
    fn randomized_instances() {
        let p = tiny();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..10 {
            let instance = p.randomize(&mut rng).unwrap();
            assert!(instance.space().is_free(instance.start()));
            assert_eq!(instance.goals().len(), 1);
            assert_ne!(instance.goals()[0], *instance.start());

            // The tiny maze is connected.
            let plan = bfs(&instance).unwrap();
            assert_eq!(instance.is_solution(&plan), Ok(true));
        }
    }

    #[test]
    fn render() {
        let p = tiny();
        let rendered = p.render_plan(&tiny_maze_plan());
        assert_eq!(
            rendered,
            indoc! {"
                %%%%%%%
                %    P%
                % %%%↓%
                %  %↓←%
                %%↓←←%%
                %.←%%%%
                %%%%%%%
            "}
        );
        assert!(p.to_string().starts_with("Maze2DProblem(7x7, uniform)"));
    }
}
