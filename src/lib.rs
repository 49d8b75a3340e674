// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod moves;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;

use crate::config::Options;
use crate::solver::{SolverErr, SolverOk};

pub trait Solve {
    fn solve(&self, options: &Options) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use crate::config::{Format, Method};
    use crate::puzzle::Puzzle;
    use crate::solution_formatter::SolutionFormatter;

    use super::*;

    #[test]
    fn canonical_solution() {
        let expected = r"
MMM CCC |\__/~~~~| ... ...
MMM C.. |~~~~\__/| ... CC.
MMM CC. |\__/~~~~| ... C..
MMM ... |~~~~\__/| ... CCC
MMM C.. |\__/~~~~| ... CC.
M.. C.. |~~~~\__/| MM. CC.
MM. CC. |\__/~~~~| M.. C..
... CC. |~~~~\__/| MMM C..
... CCC |\__/~~~~| MMM ...
... C.. |~~~~\__/| MMM CC.
... CC. |\__/~~~~| MMM C..
... ... |~~~~\__/| MMM CCC
"
        .trim_start_matches('\n');

        let puzzle = Puzzle::canonical();
        let solution = puzzle.solve(&Options::default()).unwrap();
        let states = solution.path_states.unwrap();
        assert_eq!(
            SolutionFormatter::new(&puzzle, &states, Format::Banks).to_string(),
            expected
        );
    }

    #[test]
    fn methods_agree_on_solvability() {
        for n in 1..=6 {
            for capacity in 1..=4 {
                let puzzle = Puzzle::new(n, capacity).unwrap();
                let bfs = puzzle.solve(&Options::default()).unwrap();
                let dfs = puzzle
                    .solve(&Options {
                        method: Method::DepthFirst,
                        ..Options::default()
                    })
                    .unwrap();
                assert_eq!(
                    bfs.path_states.is_some(),
                    dfs.path_states.is_some(),
                    "{}",
                    puzzle
                );

                // breadth-first finds shortest paths
                if let (Some(b), Some(d)) = (bfs.path_states, dfs.path_states) {
                    assert!(b.len() <= d.len());
                }
            }
        }
    }
}
