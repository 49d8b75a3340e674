mod backtracking;
mod frontier;
#[cfg(feature = "graph")]
mod graph;
mod node;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, warn};
use typed_arena::Arena;

use crate::config::{Method, Options};
use crate::moves::Crossings;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

use self::frontier::{Fifo, Frontier, Lifo};
#[cfg(feature = "graph")]
use self::graph::Graph;
use self::node::SearchNode;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    ZeroCapacity,
    InvalidInitialState(State),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::ZeroCapacity => write!(f, "Boat capacity must be at least 1"),
            SolverErr::InvalidInitialState(state) => write!(
                f,
                "Invalid initial state {} - out of range or missionaries outnumbered",
                state
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// Initial state first, goal last. `None` if there is no solution
    /// or the step budget ran out before one was found.
    pub path_states: Option<Vec<State>>,
    pub stats: Stats,
    pub method: Method,
    pub budget_exhausted: bool,
}

impl SolverOk {
    fn new(
        path_states: Option<Vec<State>>,
        stats: Stats,
        method: Method,
        budget_exhausted: bool,
    ) -> Self {
        Self {
            path_states,
            stats,
            method,
            budget_exhausted,
        }
    }

    pub fn crossings(&self) -> Option<Crossings> {
        self.path_states
            .as_ref()
            .and_then(|states| Crossings::from_path(states))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None if self.budget_exhausted => writeln!(f, "Step budget exhausted")?,
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "{}: {}", self.method, states.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, options: &Options) -> Result<SolverOk, SolverErr> {
        search(self, self.initial_state(), options)
    }
}

/// Looks for a sequence of crossings from `initial` to the goal.
///
/// Fails only if `initial` itself is invalid, not finding a solution is reported in `SolverOk`.
pub fn search(puzzle: &Puzzle, initial: State, options: &Options) -> Result<SolverOk, SolverErr> {
    if !initial.is_valid(puzzle) {
        return Err(SolverErr::InvalidInitialState(initial));
    }

    let arena = Arena::new();
    let solver_ok = match options.method {
        Method::BreadthFirst => search_with(puzzle, initial, options, &arena, Fifo::new()),
        Method::DepthFirst => search_with(puzzle, initial, options, &arena, Lifo::new()),
    };
    Ok(solver_ok)
}

fn search_with<'a, F>(
    puzzle: &Puzzle,
    initial: State,
    options: &Options,
    arena: &'a Arena<SearchNode<'a>>,
    mut to_visit: F,
) -> SolverOk
where
    F: Frontier<&'a SearchNode<'a>>,
{
    debug!("Search called: {} from {}", puzzle, initial);

    let mut stats = Stats::new();
    // states in `to_visit` - the frontier itself can't be searched quickly
    let mut queued = FnvHashSet::default();
    let mut visited = FnvHashSet::default();
    #[cfg(feature = "graph")]
    let mut graph = Graph::new();

    let start: &SearchNode<'a> = arena.alloc(SearchNode::new(initial, None));
    stats.add_created(start);
    queued.insert(initial);
    #[cfg(feature = "graph")]
    graph.add(start);
    to_visit.push(start);

    let mut steps = 0;
    let (path_states, budget_exhausted) = loop {
        if let Some(max_steps) = options.max_steps {
            if steps >= max_steps {
                warn!("Step budget of {} exhausted", max_steps);
                break (None, true);
            }
        }

        let cur_node = match to_visit.pop() {
            Some(node) => node,
            None => {
                debug!("Frontier empty, no solution");
                break (None, false);
            }
        };
        steps += 1;
        queued.remove(&cur_node.state);

        if stats.add_unique_visited(cur_node) && options.print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.state.is_goal() {
            debug!("Solved, backtracking path");
            #[cfg(feature = "graph")]
            graph.mark_goal(cur_node.state);
            break (Some(backtracking::backtrack_path(cur_node)), false);
        }

        let newly_visited = visited.insert(cur_node.state);
        debug_assert!(newly_visited, "State {} expanded twice", cur_node.state);
        #[cfg(feature = "graph")]
        graph.mark_expanded(cur_node.state);

        for neighbor_state in cur_node.state.successors(puzzle) {
            if visited.contains(&neighbor_state) || queued.contains(&neighbor_state) {
                stats.add_reached_duplicate(cur_node.dist + 1);
                continue;
            }

            let next_node: &SearchNode<'a> =
                arena.alloc(SearchNode::new(neighbor_state, Some(cur_node)));
            stats.add_created(next_node);
            queued.insert(neighbor_state);
            #[cfg(feature = "graph")]
            graph.add(next_node);
            to_visit.push(next_node);
        }
    };

    debug!(
        "Search finished after {} steps, {} states left in frontier",
        steps,
        to_visit.len()
    );

    #[cfg(feature = "graph")]
    {
        if let Some(ref path) = options.graph {
            if let Err(err) = graph.write(path) {
                log::error!("Failed to write state space to {}: {}", path.display(), err);
            }
        }
    }

    SolverOk::new(path_states, stats, options.method, budget_exhausted)
}
