use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::slice;

use crate::moves::Load;
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }
}

impl Display for Bank {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Bank::Left => write!(f, "left"),
            Bank::Right => write!(f, "right"),
        }
    }
}

/// One configuration of the world.
///
/// Only the starting (left) bank is stored, the right bank is whatever is left of the puzzle's travelers.
/// Counts are signed so that a move which takes more travelers than a bank has
/// can still be constructed and then rejected by `is_valid`.
///
/// How a state was reached is not part of it - the search keeps that in its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub missionaries_left: i16,
    pub cannibals_left: i16,
    pub boat: Bank,
}

impl State {
    pub fn new(missionaries_left: i16, cannibals_left: i16, boat: Bank) -> Self {
        State {
            missionaries_left,
            cannibals_left,
            boat,
        }
    }

    pub fn boat_on_left(&self) -> bool {
        self.boat == Bank::Left
    }

    pub fn missionaries_right(&self, puzzle: &Puzzle) -> i16 {
        i16::from(puzzle.travelers()) - self.missionaries_left
    }

    pub fn cannibals_right(&self, puzzle: &Puzzle) -> i16 {
        i16::from(puzzle.travelers()) - self.cannibals_left
    }

    pub fn is_valid(&self, puzzle: &Puzzle) -> bool {
        let n = i16::from(puzzle.travelers());
        if self.missionaries_left < 0
            || self.missionaries_left > n
            || self.cannibals_left < 0
            || self.cannibals_left > n
        {
            return false;
        }

        bank_is_safe(self.missionaries_left, self.cannibals_left)
            && bank_is_safe(self.missionaries_right(puzzle), self.cannibals_right(puzzle))
    }

    pub fn is_goal(&self) -> bool {
        self.missionaries_left == 0 && self.cannibals_left == 0 && self.boat == Bank::Right
    }

    /// Valid states reachable by one crossing, in the order of the puzzle's loads
    pub fn successors<'p>(&self, puzzle: &'p Puzzle) -> Successors<'p> {
        Successors {
            puzzle,
            from: *self,
            loads: puzzle.loads().iter(),
        }
    }

    /// Applies a load to the boat's side and moves the boat across.
    /// The result is not validated.
    pub(crate) fn cross(&self, load: Load) -> State {
        let (missionaries, cannibals) = (i16::from(load.missionaries), i16::from(load.cannibals));
        match self.boat {
            Bank::Left => State::new(
                self.missionaries_left - missionaries,
                self.cannibals_left - cannibals,
                Bank::Right,
            ),
            Bank::Right => State::new(
                self.missionaries_left + missionaries,
                self.cannibals_left + cannibals,
                Bank::Left,
            ),
        }
    }

    /// How many of each type moved between `prev` and this state.
    ///
    /// `None` if either count changed by more than a `Load` can hold,
    /// which never happens between neighbors on a path.
    pub fn load_from(&self, prev: &State) -> Option<Load> {
        let missionaries = moved(self.missionaries_left, prev.missionaries_left)?;
        let cannibals = moved(self.cannibals_left, prev.cannibals_left)?;
        Some(Load::new(missionaries, cannibals))
    }
}

fn moved(now: i16, before: i16) -> Option<u8> {
    u8::try_from((i32::from(now) - i32::from(before)).abs()).ok()
}

/// Missionaries get eaten if outnumbered
fn bank_is_safe(missionaries: i16, cannibals: i16) -> bool {
    missionaries == 0 || cannibals <= missionaries
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.missionaries_left, self.cannibals_left, self.boat
        )
    }
}

/// Lazy iterator over valid successors of a state.
#[derive(Debug, Clone)]
pub struct Successors<'p> {
    puzzle: &'p Puzzle,
    from: State,
    loads: slice::Iter<'p, Load>,
}

impl Iterator for Successors<'_> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let puzzle = self.puzzle;
        let from = self.from;
        self.loads
            .by_ref()
            .map(|&load| from.cross(load))
            .find(|candidate| candidate.is_valid(puzzle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.loads.size_hint().1)
    }
}
