use std::fmt::{self, Display, Formatter};

use crate::moves::Load;
use crate::solver::SolverErr;
use crate::state::{Bank, State};

/// Parameters of one puzzle instance.
///
/// There are always as many cannibals as missionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    travelers: u8,
    capacity: u8,
    /// Every possible boat load, computed once so expanding states doesn't allocate
    loads: Vec<Load>,
}

impl Puzzle {
    pub fn new(travelers: u8, capacity: u8) -> Result<Self, SolverErr> {
        if capacity == 0 {
            return Err(SolverErr::ZeroCapacity);
        }

        // bigger loads first, matters only for which path depth-first finds
        let mut loads = Vec::new();
        for total in (1..=capacity).rev() {
            for missionaries in 0..=total {
                loads.push(Load::new(missionaries, total - missionaries));
            }
        }

        Ok(Self {
            travelers,
            capacity,
            loads,
        })
    }

    /// 3 missionaries, 3 cannibals, boat for 2
    pub fn canonical() -> Self {
        Self::new(3, 2).expect("Canonical puzzle is valid")
    }

    pub fn travelers(&self) -> u8 {
        self.travelers
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub(crate) fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Everybody including the boat on the left bank
    pub fn initial_state(&self) -> State {
        let n = i16::from(self.travelers);
        State::new(n, n, Bank::Left)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{0} missionaries and {0} cannibals with boat capacity {1}",
            self.travelers, self.capacity
        )
    }
}
