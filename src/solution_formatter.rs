use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::puzzle::Puzzle;
use crate::state::{Bank, State};

const BOAT_LEFT: &str = r"\__/~~~~";
const BOAT_RIGHT: &str = r"~~~~\__/";

/// Renders a path one state per line.
pub struct SolutionFormatter<'a> {
    puzzle: &'a Puzzle,
    states: &'a [State],
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(puzzle: &'a Puzzle, states: &'a [State], format: Format) -> Self {
        Self {
            puzzle,
            states,
            format,
        }
    }

    fn write_state(&self, f: &mut Formatter<'_>, state: &State) -> fmt::Result {
        match self.format {
            Format::Counts => write!(f, "{}", state),
            Format::Banks => {
                self.write_bank(f, state.missionaries_left, state.cannibals_left)?;
                let boat = match state.boat {
                    Bank::Left => BOAT_LEFT,
                    Bank::Right => BOAT_RIGHT,
                };
                write!(f, " |{}| ", boat)?;
                self.write_bank(
                    f,
                    state.missionaries_right(self.puzzle),
                    state.cannibals_right(self.puzzle),
                )
            }
        }
    }

    /// Empty places are dots so the river stays in the same column
    fn write_bank(&self, f: &mut Formatter<'_>, missionaries: i16, cannibals: i16) -> fmt::Result {
        let n = i16::from(self.puzzle.travelers());
        write_group(f, 'M', missionaries, n)?;
        write!(f, " ")?;
        write_group(f, 'C', cannibals, n)
    }
}

fn write_group(f: &mut Formatter<'_>, c: char, count: i16, places: i16) -> fmt::Result {
    for i in 0..places {
        write!(f, "{}", if i < count { c } else { '.' })?;
    }
    Ok(())
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in self.states {
            self.write_state(f, state)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
