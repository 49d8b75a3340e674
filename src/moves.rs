use std::fmt::{self, Debug, Display, Formatter};

use crate::state::{Bank, State};

/// Travelers in the boat during one crossing
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Load {
    pub missionaries: u8,
    pub cannibals: u8,
}

impl Load {
    pub fn new(missionaries: u8, cannibals: u8) -> Self {
        Load {
            missionaries,
            cannibals,
        }
    }

    pub fn total(self) -> u8 {
        self.missionaries + self.cannibals
    }
}

impl Display for Load {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for _ in 0..self.missionaries {
            write!(f, "M")?;
        }
        for _ in 0..self.cannibals {
            write!(f, "C")?;
        }
        Ok(())
    }
}

impl Debug for Load {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub load: Load,
    /// The bank the boat departs from
    pub from: Bank,
}

impl Crossing {
    pub fn new(load: Load, from: Bank) -> Self {
        Crossing { load, from }
    }
}

impl Display for Crossing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.from {
            Bank::Left => write!(f, "{}>", self.load),
            Bank::Right => write!(f, "<{}", self.load),
        }
    }
}

impl Debug for Crossing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Crossings(Vec<Crossing>);

impl Crossings {
    #[cfg(test)]
    pub(crate) fn new(crossings: Vec<Crossing>) -> Self {
        Crossings(crossings)
    }

    /// Crossings between consecutive states of a path.
    ///
    /// `None` if two neighbors are too far apart to be one crossing.
    pub fn from_path(states: &[State]) -> Option<Self> {
        states
            .windows(2)
            .map(|pair| {
                pair[1]
                    .load_from(&pair[0])
                    .map(|load| Crossing::new(load, pair[0].boat))
            })
            .collect::<Option<Vec<_>>>()
            .map(Crossings)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn missionary_trips(&self) -> usize {
        self.0
            .iter()
            .map(|c| usize::from(c.load.missionaries))
            .sum()
    }

    pub fn cannibal_trips(&self) -> usize {
        self.0.iter().map(|c| usize::from(c.load.cannibals)).sum()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Crossing> {
        self.0.iter()
    }
}

impl IntoIterator for Crossings {
    type Item = Crossing;
    type IntoIter = ::std::vec::IntoIter<Crossing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Crossings {
    type Item = &'a Crossing;
    type IntoIter = ::std::slice::Iter<'a, Crossing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Crossings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, crossing) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", crossing)?;
        }
        Ok(())
    }
}

impl Debug for Crossings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
