use std::error::Error;
use std::fmt::{self, Display, Formatter};
#[cfg(feature = "graph")]
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One picture line per state - travelers on both banks and the boat between them
    Banks,
    /// Just the counts on the starting bank and the boat side
    Counts,
}

/// Order in which the frontier is processed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    BreadthFirst,
    DepthFirst,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::BreadthFirst => write!(f, "breadth-first"),
            Method::DepthFirst => write!(f, "depth-first"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodErr(String);

impl Display for ParseMethodErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown search method: {}", self.0)
    }
}

impl Error for ParseMethodErr {}

impl FromStr for Method {
    type Err = ParseMethodErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadth-first" | "bfs" => Ok(Method::BreadthFirst),
            "depth-first" | "dfs" => Ok(Method::DepthFirst),
            _ => Err(ParseMethodErr(s.to_owned())),
        }
    }
}

/// Only `Copy` without the `graph` feature, the output path is a `PathBuf`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(not(feature = "graph"), derive(Copy))]
pub struct Options {
    pub method: Method,
    /// Max number of states taken from the frontier, `None` means unlimited
    pub max_steps: Option<usize>,
    pub print_status: bool,
    /// Where to write the explored state space in dot format
    #[cfg(feature = "graph")]
    pub graph: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            method: Method::BreadthFirst,
            max_steps: None,
            print_status: false,
            #[cfg(feature = "graph")]
            graph: None,
        }
    }
}
