use crate::moves::Load;
use crate::state::State;

/// A state as discovered by the search.
///
/// Nodes live in an arena for the duration of one search,
/// `prev` points to the node whose expansion produced this one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dist: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>) -> Self {
        let dist = prev.map_or(0, |p| p.dist + 1);
        Self { state, prev, dist }
    }

    /// Travelers carried to get here, `None` for the initial state
    #[allow(unused)] // only the graph feature and tests look at individual loads
    pub(crate) fn load(&self) -> Option<Load> {
        self.prev.and_then(|prev| self.state.load_from(&prev.state))
    }
}
