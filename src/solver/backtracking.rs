use crate::solver::node::SearchNode;
use crate::state::State;

/// Follows `prev` links back to the initial state.
/// The returned path starts with the initial state and ends with `final_node`'s state.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<State> {
    let mut states = Vec::new();
    let mut cur = Some(final_node);
    while let Some(node) = cur {
        states.push(node.state);
        cur = node.prev;
    }
    states.reverse();
    states
}

#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use super::*;
    use crate::state::Bank;

    #[test]
    fn backtracking() {
        let arena = Arena::new();
        let root: &SearchNode<'_> = arena.alloc(SearchNode::new(State::new(3, 3, Bank::Left), None));
        let a: &SearchNode<'_> = arena.alloc(SearchNode::new(State::new(3, 1, Bank::Right), Some(root)));
        // sibling shares the parent but is not on the path
        let _b: &SearchNode<'_> = arena.alloc(SearchNode::new(State::new(2, 2, Bank::Right), Some(root)));
        let c: &SearchNode<'_> = arena.alloc(SearchNode::new(State::new(3, 2, Bank::Left), Some(a)));

        assert_eq!(
            backtrack_path(c),
            vec![
                State::new(3, 3, Bank::Left),
                State::new(3, 1, Bank::Right),
                State::new(3, 2, Bank::Left),
            ]
        );
        assert_eq!(backtrack_path(root), vec![State::new(3, 3, Bank::Left)]);
    }
}
