use std::borrow::Cow;
use std::fs::File;
use std::io;
use std::path::Path;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;

use crate::moves::Load;
use crate::solver::node::SearchNode;
use crate::state::State;

type Nd = usize;
type Ed = (usize, usize, Load);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Expanded,
    Goal,
}

/// The part of the state space the search has seen.
///
/// States are deduplicated during the search so each one is a single node.
#[derive(Debug, Default)]
pub(crate) struct Graph {
    state_to_index: FnvHashMap<State, usize>,
    nodes: Vec<(State, Type)>,
    edges: Vec<Ed>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, node: &SearchNode<'_>) {
        assert!(!self.state_to_index.contains_key(&node.state));

        let node_index = self.nodes.len();
        self.state_to_index.insert(node.state, node_index);
        self.nodes.push((node.state, Type::Queued));

        if let (Some(prev), Some(load)) = (node.prev, node.load()) {
            let prev_index = self.state_to_index[&prev.state];
            self.edges.push((prev_index, node_index, load));
        }
    }

    pub(crate) fn mark_expanded(&mut self, state: State) {
        self.mark(state, Type::Expanded);
    }

    pub(crate) fn mark_goal(&mut self, state: State) {
        self.mark(state, Type::Goal);
    }

    fn mark(&mut self, state: State, node_type: Type) {
        let index = self.state_to_index[&state];
        self.nodes[index].1 = node_type;
    }

    pub(crate) fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        dot::render(self, &mut file)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        LabelText::LabelStr(self.nodes[*n].0.to_string().into())
    }

    fn edge_label(&'a self, e: &Ed) -> LabelText<'a> {
        LabelText::LabelStr(e.2.to_string().into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].1 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].1 {
                Type::Expanded => "gray",
                Type::Goal => "red",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
