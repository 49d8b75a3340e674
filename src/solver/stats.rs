use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::FormatBuilder;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::solver::node::SearchNode;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn created_by_depth(&self) -> &[u64] {
        &self.created_states
    }

    pub fn visited_by_depth(&self) -> &[u64] {
        &self.visited_states
    }

    pub fn duplicates_by_depth(&self) -> &[u64] {
        &self.duplicate_states
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.dist)
    }

    /// Returns true if this is the first visited state at its depth
    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.dist)
    }

    /// Duplicates are never turned into nodes so only their would-be depth is known
    pub(crate) fn add_reached_duplicate(&mut self, dist: u32) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    fn add(counts: &mut Vec<u64>, dist: u32) -> bool {
        let depth = dist as usize;
        let first_at_depth = depth >= counts.len();
        if first_at_depth {
            // a duplicate can be a level below the deepest created node
            counts.resize(depth + 1, 0);
        }
        counts[depth] += 1;
        first_at_depth
    }

    fn depths(&self) -> usize {
        self.created_states
            .len()
            .max(self.visited_states.len())
            .max(self.duplicate_states.len())
    }
}

fn count_at(counts: &[u64], depth: usize) -> u64 {
    counts.get(depth).cloned().unwrap_or(0)
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created per depth: {:?}", self.created_states)?;
        writeln!(f, "visited per depth: {:?}", self.visited_states)?;
        writeln!(f, "duplicates per depth: {:?}", self.duplicate_states)?;
        writeln!(
            f,
            "totals: {} created, {} visited, {} duplicates",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not visited total: {}",
            created.saturating_sub(visited).separated_string()
        )?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(
            FormatBuilder::new()
                .column_separator(' ')
                .padding(0, 0)
                .build(),
        );
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not visited)"),
        ]));
        for depth in 0..self.depths() {
            let created = count_at(&self.created_states, depth);
            let visited = count_at(&self.visited_states, depth);
            let duplicates = count_at(&self.duplicate_states, depth);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&created.saturating_sub(visited).separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}
