//! A 4-connected grid with obstacle cells.
//!
//! Actions are represented by the cell they lead to. Steps cost their
//! straight-line length and the heuristic is the straight-line distance to the
//! goal, which never overestimates on this grid.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::problem::Problem;

/// `(x, y)` grid coordinate.
pub type Cell = (i32, i32);

/// Fixed neighbour order for determinism
pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Inclusive rectangle a grid search may not leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    pub fn contains(&self, c: Cell) -> bool {
        c.0 >= self.min.0 && c.0 <= self.max.0 && c.1 >= self.min.1 && c.1 <= self.max.1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridProblem {
    pub initial: Cell,
    pub goal: Cell,
    pub obstacles: HashSet<Cell>,
    /// Unbounded when `None`: only obstacles limit movement.
    pub bounds: Option<Bounds>,
}

impl GridProblem {
    pub fn new(initial: Cell, goal: Cell, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        Self { initial, goal, obstacles: obstacles.into_iter().collect(), bounds: None }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn is_open(&self, c: Cell) -> bool {
        !self.obstacles.contains(&c) && self.bounds.map(|b| b.contains(c)).unwrap_or(true)
    }
}

impl Problem for GridProblem {
    type State = Cell;
    type Action = Cell;

    fn initial(&self) -> Cell {
        self.initial
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    /// You can move one cell in any of `DIRECTIONS` to an open cell.
    fn actions(&self, state: &Cell) -> Vec<Cell> {
        let (x, y) = *state;
        DIRECTIONS
            .iter()
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|c| self.is_open(*c))
            .collect()
    }

    fn result(&self, state: &Cell, action: &Cell) -> Cell {
        if self.is_open(*action) { *action } else { *state }
    }

    fn action_cost(&self, state: &Cell, _action: &Cell, next: &Cell) -> f64 {
        straight_line_distance(*state, *next)
    }

    fn h(&self, node: &Node<Cell, Cell>) -> f64 {
        straight_line_distance(node.state, self.goal)
    }
}

pub fn straight_line_distance(a: Cell, b: Cell) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}
