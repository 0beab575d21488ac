//! ASCII layout maps and their annotated copies.
//!
//! Row `x` is the 1-based line number and column `y` the 1-based character
//! position. `%` is a wall, `G` a ghost, `P` the start and `o` the goal; every
//! other character is floor.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::errors::LayoutError;
use crate::grid::{Bounds, Cell, GridProblem};

pub const WALL: char = '%';
pub const GHOST: char = 'G';
pub const START: char = 'P';
pub const GOAL: char = 'o';
pub const EXPLORED_MARK: char = '+';
pub const SOLUTION_MARK: char = '*';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<char>>,
    trailing_newline: bool,
    pub walls: BTreeSet<Cell>,
    pub ghosts: BTreeSet<Cell>,
    pub start: Cell,
    pub goal: Cell,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        let layout = Self::parse(&text)?;
        debug!(path = ?path, rows = layout.height(), cols = layout.width(), "loaded layout");
        Ok(layout)
    }

    /// When `P` or `o` appears more than once the last occurrence wins.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        if rows.iter().all(|r| r.is_empty()) {
            return Err(LayoutError::Empty);
        }
        let mut walls = BTreeSet::new();
        let mut ghosts = BTreeSet::new();
        let mut start = None;
        let mut goal = None;
        for (i, row) in rows.iter().enumerate() {
            for (j, ch) in row.iter().enumerate() {
                let cell = (i as i32 + 1, j as i32 + 1);
                match *ch {
                    WALL => { walls.insert(cell); }
                    GHOST => { ghosts.insert(cell); }
                    START => start = Some(cell),
                    GOAL => goal = Some(cell),
                    _ => {}
                }
            }
        }
        Ok(Self {
            rows,
            trailing_newline: text.ends_with('\n'),
            walls,
            ghosts,
            start: start.ok_or(LayoutError::MissingStart)?,
            goal: goal.ok_or(LayoutError::MissingGoal)?,
        })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { min: (1, 1), max: (self.height() as i32, self.width() as i32) }
    }

    /// Walls, ghosts and the cells past the end of a row shorter than the
    /// widest one.
    pub fn obstacles(&self) -> BTreeSet<Cell> {
        let width = self.width();
        let gaps = self.rows.iter().enumerate().flat_map(|(i, row)| {
            (row.len()..width).map(move |j| (i as i32 + 1, j as i32 + 1))
        });
        self.walls.union(&self.ghosts).copied().chain(gaps).collect()
    }

    /// Grid problem for this map, confined to the layout rectangle.
    pub fn problem(&self) -> GridProblem {
        GridProblem::new(self.start, self.goal, self.obstacles()).with_bounds(self.bounds())
    }

    /// Copy of the map with explored cells marked `+` and solution cells `*`.
    /// The start and goal cells keep their original characters.
    pub fn render<'a, E, S>(&self, explored: E, solution: S) -> String
    where
        E: IntoIterator<Item = &'a Cell>,
        S: IntoIterator<Item = &'a Cell>,
    {
        let mut rows = self.rows.clone();
        let mut mark = |cell: &Cell, ch: char| {
            if *cell == self.start || *cell == self.goal {
                return;
            }
            let (Ok(i), Ok(j)) = (usize::try_from(cell.0 - 1), usize::try_from(cell.1 - 1)) else { return };
            if let Some(slot) = rows.get_mut(i).and_then(|r| r.get_mut(j)) {
                *slot = ch;
            }
        };
        for c in explored { mark(c, EXPLORED_MARK); }
        for c in solution { mark(c, SOLUTION_MARK); }

        let mut out = rows.into_iter().map(|r| r.into_iter().collect::<String>()).collect::<Vec<_>>().join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}
