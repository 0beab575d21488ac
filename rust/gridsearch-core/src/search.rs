//! Frontier-based search algorithms and hill climbing.
//!
//! Breadth-first, depth-first, greedy best-first and A* differ only in the
//! frontier discipline and the priority they push with, so they share one
//! expansion loop (`Searcher::best_first`). Hill climbing keeps a single
//! current node and has its own loop.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::node::{Node, NodeId, SearchTree};
use crate::options::SearchOptions;
use crate::problem::Problem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    GreedyBestFirst,
    AStar,
    BreadthFirst,
    DepthFirst,
    HillClimbing,
}

impl Algorithm {
    /// Every algorithm, in the order the report lists them.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::HillClimbing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::GreedyBestFirst => "greedy-best-first",
            Algorithm::AStar => "a-star",
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::DepthFirst => "depth-first",
            Algorithm::HillClimbing => "hill-climbing",
        }
    }

    /// Short tag used in output file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::GreedyBestFirst => "gfs",
            Algorithm::AStar => "astar",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::HillClimbing => "hc",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Accepts either the long name or the short tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s || a.tag() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Algorithm::ALL.iter().map(|a| a.tag()).collect();
                format!("unknown algorithm '{}', expected one of {}", s, known.join(", "))
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Failure {
    /// The frontier emptied before a goal was popped.
    NoPath,
    /// `SearchOptions::max_expansions` was reached.
    ExpansionLimit,
}

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A node satisfying the goal test.
    Succeeded(NodeId),
    Failed(Failure),
    /// Hill climbing stopped at a non-goal node (local optimum or expansion cap).
    Halted(NodeId),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Succeeded(_) => f.write_str("succeeded"),
            Outcome::Failed(Failure::NoPath) => f.write_str("no-path"),
            Outcome::Failed(Failure::ExpansionLimit) => f.write_str("expansion-limit"),
            Outcome::Halted(_) => f.write_str("halted"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States added to the explored set.
    pub expanded: u64,
    /// Nodes created, the root included.
    pub generated: u64,
    pub goal_tests: u64,
    pub max_frontier: usize,
}

/// Everything one search invocation produced.
#[derive(Clone, Debug)]
pub struct Search<S, A> {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub tree: SearchTree<S, A>,
    /// Expanded states in expansion order.
    pub explored: IndexSet<S>,
    pub stats: SearchStats,
}

impl<S: Clone, A: Clone> Search<S, A> {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded(_))
    }

    /// The goal node, only when the search succeeded.
    pub fn goal(&self) -> Option<&Node<S, A>> {
        match self.outcome {
            Outcome::Succeeded(id) => Some(self.tree.get(id)),
            _ => None,
        }
    }

    /// The node the search stopped at: the goal, or where hill climbing halted.
    pub fn terminal(&self) -> Option<NodeId> {
        match self.outcome {
            Outcome::Succeeded(id) | Outcome::Halted(id) => Some(id),
            Outcome::Failed(_) => None,
        }
    }

    pub fn terminal_node(&self) -> Option<&Node<S, A>> {
        self.terminal().map(|id| self.tree.get(id))
    }

    pub fn path(&self) -> Option<Vec<&Node<S, A>>> {
        self.terminal().map(|id| self.tree.path(id))
    }

    pub fn solution(&self) -> Option<Vec<A>> {
        self.terminal().map(|id| self.tree.solution(id))
    }

    pub fn states(&self) -> Option<Vec<S>> {
        self.terminal().map(|id| self.tree.states(id))
    }

    pub fn path_cost(&self) -> Option<f64> {
        self.terminal_node().map(|n| n.path_cost)
    }

    /// Number of steps (edges) on the returned path.
    pub fn path_len(&self) -> Option<u32> {
        self.terminal_node().map(|n| n.depth)
    }
}

pub type SearchOf<P> = Search<<P as Problem>::State, <P as Problem>::Action>;

/// Runs search algorithms over one problem.
pub struct Searcher<'a, P: Problem + ?Sized> {
    problem: &'a P,
    options: SearchOptions,
}

impl<'a, P: Problem + ?Sized> Searcher<'a, P> {
    pub fn new(problem: &'a P) -> Self {
        Self { problem, options: SearchOptions::default() }
    }

    pub fn with_options(problem: &'a P, options: SearchOptions) -> Self {
        Self { problem, options }
    }

    pub fn run(&self, algorithm: Algorithm) -> Result<SearchOf<P>, SearchError> {
        debug!(%algorithm, max_expansions = ?self.options.max_expansions, "starting search");
        let res = match algorithm {
            Algorithm::BreadthFirst => self.best_first(algorithm, FifoFrontier::default()),
            Algorithm::DepthFirst => self.best_first(algorithm, LifoFrontier::default()),
            Algorithm::GreedyBestFirst | Algorithm::AStar => self.best_first(algorithm, PriorityFrontier::default()),
            Algorithm::HillClimbing => self.hill_climbing(),
        }?;
        info!(
            %algorithm,
            outcome = %res.outcome,
            expanded = res.stats.expanded,
            generated = res.stats.generated,
            cost = ?res.path_cost(),
            "search finished"
        );
        Ok(res)
    }

    fn priority(&self, algorithm: Algorithm, node: &Node<P::State, P::Action>) -> Result<f64, SearchError> {
        match algorithm {
            Algorithm::GreedyBestFirst => self.checked_h(node),
            Algorithm::AStar => Ok(node.path_cost + self.checked_h(node)?),
            _ => Ok(0.0),
        }
    }

    fn checked_h(&self, node: &Node<P::State, P::Action>) -> Result<f64, SearchError> {
        let h = self.problem.h(node);
        if !h.is_finite() || h < 0.0 {
            return Err(SearchError::InvalidHeuristic { state: format!("{:?}", node.state), value: h });
        }
        Ok(h)
    }

    /// `h` is checked too, since the default `value` is derived from it.
    fn checked_value(&self, node: &Node<P::State, P::Action>) -> Result<f64, SearchError> {
        self.checked_h(node)?;
        let v = self.problem.value(node);
        if v.is_nan() {
            return Err(SearchError::InvalidValue { state: format!("{:?}", node.state) });
        }
        Ok(v)
    }

    fn best_first<F: Frontier>(&self, algorithm: Algorithm, mut frontier: F) -> Result<SearchOf<P>, SearchError> {
        let problem = self.problem;
        let mut tree = SearchTree::new();
        let mut explored: IndexSet<P::State> = IndexSet::new();
        let mut stats = SearchStats::default();

        let root = tree.root(problem.initial());
        let p0 = self.priority(algorithm, tree.get(root))?;
        frontier.push(root, p0);
        stats.generated = 1;
        stats.max_frontier = 1;

        let outcome = loop {
            let Some(id) = frontier.pop() else { break Outcome::Failed(Failure::NoPath) };
            let state = tree.get(id).state.clone();

            stats.goal_tests += 1;
            if problem.is_goal(&state) {
                break Outcome::Succeeded(id);
            }
            if explored.contains(&state) {
                continue;
            }
            if self.options.limit_reached(stats.expanded) {
                break Outcome::Failed(Failure::ExpansionLimit);
            }

            for action in problem.actions(&state) {
                let child = tree.make_child(problem, id, action)?;
                if child.state == state || explored.contains(&child.state) {
                    continue;
                }
                let priority = self.priority(algorithm, &child)?;
                let cid = tree.push(child);
                frontier.push(cid, priority);
                stats.generated += 1;
            }
            explored.insert(state);
            stats.expanded += 1;
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        };

        Ok(Search { algorithm, outcome, tree, explored, stats })
    }

    /// Steepest-ascent hill climbing on `Problem::value`.
    ///
    /// Moves to the best child only when it is strictly better than the current
    /// node; ties between children go to the earliest action. A goal state
    /// stops the climb as `Succeeded`, anything else as `Halted`.
    fn hill_climbing(&self) -> Result<SearchOf<P>, SearchError> {
        let problem = self.problem;
        let mut tree = SearchTree::new();
        let mut explored: IndexSet<P::State> = IndexSet::new();
        let mut stats = SearchStats::default();

        let mut current = tree.root(problem.initial());
        let mut current_value = self.checked_value(tree.get(current))?;
        stats.generated = 1;

        let outcome = loop {
            let state = tree.get(current).state.clone();
            stats.goal_tests += 1;
            if problem.is_goal(&state) {
                break Outcome::Succeeded(current);
            }
            if self.options.limit_reached(stats.expanded) {
                break Outcome::Halted(current);
            }

            let mut best: Option<(Node<P::State, P::Action>, f64)> = None;
            for action in problem.actions(&state) {
                let child = tree.make_child(problem, current, action)?;
                stats.generated += 1;
                let v = self.checked_value(&child)?;
                if best.as_ref().map(|(_, bv)| v > *bv).unwrap_or(true) {
                    best = Some((child, v));
                }
            }
            explored.insert(state);
            stats.expanded += 1;

            match best {
                Some((child, v)) if v > current_value => {
                    current = tree.push(child);
                    current_value = v;
                }
                _ => break Outcome::Halted(current),
            }
        };

        stats.max_frontier = 1;
        Ok(Search { algorithm: Algorithm::HillClimbing, outcome, tree, explored, stats })
    }
}

pub fn breadth_first_search<P: Problem + ?Sized>(problem: &P) -> Result<SearchOf<P>, SearchError> {
    Searcher::new(problem).run(Algorithm::BreadthFirst)
}

pub fn depth_first_search<P: Problem + ?Sized>(problem: &P) -> Result<SearchOf<P>, SearchError> {
    Searcher::new(problem).run(Algorithm::DepthFirst)
}

pub fn greedy_best_first_search<P: Problem + ?Sized>(problem: &P) -> Result<SearchOf<P>, SearchError> {
    Searcher::new(problem).run(Algorithm::GreedyBestFirst)
}

pub fn astar_search<P: Problem + ?Sized>(problem: &P) -> Result<SearchOf<P>, SearchError> {
    Searcher::new(problem).run(Algorithm::AStar)
}

pub fn hill_climbing<P: Problem + ?Sized>(problem: &P) -> Result<SearchOf<P>, SearchError> {
    Searcher::new(problem).run(Algorithm::HillClimbing)
}
