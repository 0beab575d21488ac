//! Side-by-side performance table for several algorithms over several problems.

use std::cell::Cell as Counter;
use std::fmt;

use serde::Serialize;

use crate::errors::SearchError;
use crate::node::Node;
use crate::options::SearchOptions;
use crate::problem::Problem;
use crate::search::{Algorithm, Searcher};

/// Wraps a problem and counts how often the engine calls into it.
pub struct CountCalls<'a, P: Problem + ?Sized> {
    inner: &'a P,
    actions: Counter<u64>,
    results: Counter<u64>,
    goal_tests: Counter<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CallCounts {
    pub actions: u64,
    pub results: u64,
    pub goal_tests: u64,
}

impl<'a, P: Problem + ?Sized> CountCalls<'a, P> {
    pub fn new(inner: &'a P) -> Self {
        Self { inner, actions: Counter::new(0), results: Counter::new(0), goal_tests: Counter::new(0) }
    }

    pub fn counts(&self) -> CallCounts {
        CallCounts { actions: self.actions.get(), results: self.results.get(), goal_tests: self.goal_tests.get() }
    }
}

fn bump(c: &Counter<u64>) {
    c.set(c.get() + 1);
}

impl<'a, P: Problem + ?Sized> Problem for CountCalls<'a, P> {
    type State = P::State;
    type Action = P::Action;

    fn initial(&self) -> Self::State { self.inner.initial() }

    fn is_goal(&self, state: &Self::State) -> bool {
        bump(&self.goal_tests);
        self.inner.is_goal(state)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        bump(&self.actions);
        self.inner.actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        bump(&self.results);
        self.inner.result(state, action)
    }

    fn action_cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64 {
        self.inner.action_cost(state, action, next)
    }

    fn h(&self, node: &Node<Self::State, Self::Action>) -> f64 { self.inner.h(node) }

    fn value(&self, node: &Node<Self::State, Self::Action>) -> f64 { self.inner.value(node) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    pub algorithm: Algorithm,
    pub problem: String,
    pub calls: CallCounts,
    pub expanded: u64,
    pub solved: bool,
    /// Steps on the returned path; 0 when the search failed.
    pub path_len: u32,
    pub cost: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Totals {
    pub algorithm: Option<Algorithm>,
    pub calls: CallCounts,
    pub expanded: u64,
    pub solved: u32,
    pub path_len: u64,
    pub cost: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub totals: Vec<Totals>,
}

/// Run every algorithm over every `(label, problem)` pair.
pub fn run<P>(algorithms: &[Algorithm], problems: &[(String, &P)], options: &SearchOptions) -> Result<Report, SearchError>
where
    P: Problem + ?Sized,
{
    let mut report = Report::default();
    for &algorithm in algorithms {
        let mut totals = Totals { algorithm: Some(algorithm), ..Totals::default() };
        for (label, problem) in problems {
            let counted = CountCalls::new(*problem);
            let res = Searcher::with_options(&counted, options.clone()).run(algorithm)?;
            // Hill climbing may halt short of the goal; only a goal node counts as a path.
            let (path_len, cost) = match res.goal() {
                Some(n) => (n.depth, n.path_cost),
                None => (0, 0.0),
            };
            let row = ReportRow {
                algorithm,
                problem: label.clone(),
                calls: counted.counts(),
                expanded: res.stats.expanded,
                solved: res.is_success(),
                path_len,
                cost,
            };
            totals.calls.actions += row.calls.actions;
            totals.calls.results += row.calls.results;
            totals.calls.goal_tests += row.calls.goal_tests;
            totals.expanded += row.expanded;
            totals.solved += row.solved as u32;
            totals.path_len += row.path_len as u64;
            totals.cost += row.cost;
            report.rows.push(row);
        }
        report.totals.push(totals);
    }
    Ok(report)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for totals in &self.totals {
            let Some(algorithm) = totals.algorithm else { continue };
            writeln!(f, "{}:", algorithm)?;
            for row in self.rows.iter().filter(|r| r.algorithm == algorithm) {
                writeln!(
                    f,
                    "{:>9} nodes |{:>9} goal |{:>8.2} cost |{:>6} steps |{:>8} expanded | {}{}",
                    row.calls.results,
                    row.calls.goal_tests,
                    row.cost,
                    row.path_len,
                    row.expanded,
                    truncate(&row.problem, 40),
                    if row.solved { "" } else { " (unsolved)" },
                )?;
            }
            writeln!(
                f,
                "{:>9} nodes |{:>9} goal |{:>8.2} cost |{:>6} steps |{:>8} expanded | TOTAL",
                totals.calls.results, totals.calls.goal_tests, totals.cost, totals.path_len, totals.expanded,
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
