//! The state-space contract every search algorithm is written against.

use std::fmt::Debug;
use std::hash::Hash;

use crate::node::Node;

/// A search problem: initial state, goal test, successor function and costs.
///
/// Implementations must be pure: `actions`, `result` and `action_cost` return
/// the same answer for the same inputs. The engine validates costs and
/// heuristic values as it goes and stops with a `SearchError` on the first
/// violation, but it cannot detect an inadmissible heuristic.
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial(&self) -> Self::State;

    /// Goal predicate. A concrete goal state is tested by equality; any other
    /// predicate works too.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Actions applicable in `state`, in the order they should be tried.
    /// An empty list marks a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn action_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> f64 {
        1.0
    }

    /// Estimated cost from `node` to the nearest goal. Zero turns A* into
    /// uniform-cost search.
    fn h(&self, _node: &Node<Self::State, Self::Action>) -> f64 {
        0.0
    }

    /// Objective maximised by hill climbing.
    fn value(&self, node: &Node<Self::State, Self::Action>) -> f64 {
        -self.h(node)
    }
}
