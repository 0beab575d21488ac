//! Search nodes and the per-search arena that owns them.
//!
//! Nodes never point at each other directly: a node stores the index of its
//! parent in the arena, so building a path is a backward index walk.

use serde::Serialize;

use crate::errors::SearchError;
use crate::problem::Problem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// An immutable node in the search tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node<S, A> {
    pub state: S,
    pub parent: Option<NodeId>,
    /// Action applied to the parent's state; `None` for the root.
    pub action: Option<A>,
    /// Cumulative path cost from the root.
    pub path_cost: f64,
    pub depth: u32,
}

impl<S, A> Node<S, A> {
    pub fn root(state: S) -> Self {
        Self { state, parent: None, action: None, path_cost: 0.0, depth: 0 }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena of nodes generated by one search invocation.
#[derive(Clone, Debug)]
pub struct SearchTree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Default for SearchTree<S, A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: Clone, A: Clone> SearchTree<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    pub fn root(&mut self, state: S) -> NodeId {
        self.push(Node::root(state))
    }

    /// Apply `action` to the state of `parent` and store the resulting node.
    pub fn child<P>(&mut self, problem: &P, parent: NodeId, action: A) -> Result<NodeId, SearchError>
    where
        P: Problem<State = S, Action = A> + ?Sized,
        S: std::fmt::Debug,
    {
        let node = self.make_child(problem, parent, action)?;
        Ok(self.push(node))
    }

    /// Build the child node without storing it, so callers can inspect it first.
    pub fn make_child<P>(&self, problem: &P, parent: NodeId, action: A) -> Result<Node<S, A>, SearchError>
    where
        P: Problem<State = S, Action = A> + ?Sized,
        S: std::fmt::Debug,
    {
        let p = self.get(parent);
        let next = problem.result(&p.state, &action);
        let step = problem.action_cost(&p.state, &action, &next);
        if !step.is_finite() || step < 0.0 {
            return Err(SearchError::InvalidCost {
                from: format!("{:?}", p.state),
                to: format!("{:?}", next),
                cost: step,
            });
        }
        Ok(Node {
            state: next,
            parent: Some(parent),
            action: Some(action),
            path_cost: p.path_cost + step,
            depth: p.depth + 1,
        })
    }

    pub fn push(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Nodes from the root to `id`, inclusive.
    pub fn path(&self, id: NodeId) -> Vec<&Node<S, A>> {
        let mut out = Vec::with_capacity(self.get(id).depth as usize + 1);
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = self.get(c);
            out.push(node);
            cur = node.parent;
        }
        out.reverse();
        out
    }

    /// Actions taken from the root to reach `id`. Empty for the root.
    pub fn solution(&self, id: NodeId) -> Vec<A> {
        self.path(id).into_iter().filter_map(|n| n.action.clone()).collect()
    }

    /// States visited from the root to `id`, inclusive.
    pub fn states(&self, id: NodeId) -> Vec<S> {
        self.path(id).into_iter().map(|n| n.state.clone()).collect()
    }
}
