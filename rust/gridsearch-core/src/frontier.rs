use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// Generated-but-unexpanded nodes, in the order an algorithm wants to pop them.
pub trait Frontier {
    /// `priority` is ignored by the FIFO and LIFO disciplines.
    fn push(&mut self, id: NodeId, priority: f64);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _priority: f64) { self.queue.push_back(id); }
    fn pop(&mut self) -> Option<NodeId> { self.queue.pop_front() }
    fn len(&self) -> usize { self.queue.len() }
}

#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _priority: f64) { self.stack.push(id); }
    fn pop(&mut self) -> Option<NodeId> { self.stack.pop() }
    fn len(&self) -> usize { self.stack.len() }
}

#[derive(Clone, Copy, Debug)]
struct QueueNode {
    priority: f64,
    // Monotonic increasing sequence to keep pop order deterministic
    seq: u64,
    id: NodeId,
}

impl PartialEq for QueueNode { fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal } }
impl Eq for QueueNode {}
impl PartialOrd for QueueNode { fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) } }
impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        other.priority.total_cmp(&self.priority).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap on `(priority, insertion order)`: equal priorities pop first-in, first-out.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<QueueNode>,
    seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, priority: f64) {
        self.heap.push(QueueNode { priority, seq: self.seq, id });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> { self.heap.pop().map(|q| q.id) }
    fn len(&self) -> usize { self.heap.len() }
}
