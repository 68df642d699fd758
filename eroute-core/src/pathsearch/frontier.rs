//! Frontier for the Dijkstra algorithm.

use std::cmp::Reverse;

use super::numtraits::IntoOrd;

/// Frontier for the Dijkstra algorithm.
/// Internally uses binary search to maintain a priority queue of search records.
///
/// Records are identified by a sequence number assigned by the caller, which must grow with every push.
/// Records with equal cost are popped in push order.
pub(super) struct Frontier<W> {
    /// Stores items in cost-descending order (then sequence-descending),
    /// so the item with the lowest cost and the earliest push is placed at the end of the array.
    queue: Vec<(usize, W)>,
}

impl<W> Frontier<W> where W: Clone + IntoOrd {
    /// Create new empty instance.
    pub fn new() -> Frontier<W> {
        Frontier {
            queue: Vec::new(),
        }
    }

    /// Sorts by cost in descending order, then by sequence number in descending order.
    fn key_fn(item: &(usize, W)) -> impl Ord {
        let (seq, w) = item;
        (Reverse(w.clone().into_ord()), Reverse(*seq))
    }

    /// Find position in the queue where to insert a new item.
    fn insertion_pos(&self, item: &(usize, W)) -> usize {
        match self.queue.binary_search_by_key(&Self::key_fn(item), Self::key_fn) {
            Ok(index) | Err(index) => index
        }
    }

    /// Insert a record with associated cost into the priority queue.
    pub fn push(&mut self, seq: usize, cost: W) {
        let item = (seq, cost);
        let index = self.insertion_pos(&item);
        self.queue.insert(index, item);
    }

    /// Extract the record with the least cost from the queue.
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.queue.pop()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    f.push(0, 1.0);
    assert_eq!(f.pop(), Some((0, 1.0)));
    assert_eq!(f.pop(), None);

    f.push(1, 1.0);
    f.push(2, 2.0);
    assert_eq!(f.pop(), Some((1, 1.0)));
    assert_eq!(f.pop(), Some((2, 2.0)));
    assert_eq!(f.pop(), None);

    f.push(3, 2.0);
    f.push(4, 1.0);
    assert_eq!(f.len(), 2);
    assert_eq!(f.pop(), Some((4, 1.0)));
    assert_eq!(f.pop(), Some((3, 2.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_equal_cost_is_fifo() {
    let mut f = Frontier::new();
    f.push(0, 5.0);
    f.push(1, 3.0);
    f.push(2, 5.0);
    f.push(3, 3.0);
    f.push(4, 5.0);
    assert_eq!(f.pop(), Some((1, 3.0)));
    assert_eq!(f.pop(), Some((3, 3.0)));
    assert_eq!(f.pop(), Some((0, 5.0)));
    assert_eq!(f.pop(), Some((2, 5.0)));
    assert_eq!(f.pop(), Some((4, 5.0)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_interleaved_push_pop() {
    let mut f = Frontier::new();
    f.push(0, 0.0);
    assert_eq!(f.pop(), Some((0, 0.0)));
    f.push(1, 20.0);
    f.push(2, 50.0);
    assert_eq!(f.pop(), Some((1, 20.0)));
    f.push(3, 30.0);
    f.push(4, 20.0);
    assert_eq!(f.pop(), Some((4, 20.0)));
    assert_eq!(f.pop(), Some((3, 30.0)));
    assert_eq!(f.pop(), Some((2, 50.0)));
    assert_eq!(f.pop(), None);
}
