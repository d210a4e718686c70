use std::{collections::BinaryHeap, cmp::Ordering};


/// Min priority queue with stable ordering for equal priorities
/// - elements may be inserted more than once, stale entries are the caller's concern
/// - ties are resolved first-in first-out
#[derive(Debug)]
pub struct PriorityQueue<E, P> {
    heap: BinaryHeap<Entry<E, P>>,
    next_seq: u64, // insertion counter used for tie breaking
}

impl<E, P: Ord> PriorityQueue<E, P> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Add an element with the given priority
    pub fn insert(&mut self, element: E, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { element, priority, seq });
    }

    /// Remove and return the element with the lowest priority
    /// Returns None when the queue is empty
    pub fn extract_min(&mut self) -> Option<E> {
        self.extract_min_entry().map(|(element, _)| element)
    }

    /// Same as extract_min but also hands back the priority the element was queued with
    pub fn extract_min_entry(&mut self) -> Option<(E, P)> {
        self.heap.pop().map(|entry| (entry.element, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}


/// Queue entry - ordering only looks at priority then insertion order
#[derive(Debug)]
struct Entry<E, P> {
    element: E,
    priority: P,
    seq: u64,
}

// BinaryHeap is a max heap, so comparisons are reversed
impl<E, P: Ord> Ord for Entry<E, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<E, P: Ord> PartialOrd for Entry<E, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<E, P: Ord> PartialEq for Entry<E, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<E, P: Ord> Eq for Entry<E, P> {}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_from_empty_queue() {
        let mut queue: PriorityQueue<usize, u32> = PriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.extract_min(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_extracts_lowest_priority_first() {
        let mut queue = PriorityQueue::new();
        queue.insert("c", 7);
        queue.insert("a", 1);
        queue.insert("b", 4);

        assert_eq!(queue.extract_min(), Some("a"));
        assert_eq!(queue.extract_min(), Some("b"));
        assert_eq!(queue.extract_min(), Some("c"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_resolved_by_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.insert(3, 2);
        queue.insert(1, 2);
        queue.insert(2, 2);
        queue.insert(0, 1);

        assert_eq!(queue.extract_min(), Some(0));
        assert_eq!(queue.extract_min(), Some(3));
        assert_eq!(queue.extract_min(), Some(1));
        assert_eq!(queue.extract_min(), Some(2));
    }

    #[test]
    fn test_same_element_can_be_queued_twice() {
        let mut queue = PriorityQueue::new();
        queue.insert(5, 10);
        queue.insert(5, 3);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.extract_min_entry(), Some((5, 3)));
        assert_eq!(queue.extract_min_entry(), Some((5, 10)));
    }

    /// Step of an interleaved insert / extract sequence
    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Extract,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..5).prop_map(Op::Insert),
            Just(Op::Extract),
        ]
    }

    proptest! {
        // Compare against a plain vector scanned for the first minimum
        #[test]
        fn prop_matches_stable_linear_scan(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut queue = PriorityQueue::new();
            let mut model: Vec<(usize, u8)> = Vec::new();

            for (step, op) in ops.into_iter().enumerate() {
                match op {
                    Op::Insert(priority) => {
                        queue.insert(step, priority);
                        model.push((step, priority));
                    }
                    Op::Extract => {
                        let first_min = model.iter()
                            .enumerate()
                            .min_by_key(|(_, (_, priority))| *priority)
                            .map(|(pos, _)| pos);
                        let expected = first_min.map(|pos| model.remove(pos).0);
                        prop_assert_eq!(queue.extract_min(), expected);
                    }
                }
                prop_assert_eq!(queue.len(), model.len());
                prop_assert_eq!(queue.is_empty(), model.is_empty());
            }
        }
    }
}
