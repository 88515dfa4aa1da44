//! Arena-backed doubly linked list ordered by recency.
//!
//! Nodes live in a `Vec<Option<Node<T>>>` with a free list of vacated slots,
//! and are linked by [`NodeId`] indices rather than pointers. A `NodeId`
//! stays valid until its node is removed, which lets an external index map
//! keys straight to list positions.
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Option<Node<T>>>)        free: [3]
//!   ┌────┬──────────────────────────────────────────┐
//!   │ 0  │ Some { value: A, prev: None, next: 2 }   │
//!   │ 1  │ Some { value: C, prev: 2,    next: None }│
//!   │ 2  │ Some { value: B, prev: 0,    next: 1 }   │
//!   │ 3  │ None                                     │
//!   └────┴──────────────────────────────────────────┘
//!
//!   head (MRU) ─► [0] ◄──► [2] ◄──► [1] ◄── tail (LRU)
//! ```
//!
//! ## Performance
//! - `push_front`, `move_to_front`, `remove`, `back_id`: O(1)
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

/// Stable handle to a node in a [`RecencyList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly linked list whose head is the most recently used node.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Handle of the least recently used node.
    pub fn back_id(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Inserts `value` as the most recently used node.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            },
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            },
        };

        if let Some(old_head) = self.head {
            if let Some(node) = self.node_mut(old_head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Marks `id` as most recently used; returns `false` if it is not live.
    pub fn move_to_front(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.unlink(id);
        self.link_front(id);
        true
    }

    /// Unlinks `id`, frees its slot and returns the stored value.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id);
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    /// Removes every node and releases slot bookkeeping.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates values from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = match self.node_mut(id) {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.node_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }
        if let Some(next_id) = next {
            if let Some(next_node) = self.node_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }
    }

    fn link_front(&mut self, id: NodeId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        } else {
            return;
        }
        if let Some(old_head) = old_head {
            if let Some(head_node) = self.node_mut(old_head) {
                head_node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            assert!(seen.insert(id), "cycle at {:?}", id);
            let node = self.node(id).expect("linked node missing");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = node.next;
        }

        assert_eq!(seen.len(), self.len);
        assert_eq!(self.slots.len() - self.free.len(), self.len);
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list values from most to least recently used.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.node(id)?;
        self.current = node.next;
        Some((id, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &RecencyList<T>) -> Vec<T> {
        list.iter().map(|(_, v)| *v).collect()
    }

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(values(&list), vec!["c", "b", "a"]);
        assert_eq!(list.back_id(), Some(a));
        assert_eq!(list.len(), 3);
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_from_tail_and_middle() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert!(list.move_to_front(a));
        assert_eq!(values(&list), vec!["a", "c", "b"]);

        assert!(list.move_to_front(list.back_id().unwrap()));
        assert_eq!(values(&list), vec!["b", "a", "c"]);
        assert_eq!(list.back_id(), Some(c));

        // already at head
        assert!(list.move_to_front(b));
        assert_eq!(values(&list), vec!["b", "a", "c"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_frees_slot_for_reuse() {
        let mut list = RecencyList::new();
        let a = list.push_front(1);
        let b = list.push_front(2);

        assert_eq!(list.remove(a), Some(1));
        assert!(!list.contains(a));
        assert_eq!(list.remove(a), None);
        assert!(!list.move_to_front(a));

        let c = list.push_front(3);
        assert_eq!(c, a);
        assert_eq!(values(&list), vec![3, 2]);
        assert_eq!(list.back_id(), Some(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_only_node_empties_list() {
        let mut list = RecencyList::new();
        let a = list.push_front('x');
        assert_eq!(list.remove(a), Some('x'));
        assert!(list.is_empty());
        assert_eq!(list.back_id(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list = RecencyList::new();
        let id = list.push_front(String::from("old"));
        if let Some(value) = list.get_mut(id) {
            value.push_str("-new");
        }
        assert_eq!(list.get(id).map(String::as_str), Some("old-new"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = RecencyList::with_capacity(4);
        let a = list.push_front(1);
        list.push_front(2);
        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(a));
        assert_eq!(list.iter().count(), 0);
        list.debug_validate_invariants();
    }
}
