//! Key-indexed doubly linked order list.
//!
//! Stores list nodes in a slot vector and links them by index, with a
//! key-to-slot map on the side. This gives O(1) reorder and removal *by key*,
//! which is what eviction policies need: the store hands them a key, never a
//! node handle.
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Option<Node<K>>>)            index (FxHashMap<K, usize>)
//!   ┌─────┬──────────────────────────────┐  ┌─────┬──────┐
//!   │  0  │ { key: A, prev: -, next: 1 } │  │  A  │  0   │
//!   │  1  │ { key: B, prev: 0, next: 2 } │  │  B  │  1   │
//!   │  2  │ { key: C, prev: 1, next: - } │  │  C  │  2   │
//!   └─────┴──────────────────────────────┘  └─────┴──────┘
//!
//!   head ─► [A] ◄──► [B] ◄──► [C] ◄── tail
//!           oldest / least recent  newest / most recent
//! ```
//!
//! ## Operations
//! - `push_back(key)`: append at the most-recent end
//! - `move_to_back(&key)`: detach + reattach at the most-recent end
//! - `remove(&key)`: detach + free the slot
//! - `pop_front()` / `pop_back()`: take from either end
//!
//! ## Performance
//! - `push_back` / `move_to_back` / `remove`: O(1)
//! - `pop_front` / `pop_back` / `front` / `back`: O(1)
//! - `iter`: O(n), front to back
//!
//! Freed slots are recycled through a free list, so long-lived lists do not
//! grow past their high-water mark.
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked order list addressable by key.
///
/// Front is the oldest / least recently touched position; back is the newest /
/// most recently touched. Each key appears at most once.
#[derive(Debug)]
pub struct OrderList<K> {
    slots: Vec<Option<Node<K>>>,
    free_list: Vec<usize>,
    index: FxHashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K> OrderList<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            index: FxHashMap::default(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved slot capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of keys in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `key` is in the list.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the key at the front (oldest position).
    pub fn front(&self) -> Option<&K> {
        self.head.and_then(|idx| self.node(idx).map(|node| &node.key))
    }

    /// Returns the key at the back (newest position).
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|idx| self.node(idx).map(|node| &node.key))
    }

    /// Appends `key` at the back. Returns `false` if the key is already
    /// present (the list is left unchanged; use [`move_to_back`] to reorder).
    ///
    /// [`move_to_back`]: Self::move_to_back
    pub fn push_back(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let node = Node {
            key: key.clone(),
            prev: self.tail,
            next: None,
        };
        let idx = match self.free_list.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            },
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            },
        };
        if let Some(tail) = self.tail {
            if let Some(node) = self.node_mut(tail) {
                node.next = Some(idx);
            }
        } else {
            self.head = Some(idx);
        }
        self.tail = Some(idx);
        self.index.insert(key, idx);
        true
    }

    /// Moves `key` to the back (newest position); returns `false` if the key
    /// is not present.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => return false,
        };
        if self.tail == Some(idx) {
            return true;
        }
        self.detach(idx);
        let tail = self.tail;
        if let Some(node) = self.node_mut(idx) {
            node.prev = tail;
            node.next = None;
        }
        if let Some(tail) = self.tail {
            if let Some(node) = self.node_mut(tail) {
                node.next = Some(idx);
            }
        } else {
            self.head = Some(idx);
        }
        self.tail = Some(idx);
        true
    }

    /// Removes `key` from the list; returns `false` if it was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        let idx = match self.index.remove(key) {
            Some(idx) => idx,
            None => return false,
        };
        self.detach(idx);
        self.release(idx);
        true
    }

    /// Removes and returns the front (oldest) key.
    pub fn pop_front(&mut self) -> Option<K> {
        let idx = self.head?;
        self.detach(idx);
        let node = self.release(idx)?;
        self.index.remove(&node.key);
        Some(node.key)
    }

    /// Removes and returns the back (newest) key.
    pub fn pop_back(&mut self) -> Option<K> {
        let idx = self.tail?;
        self.detach(idx);
        let node = self.release(idx)?;
        self.index.remove(&node.key);
        Some(node.key)
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator over keys from front (oldest) to back (newest).
    pub fn iter(&self) -> OrderListIter<'_, K> {
        OrderListIter {
            list: self,
            current: self.head,
        }
    }

    #[inline]
    fn node(&self, idx: usize) -> Option<&Node<K>> {
        self.slots.get(idx).and_then(|slot| slot.as_ref())
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<K>> {
        self.slots.get_mut(idx).and_then(|slot| slot.as_mut())
    }

    /// Unlinks `idx` from the chain, fixing head/tail. The slot itself stays
    /// occupied; callers either relink it or release it.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        match prev {
            Some(prev) => {
                if let Some(node) = self.node_mut(prev) {
                    node.next = next;
                }
            },
            None => self.head = next,
        }
        match next {
            Some(next) => {
                if let Some(node) = self.node_mut(next) {
                    node.prev = prev;
                }
            },
            None => self.tail = prev,
        }
    }

    /// Vacates the slot at `idx` and queues it for reuse.
    fn release(&mut self, idx: usize) -> Option<Node<K>> {
        let node = self.slots.get_mut(idx).and_then(|slot| slot.take())?;
        self.free_list.push(idx);
        Some(node)
    }

    /// Validates chain/index consistency. Available in debug/test builds.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let live = self.slots.iter().filter(|slot| slot.is_some()).count();
        debug_assert_eq!(live, self.index.len(), "index and slots disagree on len");

        let mut seen = 0usize;
        let mut prev: Option<usize> = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let node = match self.node(idx) {
                Some(node) => node,
                None => {
                    debug_assert!(false, "chain points at a vacant slot");
                    return;
                },
            };
            debug_assert_eq!(node.prev, prev, "broken back link");
            debug_assert_eq!(self.index.get(&node.key), Some(&idx), "index out of sync");
            seen += 1;
            prev = current;
            current = node.next;
        }
        debug_assert_eq!(seen, self.index.len(), "chain length mismatch");
        debug_assert_eq!(self.tail, prev, "tail does not terminate the chain");
    }
}

impl<K> Default for OrderList<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list keys from front to back.
pub struct OrderListIter<'a, K> {
    list: &'a OrderList<K>,
    current: Option<usize>,
}

impl<'a, K> Iterator for OrderListIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = self.list.slots.get(idx).and_then(|slot| slot.as_ref())?;
        self.current = node.next;
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(list: &'a OrderList<&'a str>) -> Vec<&'a str> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_back_keeps_insertion_order() {
        let mut list = OrderList::new();
        assert!(list.push_back("a"));
        assert!(list.push_back("b"));
        assert!(list.push_back("c"));

        assert_eq!(keys(&list), vec!["a", "b", "c"]);
        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.back(), Some(&"c"));
        assert_eq!(list.len(), 3);
        list.debug_validate_invariants();
    }

    #[test]
    fn push_back_rejects_duplicates() {
        let mut list = OrderList::new();
        assert!(list.push_back("a"));
        assert!(!list.push_back("a"));
        assert_eq!(list.len(), 1);
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_back_reorders() {
        let mut list = OrderList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert!(list.move_to_back(&"a"));
        assert_eq!(keys(&list), vec!["b", "c", "a"]);

        // Moving the tail is a no-op but still succeeds.
        assert!(list.move_to_back(&"a"));
        assert_eq!(keys(&list), vec!["b", "c", "a"]);

        assert!(!list.move_to_back(&"missing"));
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_from_every_position() {
        let mut list = OrderList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");
        list.push_back("d");

        assert!(list.remove(&"a")); // head
        assert_eq!(keys(&list), vec!["b", "c", "d"]);
        list.debug_validate_invariants();

        assert!(list.remove(&"c")); // middle
        assert_eq!(keys(&list), vec!["b", "d"]);
        list.debug_validate_invariants();

        assert!(list.remove(&"d")); // tail
        assert_eq!(keys(&list), vec!["b"]);
        list.debug_validate_invariants();

        assert!(!list.remove(&"d"));
        assert!(list.remove(&"b"));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_front_and_pop_back() {
        let mut list = OrderList::new();
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(keys(&list), vec!["b"]);

        assert_eq!(list.pop_front(), Some("b"));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn slots_are_reused_after_removal() {
        let mut list = OrderList::new();
        for i in 0..8 {
            list.push_back(i);
        }
        for i in 0..8 {
            assert!(list.remove(&i));
        }
        for i in 8..16 {
            list.push_back(i);
        }
        // Slot vector high-water mark is the peak length, not the total
        // number of insertions.
        assert!(list.slots.len() <= 8);
        assert_eq!(list.len(), 8);
        list.debug_validate_invariants();
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = OrderList::new();
        list.push_back("a");
        list.push_back("b");
        list.clear();

        assert!(list.is_empty());
        assert!(!list.contains(&"a"));
        assert_eq!(list.front(), None);

        // Still usable after clear.
        assert!(list.push_back("c"));
        assert_eq!(keys(&list), vec!["c"]);
        list.debug_validate_invariants();
    }

    #[test]
    fn interleaved_churn_stays_consistent() {
        let mut list = OrderList::new();
        for i in 0..32 {
            list.push_back(i);
            if i % 3 == 0 {
                list.move_to_back(&(i / 2));
            }
            if i % 5 == 0 {
                list.pop_front();
            }
            list.debug_validate_invariants();
        }
    }
}
