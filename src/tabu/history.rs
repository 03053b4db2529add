//! Bounded tabu history.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Upper bound on eagerly reserved slots; larger lists grow on demand.
const PREALLOC_LIMIT: usize = 1024;

/// Fixed-capacity FIFO of recently taken actions.
///
/// Insertion appends at the back; once the length exceeds the capacity the
/// oldest entry is evicted. Membership is answered in O(1) through a
/// multiplicity map kept alongside the queue.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push("a");
/// tabu.push("b");
/// tabu.push("c");
/// assert!(!tabu.contains(&"a"));
/// assert!(tabu.contains(&"b") && tabu.contains(&"c"));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<A> {
    capacity: usize,
    queue: VecDeque<A>,
    counts: HashMap<A, usize>,
}

impl<A: Clone + Eq + Hash> TabuList<A> {
    /// Creates an empty list holding at most `capacity` actions.
    ///
    /// Capacities up to `usize::MAX` are accepted: storage is reserved lazily
    /// beyond a small prefix, so a huge capacity simply means "never evict".
    pub fn new(capacity: usize) -> Self {
        let reserved = capacity.saturating_add(1).min(PREALLOC_LIMIT);
        Self {
            capacity,
            queue: VecDeque::with_capacity(reserved),
            counts: HashMap::with_capacity(reserved),
        }
    }

    /// Records `action` as the most recent move and returns the evicted
    /// action, if any.
    pub fn push(&mut self, action: A) -> Option<A> {
        *self.counts.entry(action.clone()).or_insert(0) += 1;
        self.queue.push_back(action);

        if self.queue.len() > self.capacity {
            let oldest = self.queue.pop_front()?;
            if let Entry::Occupied(mut entry) = self.counts.entry(oldest.clone()) {
                *entry.get_mut() -= 1;
                if *entry.get() == 0 {
                    entry.remove();
                }
            }
            return Some(oldest);
        }
        None
    }

    /// Returns true if `action` is currently forbidden.
    pub fn contains(&self, action: &A) -> bool {
        self.counts.contains_key(action)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from the oldest to the most recent action.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.queue.iter()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.counts.clear();
    }
}
