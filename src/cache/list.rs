//! Recency List Module
//!
//! Arena-backed doubly linked list that orders cache entries by access time.

// == Sentinels ==
/// Arena index of the head sentinel (most recently used side).
pub(crate) const HEAD: usize = 0;
/// Arena index of the tail sentinel (least recently used side).
pub(crate) const TAIL: usize = 1;

// == Node ==
/// A slot in the arena. Sentinels and free slots carry no entry.
#[derive(Debug)]
struct Node<K, V> {
    entry: Option<(K, V)>,
    prev: usize,
    next: usize,
}

impl<K, V> Node<K, V> {
    fn vacant() -> Self {
        Self {
            entry: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

// == Recency List ==
/// Doubly linked list of entries stored in a `Vec` and addressed by index.
///
/// Layout:
/// - `HEAD.next` = Most recently used
/// - `TAIL.prev` = Least recently used
///
/// `detach` and `insert_at_head` are the only places links are written.
/// Slots released by `pop_back` go on a free list and are reused by `push_front`.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    nodes: Vec<Node<K, V>>,
    free: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(2));
        nodes.push(Node::vacant());
        nodes.push(Node::vacant());
        let mut list = Self {
            nodes,
            free: Vec::new(),
            len: 0,
        };
        list.link_sentinels();
        list
    }

    fn link_sentinels(&mut self) {
        self.nodes[HEAD].next = TAIL;
        self.nodes[HEAD].prev = HEAD;
        self.nodes[TAIL].prev = HEAD;
        self.nodes[TAIL].next = TAIL;
    }

    // == Detach ==
    /// Unlinks `idx` from its neighbours. The slot keeps its entry.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    // == Insert At Head ==
    /// Links `idx` immediately after the head sentinel.
    fn insert_at_head(&mut self, idx: usize) {
        let old_first = self.nodes[HEAD].next;
        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = old_first;
        self.nodes[HEAD].next = idx;
        self.nodes[old_first].prev = idx;
    }

    // == Push Front ==
    /// Stores a new entry as most recently used and returns its handle.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => idx,
            None => {
                self.nodes.push(Node::vacant());
                self.nodes.len() - 1
            }
        };
        self.nodes[idx].entry = Some((key, value));
        self.insert_at_head(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks the entry at `idx` as most recently used.
    pub fn touch(&mut self, idx: usize) {
        self.detach(idx);
        self.insert_at_head(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let idx = self.nodes[TAIL].prev;
        if idx == HEAD {
            return None;
        }
        self.detach(idx);
        self.free.push(idx);
        self.len -= 1;
        self.nodes[idx].entry.take()
    }

    // == Accessors ==
    pub fn value(&self, idx: usize) -> Option<&V> {
        self.nodes[idx].entry.as_ref().map(|(_, v)| v)
    }

    pub fn value_mut(&mut self, idx: usize) -> Option<&mut V> {
        self.nodes[idx].entry.as_mut().map(|(_, v)| v)
    }

    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn peek_back(&self) -> Option<&K> {
        self.nodes[self.nodes[TAIL].prev].entry.as_ref().map(|(k, _)| k)
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        let mut idx = self.nodes[HEAD].next;
        std::iter::from_fn(move || {
            if idx == TAIL {
                return None;
            }
            let node = &self.nodes[idx];
            idx = node.next;
            node.entry.as_ref().map(|(k, _)| k)
        })
    }

    // == Clear ==
    /// Drops every entry and returns the list to the sentinel-only state.
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.free.clear();
        self.len = 0;
        self.link_sentinels();
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
