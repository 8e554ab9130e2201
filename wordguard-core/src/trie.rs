// wordguard-core/src/trie.rs
//! The trie node store shared by the [`Automaton`](crate::Automaton) and the
//! [`Dfa`](crate::Dfa).
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]. A parent owns
//! its children through its edge list; failure links are plain ids and never
//! own anything. Slots freed by [`Trie::remove`] are recycled through a free
//! list, so the arena never shrinks and every id handed out stays in bounds
//! even when a stale failure link still refers to it.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

/// Index of a node inside the trie arena.
pub type NodeId = usize;

/// The root node always occupies slot 0.
pub const ROOT: NodeId = 0;

/// A single trie vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Outgoing edges, kept sorted by label for binary search.
    children: Vec<(char, NodeId)>,
    /// Failure link. Only meaningful after a build pass.
    pub(crate) fail: Option<NodeId>,
    /// The dictionary word ending here, exactly as it was added.
    word: Option<String>,
    /// Code-point length of `word`.
    word_len: usize,
}

impl Node {
    /// Returns the child reached over `ch`, if any.
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&ch, |&(label, _)| label)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Iterates over the outgoing edges in label order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().copied()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The word terminating at this node, if the node is a word end.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn is_word_end(&self) -> bool {
        self.word.is_some()
    }

    /// The failure link computed by the last build, if any.
    pub fn fail(&self) -> Option<NodeId> {
        self.fail
    }

    fn insert_child(&mut self, ch: char, id: NodeId) {
        match self.children.binary_search_by_key(&ch, |&(label, _)| label) {
            Ok(pos) => self.children[pos].1 = id,
            Err(pos) => self.children.insert(pos, (ch, id)),
        }
    }

    fn remove_child(&mut self, ch: char) {
        if let Ok(pos) = self.children.binary_search_by_key(&ch, |&(label, _)| label) {
            self.children.remove(pos);
        }
    }
}

/// Folds a character for case-insensitive matching.
///
/// Uses the first code point of the Unicode lowercase mapping, so the folded
/// stream always has exactly one code point per input code point.
pub fn fold_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Arena-backed trie with optional case folding of edge labels.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    fold: bool,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Trie {
    /// Creates a trie holding only the root.
    pub fn new(fold: bool) -> Self {
        Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
            fold,
        }
    }

    pub fn fold(&self) -> bool {
        self.fold
    }

    /// Applies case folding when it is enabled.
    #[inline]
    pub fn normalize(&self, ch: char) -> char {
        if self.fold {
            fold_char(ch)
        } else {
            ch
        }
    }

    /// Returns the node stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` was never handed out by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Follows `word` from the root, returning the node it ends at.
    pub fn walk(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(ROOT, |id, ch| self.nodes[id].child(self.normalize(ch)))
    }

    /// Returns true if `word` (after folding) is a word end.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|id| self.nodes[id].is_word_end())
    }

    /// Inserts `word`, sharing any existing prefix path.
    ///
    /// Re-inserting a word overwrites the stored spelling. An empty word marks
    /// the root; the matchers never report zero-length matches.
    pub fn insert(&mut self, word: &str) {
        let mut id = ROOT;
        for ch in word.chars() {
            let ch = self.normalize(ch);
            id = match self.nodes[id].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    self.nodes[id].insert_child(ch, next);
                    next
                }
            };
        }
        let word_len = word.chars().count();
        let node = &mut self.nodes[id];
        node.word = Some(word.to_string());
        node.word_len = word_len;
        debug!("Inserted word of {} chars; live nodes: {}", word_len, self.node_count());
    }

    /// Removes `word` from the dictionary.
    ///
    /// A word that is a prefix of other words only loses its marker. A word
    /// ending on a leaf is pruned bottom-up until an ancestor that still has
    /// children or is itself a word end. Returns false when nothing changed.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut path: Vec<(NodeId, char)> = Vec::with_capacity(word.len());
        let mut id = ROOT;
        for ch in word.chars() {
            let ch = self.normalize(ch);
            match self.nodes[id].child(ch) {
                Some(next) => {
                    path.push((id, ch));
                    id = next;
                }
                None => return false,
            }
        }

        let node = &mut self.nodes[id];
        if node.word.take().is_none() {
            return false;
        }
        node.word_len = 0;
        if node.has_children() {
            debug!("Cleared word marker on inner node {}", id);
            return true;
        }

        let mut pruned = 0usize;
        let mut dead = id;
        while let Some((parent, ch)) = path.pop() {
            self.nodes[parent].remove_child(ch);
            self.release(dead);
            pruned += 1;

            let p = &self.nodes[parent];
            if p.has_children() || p.is_word_end() {
                break;
            }
            dead = parent;
        }
        debug!("Pruned {} dead node(s); live nodes: {}", pruned, self.node_count());
        true
    }

    /// Lists every stored word in label order.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(word) = node.word() {
                out.push(word.to_string());
            }
            // Reverse so the smallest label is visited first.
            stack.extend(node.children.iter().rev().map(|&(_, child)| child));
        }
        out
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(Node::default());
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        debug_assert_ne!(id, ROOT, "the root is never released");
        self.nodes[id] = Node::default();
        self.free.push(id);
    }
}
