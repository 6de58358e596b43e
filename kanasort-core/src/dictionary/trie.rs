//! Character trie over dictionary keys
//!
//! Used for the substring fallback: instead of testing every key against the
//! text, every start position of the text walks the trie once.

use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Dictionary entry index when a key ends here
    entry: Option<u32>,
}

/// Trie of dictionary keys, case sensitive
#[derive(Debug, Clone)]
pub struct KeyTrie {
    /// All nodes in contiguous storage, root at index 0
    nodes: Vec<TrieNode>,
}

impl Default for KeyTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTrie {
    /// Create empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a key pointing at `entry`
    pub fn insert(&mut self, key: &str, entry: u32) {
        let mut current_idx = 0u32;

        for ch in key.chars() {
            let next_idx = match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };
            current_idx = next_idx;
        }

        self.nodes[current_idx as usize].entry = Some(entry);
    }

    /// Report every key that is a prefix of `chars` as `(entry, key_len)`
    ///
    /// `key_len` is measured in characters.
    pub fn for_each_prefix<F>(&self, chars: &[char], mut f: F)
    where
        F: FnMut(u32, usize),
    {
        let mut current_idx = 0u32;

        for (depth, ch) in chars.iter().enumerate() {
            match self.nodes[current_idx as usize].children.get(ch) {
                Some(&next_idx) => current_idx = next_idx,
                None => return,
            }
            if let Some(entry) = self.nodes[current_idx as usize].entry {
                f(entry, depth + 1);
            }
        }
    }
}
