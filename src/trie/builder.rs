//! Streaming trie construction from a sorted word list.
//!
//! The builder keeps a single "current path" stack of open nodes from the
//! root down to the most recently seen prefix. Each incoming word first
//! closes the part of the path that is no longer a prefix of it, then opens
//! one node per remaining character. Closing a node appends a finalized
//! [`PackedNode`] record for each of its (already closed) children, so the
//! output array is produced in one pass without ever materializing the tree.
//! The root is appended last and a final pass resolves parent indices.
//!
//! Precondition (not verified): words arrive in ascending byte order. Feeding
//! unsorted input silently produces an incorrect trie.

use crate::error::{FalcataError, Result};
use crate::trie::node::{MAX_CHILD_COUNT, MAX_NODE_INDEX, NO_PARENT, PackedNode};
use crate::trie::store::TrieStore;

/// A builder-side node whose children may still grow.
///
/// Distinct from the immutable output records: an open node owns the
/// summaries of its already closed children until it is closed itself.
struct OpenNode {
    key: u8,
    is_end: bool,
    children: Vec<ClosedChild>,
}

/// Summary of a closed node, held by its parent until the parent closes.
struct ClosedChild {
    key: u8,
    child_start: u32,
    child_count: u8,
    is_end: bool,
}

/// Builds a [`TrieStore`] from a lexicographically sorted stream of words.
///
/// Single-writer: a builder must not be shared while words are being added.
pub struct TrieBuilder {
    closed: Vec<PackedNode>,
    path: Vec<OpenNode>,
    prefix: Vec<u8>,
}

impl TrieBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        TrieBuilder {
            closed: Vec::new(),
            path: vec![OpenNode {
                key: 0,
                is_end: false,
                children: Vec::new(),
            }],
            prefix: Vec::new(),
        }
    }

    /// Build a trie from an already sorted word sequence in one call.
    pub fn build<I, W>(words: I) -> Result<TrieStore>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.add_word(word.as_ref())?;
        }
        builder.finish()
    }

    /// Add the next word. Must sort ascending after every word added so far.
    pub fn add_word(&mut self, word: &[u8]) -> Result<()> {
        // Close path nodes until the accumulated prefix is a prefix of the
        // incoming word. The root (empty prefix) always matches.
        while !word.starts_with(&self.prefix) {
            self.close_top()?;
        }

        for i in self.prefix.len()..word.len() {
            self.path.push(OpenNode {
                key: word[i],
                is_end: i + 1 == word.len(),
                children: Vec::new(),
            });
            self.prefix.push(word[i]);
        }
        // A duplicate word opens nothing; its end flag is already set.
        Ok(())
    }

    /// Close all remaining open nodes, append the root record and resolve
    /// parent back-references.
    pub fn finish(mut self) -> Result<TrieStore> {
        while self.path.len() > 1 {
            self.close_top()?;
        }

        let root = self.path.pop().unwrap_or(OpenNode {
            key: 0,
            is_end: false,
            children: Vec::new(),
        });
        let child_start = self.append_children(&root.children)?;
        self.append_record(PackedNode {
            child_start,
            child_count: root.children.len() as u8,
            is_end: false,
            key: 0,
            parent: NO_PARENT,
        })?;

        self.resolve_parents();
        TrieStore::from_nodes(self.closed)
    }

    /// Close the deepest open node: emit records for its children and hand a
    /// summary of it to its parent on the path.
    ///
    /// Callers only invoke this while a non-root node is on the path; the
    /// root is closed by `finish` alone.
    fn close_top(&mut self) -> Result<()> {
        let node = self
            .path
            .pop()
            .expect("close_top is never called on an empty path");
        self.prefix.pop();

        let child_start = self.append_children(&node.children)?;
        let parent = self
            .path
            .last_mut()
            .expect("non-root node always has a parent on the path");
        parent.children.push(ClosedChild {
            key: node.key,
            child_start,
            child_count: node.children.len() as u8,
            is_end: node.is_end,
        });
        Ok(())
    }

    /// Append the records of a node's closed children, returning the start of
    /// their contiguous index range.
    fn append_children(&mut self, children: &[ClosedChild]) -> Result<u32> {
        if children.len() > MAX_CHILD_COUNT {
            return Err(FalcataError::encoding_overflow(format!(
                "node has {} children, limit is {}",
                children.len(),
                MAX_CHILD_COUNT
            )));
        }

        let child_start = self.closed.len() as u32;
        for child in children {
            self.append_record(PackedNode {
                child_start: child.child_start,
                child_count: child.child_count,
                is_end: child.is_end,
                key: child.key,
                // Placeholder until resolve_parents; the parent's own array
                // position is unknown while it is still open.
                parent: NO_PARENT,
            })?;
        }
        Ok(child_start)
    }

    fn append_record(&mut self, node: PackedNode) -> Result<()> {
        if self.closed.len() > MAX_NODE_INDEX as usize {
            return Err(FalcataError::encoding_overflow(format!(
                "trie exceeds {} nodes, limit of the 24-bit index fields",
                MAX_NODE_INDEX + 1
            )));
        }
        self.closed.push(node);
        Ok(())
    }

    /// Write each node's index into the parent field of every node in its
    /// child range. Only the root keeps the sentinel.
    fn resolve_parents(&mut self) {
        for index in 0..self.closed.len() {
            let node = self.closed[index];
            let start = node.child_start as usize;
            for child in start..start + node.child_count as usize {
                self.closed[child].parent = index as u32;
            }
        }
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
