//! Read-only storage for a finalized trie.
//!
//! A [`TrieStore`] owns the flat node array produced by the builder. By
//! construction every node's subtree precedes it in the array and the root is
//! the last element. The store is immutable after build/load and safe to
//! share across threads for concurrent searches.
//!
//! Persistence is a headerless sequence of fixed-width records; the element
//! count is implied by the file length.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use crate::error::{FalcataError, Result};
use crate::trie::node::{NO_PARENT, PackedNode, RECORD_SIZE};

/// An ordered collection of packed trie nodes with the root last.
#[derive(Debug, Clone)]
pub struct TrieStore {
    nodes: Vec<PackedNode>,
}

impl TrieStore {
    /// Wrap a finalized node array. The last element must be the root.
    pub(crate) fn from_nodes(nodes: Vec<PackedNode>) -> Result<Self> {
        match nodes.last() {
            Some(root) if root.parent == NO_PARENT => Ok(TrieStore { nodes }),
            Some(_) => Err(FalcataError::format(
                "last node is not a root (parent sentinel missing)",
            )),
            None => Err(FalcataError::format("trie contains no nodes")),
        }
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a store holds at least the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Array position of the root node.
    pub fn root_index(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The root node.
    pub fn root(&self) -> PackedNode {
        self.nodes[self.root_index()]
    }

    /// The node at `index`.
    pub fn get(&self, index: usize) -> Result<PackedNode> {
        self.nodes
            .get(index)
            .copied()
            .ok_or_else(|| FalcataError::index(format!("node {index} out of range")))
    }

    /// Index range of the children of the node at `index`.
    pub fn child_range(&self, index: usize) -> Result<Range<usize>> {
        let node = self.get(index)?;
        let start = node.child_start as usize;
        let end = start + node.child_count as usize;
        if end > self.nodes.len() {
            return Err(FalcataError::index(format!(
                "child range {start}..{end} of node {index} out of range"
            )));
        }
        Ok(start..end)
    }

    /// Contiguous slice holding the children of the node at `index`.
    pub fn children_of(&self, index: usize) -> Result<&[PackedNode]> {
        let range = self.child_range(index)?;
        Ok(&self.nodes[range])
    }

    /// Array position of the parent of the node at `index`.
    ///
    /// Fails with an index error on the root, which has no parent.
    pub fn parent_of(&self, index: usize) -> Result<usize> {
        let node = self.get(index)?;
        if node.parent == NO_PARENT {
            return Err(FalcataError::index(format!(
                "node {index} is the root and has no parent"
            )));
        }
        let parent = node.parent as usize;
        if parent >= self.nodes.len() {
            return Err(FalcataError::index(format!(
                "parent {parent} of node {index} out of range"
            )));
        }
        Ok(parent)
    }

    /// The word spelled by the path from the root to the node at `index`,
    /// reconstructed by walking parent references upward.
    pub fn word_of(&self, index: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut current = index;
        while self.get(current)?.parent != NO_PARENT {
            bytes.push(self.get(current)?.key);
            current = self.parent_of(current)?;
        }
        bytes.reverse();
        Ok(bytes)
    }

    /// Exact-match lookup.
    pub fn contains(&self, word: &[u8]) -> bool {
        let mut index = self.root_index();
        for &symbol in word {
            let Ok(mut range) = self.child_range(index) else {
                return false;
            };
            match range.find(|&child| self.nodes[child].key == symbol) {
                Some(child) => index = child,
                None => return false,
            }
        }
        // The root's end flag is always false, so the empty word never matches.
        self.nodes[index].is_end
    }

    /// Write the node array as fixed-width records.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for node in &self.nodes {
            node.encode(&mut writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reload a node array persisted by [`TrieStore::save`].
    ///
    /// The file length must be a non-zero multiple of the record size;
    /// anything else is a format error and nothing is loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        if file_len == 0 || file_len % RECORD_SIZE as u64 != 0 {
            return Err(FalcataError::format(format!(
                "trie file length {file_len} is not a non-zero multiple of the {RECORD_SIZE}-byte record size"
            )));
        }

        let count = (file_len / RECORD_SIZE as u64) as usize;
        let mut reader = BufReader::new(file);
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            nodes.push(PackedNode::decode(&mut reader)?);
        }
        TrieStore::from_nodes(nodes)
    }
}
