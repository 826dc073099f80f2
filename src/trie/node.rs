//! Packed trie node records.
//!
//! One node is persisted as two little-endian `u32` words (8 bytes):
//!
//! ```text
//! word A: child_start << 8 | is_end << 7 | child_count
//! word B: parent << 8 | key
//! ```
//!
//! `child_start` and `parent` are 24-bit node indices on disk, `child_count`
//! occupies 7 bits. Values that do not fit fail with an encoding overflow
//! error instead of wrapping.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{FalcataError, Result};

/// Size in bytes of one persisted node record.
pub const RECORD_SIZE: usize = 8;

/// Largest node index representable in the 24-bit on-disk fields.
pub const MAX_NODE_INDEX: u32 = 0x00FF_FFFE;

/// Sentinel parent index marking the root node.
pub const NO_PARENT: u32 = 0x00FF_FFFF;

/// Largest child count representable in the packed 7-bit field.
pub const MAX_CHILD_COUNT: usize = 0x7F;

/// A fixed-size trie node: child range, end-of-word flag, key symbol and a
/// back-reference to the parent's array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedNode {
    /// Offset into the node array where this node's children begin.
    pub child_start: u32,
    /// Number of children, contiguous from `child_start`.
    pub child_count: u8,
    /// True if the path from the root to this node spells a dictionary word.
    pub is_end: bool,
    /// The symbol labeling the edge from this node's parent (0 for the root).
    pub key: u8,
    /// Array position of the parent node, or [`NO_PARENT`] for the root.
    pub parent: u32,
}

impl PackedNode {
    /// Write this node as one fixed-width record.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.child_start > MAX_NODE_INDEX {
            return Err(FalcataError::encoding_overflow(format!(
                "child_start {} exceeds 24-bit index range",
                self.child_start
            )));
        }
        if self.child_count as usize > MAX_CHILD_COUNT {
            return Err(FalcataError::encoding_overflow(format!(
                "child_count {} exceeds 7-bit range",
                self.child_count
            )));
        }
        if self.parent > NO_PARENT {
            return Err(FalcataError::encoding_overflow(format!(
                "parent {} exceeds 24-bit index range",
                self.parent
            )));
        }

        let word_a =
            (self.child_start << 8) | ((self.is_end as u32) << 7) | (self.child_count as u32);
        let word_b = (self.parent << 8) | (self.key as u32);

        writer.write_u32::<LittleEndian>(word_a)?;
        writer.write_u32::<LittleEndian>(word_b)?;
        Ok(())
    }

    /// Read one fixed-width record.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let word_a = reader.read_u32::<LittleEndian>()?;
        let word_b = reader.read_u32::<LittleEndian>()?;

        Ok(PackedNode {
            child_start: word_a >> 8,
            child_count: (word_a & 0x7F) as u8,
            is_end: (word_a >> 7) & 1 == 1,
            key: (word_b & 0xFF) as u8,
            parent: word_b >> 8,
        })
    }

    /// True for the root node, which has no parent.
    pub fn is_root(&self) -> bool {
        self.parent == NO_PARENT
    }
}
