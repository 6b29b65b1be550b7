//! Builds the Huffman tree from a frequency table.
//!
//! The encoder and the decoder each build the tree independently from the same table, so the
//! construction must depend only on the (value, count) pairs. Every comparison goes through
//! [`priority`], which is a total order over the trees that can coexist in one build.

use log::trace;

use super::tree::{priority, HuffNode};
use crate::error::{HfzError, Result};
use crate::tools::freq_count::FreqTable;

/// Build one Huffman tree from a non-empty frequency table. A single entry yields a lone leaf.
pub fn build_tree(table: &FreqTable) -> Result<HuffNode> {
    let mut forest: Vec<HuffNode> = table
        .entries()
        .map(|(value, count)| HuffNode::leaf(value, count))
        .collect();

    if forest.is_empty() {
        return Err(HfzError::TreeConstruction("frequency table has no entries"));
    }

    // Pare the forest down to a single tree. Keep it sorted largest first so the two
    // smallest trees come off the end.
    while forest.len() > 1 {
        forest.sort_unstable_by(|a, b| priority(b, a));

        let left = forest.pop().ok_or(HfzError::TreeConstruction("forest underflow"))?;
        let right = forest.pop().ok_or(HfzError::TreeConstruction("forest underflow"))?;
        trace!(
            "merge w{} (min {}) + w{} (min {})",
            left.weight(),
            left.min_leaf(),
            right.weight(),
            right.min_leaf()
        );
        forest.push(HuffNode::merge(left, right));
    }

    forest.pop().ok_or(HfzError::TreeConstruction("forest underflow"))
}
