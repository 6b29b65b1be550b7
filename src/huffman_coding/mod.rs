//! The huffman module builds the prefix code used by the hfz codec.
//!
//! A tree is built from the byte frequency table of the input, and a code table is read off
//! the tree. Only the frequency table is stored in the container, so the decoder runs the same
//! construction again. Both sides must arrive at the identical tree, which is why the builder
//! orders its forest by a total order with no ties (see `tree::priority`).
//!
//! - tree: the node type and the priority order.
//! - tree_builder: repeated pairwise merge of the forest into one tree.
//! - code_table: depth first walk of the tree into byte -> code.
//!

pub mod code_table;
pub mod tree;
pub mod tree_builder;
