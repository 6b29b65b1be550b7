//! hfz, a byte-oriented Huffman compressor.
//!
//! Builds an optimal prefix code for the byte frequencies of an input, packs the input with it,
//! and wraps the result in a self-describing container:
//!
//! `HFZ1` | original size (i64 BE) | table size (i32 BE) | (byte, i32 BE count)* | payload
//!
//! The decoder rebuilds the same tree from the stored frequency table, so the tree itself is
//! never written.
//!
//! ```
//! let container = hfz::compress(b"abracadabra")?;
//! let bytes = container.to_bytes()?;
//! let restored = hfz::decompress(&hfz::Container::from_bytes(&bytes)?)?;
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), hfz::HfzError>(())
//! ```
//!
//! Basic command line usage:
//!
//! `$> hfz test.txt`
//!
//! This will compress the file and create the file test.txt.huff.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress;
pub use compression::container::Container;
pub use compression::decompress::decompress;
pub use error::{HfzError, Result};
