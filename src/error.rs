//! Error taxonomy for the hfz codec.
//!
//! Every failure is terminal for the call that raised it. Nothing is retried internally.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HfzError {
    /// Nothing to compress.
    #[error("empty input, nothing to compress")]
    EmptyInput,

    /// The frequency table held no usable entries.
    #[error("cannot build a Huffman tree: {0}")]
    TreeConstruction(&'static str),

    /// Bad magic, truncated header, or an impossible header value.
    #[error("invalid hfz container: {0}")]
    InvalidFormat(String),

    /// The payload decoded to a different number of bytes than the header declares.
    #[error("decoded {actual} bytes, container declares {expected}")]
    DecodeSizeMismatch { expected: usize, actual: usize },

    /// A byte count too large for the 4-byte signed count field.
    #[error("count {count} for byte {value:#04x} does not fit the container table")]
    CountOverflow { value: u8, count: u64 },

    #[error("output file {} already exists (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HfzError>;
