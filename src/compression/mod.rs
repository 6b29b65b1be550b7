//! The compression module holds the two core operations of the hfz codec and the container format.
//!
//! Compression happens in the following steps:
//! - Frequency count: how often each byte value occurs in the input.
//! - Tree build: merge the two lightest trees until one remains, with deterministic tie-breaks.
//! - Code table: the path to each leaf is that byte's code.
//! - Packing: every input byte is replaced by its code, MSB first.
//! - Container: magic, original size, frequency table, then the packed payload.
//!
//! Decompression reads the container, rebuilds the tree and code table from the stored
//! frequencies, and decodes exactly original-size bytes from the payload.
//!

pub mod compress;
pub mod container;
pub mod decompress;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{HfzError, Result};

/// Write `bytes` to `path`. An existing file is only replaced when `force` is set.
pub(crate) fn write_output(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut f_out = options.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => HfzError::OutputExists(path.to_path_buf()),
        _ => HfzError::Io(e),
    })?;
    f_out.write_all(bytes)?;
    Ok(())
}
