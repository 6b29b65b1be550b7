use std::fs;

use log::{error, info, trace};

use super::container::Container;
use super::write_output;
use crate::bitstream::bitunpacker::unpack;
use crate::error::{HfzError, Result};
use crate::huffman_coding::{code_table::CodeTable, tree_builder::build_tree};
use crate::tools::cli::HfzOpts;

/// Rebuild the code table from the stored frequencies and decode the payload.
pub fn decompress(container: &Container) -> Result<Vec<u8>> {
    if container.original_size == 0 {
        return Err(HfzError::InvalidFormat("original size is zero".to_string()));
    }
    let expected = usize::try_from(container.original_size).map_err(|_| {
        HfzError::InvalidFormat(format!(
            "original size {} too large for this platform",
            container.original_size
        ))
    })?;

    let tree = build_tree(&container.table)?;
    let codes = CodeTable::generate(&tree)?;
    for (value, code) in codes.iter() {
        trace!("Decompression: byte {:#04x} ({:?}) -> {}", value, value as char, code);
    }

    let output = unpack(&container.payload, &codes, expected)?;
    if output.len() != expected {
        return Err(HfzError::DecodeSizeMismatch {
            expected,
            actual: output.len(),
        });
    }
    Ok(output)
}

/// Decompress the container file named in opts, writing the restored bytes to the output path.
pub fn decompress_file(opts: &HfzOpts) -> Result<()> {
    let output_path = opts.output_path();
    let output = read_and_decode(opts)?;
    write_output(&output_path, &output, opts.force)?;
    info!("Wrote {} ({} bytes).", output_path.display(), output.len());
    Ok(())
}

/// Decode the container file named in opts without writing anything.
pub fn test_file(opts: &HfzOpts) -> Result<()> {
    let output = read_and_decode(opts)?;
    info!("{}: ok, {} bytes.", opts.input.display(), output.len());
    Ok(())
}

fn read_and_decode(opts: &HfzOpts) -> Result<Vec<u8>> {
    let bytes = fs::read(&opts.input)?;
    info!("Decompressing {} ({} bytes).", opts.input.display(), bytes.len());

    let container = Container::from_bytes(&bytes).map_err(|e| {
        error!("{} is not a valid hfz file.", opts.input.display());
        e
    })?;
    decompress(&container)
}
