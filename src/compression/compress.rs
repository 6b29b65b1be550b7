use std::fs;

use log::{debug, info, trace};

use super::container::Container;
use super::write_output;
use crate::bitstream::bitpacker::pack;
use crate::error::Result;
use crate::huffman_coding::{code_table::CodeTable, tree_builder::build_tree};
use crate::tools::cli::HfzOpts;
use crate::tools::freq_count::freqs;

/*
    Compression runs in one pass over data already in memory:
    count byte frequencies, build the tree, read the code table off the tree,
    pack every byte's code, and wrap the payload with the frequency table.
*/

/// Compress `data` into a container. Empty input is an error.
pub fn compress(data: &[u8]) -> Result<Container> {
    let table = freqs(data)?;
    debug!("{} distinct byte values in {} bytes.", table.len(), data.len());

    let tree = build_tree(&table)?;
    let codes = CodeTable::generate(&tree)?;
    debug!(
        "Tree depth {}, longest code {} bits.",
        tree.depth(),
        codes.max_len()
    );
    for (value, code) in codes.iter() {
        trace!("Compression: byte {:#04x} ({:?}) -> {}", value, value as char, code);
    }

    let payload = pack(data, &codes)?;

    Ok(Container {
        original_size: data.len() as u64,
        table,
        payload,
    })
}

/// Compress the input file named in opts, writing the container to the output path.
pub fn compress_file(opts: &HfzOpts) -> Result<()> {
    let input = &opts.input;
    let output = opts.output_path();

    let data = fs::read(input)?;
    info!("Compressing {} ({} bytes).", input.display(), data.len());

    let container = compress(&data)?;
    let bytes = container.to_bytes()?;
    write_output(&output, &bytes, opts.force)?;

    info!(
        "Wrote {} ({} bytes, {:.1}% of the original).",
        output.display(),
        bytes.len(),
        bytes.len() as f64 * 100.0 / data.len() as f64
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::HfzError;
    use crate::tools::cli::Mode;

    #[test]
    fn empty_input_test() {
        assert!(matches!(compress(&[]), Err(HfzError::EmptyInput)));
    }

    #[test]
    fn single_symbol_container_test() {
        let container = compress(&[b'a'; 1000]).unwrap();
        assert_eq!(container.original_size, 1000);
        assert_eq!(container.table.len(), 1);
        assert_eq!(container.table.get(b'a'), 1000);
        assert_eq!(container.payload, vec![0; 125]);
    }

    #[test]
    fn payload_size_test() {
        // a -> 0, b -> 10, c -> 11: 4 + 2*2 + 2*2 = 12 bits.
        let container = compress(b"aabacbca").unwrap();
        assert_eq!(container.original_size, 8);
        assert_eq!(container.payload.len(), 2);
        assert!(container.encoded_len() < 16 + 3 * 5 + 8);
    }

    #[test]
    fn compress_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        fs::write(&input, b"she sells sea shells by the sea shore").unwrap();

        let opts = HfzOpts::new(Mode::Compress, input.clone());
        compress_file(&opts).unwrap();

        let written = fs::read(dir.path().join("words.txt.huff")).unwrap();
        assert_eq!(&written[..4], b"HFZ1");
        let container = Container::from_bytes(&written).unwrap();
        assert_eq!(container.original_size, 37);
    }

    #[test]
    fn compress_empty_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty");
        fs::write(&input, b"").unwrap();
        let opts = HfzOpts::new(Mode::Compress, input);
        assert!(matches!(compress_file(&opts), Err(HfzError::EmptyInput)));
        assert!(!dir.path().join("empty.huff").exists());
    }
}
