use log::{debug, error};

use crate::error::{HfzError, Result};
use crate::huffman_coding::code_table::{Code, CodeTable};

/// Packs prefix codes MSB-first into a byte buffer.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Valid bits in the final byte after flush(), 0 if it was full.
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the capacity specified. Call flush()
    /// before reading the output or the last partial byte is lost.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Move every complete byte from the queue to the output.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Put the low `depth` bits of `data` (at most 32) on the stream.
    fn out_bits(&mut self, data: u64, depth: u8) {
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= data & ((1_u64 << depth) - 1); //add the masked data bits to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Put one prefix code on the stream.
    pub fn out_code(&mut self, code: Code) {
        if code.len > 32 {
            self.out_bits(code.bits >> 32, code.len - 32); //high part first
            self.out_bits(code.bits & 0xffff_ffff, 32); //then the low 32 bits
        } else {
            self.out_bits(code.bits, code.len);
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits.
    pub fn flush(&mut self) {
        self.last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Bits written so far, including those still queued.
    fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_len() / 8, self.bit_len() % 8)
    }
}

/// Encode every byte of `data` with its code from `table`. The final byte is zero padded.
pub fn pack(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut bp = BitPacker::new(data.len() / 2 + 1);
    for &byte in data {
        let code = table
            .get(byte)
            .ok_or(HfzError::TreeConstruction("input byte has no code"))?;
        bp.out_code(code);
    }
    debug!("Packed {} bytes, payload ends at {}.", data.len(), bp.loc());
    bp.flush();
    debug!(
        "Payload is {} bytes, {} bits used in the last byte.",
        bp.output.len(),
        bp.last_bits
    );
    Ok(bp.output)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::{code_table::CodeTable, tree::HuffNode};

    #[test]
    fn out_code_test() {
        let mut bp = BitPacker::new(10);
        bp.out_code(Code::new(0b0010, 4));
        bp.out_code(Code::new(0b0001, 4));
        bp.flush();
        assert_eq!(bp.output, "!".as_bytes());
        assert_eq!(bp.last_bits, 0);
    }

    #[test]
    fn partial_byte_is_zero_padded_test() {
        let mut bp = BitPacker::new(10);
        bp.out_code(Code::new(0b101, 3));
        assert_eq!("[0.3]", &bp.loc());
        bp.flush();
        assert_eq!(bp.output, vec![0b1010_0000]);
        assert_eq!(bp.last_bits, 3);
        assert_eq!("[1.0]", &bp.loc());
    }

    #[test]
    fn codes_span_bytes_test() {
        let mut bp = BitPacker::new(10);
        bp.out_code(Code::new(0b11111, 5));
        bp.out_code(Code::new(0b000000, 6));
        bp.out_code(Code::new(0b11111, 5));
        bp.flush();
        assert_eq!(bp.output, vec![0b1111_1000, 0b0001_1111]);
    }

    #[test]
    fn long_code_test() {
        let mut bp = BitPacker::new(10);
        let bits = 0x1_2345_6789_u64 << 3 | 0b101;
        bp.out_code(Code::new(bits, 40));
        bp.flush();
        assert_eq!(bp.output, (bits << 24).to_be_bytes()[..5].to_vec());
    }

    #[test]
    fn pack_test() {
        // c -> 0, a -> 10, b -> 11
        let tree = HuffNode::merge(
            HuffNode::leaf(b'c', 2),
            HuffNode::merge(HuffNode::leaf(b'a', 1), HuffNode::leaf(b'b', 1)),
        );
        let table = CodeTable::generate(&tree).unwrap();
        let out = pack(b"cabc", &table).unwrap();
        // 0 10 11 0 -> 0101_1000
        assert_eq!(out, vec![0b0101_1000]);
    }

    #[test]
    fn pack_single_symbol_test() {
        let table = CodeTable::generate(&HuffNode::leaf(b'a', 9)).unwrap();
        let out = pack(&[b'a'; 9], &table).unwrap();
        assert_eq!(out, vec![0, 0]);
    }

    #[test]
    fn pack_unknown_byte_test() {
        let table = CodeTable::generate(&HuffNode::leaf(b'a', 1)).unwrap();
        assert!(matches!(
            pack(b"ab", &table),
            Err(HfzError::TreeConstruction(_))
        ));
    }
}
