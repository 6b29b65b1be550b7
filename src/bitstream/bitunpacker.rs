use log::{debug, trace};

use super::bitreader::BitReader;
use crate::error::{HfzError, Result};
use crate::huffman_coding::code_table::{Code, CodeTable};

/// Decode exactly `count` bytes from `payload`. Bits left over after the last byte are padding
/// and are ignored.
pub fn unpack(payload: &[u8], table: &CodeTable, count: usize) -> Result<Vec<u8>> {
    // Every code is at least one bit long, so the payload bounds the decoded length.
    let payload_bits = payload.len().saturating_mul(8);
    if payload_bits < count {
        return Err(HfzError::DecodeSizeMismatch {
            expected: count,
            actual: payload_bits,
        });
    }
    // With one symbol the payload carries no information.
    if let Some(symbol) = table.single_symbol() {
        debug!("Single symbol {:#04x}, emitting it {} times.", symbol, count);
        return Ok(vec![symbol; count]);
    }
    unpack_bits(payload, table, count)
}

/// Generic bit-by-bit decoding through the reversed code table.
fn unpack_bits(payload: &[u8], table: &CodeTable, count: usize) -> Result<Vec<u8>> {
    let lookup = table.reverse();
    let max_len = table.max_len();
    let mut br = BitReader::new(payload);
    let mut output = Vec::with_capacity(count.min(payload.len().saturating_mul(8)));
    let mut candidate = Code::default();

    while output.len() < count {
        let bit = match br.bool_bit() {
            Some(bit) => bit,
            None => {
                return Err(HfzError::DecodeSizeMismatch {
                    expected: count,
                    actual: output.len(),
                })
            }
        };
        candidate = candidate.push(bit);
        if let Some(&value) = lookup.get(&candidate) {
            output.push(value);
            candidate = Code::default();
        } else if candidate.len >= max_len {
            return Err(HfzError::InvalidFormat(format!(
                "no code matches {} at {}",
                candidate,
                br.loc()
            )));
        }
    }
    trace!("Decoding stopped at {} with {} bits unread.", br.loc(), br.remaining());
    Ok(output)
}
