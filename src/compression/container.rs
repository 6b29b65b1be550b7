//! The hfz container. All integers are big-endian.
//!
//! | offset | field         | size                          |
//! |--------|---------------|-------------------------------|
//! | 0      | magic `HFZ1`  | 4                             |
//! | 4      | original size | 8, signed                     |
//! | 12     | table size    | 4, signed                     |
//! | 16     | entries       | table size x (1 value + 4 signed count) |
//! | ..     | payload       | rest of the container         |
//!
//! Only the frequency table is stored. The tree and code table are rebuilt from it.

use std::io::{self, Read, Write};

use log::trace;

use crate::error::{HfzError, Result};
use crate::tools::freq_count::FreqTable;

pub const MAGIC: &[u8; 4] = b"HFZ1";
const HEADER_LEN: usize = 16;
const ENTRY_LEN: usize = 5;

/// A parsed (or ready to write) container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub original_size: u64,
    pub table: FreqTable,
    pub payload: Vec<u8>,
}

impl Container {
    /// Serialized length in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.table.len() * ENTRY_LEN + self.payload.len()
    }

    /// Write the container. Entries go out in ascending byte order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let original_size = i64::try_from(self.original_size).map_err(|_| {
            HfzError::InvalidFormat(format!("original size {} too large", self.original_size))
        })?;
        writer.write_all(MAGIC)?;
        writer.write_all(&original_size.to_be_bytes())?;
        writer.write_all(&(self.table.len() as i32).to_be_bytes())?;
        for (value, count) in self.table.entries() {
            let count =
                i32::try_from(count).map_err(|_| HfzError::CountOverflow { value, count })?;
            writer.write_all(&[value])?;
            writer.write_all(&count.to_be_bytes())?;
        }
        writer.write_all(&self.payload)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Parse a container. Everything after the table is payload.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Container> {
        let mut magic = [0u8; 4];
        read_field(reader, &mut magic, "magic")?;
        if &magic != MAGIC {
            return Err(HfzError::InvalidFormat(format!(
                "bad magic {:02x?}, expected {:02x?}",
                magic, MAGIC
            )));
        }

        let mut size_bytes = [0u8; 8];
        read_field(reader, &mut size_bytes, "original size")?;
        let original_size = i64::from_be_bytes(size_bytes);
        if original_size < 0 {
            return Err(HfzError::InvalidFormat(format!(
                "negative original size {}",
                original_size
            )));
        }

        let mut table_size_bytes = [0u8; 4];
        read_field(reader, &mut table_size_bytes, "table size")?;
        let table_size = i32::from_be_bytes(table_size_bytes);
        if !(0..=256).contains(&table_size) {
            return Err(HfzError::InvalidFormat(format!(
                "table size {} out of range",
                table_size
            )));
        }

        let mut table = FreqTable::new();
        for _ in 0..table_size {
            let mut entry = [0u8; ENTRY_LEN];
            read_field(reader, &mut entry, "frequency table")?;
            let count = i32::from_be_bytes([entry[1], entry[2], entry[3], entry[4]]);
            if count < 0 {
                return Err(HfzError::InvalidFormat(format!(
                    "negative count {} for byte {:#04x}",
                    count, entry[0]
                )));
            }
            // Later duplicates overwrite earlier ones, zero counts drop out.
            table.insert(entry[0], count as u64);
        }

        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;
        trace!(
            "Read container: size {}, {} table entries, {} payload bytes.",
            original_size,
            table.len(),
            payload.len()
        );

        Ok(Container {
            original_size: original_size as u64,
            table,
            payload,
        })
    }

    pub fn from_bytes(mut bytes: &[u8]) -> Result<Container> {
        Self::read_from(&mut bytes)
    }
}

/// read_exact, with a short read reported as a format error naming the field.
fn read_field<R: Read>(reader: &mut R, buf: &mut [u8], field: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => HfzError::InvalidFormat(format!("truncated {}", field)),
        _ => HfzError::Io(e),
    })
}
