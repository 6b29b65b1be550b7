use crate::error::{HfzError, Result};

/// Byte frequency table. Only byte values with a non-zero count are entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; 256],
}

impl FreqTable {
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Set the count for a byte value. A zero count removes the entry.
    pub fn insert(&mut self, value: u8, count: u64) {
        self.counts[value as usize] = count; //overwrites, so the last insert wins
    }

    pub fn get(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Number of distinct byte values with a non-zero count.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// (value, count) entries in ascending byte order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0) //absent bytes are not entries
            .map(|(i, c)| (i as u8, *c)) //slot index is the byte value
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(u8, u64)> for FreqTable {
    /// Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (u8, u64)>>(iter: I) -> Self {
        let mut table = FreqTable::new();
        iter.into_iter().for_each(|(v, c)| table.insert(v, c));
        table
    }
}

/// Returns a frequency count of the input data. Empty input is an error.
pub fn freqs(data: &[u8]) -> Result<FreqTable> {
    if data.is_empty() {
        return Err(HfzError::EmptyInput);
    }
    let mut table = FreqTable::new();
    data.iter().for_each(|&el| table.counts[el as usize] += 1); //one slot per byte value
    Ok(table)
}
