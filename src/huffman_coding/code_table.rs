use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use super::tree::HuffNode;
use crate::error::{HfzError, Result};

/// Longest code a [`Code`] can hold.
pub const MAX_CODE_LEN: u8 = 64;

/// A prefix code: `len` path bits, right-aligned in `bits`, first step in the most
/// significant position. Left is 0, right is 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    pub fn new(bits: u64, len: u8) -> Self {
        Self { bits, len }
    }

    /// This code extended by one bit.
    pub fn push(self, bit: bool) -> Self {
        Self {
            bits: (self.bits << 1) | bit as u64,
            len: self.len + 1,
        }
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && (self.len == 0 || other.bits >> (other.len - self.len) == self.bits)
    }
}

impl fmt::Display for Code {
    /// Renders the '0'/'1' string, first bit first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            f.write_str(if (self.bits >> i) & 1 == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Byte value to prefix code, one entry per leaf of the tree it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Walk the tree depth first, 0 to the left and 1 to the right. A lone leaf gets
    /// the one-bit code `0`.
    pub fn generate(root: &HuffNode) -> Result<Self> {
        let mut codes = BTreeMap::new();
        match root {
            HuffNode::Leaf { value, .. } => {
                codes.insert(*value, Code::new(0, 1));
            }
            HuffNode::Internal { .. } => walk(root, Code::default(), &mut codes)?,
        }
        Ok(Self { codes })
    }

    pub fn get(&self, value: u8) -> Option<Code> {
        self.codes.get(&value).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The only byte value in the table, if there is exactly one.
    pub fn single_symbol(&self) -> Option<u8> {
        match self.codes.len() {
            1 => self.codes.keys().next().copied(),
            _ => None,
        }
    }

    pub fn max_len(&self) -> u8 {
        self.codes.values().map(|c| c.len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes.iter().map(|(&v, &c)| (v, c))
    }

    /// Code to byte value lookup for decoding. Injective because the codes are prefix free.
    pub fn reverse(&self) -> FxHashMap<Code, u8> {
        self.codes.iter().map(|(&v, &c)| (c, v)).collect()
    }
}

/// Recursively walk the tree, recording the path to every leaf.
fn walk(node: &HuffNode, path: Code, codes: &mut BTreeMap<u8, Code>) -> Result<()> {
    match node {
        HuffNode::Leaf { value, .. } => {
            codes.insert(*value, path);
        }
        HuffNode::Internal { left, right, .. } => {
            if path.len == MAX_CODE_LEN {
                return Err(HfzError::TreeConstruction("tree too deep for 64-bit codes"));
            }
            walk(left, path.push(false), codes)?;
            walk(right, path.push(true), codes)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree_builder::build_tree;
    use crate::tools::freq_count::{freqs, FreqTable};
    use proptest::prelude::*;

    fn prefix_free(table: &CodeTable) -> bool {
        let codes: Vec<Code> = table.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }

    #[test]
    fn display_test() {
        assert_eq!(Code::new(0b0110, 4).to_string(), "0110");
        assert_eq!(Code::new(1, 1).to_string(), "1");
        assert_eq!(Code::new(0, 3).to_string(), "000");
    }

    #[test]
    fn is_prefix_of_test() {
        let a = Code::new(0b01, 2);
        assert!(a.is_prefix_of(&Code::new(0b011, 3)));
        assert!(a.is_prefix_of(&a));
        assert!(!a.is_prefix_of(&Code::new(0b101, 3)));
        assert!(!Code::new(0b011, 3).is_prefix_of(&a));
    }

    #[test]
    fn single_leaf_gets_zero_test() {
        let table = CodeTable::generate(&HuffNode::leaf(b'a', 1000)).unwrap();
        assert_eq!(table.get(b'a'), Some(Code::new(0, 1)));
        assert_eq!(table.single_symbol(), Some(b'a'));
    }

    #[test]
    fn left_zero_right_one_test() {
        let tree = HuffNode::merge(
            HuffNode::leaf(b'c', 2),
            HuffNode::merge(HuffNode::leaf(b'a', 1), HuffNode::leaf(b'b', 1)),
        );
        let table = CodeTable::generate(&tree).unwrap();
        assert_eq!(table.get(b'c').unwrap().to_string(), "0");
        assert_eq!(table.get(b'a').unwrap().to_string(), "10");
        assert_eq!(table.get(b'b').unwrap().to_string(), "11");
        assert_eq!(table.get(b'z'), None);
        assert_eq!(table.max_len(), 2);
        assert_eq!(table.single_symbol(), None);
    }

    #[test]
    fn tie_break_puts_a_left_of_b_test() {
        let counts: FreqTable = [(b'b', 3), (b'a', 3)].into_iter().collect();
        let table = CodeTable::generate(&build_tree(&counts).unwrap()).unwrap();
        assert_eq!(table.get(b'a'), Some(Code::new(0, 1)));
        assert_eq!(table.get(b'b'), Some(Code::new(1, 1)));
    }

    #[test]
    fn reverse_test() {
        let table = CodeTable::generate(&build_tree(&freqs(b"mississippi").unwrap()).unwrap())
            .unwrap();
        let rev = table.reverse();
        assert_eq!(rev.len(), table.len());
        for (value, code) in table.iter() {
            assert_eq!(rev[&code], value);
        }
    }

    #[test]
    fn frequent_bytes_get_shorter_codes_test() {
        let data = b"aaaaaaaaaaaaaaaabbbbbbbbccccdde";
        let table = CodeTable::generate(&build_tree(&freqs(data).unwrap()).unwrap()).unwrap();
        assert!(table.get(b'a').unwrap().len <= table.get(b'b').unwrap().len);
        assert!(table.get(b'b').unwrap().len <= table.get(b'c').unwrap().len);
        assert!(table.get(b'c').unwrap().len <= table.get(b'e').unwrap().len);
    }

    proptest! {
        #[test]
        fn codes_are_prefix_free(data in prop::collection::vec(any::<u8>(), 1..2000)) {
            let table = CodeTable::generate(&build_tree(&freqs(&data).unwrap()).unwrap()).unwrap();
            prop_assert!(prefix_free(&table));
            prop_assert!(table.iter().all(|(_, c)| c.len > 0));
        }

        #[test]
        fn rebuilt_tables_match(data in prop::collection::vec(any::<u8>(), 1..2000)) {
            let counts = freqs(&data).unwrap();
            let shuffled: FreqTable = counts.entries().collect::<Vec<_>>().into_iter().rev().collect();
            let first = CodeTable::generate(&build_tree(&counts).unwrap()).unwrap();
            let second = CodeTable::generate(&build_tree(&shuffled).unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
