use std::cmp::Ordering;

/// A Huffman tree node. Internal nodes own their children exclusively.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum HuffNode {
    Leaf {
        value: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(value: u8, weight: u64) -> Self {
        HuffNode::Leaf { value, weight }
    }

    /// Join two trees under a new internal node. `left` must be the smaller of the two
    /// under [`priority`].
    pub fn merge(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Smallest byte value of any leaf under this node.
    pub fn min_leaf(&self) -> u8 {
        match self {
            HuffNode::Leaf { value, .. } => *value,
            HuffNode::Internal { left, right, .. } => left.min_leaf().min(right.min_leaf()),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Total order used by the tree builder's priority collection.
///
/// Lighter trees first. At equal weight a leaf precedes an internal node, two leaves
/// order by byte value and two internal nodes by the smallest leaf value they contain.
/// Trees in one build never share leaves, so no two distinct trees compare equal.
pub fn priority(a: &HuffNode, b: &HuffNode) -> Ordering {
    a.weight().cmp(&b.weight()).then_with(|| match (a, b) {
        (HuffNode::Leaf { value: x, .. }, HuffNode::Leaf { value: y, .. }) => x.cmp(y),
        (HuffNode::Leaf { .. }, HuffNode::Internal { .. }) => Ordering::Less,
        (HuffNode::Internal { .. }, HuffNode::Leaf { .. }) => Ordering::Greater,
        (HuffNode::Internal { .. }, HuffNode::Internal { .. }) => {
            a.min_leaf().cmp(&b.min_leaf())
        }
    })
}
