//! The narrow band: cells near the zero level set, recorded during the
//! reverse pass.

use chamfer_core::Coord;
use std::ops::{BitOr, BitOrAssign, Range};

/// Flags describing a recorded band node.
///
/// A small bit set: [`SIGN`](Self::SIGN) is set when the cell's distance is
/// positive (outside the object), [`INNER`](Self::INNER) when its magnitude
/// is strictly below the band's inner radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeState(u8);

impl NodeState {
    /// No flags set.
    pub const EMPTY: Self = Self(0);
    /// Distance is strictly positive.
    pub const SIGN: Self = Self(1);
    /// Distance magnitude is strictly below the inner radius.
    pub const INNER: Self = Self(2);

    /// Raw bit pattern (`SIGN = 1`, `INNER = 2`).
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Rebuild from a raw bit pattern, dropping unknown bits.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    /// Whether every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Shorthand for `contains(NodeState::SIGN)`.
    pub fn is_positive(self) -> bool {
        self.contains(Self::SIGN)
    }

    /// Shorthand for `contains(NodeState::INNER)`.
    pub fn is_inner(self) -> bool {
        self.contains(Self::INNER)
    }
}

impl BitOr for NodeState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for NodeState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One recorded grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandNode {
    /// Grid index of the cell.
    pub index: Coord,
    /// Sign and inner-band flags.
    pub state: NodeState,
}

/// An ordered list of band nodes plus the radii that select them.
///
/// The caller owns the band and lends it to a sweep, which clears it at
/// the start of the reverse pass and appends one node per visited cell
/// whose magnitude is within [`total_radius`](Self::total_radius). Nodes
/// therefore appear in reverse raster order.
///
/// # Examples
///
/// ```
/// use chamfer_engine::{NarrowBand, NodeState};
///
/// let mut band = NarrowBand::new(2.0, 1.0);
/// assert!(band.record(&[3, 4], 0.5));
/// assert!(band.record(&[3, 5], -1.5));
/// assert!(!band.record(&[3, 6], 2.5));
///
/// assert_eq!(band.len(), 2);
/// assert_eq!(band.nodes()[0].state, NodeState::SIGN | NodeState::INNER);
/// assert_eq!(band.nodes()[1].state, NodeState::EMPTY);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NarrowBand {
    total_radius: f32,
    inner_radius: f32,
    nodes: Vec<BandNode>,
}

impl NarrowBand {
    /// Create an empty band with the given radii.
    ///
    /// Radii are not validated: an inner radius above the total radius
    /// simply flags every node as inner.
    pub fn new(total_radius: f32, inner_radius: f32) -> Self {
        Self {
            total_radius,
            inner_radius,
            nodes: Vec::new(),
        }
    }

    /// Largest magnitude recorded into the band.
    pub fn total_radius(&self) -> f32 {
        self.total_radius
    }

    /// Set the total radius. Takes effect on the next sweep.
    pub fn set_total_radius(&mut self, radius: f32) {
        self.total_radius = radius;
    }

    /// Magnitude below which a node is flagged [`NodeState::INNER`].
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// Set the inner radius. Takes effect on the next sweep.
    pub fn set_inner_radius(&mut self, radius: f32) {
        self.inner_radius = radius;
    }

    /// Remove every node, keeping the radii.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Append a node for `index` if `|value| <= total_radius`.
    ///
    /// Returns whether a node was appended.
    pub fn record(&mut self, index: &[i32], value: f32) -> bool {
        let magnitude = value.abs();
        if !(magnitude <= self.total_radius) {
            return false;
        }
        let mut state = NodeState::EMPTY;
        if value > 0.0 {
            state |= NodeState::SIGN;
        }
        if magnitude < self.inner_radius {
            state |= NodeState::INNER;
        }
        self.nodes.push(BandNode {
            index: Coord::from_slice(index),
            state,
        });
        true
    }

    /// Append a node unconditionally.
    pub fn push(&mut self, node: BandNode) {
        self.nodes.push(node);
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the band holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in recording order.
    pub fn nodes(&self) -> &[BandNode] {
        &self.nodes
    }

    /// Iterate nodes in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, BandNode> {
        self.nodes.iter()
    }

    /// Partition the nodes into at most `parts` contiguous ranges for
    /// independent downstream workers.
    ///
    /// Every range but the last holds `len / parts` nodes; the last takes
    /// the remainder. `parts` is clamped to the node count, so an empty
    /// band (or `parts == 0`) yields no ranges.
    ///
    /// ```
    /// use chamfer_engine::NarrowBand;
    ///
    /// let mut band = NarrowBand::new(10.0, 0.0);
    /// for i in 0..7 {
    ///     band.record(&[i], 1.0);
    /// }
    /// assert_eq!(band.split(3), vec![0..2, 2..4, 4..7]);
    /// ```
    pub fn split(&self, parts: usize) -> Vec<Range<usize>> {
        let len = self.nodes.len();
        let parts = parts.min(len);
        if parts == 0 {
            return Vec::new();
        }
        let chunk = len / parts;
        (0..parts)
            .map(|i| {
                let start = i * chunk;
                let end = if i + 1 == parts { len } else { start + chunk };
                start..end
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a NarrowBand {
    type Item = &'a BandNode;
    type IntoIter = std::slice::Iter<'a, BandNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
