use crate::tree::NodeId;

/// Optional segments can only be skipped at depths below this bound.
pub const SKIP_MASK_BITS: usize = u64::BITS as usize;

/// One pending step of the depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub node: NodeId,
    /// Index of the next path part to consume.
    pub index: usize,
    /// Bit `d` set: the optional segment at depth `d` was skipped.
    pub skipped: u64,
    pub depth: u16,
    pub statics: u32,
    pub dynamics: u32,
    pub optionals: u32,
    pub is_index: bool,
}

impl Frame {
    /// The root already accounts for the empty part before the leading `/`.
    pub fn root() -> Self {
        Self {
            node: NodeId::ROOT,
            index: 1,
            skipped: 0,
            depth: 0,
            statics: 1,
            dynamics: 0,
            optionals: 0,
            is_index: false,
        }
    }

    #[inline]
    fn rank(&self) -> (u32, u32, u32, bool, u16) {
        (
            self.statics,
            self.dynamics,
            self.optionals,
            self.is_index,
            self.depth,
        )
    }

    /// Strictly more specific than `other`; anything beats no candidate.
    #[inline]
    pub fn outranks(&self, other: Option<&Frame>) -> bool {
        other.is_none_or(|other| self.rank() > other.rank())
    }
}

#[inline]
pub(crate) fn skip_bit(depth: u16) -> u64 {
    1u64.checked_shl(u32::from(depth)).unwrap_or(0)
}
