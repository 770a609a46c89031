/// A byte range `[start, end)` into the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// The bytes of `source` covered by this span
    pub fn slice(self, source: &[u8]) -> &[u8] {
        &source[self.start..self.end]
    }
}

/// A scanned piece of a page body. Spans only, no copied text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkNode {
    /// Bytes passed through unchanged.
    Text(Span),
    /// A bracket link `[Target]`.
    Link {
        /// Full span including `[` and `]`.
        full: Span,
        /// Span of the target title between the brackets.
        target: Span,
    },
}

impl LinkNode {
    /// The whole span this node covers
    pub fn full(&self) -> Span {
        match self {
            LinkNode::Text(sp) => *sp,
            LinkNode::Link { full, .. } => *full,
        }
    }
}
