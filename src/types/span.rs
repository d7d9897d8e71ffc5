//! Palindrome centers and spans.

use serde::Serialize;
use std::fmt;

/// A candidate palindrome center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Center {
    /// A single digit at `index`; grows odd-length palindromes.
    Digit { index: usize },
    /// The gap between `index` and `index + 1`; grows even-length palindromes.
    Gap { index: usize },
}

impl Center {
    /// Initial `(left, right)` window probed by expansion.
    #[inline]
    pub const fn bounds(self) -> (usize, usize) {
        match self {
            Self::Digit { index } => (index, index),
            Self::Gap { index } => (index, index + 1),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Digit { index } | Self::Gap { index } => index,
        }
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit { index } => write!(f, "digit {}", index),
            Self::Gap { index } => write!(f, "gap {}|{}", index, index + 1),
        }
    }
}

/// A contiguous palindromic window `[start, end]` grown from a center.
///
/// Spans are only constructed for non-empty windows; a gap center whose two
/// digits differ yields no span at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PalindromeSpan {
    start: usize,
    end: usize,
    center: Center,
}

impl PalindromeSpan {
    /// Create a span, returning `None` if `end < start`.
    pub const fn new(start: usize, end: usize, center: Center) -> Option<Self> {
        if end < start {
            None
        } else {
            Some(Self { start, end, center })
        }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub const fn center(&self) -> Center {
        self.center
    }

    /// Number of digits covered, always at least one.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Never true for a constructed span.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for PalindromeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
