//! Axis selectors for two-dimensional matrix indexing.

use std::ops::{Range, RangeFull};

use solar_core::SolarError;

/// Selects either a single coordinate or a contiguous run along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// A single coordinate; the axis is collapsed in the result.
    At(usize),
    /// Half-open range `start..end`; must be non-empty.
    Range(Range<usize>),
    /// The whole axis.
    All,
}

impl Span {
    /// Whether this span keeps its axis in the selection result.
    pub fn is_range(&self) -> bool {
        !matches!(self, Span::At(_))
    }

    /// Checks the span against an axis of length `extent` and returns the
    /// covered half-open range.
    pub fn resolve(&self, extent: usize) -> Result<Range<usize>, SolarError> {
        match self {
            Span::At(index) => {
                if *index >= extent {
                    return Err(SolarError::out_of_bounds(*index, extent));
                }
                Ok(*index..*index + 1)
            }
            Span::Range(range) => {
                if range.end > extent {
                    return Err(SolarError::out_of_bounds(range.end, extent));
                }
                if range.start >= range.end {
                    return Err(SolarError::out_of_bounds(range.start, range.end));
                }
                Ok(range.clone())
            }
            Span::All => Ok(0..extent),
        }
    }
}

impl From<usize> for Span {
    fn from(index: usize) -> Self {
        Span::At(index)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::Range(range)
    }
}

impl From<RangeFull> for Span {
    fn from(_: RangeFull) -> Self {
        Span::All
    }
}
