use std::{iter, option};

use crate::{domain::wrap, span::Span};

/// A directional extent on one axis.
///
/// `start > end` means the extent runs from `start` across the domain seam to `end`, so the
/// endpoints are never reordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// A degenerate segment at a single coordinate
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn is_wrapping(&self) -> bool {
        self.start > self.end
    }

    /// Distance travelled from `start` to `end` on a circle of the given period
    fn extent(&self, period: f64) -> f64 {
        if self.start <= self.end {
            return self.end - self.start;
        }

        // A wrap back onto its own start goes all the way around
        let extent = (self.end - self.start).rem_euclid(period);
        if extent == 0.0 {
            period
        } else {
            extent
        }
    }

    /// Splits the segment into spans confined to one period of `domain`.
    ///
    /// The result is a single span unless the extent crosses `domain.max`, in which case the two
    /// pieces abut the seam exactly. Extents of a full period or more cover the whole domain.
    ///
    /// Start points are wrapped into `[domain.min, domain.max)`, but a span may end on
    /// `domain.max` itself so that coverage up to the seam keeps its full length.
    pub fn split(&self, domain: Span) -> Split {
        let period = domain.length();
        let start = wrap(self.start, domain);

        if self.start == self.end {
            return Split::Whole(Span::point(start));
        }

        let extent = self.extent(period);
        if extent >= period {
            return Split::Whole(domain);
        }

        let end = start + extent;
        if end <= domain.max {
            Split::Whole(Span::new(start, end))
        } else {
            Split::Wrapped(
                Span::new(start, domain.max),
                Span::new(domain.min, (end - period).max(domain.min)),
            )
        }
    }
}

/// Spans produced by [`Segment::split`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Split {
    Whole(Span),
    /// Piece ending at the seam, then the piece starting from it
    Wrapped(Span, Span),
}

impl IntoIterator for Split {
    type Item = Span;
    type IntoIter = iter::Chain<iter::Once<Span>, option::IntoIter<Span>>;

    fn into_iter(self) -> Self::IntoIter {
        let (first, second) = match self {
            Split::Whole(span) => (span, None),
            Split::Wrapped(head, tail) => (head, Some(tail)),
        };

        iter::once(first).chain(second)
    }
}
