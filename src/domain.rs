use std::fmt;

use crate::{
    error::{Error, Result},
    span::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// The valid coordinate window of one map axis.
///
/// A cyclic domain identifies `span.max` with `span.min`, so extents may wrap across that seam
/// (e.g. longitude across the antimeridian).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    span: Span,
    cyclic: bool,
}

impl Domain {
    pub fn linear(span: Span) -> Self {
        Self {
            span,
            cyclic: false,
        }
    }

    pub fn cyclic(span: Span) -> Result<Self> {
        let width = span.length();
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidDomain(span));
        }

        Ok(Self { span, cyclic: true })
    }

    /// `span` must have a finite, positive width
    pub(crate) const fn cyclic_unchecked(span: Span) -> Self {
        Self { span, cyclic: true }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Length of one period
    pub fn width(&self) -> f64 {
        self.span.length()
    }
}

/// Maps `value` into `[span.min, span.max)` by whole periods
pub(crate) fn wrap(value: f64, span: Span) -> f64 {
    let wrapped = span.min + (value - span.min).rem_euclid(span.length());
    // rem_euclid may round up to the full period for tiny negative offsets
    if wrapped >= span.max {
        span.min
    } else {
        wrapped
    }
}
