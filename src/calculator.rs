use crate::{
    coverage::cyclic_bounds,
    domain::{Axis, Domain},
    error::{Error, Result},
    geo::{LATITUDE, LONGITUDE},
    rect::{Geographic, Rect},
    segment::Segment,
    span::Span,
};

/// Computes minimal bounding rectangles over a map whose axes may each wrap around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBoxCalculator<U> {
    x: Domain,
    y: Domain,
    map: Rect<U>,
}

impl<U> BoundingBoxCalculator<U> {
    pub fn new(x: Domain, y: Domain) -> Self {
        Self {
            x,
            y,
            map: Rect::from_spans(x.span(), y.span()),
        }
    }

    /// Uses the extent of `map` as the domain of each axis
    pub fn from_map_rect(map: Rect<U>, cyclic_x: bool, cyclic_y: bool) -> Result<Self> {
        let axis = |span, cyclic| {
            if cyclic {
                Domain::cyclic(span)
            } else {
                Ok(Domain::linear(span))
            }
        };

        Ok(Self {
            x: axis(map.x_span(), cyclic_x)?,
            y: axis(map.y_span(), cyclic_y)?,
            map,
        })
    }

    pub fn x(&self) -> &Domain {
        &self.x
    }

    pub fn y(&self) -> &Domain {
        &self.y
    }

    pub fn map(&self) -> Rect<U> {
        self.map
    }

    /// Returns the smallest rectangle enclosing all segments of both axes.
    ///
    /// On a cyclic axis the rectangle may reach past the map edge when the coverage wraps across
    /// the seam, but its center always lies within the map.
    pub fn calculate(
        &self,
        x_segments: impl IntoIterator<Item = Segment>,
        y_segments: impl IntoIterator<Item = Segment>,
    ) -> Result<Rect<U>> {
        let x = bounding_range(x_segments, &self.x, Axis::X)?;
        let y = bounding_range(y_segments, &self.y, Axis::Y)?;

        let rect = Rect::from_spans(x, y);
        tracing::debug!(?rect.origin, ?rect.dimension, "bounding box");

        Ok(rect)
    }
}

impl BoundingBoxCalculator<Geographic> {
    /// Longitude wraps at the antimeridian, latitude does not
    pub fn geographic() -> Self {
        Self {
            x: Domain::cyclic_unchecked(LONGITUDE),
            y: Domain::linear(LATITUDE),
            map: Rect::from_spans(LONGITUDE, LATITUDE),
        }
    }
}

impl Default for BoundingBoxCalculator<Geographic> {
    fn default() -> Self {
        Self::geographic()
    }
}

fn bounding_range(
    segments: impl IntoIterator<Item = Segment>,
    domain: &Domain,
    axis: Axis,
) -> Result<Span> {
    let range = if domain.is_cyclic() {
        cyclic_bounds(segments, domain)
    } else {
        linear_bounds(segments)
    };

    range.ok_or(Error::EmptyAxis { axis })
}

/// Spans from the lowest segment start to the highest segment end
pub fn linear_bounds(segments: impl IntoIterator<Item = Segment>) -> Option<Span> {
    segments
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, segment| match acc {
            Some((min, max)) => Some((min.min(segment.start), max.max(segment.end))),
            None => Some((segment.start, segment.end)),
        })
        .map(|(min, max)| Span::ordered(min, max))
}
