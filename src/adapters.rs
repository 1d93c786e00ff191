//! Segment sources for the shapes collaborators hand to a [`BoundingBoxCalculator`].

use crate::{
    calculator::BoundingBoxCalculator,
    error::{Error, Result},
    geo::GeoRect,
    rect::Rect,
    segment::Segment,
};

/// Horizontal (`left..right`) and vertical (`top..bottom`) segments of each rectangle
pub fn segments_from_rects<U>(
    rects: &[Rect<U>],
) -> (
    impl Iterator<Item = Segment> + '_,
    impl Iterator<Item = Segment> + '_,
) {
    (
        rects.iter().map(|v| Segment::new(v.left(), v.right())),
        rects.iter().map(|v| Segment::new(v.top(), v.bottom())),
    )
}

/// Longitude and latitude segments of each rectangle, keeping the longitude direction
pub fn segments_from_geo_rects(
    rects: &[GeoRect],
) -> (
    impl Iterator<Item = Segment> + '_,
    impl Iterator<Item = Segment> + '_,
) {
    (
        rects.iter().map(GeoRect::longitude_segment),
        rects.iter().map(GeoRect::latitude_segment),
    )
}

/// Degenerate segments for each point of an interleaved `x, y, x, y, ..` list
pub fn segments_from_points(
    coords: &[f64],
) -> Result<(
    impl Iterator<Item = Segment> + '_,
    impl Iterator<Item = Segment> + '_,
)> {
    if coords.len() % 2 != 0 {
        return Err(Error::InvalidInput { len: coords.len() });
    }

    Ok((
        coords.iter().step_by(2).copied().map(Segment::point),
        coords.iter().skip(1).step_by(2).copied().map(Segment::point),
    ))
}

impl<U> BoundingBoxCalculator<U> {
    /// Bounding box of geographic rectangles, or `None` if there are none
    pub fn geo_rects_bbox(&self, rects: &[GeoRect]) -> Result<Option<Rect<U>>> {
        if rects.is_empty() {
            return Ok(None);
        }

        let (x, y) = segments_from_geo_rects(rects);
        self.calculate(x, y).map(Some)
    }

    /// Bounding box of an interleaved `x, y, x, y, ..` point list
    pub fn points_bbox(&self, coords: &[f64]) -> Result<Rect<U>> {
        let (x, y) = segments_from_points(coords)?;
        self.calculate(x, y)
    }

    /// Smallest rectangle containing all of `rects`
    pub fn union(&self, rects: &[Rect<U>]) -> Result<Rect<U>> {
        let (x, y) = segments_from_rects(rects);
        self.calculate(x, y)
    }
}
