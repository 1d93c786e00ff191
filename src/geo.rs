use crate::{
    rect::{Geographic, Rect},
    segment::{Segment, Split},
    span::Span,
};

pub const LONGITUDE: Span = Span::new(-180.0, 180.0);
pub const LATITUDE: Span = Span::new(-90.0, 90.0);

/// A longitude/latitude rectangle in degrees.
///
/// The longitude extent runs east from `start_longitude` to `end_longitude`, so a rectangle with
/// `start_longitude > end_longitude` crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
    pub start_longitude: f64,
    pub min_latitude: f64,
    pub end_longitude: f64,
    pub max_latitude: f64,
}

impl GeoRect {
    pub fn new(
        start_longitude: f64,
        min_latitude: f64,
        end_longitude: f64,
        max_latitude: f64,
    ) -> Self {
        Self {
            start_longitude,
            min_latitude,
            end_longitude,
            max_latitude,
        }
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.longitude_segment().is_wrapping()
    }

    pub fn longitude_segment(&self) -> Segment {
        Segment::new(self.start_longitude, self.end_longitude)
    }

    pub fn latitude_segment(&self) -> Segment {
        Segment::new(self.min_latitude, self.max_latitude)
    }

    /// Returns the rectangle as one or two pieces that each stay within `-180..=180`
    pub fn split_by_antimeridian(&self) -> Vec<Rect<Geographic>> {
        let latitude = Span::ordered(self.min_latitude, self.max_latitude);
        let to_rect = |longitude: Span| Rect::from_spans(longitude, latitude);

        match self.longitude_segment().split(LONGITUDE) {
            Split::Whole(longitude) => vec![to_rect(longitude)],
            Split::Wrapped(east, west) => vec![to_rect(east), to_rect(west)],
        }
    }
}
