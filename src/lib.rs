//! Minimal bounding boxes for map geometry where an axis may wrap around, such as longitude at
//! the antimeridian.

pub mod adapters;
pub mod calculator;
pub mod coverage;
pub mod domain;
pub mod error;
pub mod geo;
pub mod rect;
pub mod segment;
pub mod span;

pub use calculator::BoundingBoxCalculator;
pub use domain::{Axis, Domain};
pub use error::{Error, Result};
pub use geo::GeoRect;
pub use rect::{Geographic, Pixel, Rect, World};
pub use segment::{Segment, Split};
pub use span::Span;
