use std::{fmt, marker::PhantomData};

use glam::{dvec2, DVec2};

use crate::span::Span;

/// Screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel;

/// Projected map space, e.g. web mercator world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct World;

/// Longitude and latitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geographic;

/// An axis aligned rectangle tagged with the coordinate space `U` it lives in.
///
/// `top` is the edge with the smaller y coordinate.
pub struct Rect<U> {
    pub origin: DVec2,
    pub dimension: DVec2,
    unit: PhantomData<U>,
}

// Implemented by hand so the unit tag needs no bounds
impl<U> Clone for Rect<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Rect<U> {}

impl<U> PartialEq for Rect<U> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.dimension == other.dimension
    }
}

impl<U> fmt::Debug for Rect<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rect")
            .field("origin", &self.origin)
            .field("dimension", &self.dimension)
            .finish()
    }
}

impl<U> Rect<U> {
    pub fn new(origin: DVec2, dimension: DVec2) -> Self {
        Self {
            origin,
            dimension,
            unit: PhantomData,
        }
    }

    pub fn xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(dvec2(x, y), dvec2(width, height))
    }

    pub fn from_spans(x: Span, y: Span) -> Self {
        Self::xywh(x.min, y.min, x.length(), y.length())
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.dimension.x
    }

    pub fn top(&self) -> f64 {
        self.origin.y
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.dimension.y
    }

    pub fn width(&self) -> f64 {
        self.dimension.x
    }

    pub fn height(&self) -> f64 {
        self.dimension.y
    }

    pub fn x_span(&self) -> Span {
        Span::ordered(self.left(), self.right())
    }

    pub fn y_span(&self) -> Span {
        Span::ordered(self.top(), self.bottom())
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.dimension / 2.0
    }
}
