/// A closed, non-directional interval on one axis where `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a span from two endpoints in any order
    pub fn ordered(a: f64, b: f64) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn translate(&self, offset: f64) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }
}
