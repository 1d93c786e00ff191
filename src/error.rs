use crate::{domain::Axis, span::Span};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no segments were provided for the {axis} axis")]
    EmptyAxis { axis: Axis },
    #[error("coordinate list must hold x/y pairs, got {len} values")]
    InvalidInput { len: usize },
    #[error("cyclic domain {0:?} must have a finite, positive width")]
    InvalidDomain(Span),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
