//! # SLE Module
//!
//! Systems of linear equations over GF(2): packed rows, the elimination solver, and lazy
//! enumeration of a solution space.

pub mod bitrow;
pub mod gf2;
pub mod span;

pub use bitrow::BitRow;
pub use gf2::{Gf2Matrix, Gf2Solution};
pub use span::Span;
