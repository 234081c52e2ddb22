//! Core domain types.

mod curve;
mod date;
mod tenor;

pub use curve::{CurveBatch, CurveRow};
pub use date::Date;
pub use tenor::{Tenor, TenorUnit};
