mod value_range;
mod vector;

pub use value_range::ValueRange;
pub use vector::{normalized, Vector3};
