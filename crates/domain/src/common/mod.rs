//! Small shared helpers used across the domain layer.

mod numeric;
mod string;

pub use numeric::round2;
pub use string::is_blank;
