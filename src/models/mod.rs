pub mod field;
pub mod sample;

pub use field::{Field, FieldValue, UNAVAILABLE};
pub use sample::{Sample, TIMESTAMP_FORMAT};
