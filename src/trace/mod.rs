//! Reference traces.
//!
//! - [`ReferenceString`] - Parsed, immutable page access sequence

mod reference_string;

pub use reference_string::ReferenceString;
