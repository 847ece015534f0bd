mod cents;
mod helpers;

pub use cents::{Cents, CentsConversionError};
pub use helpers::parse_boolean_flag;
