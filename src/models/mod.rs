pub mod enums;
pub mod records;

pub use enums::*;
pub use records::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
