//! Conversion module - amount validation and USD to target currency conversion.

mod conversion_errors;
mod conversion_model;
mod converter;

pub use conversion_errors::{ConversionError, ValidationError};
pub use conversion_model::{ConversionRequest, ConversionResult};
pub use converter::{convert, parse_amount};
