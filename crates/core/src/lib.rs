//! usdconv Core - the USD conversion view, independent of any UI toolkit.
//!
//! - [`conversion`]: amount parsing, validation and the pure convert step
//! - [`view`]: the view state machine, rate loading with cancellation, and
//!   rendering into a [`view::Screen`]
//! - [`settings`]: per-view settings such as the preferred currency

pub mod constants;
pub mod conversion;
pub mod errors;
pub mod settings;
pub mod view;

pub use conversion::{convert, parse_amount, ConversionError, ConversionRequest, ConversionResult};
pub use settings::ViewSettings;
pub use view::{render, FetchState, RateConversionView, Screen, SubmitOutcome, ViewState};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
