//! Rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait the conversion view fetches through
//! - The Currency API implementation backed by the jsDelivr CDN

mod traits;

pub mod currency_api;

pub use traits::RateProvider;
