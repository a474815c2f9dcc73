use std::borrow::Cow;

/// Provider identifier - mostly static constants
pub type ProviderId = Cow<'static, str>;

/// Currency code as published by the rate source, lowercase (e.g. "eur")
pub type CurrencyCode = String;
