/// Currency every rate is quoted against
pub const BASE_CURRENCY: &str = "usd";

/// Amount pre-filled in the input
pub const DEFAULT_AMOUNT: &str = "1";

/// Minimum fraction digits for displayed amounts and rates
pub const DISPLAY_MIN_FRACTION_DIGITS: u32 = 2;

/// Maximum fraction digits for displayed amounts and rates
pub const DISPLAY_MAX_FRACTION_DIGITS: u32 = 4;

/// Shown when the rate table could not be loaded
pub const RATES_UNAVAILABLE_MESSAGE: &str =
    "Unable to load exchange rates. Please try again shortly.";

/// Shown next to the amount input when it is not a positive number
pub const INVALID_AMOUNT_MESSAGE: &str = "Enter an amount greater than 0.";

/// Shown while the rate table is loading
pub const LOADING_MESSAGE: &str = "Fetching the latest exchange rates…";
