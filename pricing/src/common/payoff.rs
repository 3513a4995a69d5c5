/// Intrinsic value of a call at expiration: worthless unless the asset trades above the strike.
pub fn call_value(terminal_price: f64, strike: f64) -> f64 {
    (terminal_price - strike).max(0.0)
}

/// Intrinsic value of a put at expiration.
pub fn put_value(terminal_price: f64, strike: f64) -> f64 {
    (strike - terminal_price).max(0.0)
}
