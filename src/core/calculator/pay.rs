//! Conversion of minute totals into payable amounts.

pub fn minutes_to_hours(mins: i64) -> f64 {
    mins as f64 / 60.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Value of `mins` at an hourly `rate`, rounded to cents.
pub fn monetary_value(mins: i64, rate: f64) -> f64 {
    round2(minutes_to_hours(mins) * rate)
}
