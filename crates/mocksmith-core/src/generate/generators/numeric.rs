//! Numeric and boolean generators.

use rand::Rng;

use crate::config::EngineConfig;
use crate::generate::value::Value;

pub fn integer(
    min: Option<i64>,
    max: Option<i64>,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Value {
    // A lone bound outside the default range must not invert it.
    let hi = max.unwrap_or(config.default_int_max.max(min.unwrap_or(i64::MIN)));
    let lo = min.unwrap_or(config.default_int_min.min(hi));
    Value::Int(rng.random_range(lo..=hi))
}

pub fn float(
    min: Option<f64>,
    max: Option<f64>,
    precision: Option<u32>,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Value {
    let hi = max.unwrap_or(config.default_float_max.max(min.unwrap_or(f64::MIN)));
    let lo = min.unwrap_or(config.default_float_min.min(hi));
    let raw: f64 = rng.random_range(lo..=hi);
    Value::Float(round_to(raw, precision.unwrap_or(config.default_float_precision)))
}

pub fn boolean(rng: &mut impl Rng) -> Value {
    Value::Bool(rng.random_bool(0.5))
}

/// Scale, round, unscale.
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
