//! Identifier and odds-and-ends generators: uuid, date, color.

use chrono::{Duration, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::generate::generators::owned;
use crate::generate::value::Value;
use crate::schema::field::ColorFormat;

static COLOR_NAMES: &[&str] = &[
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "black", "white", "gray",
    "brown", "cyan", "magenta", "teal", "navy", "olive",
];

pub fn uuid(rng: &mut impl Rng) -> Value {
    // Built from the engine's RNG rather than uuid's own entropy source,
    // so seeded runs stay reproducible.
    let bytes: [u8; 16] = rng.random();
    owned(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
}

pub fn date(from: Option<NaiveDate>, to: Option<NaiveDate>, rng: &mut impl Rng) -> Value {
    let hi = to.unwrap_or_else(|| default_to().max(from.unwrap_or_else(default_from)));
    let lo = from.unwrap_or_else(|| default_from().min(hi));
    let span = (hi - lo).num_days();
    let offset = rng.random_range(0..=span);
    owned((lo + Duration::days(offset)).format("%Y-%m-%d").to_string())
}

pub fn color(format: Option<ColorFormat>, rng: &mut impl Rng) -> Value {
    match format.unwrap_or(ColorFormat::Hex) {
        ColorFormat::Hex => owned(format!(
            "#{:02x}{:02x}{:02x}",
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8)
        )),
        ColorFormat::Rgb => owned(format!(
            "rgb({}, {}, {})",
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8),
            rng.random_range(0..=255u8)
        )),
        ColorFormat::Name => Value::String(std::borrow::Cow::Borrowed(
            *COLOR_NAMES.choose(rng).expect("color table is non-empty"),
        )),
    }
}

fn default_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid constant date")
}

fn default_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 12, 31).expect("valid constant date")
}
