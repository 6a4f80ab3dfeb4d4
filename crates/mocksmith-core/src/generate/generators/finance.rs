//! Financial generators: currency, IBAN, card number, price.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::generate::generators::{borrowed, owned, random_digits};
use crate::generate::value::Value;
use crate::reference::finance::{iban_country, IbanCountry, CURRENCIES, IBAN_COUNTRIES};
use crate::schema::field::CurrencyFormat;

const DEFAULT_PRICE_MIN: f64 = 0.01;
const DEFAULT_PRICE_MAX: f64 = 9_999.99;

pub fn currency(format: Option<CurrencyFormat>, rng: &mut impl Rng) -> Value {
    let currency = CURRENCIES.choose(rng).expect("currency table is non-empty");
    match format.unwrap_or(CurrencyFormat::Code) {
        CurrencyFormat::Code => borrowed(currency.code),
        CurrencyFormat::Name => borrowed(currency.name),
        CurrencyFormat::Symbol => borrowed(currency.symbol),
    }
}

pub fn iban(countries: Option<&[String]>, rng: &mut impl Rng) -> Value {
    let country: &IbanCountry = match countries {
        Some(filter) => {
            let code = filter.choose(rng).expect("validated non-empty filter");
            iban_country(code).expect("validated IBAN country")
        }
        None => IBAN_COUNTRIES.choose(rng).expect("IBAN table is non-empty"),
    };
    let check = rng.random_range(10..=97u8);
    let bban = random_digits(rng, country.length - 4);
    owned(format!("{}{:02}{}", country.code, check, bban))
}

pub fn card_number(rng: &mut impl Rng) -> Value {
    // 16 digits: issuer-looking prefix, random body, Luhn check digit.
    let mut digits: Vec<u8> = Vec::with_capacity(16);
    digits.push(if rng.random_bool(0.5) { 4 } else { 5 });
    for _ in 0..14 {
        digits.push(rng.random_range(0..10u8));
    }
    digits.push(luhn_check_digit(&digits));
    owned(digits.iter().map(|d| char::from(b'0' + d)).collect())
}

pub fn price(min: Option<f64>, max: Option<f64>, rng: &mut impl Rng) -> Value {
    let hi = max.unwrap_or(DEFAULT_PRICE_MAX.max(min.unwrap_or(f64::MIN)));
    let lo = min.unwrap_or(DEFAULT_PRICE_MIN.min(hi));
    let raw: f64 = rng.random_range(lo..=hi);
    Value::Float((raw * 100.0).round() / 100.0)
}

/// Check digit making `payload ++ [digit]` Luhn-valid.
fn luhn_check_digit(payload: &[u8]) -> u8 {
    let mut sum = 0u32;
    for (i, &d) in payload.iter().rev().enumerate() {
        let mut v = d as u32;
        if i % 2 == 0 {
            v *= 2;
            if v > 9 {
                v -= 9;
            }
        }
        sum += v;
    }
    ((10 - (sum % 10)) % 10) as u8
}
