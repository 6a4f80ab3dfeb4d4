//! Internet-facing generators: email, username, url, password, and the
//! address-shaped types delegated to `fake`.
//!
//! Email, username, and url share the same seeding rule: when `basedOn` names
//! a context field holding a non-empty string, its transliterated tokens
//! become the first/last parts of the handle; otherwise a random name pair is
//! used. The reference being missing is allowed (generation falls back), but
//! it is logged so schema authors can spot dead references.

use fake::faker::internet::en::{IPv4, IPv6, MACAddress, UserAgent};
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

use crate::generate::context::GenerationContext;
use crate::generate::generators::{owned, random_digits};
use crate::generate::translit::transliterate;
use crate::generate::value::Value;
use crate::reference::internet::{EMAIL_DOMAINS, URL_PLATFORMS};
use crate::reference::names;
use crate::schema::field::Language;

const DEFAULT_PASSWORD_MIN: usize = 12;
const DEFAULT_PASSWORD_MAX: usize = 24;

/// First/last ASCII tokens seeding a handle.
pub(crate) struct SeedTokens {
    pub first: String,
    pub last: String,
}

/// Resolve `basedOn` into handle tokens, falling back to a random name pair.
pub(crate) fn seed_tokens(
    based_on: Option<&str>,
    ctx: &GenerationContext,
    rng: &mut impl Rng,
) -> SeedTokens {
    if let Some(reference) = based_on {
        match ctx.seed_str(reference) {
            Some(seed) => {
                let ascii = transliterate(seed);
                let tokens: Vec<&str> = ascii.split(' ').filter(|t| !t.is_empty()).collect();
                match tokens.as_slice() {
                    [] => {
                        warn!(
                            reference,
                            "basedOn value transliterated to nothing; generating independently"
                        );
                    }
                    [only] => {
                        return SeedTokens {
                            first: (*only).to_string(),
                            last: random_last(rng),
                        };
                    }
                    [first, .., last] => {
                        return SeedTokens {
                            first: (*first).to_string(),
                            last: (*last).to_string(),
                        };
                    }
                }
            }
            None => {
                warn!(
                    reference,
                    "basedOn reference not generated yet or not a string; generating independently"
                );
            }
        }
    }
    SeedTokens {
        first: random_first(rng),
        last: random_last(rng),
    }
}

/// Uniform pick among the fixed handle patterns.
fn handle(tokens: &SeedTokens, rng: &mut impl Rng) -> String {
    let SeedTokens { first, last } = tokens;
    match rng.random_range(0..5u8) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}_{}", first, last),
        2 => format!("{}{}", first, last),
        3 => {
            let initial = first.chars().next().unwrap_or('x');
            format!("{}{}", initial, last)
        }
        _ => {
            let count = rng.random_range(2..=4);
            let digits = random_digits(rng, count);
            format!("{}{}", first, digits)
        }
    }
}

pub fn email(based_on: Option<&str>, ctx: &GenerationContext, rng: &mut impl Rng) -> Value {
    let tokens = seed_tokens(based_on, ctx, rng);
    let domain = EMAIL_DOMAINS.choose(rng).expect("domain table is non-empty");
    owned(format!("{}@{}", handle(&tokens, rng), domain))
}

pub fn username(based_on: Option<&str>, ctx: &GenerationContext, rng: &mut impl Rng) -> Value {
    let tokens = seed_tokens(based_on, ctx, rng);
    owned(handle(&tokens, rng))
}

pub fn url(based_on: Option<&str>, ctx: &GenerationContext, rng: &mut impl Rng) -> Value {
    let tokens = seed_tokens(based_on, ctx, rng);
    let platform = URL_PLATFORMS
        .choose(rng)
        .expect("platform table is non-empty");
    owned(format!("{}{}", platform, handle(&tokens, rng)))
}

pub fn password(min: Option<usize>, max: Option<usize>, rng: &mut impl Rng) -> Value {
    const CHARS: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*-_";
    let hi = max.unwrap_or(DEFAULT_PASSWORD_MAX.max(min.unwrap_or(0)));
    let lo = min.unwrap_or(DEFAULT_PASSWORD_MIN.min(hi));
    let len = rng.random_range(lo..=hi);
    let password: String = (0..len)
        .map(|_| CHARS[rng.random_range(0..CHARS.len())] as char)
        .collect();
    owned(password)
}

pub fn ipv4(rng: &mut impl Rng) -> Value {
    let address: String = IPv4().fake_with_rng(rng);
    owned(address)
}

pub fn ipv6(rng: &mut impl Rng) -> Value {
    let address: String = IPv6().fake_with_rng(rng);
    owned(address)
}

pub fn mac(rng: &mut impl Rng) -> Value {
    let address: String = MACAddress().fake_with_rng(rng);
    owned(address)
}

pub fn user_agent(rng: &mut impl Rng) -> Value {
    let agent: String = UserAgent().fake_with_rng(rng);
    owned(agent)
}

fn random_first(rng: &mut impl Rng) -> String {
    let pool = names::pool(Language::En).expect("en pool exists");
    let firsts = if rng.random_bool(0.5) {
        pool.male
    } else {
        pool.female
    };
    firsts
        .choose(rng)
        .expect("first name pool is non-empty")
        .to_lowercase()
}

fn random_last(rng: &mut impl Rng) -> String {
    names::pool(Language::En)
        .expect("en pool exists")
        .last
        .choose(rng)
        .expect("last name pool is non-empty")
        .to_lowercase()
}
