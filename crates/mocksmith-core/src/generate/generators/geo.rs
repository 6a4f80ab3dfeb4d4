//! Geographic generators: country, continent, city, location.
//!
//! All four draw from the same static country table. `continents` and
//! `countries` filters (mutually exclusive, enforced by validation) restrict
//! the candidate pool; a `city` field can additionally narrow to the country
//! fuzzy-matched from a `basedOn` value. A filter combination that leaves no
//! candidates is a generation error carrying the field path.

use indexmap::IndexMap;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

use crate::error::{MocksmithError, Result};
use crate::generate::context::GenerationContext;
use crate::generate::generators::borrowed;
use crate::generate::value::Value;
use crate::reference::geo::{Country, CONTINENTS, COUNTRIES};

pub fn continent(rng: &mut impl Rng) -> Value {
    borrowed(*CONTINENTS.choose(rng).expect("continent table is non-empty"))
}

pub fn country(path: &str, continents: Option<&[String]>, rng: &mut impl Rng) -> Result<Value> {
    let pool = filtered(continents, None);
    let country = pick(path, &pool, rng)?;
    Ok(borrowed(country.name))
}

pub fn city(
    path: &str,
    continents: Option<&[String]>,
    countries: Option<&[String]>,
    based_on: Option<&str>,
    ctx: &GenerationContext,
    rng: &mut impl Rng,
) -> Result<Value> {
    let mut pool = filtered(continents, countries);

    if let Some(reference) = based_on {
        match ctx.seed_str(reference) {
            Some(seed) => {
                pool.retain(|c| fuzzy_match(c.name, seed));
                if pool.is_empty() {
                    return Err(MocksmithError::generation(
                        path,
                        format!("no country in the reference table matches '{}'", seed),
                    ));
                }
            }
            None => {
                warn!(
                    reference,
                    "basedOn reference not generated yet or not a string; ignoring it"
                );
            }
        }
    }

    let country = pick(path, &pool, rng)?;
    Ok(borrowed(
        *country.cities.choose(rng).expect("every country has cities"),
    ))
}

pub fn location(
    path: &str,
    continents: Option<&[String]>,
    countries: Option<&[String]>,
    rng: &mut impl Rng,
) -> Result<Value> {
    let pool = filtered(continents, countries);
    let country = pick(path, &pool, rng)?;
    let city = *country.cities.choose(rng).expect("every country has cities");

    let mut object = IndexMap::new();
    object.insert("city".to_string(), borrowed(city));
    object.insert("country".to_string(), borrowed(country.name));
    object.insert("continent".to_string(), borrowed(country.continent));
    Ok(Value::Object(object))
}

/// Candidate countries under a `continents` xor `countries` filter.
fn filtered(
    continents: Option<&[String]>,
    countries: Option<&[String]>,
) -> Vec<&'static Country> {
    COUNTRIES
        .iter()
        .filter(|c| match (continents, countries) {
            (Some(continents), _) => continents
                .iter()
                .any(|f| f.eq_ignore_ascii_case(c.continent)),
            (_, Some(countries)) => countries.iter().any(|f| f.eq_ignore_ascii_case(c.name)),
            (None, None) => true,
        })
        .collect()
}

fn pick<'a>(
    path: &str,
    pool: &[&'a Country],
    rng: &mut impl Rng,
) -> Result<&'a Country> {
    pool.choose(rng).copied().ok_or_else(|| {
        MocksmithError::generation(path, "geographic filters left no candidate countries")
    })
}

/// Case-insensitive containment in either direction, so "Germany", "germany",
/// and a generated "Germany" location string all land on the same row.
fn fuzzy_match(country_name: &str, seed: &str) -> bool {
    let country = country_name.to_lowercase();
    let seed = seed.to_lowercase();
    country.contains(&seed) || seed.contains(&country)
}
