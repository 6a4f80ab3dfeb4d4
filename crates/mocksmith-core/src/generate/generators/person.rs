//! Person name and phone generators.

use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::generate::generators::owned;
use crate::generate::value::Value;
use crate::reference::names;
use crate::schema::field::{Gender, Language, NameFormat};

pub fn name(
    language: Option<Language>,
    gender: Option<Gender>,
    format: Option<NameFormat>,
    triple_name_rate: Option<f64>,
    rng: &mut impl Rng,
) -> Value {
    let language = resolve_language(language, rng);
    let pool = names::pool(language).expect("resolved language has a pool");

    let male = match gender {
        Some(Gender::Male) => true,
        Some(Gender::Female) => false,
        Some(Gender::Any) | None => rng.random_bool(0.5),
    };
    let firsts = if male { pool.male } else { pool.female };

    let first = *firsts.choose(rng).expect("first name pool is non-empty");
    let last = *pool.last.choose(rng).expect("last name pool is non-empty");

    match format.unwrap_or(NameFormat::Full) {
        NameFormat::First => owned(first.to_string()),
        NameFormat::Last => owned(last.to_string()),
        NameFormat::Full => {
            let rate = triple_name_rate.unwrap_or(0.0);
            if rate > 0.0 && rng.random_bool(rate) {
                let second = *firsts.choose(rng).expect("first name pool is non-empty");
                owned(format!("{} {} {}", first, second, last))
            } else {
                owned(format!("{} {}", first, last))
            }
        }
    }
}

pub fn phone(rng: &mut impl Rng) -> Value {
    let number: String = PhoneNumber().fake_with_rng(rng);
    owned(number)
}

fn resolve_language(language: Option<Language>, rng: &mut impl Rng) -> Language {
    match language {
        None | Some(Language::Any) => names::random_language(rng),
        Some(lang) => lang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_has_two_tokens_without_triple_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = name(Some(Language::En), None, Some(NameFormat::Full), None, &mut rng);
            let tokens = value.as_str().unwrap().split(' ').count();
            assert_eq!(tokens, 2);
        }
    }

    #[test]
    fn test_triple_rate_one_always_yields_three_tokens() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = name(
                Some(Language::En),
                None,
                Some(NameFormat::Full),
                Some(1.0),
                &mut rng,
            );
            let tokens = value.as_str().unwrap().split(' ').count();
            assert_eq!(tokens, 3);
        }
    }

    #[test]
    fn test_first_format_picks_from_gendered_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = names::pool(Language::En).unwrap();
        for _ in 0..50 {
            let value = name(
                Some(Language::En),
                Some(Gender::Female),
                Some(NameFormat::First),
                None,
                &mut rng,
            );
            let first = value.as_str().unwrap();
            assert!(pool.female.contains(&first), "unexpected name: {}", first);
        }
    }

    #[test]
    fn test_last_format_is_a_single_surname() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = names::pool(Language::De).unwrap();
        let value = name(Some(Language::De), None, Some(NameFormat::Last), None, &mut rng);
        assert!(pool.last.contains(&value.as_str().unwrap()));
    }

    #[test]
    fn test_phone_is_non_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!phone(&mut rng).as_str().unwrap().is_empty());
    }
}
