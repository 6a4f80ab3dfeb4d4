//! Property-style trials over the full engine: nullability, bounds, limits,
//! data pools, and cross-field dependencies, exercised through the public API.

use mocksmith_core::generate::translit::transliterate;
use mocksmith_core::schema::field::*;
use mocksmith_core::{Engine, EngineConfig, MocksmithError};
use mocksmith_testutil::{field, flat_int_schema, int_field, nullable_field, user_profile_schema};

fn engine() -> Engine {
    Engine::new(EngineConfig::seeded(42))
}

fn single_field_schema(name: &str, descriptor: FieldDescriptor) -> Schema {
    let mut schema = Schema::new();
    schema.insert(name.to_string(), descriptor);
    schema
}

#[test]
fn non_nullable_fields_are_never_null() {
    let records = engine().generate(&user_profile_schema(), 200).unwrap();
    for record in &records {
        for (name, value) in record {
            assert!(!value.is_null(), "non-nullable field {} was null", name);
        }
    }
}

#[test]
fn numeric_values_respect_declared_bounds() {
    let schema = single_field_schema("age", int_field(-40, 40));
    let records = engine().generate(&schema, 1000).unwrap();
    for record in &records {
        let v = record["age"].as_int().unwrap();
        assert!((-40..=40).contains(&v), "out of bounds: {}", v);
    }
}

#[test]
fn nullable_rate_one_yields_all_null() {
    let schema = single_field_schema("x", nullable_field(FieldKind::Boolean, 1.0));
    let records = engine().generate(&schema, 1000).unwrap();
    let nulls = records.iter().filter(|r| r["x"].is_null()).count();
    assert_eq!(nulls, 1000);
}

#[test]
fn nullable_rate_zero_yields_no_null() {
    let schema = single_field_schema("x", nullable_field(FieldKind::Boolean, 0.0));
    let records = engine().generate(&schema, 1000).unwrap();
    let nulls = records.iter().filter(|r| r["x"].is_null()).count();
    assert_eq!(nulls, 0);
}

#[test]
fn nullable_rate_tracks_binomial_expectation() {
    let rate = 0.3;
    let trials = 1000usize;
    let schema = single_field_schema("x", nullable_field(FieldKind::Boolean, rate));
    let records = engine().generate(&schema, trials).unwrap();
    let nulls = records.iter().filter(|r| r["x"].is_null()).count();

    // Four standard deviations around the expectation: sigma for
    // p=0.3, n=1000 is ~14.5, so the window is roughly 242..358.
    let sigma = (trials as f64 * rate * (1.0 - rate)).sqrt();
    let lo = (trials as f64 * rate - 4.0 * sigma) as usize;
    let hi = (trials as f64 * rate + 4.0 * sigma) as usize;
    assert!(
        (lo..=hi).contains(&nulls),
        "null count {} outside [{}, {}]",
        nulls,
        lo,
        hi
    );
}

#[test]
fn data_pool_arrays_pick_distinct_members() {
    let data: Vec<serde_json::Value> =
        serde_json::from_str(r#"["ruby", "topaz", "opal", "jade", "onyx"]"#).unwrap();
    let schema = single_field_schema(
        "gems",
        field(FieldKind::Array {
            item: None,
            count: None,
            data: Some(data.clone()),
            pick_count: Some(3),
        }),
    );

    let records = engine().generate(&schema, 200).unwrap();
    for record in &records {
        let picked = record["gems"].as_array().unwrap();
        assert_eq!(picked.len(), 3);
        let mut seen = std::collections::HashSet::new();
        for value in picked {
            let s = value.as_str().unwrap();
            assert!(
                data.iter().any(|d| d.as_str() == Some(s)),
                "{} not in pool",
                s
            );
            assert!(seen.insert(s.to_string()), "duplicate pick: {}", s);
        }
    }
}

#[test]
fn data_pool_pick_count_is_capped_at_pool_size() {
    let data: Vec<serde_json::Value> = serde_json::from_str(r#"[1, 2, 3]"#).unwrap();
    let schema = single_field_schema(
        "nums",
        field(FieldKind::Array {
            item: None,
            count: None,
            data: Some(data),
            pick_count: Some(10),
        }),
    );
    let records = engine().generate(&schema, 20).unwrap();
    for record in &records {
        assert_eq!(record["nums"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn field_ceiling_accepts_200_rejects_201() {
    assert!(engine().generate(&flat_int_schema(200), 1).is_ok());

    let err = engine().generate(&flat_int_schema(201), 1).unwrap_err();
    assert!(matches!(err, MocksmithError::FieldLimitExceeded { .. }));
    let msg = format!("{}", err);
    assert!(msg.contains("201"), "{}", msg);
    assert!(msg.contains("200"), "{}", msg);
}

#[test]
fn item_ceiling_accepts_exactly_10000() {
    // Two nested arrays of 100 x 100 primitives: exactly 10,000 items.
    let inner = field(FieldKind::Array {
        item: Some(Box::new(int_field(0, 9))),
        count: Some(100),
        data: None,
        pick_count: None,
    });
    let schema = single_field_schema(
        "matrix",
        field(FieldKind::Array {
            item: Some(Box::new(inner)),
            count: Some(100),
            data: None,
            pick_count: None,
        }),
    );
    let records = engine().generate(&schema, 1).unwrap();
    assert_eq!(records[0]["matrix"].as_array().unwrap().len(), 100);
}

#[test]
fn item_ceiling_rejects_15000_with_both_numbers() {
    // 100 array items x 150 records = 15,000 projected items.
    let schema = single_field_schema(
        "values",
        field(FieldKind::Array {
            item: Some(Box::new(int_field(0, 9))),
            count: Some(100),
            data: None,
            pick_count: None,
        }),
    );
    let err = engine().generate(&schema, 150).unwrap_err();
    assert!(matches!(err, MocksmithError::ItemLimitExceeded { .. }));
    let msg = format!("{}", err);
    assert!(msg.contains("15000"), "{}", msg);
    assert!(msg.contains("10000"), "{}", msg);
}

#[test]
fn based_on_emails_carry_name_tokens() {
    let mut schema = Schema::new();
    schema.insert(
        "name".to_string(),
        field(FieldKind::Name {
            language: None,
            gender: None,
            format: Some(NameFormat::Full),
            triple_name_rate: None,
        }),
    );
    schema.insert(
        "email".to_string(),
        field(FieldKind::Email {
            based_on: Some("name".to_string()),
        }),
    );

    let trials = 40;
    let records = engine().generate(&schema, trials).unwrap();
    let mut matches = 0;
    for record in &records {
        let name = record["name"].as_str().unwrap();
        let email = record["email"].as_str().unwrap();
        let ascii = transliterate(name);
        let carries_token = ascii
            .split(' ')
            .filter(|t| !t.is_empty())
            .any(|token| email.contains(token));
        if carries_token {
            matches += 1;
        }
    }
    // Formatting patterns vary (initial+last, name+digits), so not every
    // email contains a full token, but a substantial minority must.
    assert!(
        matches >= trials / 3,
        "only {} of {} emails carried a name token",
        matches,
        trials
    );
}

#[test]
fn geographic_filter_conflict_is_always_rejected() {
    for kind in [
        FieldKind::City {
            continents: Some(vec!["Europe".to_string()]),
            countries: Some(vec!["France".to_string()]),
            based_on: None,
        },
        FieldKind::Location {
            continents: Some(vec!["Europe".to_string()]),
            countries: Some(vec!["France".to_string()]),
        },
    ] {
        let schema = single_field_schema("place", field(kind));
        let err = engine().generate(&schema, 1).unwrap_err();
        assert!(
            matches!(err, MocksmithError::SchemaValidation { .. }),
            "expected validation error, got {:?}",
            err
        );
    }
}

#[test]
fn batches_are_all_or_nothing() {
    // The city's basedOn seed is a hex hash that can never fuzzy-match a
    // country name, so the first record aborts the whole batch with a
    // generation error instead of returning a partial result.
    let mut schema = Schema::new();
    schema.insert(
        "note".to_string(),
        field(FieldKind::CryptoHash {
            platform: Some(CryptoPlatform::Bitcoin),
            min: None,
            max: None,
        }),
    );
    schema.insert(
        "city".to_string(),
        field(FieldKind::City {
            continents: None,
            countries: None,
            based_on: Some("note".to_string()),
        }),
    );

    let err = engine().generate(&schema, 10).unwrap_err();
    assert!(matches!(err, MocksmithError::Generation { .. }));
    let msg = format!("{}", err);
    assert!(msg.contains("city"), "{}", msg);
}
