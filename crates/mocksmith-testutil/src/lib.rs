use mocksmith_core::schema::field::*;

/// Non-nullable descriptor for the given kind.
pub fn field(kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor::new(kind)
}

/// Nullable descriptor with an explicit rate.
pub fn nullable_field(kind: FieldKind, rate: f64) -> FieldDescriptor {
    FieldDescriptor::nullable(kind, rate)
}

pub fn int_field(min: i64, max: i64) -> FieldDescriptor {
    field(FieldKind::Int {
        min: Some(min),
        max: Some(max),
    })
}

/// Flat schema with `n` int fields, for limit-boundary tests.
pub fn flat_int_schema(n: usize) -> Schema {
    let mut schema = Schema::new();
    for i in 0..n {
        schema.insert(format!("field_{}", i), int_field(0, 100));
    }
    schema
}

/// A realistic profile schema exercising cross-field dependencies:
/// the email derives from the name, the city from the country.
pub fn user_profile_schema() -> Schema {
    let mut address = Schema::new();
    address.insert(
        "country".to_string(),
        field(FieldKind::Country { continents: None }),
    );
    address.insert(
        "city".to_string(),
        field(FieldKind::City {
            continents: None,
            countries: None,
            based_on: Some("country".to_string()),
        }),
    );

    let mut schema = Schema::new();
    schema.insert("id".to_string(), field(FieldKind::Uuid));
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
    schema.insert("age".to_string(), int_field(18, 90));
    schema.insert(
        "address".to_string(),
        field(FieldKind::Object { fields: address }),
    );
    schema.insert(
        "tags".to_string(),
        field(FieldKind::Array {
            item: Some(Box::new(field(FieldKind::String {
                kind: StringKind::Word,
                min: None,
                max: None,
                paragraphs: None,
                language: Some(Language::En),
            }))),
            count: Some(3),
            data: None,
            pick_count: None,
        }),
    );
    schema
}

/// One field from each generator family, for benches and smoke tests.
pub fn mixed_type_schema() -> Schema {
    let mut schema = Schema::new();
    schema.insert("id".to_string(), field(FieldKind::Uuid));
    schema.insert("age".to_string(), int_field(18, 90));
    schema.insert(
        "score".to_string(),
        field(FieldKind::Float {
            min: Some(0.0),
            max: Some(1.0),
            precision: Some(3),
        }),
    );
    schema.insert("active".to_string(), field(FieldKind::Boolean));
    schema.insert(
        "bio".to_string(),
        field(FieldKind::String {
            kind: StringKind::Sentence,
            min: None,
            max: None,
            paragraphs: None,
            language: None,
        }),
    );
    schema.insert(
        "name".to_string(),
        field(FieldKind::Name {
            language: None,
            gender: None,
            format: None,
            triple_name_rate: None,
        }),
    );
    schema.insert(
        "email".to_string(),
        field(FieldKind::Email {
            based_on: Some("name".to_string()),
        }),
    );
    schema.insert(
        "website".to_string(),
        field(FieldKind::Url {
            based_on: Some("name".to_string()),
        }),
    );
    schema.insert("ip".to_string(), field(FieldKind::Ipv4));
    schema.insert(
        "balance".to_string(),
        field(FieldKind::Price {
            min: None,
            max: None,
        }),
    );
    schema.insert("currency".to_string(), field(FieldKind::Currency { format: None }));
    schema.insert(
        "wallet".to_string(),
        field(FieldKind::CryptoAddress {
            platform: Some(CryptoPlatform::Ethereum),
            min: None,
            max: None,
        }),
    );
    schema.insert(
        "location".to_string(),
        field(FieldKind::Location {
            continents: None,
            countries: None,
        }),
    );
    schema.insert("avatar".to_string(), field(FieldKind::Avatar));
    schema.insert(
        "attachment".to_string(),
        field(FieldKind::FileName {
            based_on: None,
            extensions: None,
        }),
    );
    schema.insert(
        "joined".to_string(),
        field(FieldKind::Date {
            from: None,
            to: None,
        }),
    );
    schema
}
