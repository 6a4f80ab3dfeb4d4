//! # Field Descriptor Model
//!
//! A schema is an ordered map from field name to [`FieldDescriptor`]. Each
//! descriptor pairs the shared nullability attributes with a [`FieldKind`],
//! the tagged union over every supported `dataType`. `object` and `array`
//! embed further descriptors, so a schema is a tree of unbounded depth
//! (bounded in practice by the limit validator).
//!
//! The wire format is JSON with a `dataType` discriminant and camelCase
//! parameter names:
//!
//! ```json
//! {
//!   "name":  { "dataType": "name", "language": "ru" },
//!   "email": { "dataType": "email", "basedOn": "name", "nullable": true },
//!   "tags":  { "dataType": "array", "item": { "dataType": "string" }, "count": 4 }
//! }
//! ```

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A generation blueprint: field name to descriptor, in declaration order.
///
/// Declaration order matters: `basedOn` references can only see fields that
/// were generated earlier in the same scope.
pub type Schema = IndexMap<String, FieldDescriptor>;

/// One schema tree node: a data type, its parameters, and nullability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(flatten)]
    pub kind: FieldKind,
    /// When true, generation may yield null instead of a typed value.
    #[serde(default)]
    pub nullable: bool,
    /// Probability of null for a nullable field. Falls back to the engine's
    /// configured default (0.1) when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable_rate: Option<f64>,
}

impl FieldDescriptor {
    /// Non-nullable descriptor for the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            nullable: false,
            nullable_rate: None,
        }
    }

    /// Nullable descriptor with an explicit rate.
    pub fn nullable(kind: FieldKind, rate: f64) -> Self {
        Self {
            kind,
            nullable: true,
            nullable_rate: Some(rate),
        }
    }
}

/// The `dataType` tagged union. One variant per supported type; composite
/// variants (`Object`, `Array`) recurse into further descriptors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldKind {
    // === Numeric ===
    Int {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Float {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        /// Decimal places to round to.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        precision: Option<u32>,
    },
    Boolean,

    // === Text ===
    String {
        #[serde(default)]
        kind: StringKind,
        /// Word-count bounds, only meaningful for `kind = "word"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
        /// Paragraph count, only allowed for `kind = "paragraph"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paragraphs: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<Language>,
    },

    // === Person / contact ===
    Name {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<Language>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gender: Option<Gender>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<NameFormat>,
        /// Probability of a doubled first name, only for `format = "full"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        triple_name_rate: Option<f64>,
    },
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        based_on: Option<String>,
    },
    Username {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        based_on: Option<String>,
    },
    Phone,
    Password {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },

    // === Internet ===
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        based_on: Option<String>,
    },
    Ipv4,
    Ipv6,
    Mac,
    UserAgent,

    // === Identifiers / misc ===
    Uuid,
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<NaiveDate>,
    },
    Color {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<ColorFormat>,
    },

    // === Financial ===
    Currency {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<CurrencyFormat>,
    },
    Iban {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        countries: Option<Vec<String>>,
    },
    CardNumber,
    Price {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },

    // === Geographic ===
    Country {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        continents: Option<Vec<String>>,
    },
    Continent,
    City {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        continents: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        countries: Option<Vec<String>>,
        /// Name of an earlier field whose value narrows the country pool.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        based_on: Option<String>,
    },
    Location {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        continents: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        countries: Option<Vec<String>>,
    },

    // === Crypto ===
    CryptoAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<CryptoPlatform>,
        /// Explicit hex length range; overrides the platform format.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    CryptoHash {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<CryptoPlatform>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },

    // === Media / files ===
    Avatar,
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
    },
    FileName {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        based_on: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extensions: Option<Vec<String>>,
    },
    FilePath,
    MimeType,

    // === Composite ===
    Object {
        fields: Schema,
    },
    Array {
        /// Item descriptor, repeated `count` times. Heap indirection keeps
        /// the recursive type finite.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<Box<FieldDescriptor>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<usize>,
        /// Literal pool to sample from instead of an item descriptor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Vec<serde_json::Value>>,
        /// How many distinct pool elements to pick; required with `data`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pick_count: Option<usize>,
    },
}

impl FieldKind {
    /// The wire-format tag, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Int { .. } => "int",
            FieldKind::Float { .. } => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::String { .. } => "string",
            FieldKind::Name { .. } => "name",
            FieldKind::Email { .. } => "email",
            FieldKind::Username { .. } => "username",
            FieldKind::Phone => "phone",
            FieldKind::Password { .. } => "password",
            FieldKind::Url { .. } => "url",
            FieldKind::Ipv4 => "ipv4",
            FieldKind::Ipv6 => "ipv6",
            FieldKind::Mac => "mac",
            FieldKind::UserAgent => "userAgent",
            FieldKind::Uuid => "uuid",
            FieldKind::Date { .. } => "date",
            FieldKind::Color { .. } => "color",
            FieldKind::Currency { .. } => "currency",
            FieldKind::Iban { .. } => "iban",
            FieldKind::CardNumber => "cardNumber",
            FieldKind::Price { .. } => "price",
            FieldKind::Country { .. } => "country",
            FieldKind::Continent => "continent",
            FieldKind::City { .. } => "city",
            FieldKind::Location { .. } => "location",
            FieldKind::CryptoAddress { .. } => "cryptoAddress",
            FieldKind::CryptoHash { .. } => "cryptoHash",
            FieldKind::Avatar => "avatar",
            FieldKind::Image { .. } => "image",
            FieldKind::FileName { .. } => "fileName",
            FieldKind::FilePath => "filePath",
            FieldKind::MimeType => "mimeType",
            FieldKind::Object { .. } => "object",
            FieldKind::Array { .. } => "array",
        }
    }
}

/// How a `string` field composes its text.
///
/// Sentences and paragraphs are drawn from curated per-language banks rather
/// than composed word-by-word, so non-English output stays grammatical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringKind {
    #[default]
    Word,
    Sentence,
    Paragraph,
}

/// Languages with bundled reference data. `Any` resolves to a uniformly
/// random supported language at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Any,
    En,
    De,
    Ru,
    Tr,
    Zh,
}

impl Language {
    /// The wire-format code, for error messages.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Any => "any",
            Language::En => "en",
            Language::De => "de",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Zh => "zh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Any,
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFormat {
    Full,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyFormat {
    Code,
    Name,
    Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoPlatform {
    Bitcoin,
    Ethereum,
    Litecoin,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> FieldDescriptor {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decode_int_with_defaults() {
        let field = decode(r#"{ "dataType": "int" }"#);
        assert!(!field.nullable);
        assert!(field.nullable_rate.is_none());
        assert!(matches!(
            field.kind,
            FieldKind::Int {
                min: None,
                max: None
            }
        ));
    }

    #[test]
    fn test_decode_nullable_rate() {
        let field = decode(r#"{ "dataType": "boolean", "nullable": true, "nullableRate": 0.25 }"#);
        assert!(field.nullable);
        assert_eq!(field.nullable_rate, Some(0.25));
    }

    #[test]
    fn test_decode_name_parameters() {
        let field = decode(
            r#"{ "dataType": "name", "language": "ru", "gender": "female",
                 "format": "full", "tripleNameRate": 0.3 }"#,
        );
        match field.kind {
            FieldKind::Name {
                language,
                gender,
                format,
                triple_name_rate,
            } => {
                assert_eq!(language, Some(Language::Ru));
                assert_eq!(gender, Some(Gender::Female));
                assert_eq!(format, Some(NameFormat::Full));
                assert_eq!(triple_name_rate, Some(0.3));
            }
            other => panic!("expected name, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_nested_object_and_array() {
        let field = decode(
            r#"{
                "dataType": "object",
                "fields": {
                    "id": { "dataType": "uuid" },
                    "tags": {
                        "dataType": "array",
                        "item": { "dataType": "string" },
                        "count": 4
                    }
                }
            }"#,
        );
        let FieldKind::Object { fields } = &field.kind else {
            panic!("expected object");
        };
        assert_eq!(fields.len(), 2);
        // Declaration order must survive decoding: basedOn depends on it.
        let names: Vec<&str> = fields.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["id", "tags"]);

        let FieldKind::Array { item, count, .. } = &fields["tags"].kind else {
            panic!("expected array");
        };
        assert_eq!(*count, Some(4));
        assert!(matches!(
            item.as_deref().unwrap().kind,
            FieldKind::String { .. }
        ));
    }

    #[test]
    fn test_decode_array_data_pool() {
        let field = decode(
            r#"{ "dataType": "array", "data": ["red", "green", 3, true], "pickCount": 2 }"#,
        );
        let FieldKind::Array {
            item,
            data,
            pick_count,
            ..
        } = &field.kind
        else {
            panic!("expected array");
        };
        assert!(item.is_none());
        assert_eq!(data.as_ref().unwrap().len(), 4);
        assert_eq!(*pick_count, Some(2));
    }

    #[test]
    fn test_decode_unknown_data_type_rejected() {
        let result: std::result::Result<FieldDescriptor, _> =
            serde_json::from_str(r#"{ "dataType": "quaternion" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_missing_data_type_rejected() {
        let result: std::result::Result<FieldDescriptor, _> =
            serde_json::from_str(r#"{ "min": 1, "max": 5 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_preserves_camel_case_keys() {
        let field = decode(r#"{ "dataType": "email", "basedOn": "name" }"#);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["dataType"], "email");
        assert_eq!(json["basedOn"], "name");
    }

    #[test]
    fn test_schema_decodes_in_declaration_order() {
        let schema: Schema = serde_json::from_str(
            r#"{
                "name": { "dataType": "name" },
                "email": { "dataType": "email", "basedOn": "name" },
                "age": { "dataType": "int", "min": 18, "max": 90 }
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = schema.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "age"]);
    }
}
