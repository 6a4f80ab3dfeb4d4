//! # Structural Schema Validation
//!
//! Walks a decoded schema and rejects, with a path-qualified error, any node
//! whose parameters violate its type's rules. Runs entirely before generation:
//! a request that fails here never produces a single value.

use crate::error::{MocksmithError, Result};
use crate::reference::{finance, geo, lorem};
use crate::schema::field::{
    FieldDescriptor, FieldKind, Language, NameFormat, Schema, StringKind,
};

/// Validate every field in the schema, depth-first.
pub fn validate_schema(schema: &Schema) -> Result<()> {
    for (name, field) in schema {
        validate_field(name, field)?;
    }
    Ok(())
}

fn validate_field(path: &str, field: &FieldDescriptor) -> Result<()> {
    if let Some(rate) = field.nullable_rate {
        if !(0.0..=1.0).contains(&rate) {
            return Err(MocksmithError::validation(
                path,
                format!("nullableRate must be between 0.0 and 1.0, got {}", rate),
            ));
        }
    }

    match &field.kind {
        FieldKind::Int { min, max } => ordered(path, *min, *max)?,
        FieldKind::Float { min, max, .. } => ordered(path, *min, *max)?,
        FieldKind::Boolean
        | FieldKind::Phone
        | FieldKind::Ipv4
        | FieldKind::Ipv6
        | FieldKind::Mac
        | FieldKind::UserAgent
        | FieldKind::Uuid
        | FieldKind::CardNumber
        | FieldKind::Continent
        | FieldKind::Avatar
        | FieldKind::FilePath
        | FieldKind::MimeType
        | FieldKind::Color { .. }
        | FieldKind::Currency { .. }
        | FieldKind::Email { .. }
        | FieldKind::Username { .. }
        | FieldKind::Url { .. } => {}

        FieldKind::String {
            kind,
            min,
            max,
            paragraphs,
            language,
        } => {
            ordered(path, *min, *max)?;
            at_least_one(path, "min", *min)?;
            at_least_one(path, "max", *max)?;
            if paragraphs.is_some() && *kind != StringKind::Paragraph {
                return Err(MocksmithError::validation(
                    path,
                    "paragraphs is only valid when kind is \"paragraph\"",
                ));
            }
            at_least_one(path, "paragraphs", *paragraphs)?;
            if let Some(lang) = language {
                if *lang != Language::Any && !lorem::supported(*lang) {
                    return Err(MocksmithError::validation(
                        path,
                        format!("no lexicon for language '{}'", lang.code()),
                    ));
                }
            }
        }

        FieldKind::Name {
            format,
            triple_name_rate,
            ..
        } => {
            if let Some(rate) = triple_name_rate {
                if !(0.0..=1.0).contains(rate) {
                    return Err(MocksmithError::validation(
                        path,
                        format!("tripleNameRate must be between 0.0 and 1.0, got {}", rate),
                    ));
                }
                if matches!(format, Some(NameFormat::First) | Some(NameFormat::Last)) {
                    return Err(MocksmithError::validation(
                        path,
                        "tripleNameRate is only valid when format is \"full\"",
                    ));
                }
            }
        }

        FieldKind::Password { min, max } => {
            ordered(path, *min, *max)?;
            at_least_one(path, "min", *min)?;
            at_least_one(path, "max", *max)?;
        }

        FieldKind::Date { from, to } => ordered(path, *from, *to)?,

        FieldKind::Iban { countries } => {
            if let Some(countries) = countries {
                non_empty_list(path, "countries", countries)?;
                for code in countries {
                    if finance::iban_country(code).is_none() {
                        return Err(MocksmithError::validation(
                            path,
                            format!("unknown IBAN country '{}'", code),
                        ));
                    }
                }
            }
        }

        FieldKind::Price { min, max } => ordered(path, *min, *max)?,

        FieldKind::Country { continents } => {
            check_continents(path, continents.as_deref())?;
        }

        FieldKind::City {
            continents,
            countries,
            ..
        }
        | FieldKind::Location {
            continents,
            countries,
        } => {
            if continents.is_some() && countries.is_some() {
                return Err(MocksmithError::validation(
                    path,
                    "continents and countries are mutually exclusive",
                ));
            }
            check_continents(path, continents.as_deref())?;
            check_countries(path, countries.as_deref())?;
        }

        FieldKind::CryptoAddress { min, max, .. } | FieldKind::CryptoHash { min, max, .. } => {
            ordered(path, *min, *max)?;
            at_least_one(path, "min", *min)?;
            at_least_one(path, "max", *max)?;
        }

        FieldKind::Image { width, height } => {
            at_least_one(path, "width", width.map(|w| w as usize))?;
            at_least_one(path, "height", height.map(|h| h as usize))?;
        }

        FieldKind::FileName { extensions, .. } => {
            if let Some(extensions) = extensions {
                non_empty_list(path, "extensions", extensions)?;
                if extensions.iter().any(|e| e.is_empty()) {
                    return Err(MocksmithError::validation(
                        path,
                        "extensions must not contain empty strings",
                    ));
                }
            }
        }

        FieldKind::Object { fields } => {
            for (name, child) in fields {
                validate_field(&format!("{}.{}", path, name), child)?;
            }
        }

        FieldKind::Array {
            item,
            count,
            data,
            pick_count,
        } => {
            validate_array(path, item.as_deref(), *count, data.as_deref(), *pick_count)?;
        }
    }

    Ok(())
}

fn validate_array(
    path: &str,
    item: Option<&FieldDescriptor>,
    count: Option<usize>,
    data: Option<&[serde_json::Value]>,
    pick_count: Option<usize>,
) -> Result<()> {
    match (item, data) {
        (Some(_), Some(_)) => {
            return Err(MocksmithError::validation(
                path,
                "item and data are mutually exclusive",
            ));
        }
        (None, None) => {
            return Err(MocksmithError::validation(
                path,
                "array requires either an item descriptor or a data pool",
            ));
        }
        (Some(item), None) => {
            if pick_count.is_some() {
                return Err(MocksmithError::validation(
                    path,
                    "pickCount is only valid with a data pool",
                ));
            }
            at_least_one(path, "count", count)?;
            validate_field(&format!("{}[]", path), item)?;
        }
        (None, Some(data)) => {
            if count.is_some() {
                return Err(MocksmithError::validation(
                    path,
                    "count is only valid with an item descriptor",
                ));
            }
            if pick_count.is_none() {
                return Err(MocksmithError::validation(
                    path,
                    "pickCount is required when a data pool is given",
                ));
            }
            at_least_one(path, "pickCount", pick_count)?;
            for element in data {
                if element.is_array() || element.is_object() {
                    return Err(MocksmithError::validation(
                        path,
                        "data elements must be JSON scalars (string, number, boolean, or null)",
                    ));
                }
            }
        }
    }
    Ok(())
}

fn check_continents(path: &str, continents: Option<&[String]>) -> Result<()> {
    if let Some(continents) = continents {
        non_empty_list(path, "continents", continents)?;
        for continent in continents {
            if !geo::continent_exists(continent) {
                return Err(MocksmithError::validation(
                    path,
                    format!("unknown continent '{}'", continent),
                ));
            }
        }
    }
    Ok(())
}

fn check_countries(path: &str, countries: Option<&[String]>) -> Result<()> {
    if let Some(countries) = countries {
        non_empty_list(path, "countries", countries)?;
        for country in countries {
            if !geo::country_exists(country) {
                return Err(MocksmithError::validation(
                    path,
                    format!("unknown country '{}'", country),
                ));
            }
        }
    }
    Ok(())
}

fn ordered<T: PartialOrd + std::fmt::Display>(
    path: &str,
    min: Option<T>,
    max: Option<T>,
) -> Result<()> {
    if let (Some(min), Some(max)) = (&min, &max) {
        if min > max {
            return Err(MocksmithError::validation(
                path,
                format!("min ({}) must not exceed max ({})", min, max),
            ));
        }
    }
    Ok(())
}

fn non_empty_list(path: &str, param: &str, list: &[String]) -> Result<()> {
    if list.is_empty() {
        return Err(MocksmithError::validation(
            path,
            format!("{} must not be empty when given", param),
        ));
    }
    Ok(())
}

fn at_least_one(path: &str, param: &str, value: Option<usize>) -> Result<()> {
    match value {
        Some(0) => Err(MocksmithError::validation(
            path,
            format!("{} must be at least 1", param),
        )),
        _ => Ok(()),
    }
}
