//! # Recursive Orchestrator
//!
//! `Engine::generate` is the entry point: it validates the schema, runs the
//! resource-limit checks, and only then walks the tree once per requested
//! record. Dispatch is a single exhaustive match over [`FieldKind`], so adding
//! a data type means adding a variant and letting the compiler point at every
//! place that must handle it.
//!
//! A call either fully succeeds or fully fails: validation and limits run
//! before any value exists, and a generation-time error aborts the whole
//! batch. The engine holds no mutable state, so one instance can serve
//! concurrent callers; each call owns its RNG and its contexts.

use std::sync::Arc;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::error::{MocksmithError, Result};
use crate::generate::context::GenerationContext;
use crate::generate::generators::{
    crypto, files, finance, geo, internet, media, misc, numeric, person, text,
};
use crate::generate::value::Value;
use crate::schema::field::{FieldDescriptor, FieldKind, Schema};
use crate::schema::{limits, validate};
use crate::telemetry::TelemetrySink;

/// One generated record: field name to value, in schema declaration order.
pub type Record = IndexMap<String, Value>;

/// The generation engine. Construction is cheap; the expensive parts (the
/// reference tables) are static.
pub struct Engine {
    config: EngineConfig,
    telemetry: Option<Arc<dyn TelemetrySink>>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            telemetry: None,
        }
    }

    /// Attach a fire-and-forget telemetry sink.
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = Some(sink);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate `count` independent records conforming to `schema`.
    pub fn generate(&self, schema: &Schema, count: usize) -> Result<Vec<Record>> {
        if count == 0 {
            return Err(MocksmithError::validation(
                "<request>",
                "record count must be at least 1",
            ));
        }
        validate::validate_schema(schema)?;
        limits::check_limits(schema, count, &self.config)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.generate_object(schema, &GenerationContext::root(), "", &mut rng)?);
        }

        if let Some(sink) = &self.telemetry {
            sink.records_generated(records.len());
        }
        Ok(records)
    }

    /// Generate one object scope: each declared field in order, merging every
    /// fresh value into the scope's context before the next field runs.
    fn generate_object(
        &self,
        schema: &Schema,
        parent: &GenerationContext,
        prefix: &str,
        rng: &mut StdRng,
    ) -> Result<Record> {
        let mut ctx = parent.child();
        let mut record = Record::with_capacity(schema.len());
        for (name, field) in schema {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", prefix, name)
            };
            let value = self.generate_field(&path, field, &ctx, rng)?;
            ctx.insert(name, value.clone());
            record.insert(name.clone(), value);
        }
        Ok(record)
    }

    /// Generate a single field. The nullable short-circuit runs exactly once,
    /// here, before any type-specific work.
    fn generate_field(
        &self,
        path: &str,
        field: &FieldDescriptor,
        ctx: &GenerationContext,
        rng: &mut StdRng,
    ) -> Result<Value> {
        if field.nullable {
            let rate = field
                .nullable_rate
                .unwrap_or(self.config.default_nullable_rate);
            if rng.random::<f64>() < rate {
                return Ok(Value::Null);
            }
        }

        match &field.kind {
            FieldKind::Int { min, max } => Ok(numeric::integer(*min, *max, &self.config, rng)),
            FieldKind::Float {
                min,
                max,
                precision,
            } => Ok(numeric::float(*min, *max, *precision, &self.config, rng)),
            FieldKind::Boolean => Ok(numeric::boolean(rng)),

            FieldKind::String {
                kind,
                min,
                max,
                paragraphs,
                language,
            } => Ok(text::string(
                *kind,
                *min,
                *max,
                *paragraphs,
                *language,
                &self.config,
                rng,
            )),

            FieldKind::Name {
                language,
                gender,
                format,
                triple_name_rate,
            } => Ok(person::name(
                *language,
                *gender,
                *format,
                *triple_name_rate,
                rng,
            )),
            FieldKind::Email { based_on } => Ok(internet::email(based_on.as_deref(), ctx, rng)),
            FieldKind::Username { based_on } => {
                Ok(internet::username(based_on.as_deref(), ctx, rng))
            }
            FieldKind::Phone => Ok(person::phone(rng)),
            FieldKind::Password { min, max } => Ok(internet::password(*min, *max, rng)),

            FieldKind::Url { based_on } => Ok(internet::url(based_on.as_deref(), ctx, rng)),
            FieldKind::Ipv4 => Ok(internet::ipv4(rng)),
            FieldKind::Ipv6 => Ok(internet::ipv6(rng)),
            FieldKind::Mac => Ok(internet::mac(rng)),
            FieldKind::UserAgent => Ok(internet::user_agent(rng)),

            FieldKind::Uuid => Ok(misc::uuid(rng)),
            FieldKind::Date { from, to } => Ok(misc::date(*from, *to, rng)),
            FieldKind::Color { format } => Ok(misc::color(*format, rng)),

            FieldKind::Currency { format } => Ok(finance::currency(*format, rng)),
            FieldKind::Iban { countries } => Ok(finance::iban(countries.as_deref(), rng)),
            FieldKind::CardNumber => Ok(finance::card_number(rng)),
            FieldKind::Price { min, max } => Ok(finance::price(*min, *max, rng)),

            FieldKind::Country { continents } => geo::country(path, continents.as_deref(), rng),
            FieldKind::Continent => Ok(geo::continent(rng)),
            FieldKind::City {
                continents,
                countries,
                based_on,
            } => geo::city(
                path,
                continents.as_deref(),
                countries.as_deref(),
                based_on.as_deref(),
                ctx,
                rng,
            ),
            FieldKind::Location {
                continents,
                countries,
            } => geo::location(path, continents.as_deref(), countries.as_deref(), rng),

            FieldKind::CryptoAddress { platform, min, max } => {
                Ok(crypto::address(*platform, *min, *max, rng))
            }
            FieldKind::CryptoHash { platform, min, max } => {
                Ok(crypto::hash(*platform, *min, *max, rng))
            }

            FieldKind::Avatar => Ok(media::avatar(rng)),
            FieldKind::Image { width, height } => Ok(media::image(*width, *height, rng)),

            FieldKind::FileName {
                based_on,
                extensions,
            } => Ok(files::file_name(
                based_on.as_deref(),
                extensions.as_deref(),
                ctx,
                rng,
            )),
            FieldKind::FilePath => Ok(files::file_path(rng)),
            FieldKind::MimeType => Ok(files::mime_type(rng)),

            FieldKind::Object { fields } => {
                let nested = self.generate_object(fields, ctx, path, rng)?;
                Ok(Value::Object(nested))
            }
            FieldKind::Array {
                item,
                count,
                data,
                pick_count,
            } => self.generate_array(
                path,
                item.as_deref(),
                *count,
                data.as_deref(),
                *pick_count,
                ctx,
                rng,
            ),
        }
    }

    fn generate_array(
        &self,
        path: &str,
        item: Option<&FieldDescriptor>,
        count: Option<usize>,
        data: Option<&[serde_json::Value]>,
        pick_count: Option<usize>,
        ctx: &GenerationContext,
        rng: &mut StdRng,
    ) -> Result<Value> {
        match (item, data) {
            (Some(item), None) => {
                let n = count.unwrap_or(self.config.default_array_count);
                let item_path = format!("{}[]", path);
                let mut values = Vec::with_capacity(n);
                for _ in 0..n {
                    values.push(self.generate_field(&item_path, item, ctx, rng)?);
                }
                Ok(Value::Array(values))
            }
            (None, Some(data)) => {
                // Distinct sample without replacement; validation guarantees
                // pick_count is present.
                let n = pick_count.unwrap_or(0).min(data.len());
                let picked = rand::seq::index::sample(rng, data.len(), n);
                Ok(Value::Array(
                    picked.iter().map(|i| Value::from(&data[i])).collect(),
                ))
            }
            // Unreachable under validation.
            _ => Err(MocksmithError::Internal {
                message: format!("array at '{}' escaped validation", path),
            }),
        }
    }
}
