//! File-system flavored generators: fileName, filePath, mimeType.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::generate::context::GenerationContext;
use crate::generate::generators::internet::seed_tokens;
use crate::generate::generators::{borrowed, owned};
use crate::generate::value::Value;
use crate::reference::files::{FILE_DIRS, FILE_EXTENSIONS, FILE_WORDS, MIME_TYPES};

pub fn file_name(
    based_on: Option<&str>,
    extensions: Option<&[String]>,
    ctx: &GenerationContext,
    rng: &mut impl Rng,
) -> Value {
    let stem = if based_on.is_some() {
        let tokens = seed_tokens(based_on, ctx, rng);
        format!("{}_{}", tokens.first, tokens.last)
    } else {
        random_stem(rng)
    };
    let extension = match extensions {
        Some(filter) => filter
            .choose(rng)
            .expect("validated non-empty filter")
            .clone(),
        None => FILE_EXTENSIONS
            .choose(rng)
            .expect("extension table is non-empty")
            .to_string(),
    };
    owned(format!("{}.{}", stem, extension))
}

pub fn file_path(rng: &mut impl Rng) -> Value {
    let depth = rng.random_range(1..=3usize);
    let dirs: Vec<&str> = (0..depth)
        .map(|_| *FILE_DIRS.choose(rng).expect("dir table is non-empty"))
        .collect();
    let name = file_name(None, None, &GenerationContext::root(), rng);
    owned(format!(
        "/{}/{}",
        dirs.join("/"),
        name.as_str().expect("file_name yields a string")
    ))
}

pub fn mime_type(rng: &mut impl Rng) -> Value {
    borrowed(*MIME_TYPES.choose(rng).expect("mime table is non-empty"))
}

fn random_stem(rng: &mut impl Rng) -> String {
    let n = rng.random_range(1..=2usize);
    let words: Vec<&str> = (0..n)
        .map(|_| *FILE_WORDS.choose(rng).expect("word table is non-empty"))
        .collect();
    words.join("_")
}
