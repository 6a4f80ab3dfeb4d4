//! Lexicon-backed `string` generator: words, curated sentences, paragraphs.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::EngineConfig;
use crate::generate::generators::owned;
use crate::generate::value::Value;
use crate::reference::lorem;
use crate::schema::field::{Language, StringKind};

pub fn string(
    kind: StringKind,
    min: Option<usize>,
    max: Option<usize>,
    paragraphs: Option<usize>,
    language: Option<Language>,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> Value {
    let language = match language {
        None | Some(Language::Any) => lorem::random_language(rng),
        Some(lang) => lang,
    };

    match kind {
        StringKind::Word => {
            let words = lorem::words(language).expect("validated lexicon language");
            // A lone bound outside the default range must not invert it.
            let hi = max.unwrap_or(config.default_word_max.max(min.unwrap_or(0)));
            let lo = min.unwrap_or(config.default_word_min.min(hi));
            let n = rng.random_range(lo..=hi);
            let picked: Vec<&str> = (0..n)
                .map(|_| *words.choose(rng).expect("word bank is non-empty"))
                .collect();
            owned(picked.join(" "))
        }
        StringKind::Sentence => owned(sentence(language, rng).to_string()),
        StringKind::Paragraph => {
            let n = paragraphs.unwrap_or(config.default_paragraphs);
            let blocks: Vec<String> = (0..n).map(|_| paragraph(language, rng)).collect();
            owned(blocks.join("\n\n"))
        }
    }
}

fn sentence(language: Language, rng: &mut impl Rng) -> &'static str {
    *lorem::sentences(language)
        .expect("validated lexicon language")
        .choose(rng)
        .expect("sentence bank is non-empty")
}

/// One paragraph: a handful of curated sentences joined with spaces.
fn paragraph(language: Language, rng: &mut impl Rng) -> String {
    let n = rng.random_range(3..=5);
    let sentences: Vec<&str> = (0..n).map(|_| sentence(language, rng)).collect();
    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_word_count_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = string(
                StringKind::Word,
                Some(2),
                Some(4),
                None,
                Some(Language::En),
                &config(),
                &mut rng,
            );
            let n = value.as_str().unwrap().split(' ').count();
            assert!((2..=4).contains(&n), "word count {} out of range", n);
        }
    }

    #[test]
    fn test_sentence_comes_from_the_bank() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = string(
            StringKind::Sentence,
            None,
            None,
            None,
            Some(Language::Ru),
            &config(),
            &mut rng,
        );
        let s = value.as_str().unwrap().to_string();
        assert!(
            lorem::sentences(Language::Ru).unwrap().contains(&s.as_str()),
            "sentence not from the curated bank: {}",
            s
        );
    }

    #[test]
    fn test_paragraph_count_and_separator() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = string(
            StringKind::Paragraph,
            None,
            None,
            Some(4),
            Some(Language::En),
            &config(),
            &mut rng,
        );
        let text = value.as_str().unwrap();
        assert_eq!(text.split("\n\n").count(), 4);
    }

    #[test]
    fn test_unset_language_still_produces_text() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = string(StringKind::Word, None, None, None, None, &config(), &mut rng);
            assert!(!value.as_str().unwrap().is_empty());
        }
    }
}
