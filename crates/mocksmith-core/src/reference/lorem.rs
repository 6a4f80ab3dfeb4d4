//! Word and curated-sentence banks for the `string` generator.
//!
//! Sentences are looked up whole rather than composed word-by-word, so the
//! non-English banks stay grammatical.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::schema::field::Language;

/// Languages with a bundled lexicon (`Language::Any` excluded).
pub const LEXICON_LANGUAGES: &[Language] = &[Language::En, Language::Ru, Language::Tr];

static EN_WORDS: &[&str] = &[
    "time", "year", "people", "way", "day", "man", "thing", "woman", "life", "child", "world",
    "school", "state", "family", "student", "group", "country", "problem", "hand", "part",
    "place", "case", "week", "company", "system", "program", "question", "work", "government",
    "number", "night", "point", "home", "water", "room", "mother", "area", "money", "story",
    "fact", "month", "lot", "right", "study", "book", "eye", "job", "word", "business", "issue",
    "side", "kind", "head", "house", "service", "friend", "father", "power", "hour", "game",
];

static RU_WORDS: &[&str] = &[
    "время", "человек", "жизнь", "день", "рука", "работа", "слово", "место", "дело", "глаз",
    "вопрос", "дом", "сторона", "страна", "мир", "случай", "голова", "ребенок", "сила", "конец",
    "вид", "система", "часть", "город", "отношение", "женщина", "деньги", "земля", "машина",
    "вода",
];

static TR_WORDS: &[&str] = &[
    "zaman", "insan", "hayat", "gün", "el", "iş", "kelime", "yer", "göz", "soru", "ev", "taraf",
    "ülke", "dünya", "durum", "baş", "çocuk", "güç", "son", "şehir", "kadın", "para", "toprak",
    "araba", "su", "yol", "gece", "sabah", "deniz", "kitap",
];

static EN_SENTENCES: &[&str] = &[
    "The quarterly report highlighted a steady rise in customer retention.",
    "Fresh snow covered the quiet streets before sunrise.",
    "Engineers reviewed the failing test and traced it to a stale cache.",
    "The committee postponed its decision until the next session.",
    "A gentle breeze carried the smell of rain across the valley.",
    "She finished the marathon well ahead of her previous record.",
    "The museum opened a new wing dedicated to modern sculpture.",
    "Local farmers reported an unusually early harvest this year.",
    "The orchestra rehearsed the final movement twice before the premiere.",
    "Negotiations continued late into the night without a clear outcome.",
    "The library extended its opening hours during the exam period.",
    "Travelers crowded the platform waiting for the delayed express.",
    "The startup announced a partnership with a regional logistics firm.",
    "Volunteers cleared the hiking trail after the storm.",
    "The lecture covered the early history of mechanical computation.",
    "Prices at the market stayed stable despite the shortage.",
];

static RU_SENTENCES: &[&str] = &[
    "Утро началось с густого тумана над рекой.",
    "Команда завершила проект раньше намеченного срока.",
    "В библиотеке открылся новый читальный зал.",
    "Поезд прибыл на станцию с небольшим опозданием.",
    "Конференция собрала специалистов из десяти стран.",
    "Дети играли во дворе до самого вечера.",
    "Музей представил коллекцию старинных карт.",
    "Снег шел всю ночь и укрыл город белым покрывалом.",
    "Инженеры обсудили результаты последних испытаний.",
    "Весной парк наполняется голосами птиц.",
    "Магазин на углу работает без выходных.",
    "Лекция была посвящена истории северных экспедиций.",
];

static TR_SENTENCES: &[&str] = &[
    "Sabah erkenden yola çıkıp sahile doğru yürüdük.",
    "Toplantı beklenenden uzun sürdü ama verimli geçti.",
    "Şehrin eski sokakları turistlerle doluydu.",
    "Yeni kütüphane öğrencilere geç saatlere kadar açık.",
    "Yağmur bütün gece boyunca hiç durmadan yağdı.",
    "Takım son dakikada attığı golle maçı kazandı.",
    "Pazarda taze sebze ve meyve tezgahları kurulmuştu.",
    "Mühendisler köprünün son kontrollerini tamamladı.",
    "Çocuklar parkta akşama kadar oyun oynadı.",
    "Konser biletleri birkaç saat içinde tükendi.",
    "Müze bu ay yeni bir sergiye ev sahipliği yapıyor.",
    "Tren istasyona tam zamanında ulaştı.",
];

/// True when the language has a bundled word and sentence bank.
pub fn supported(language: Language) -> bool {
    LEXICON_LANGUAGES.contains(&language)
}

/// The word bank for a concrete lexicon language.
pub fn words(language: Language) -> Option<&'static [&'static str]> {
    match language {
        Language::En => Some(EN_WORDS),
        Language::Ru => Some(RU_WORDS),
        Language::Tr => Some(TR_WORDS),
        _ => None,
    }
}

/// The curated sentence bank for a concrete lexicon language.
pub fn sentences(language: Language) -> Option<&'static [&'static str]> {
    match language {
        Language::En => Some(EN_SENTENCES),
        Language::Ru => Some(RU_SENTENCES),
        Language::Tr => Some(TR_SENTENCES),
        _ => None,
    }
}

/// Uniformly random lexicon language.
pub fn random_language(rng: &mut impl Rng) -> Language {
    *LEXICON_LANGUAGES
        .choose(rng)
        .expect("lexicon language table is non-empty")
}
