//! Script-to-ASCII transliteration for `basedOn`-derived tokens.
//!
//! Covers exactly the scripts the bundled name pools can produce: Cyrillic,
//! Turkish diacritics, and the Chinese characters in the name table (mapped
//! to pinyin, emitted with separating spaces so a two-character name splits
//! into two tokens). Unmapped non-ASCII characters are dropped.

/// Transliterate a string to lowercase ASCII. Word boundaries are preserved;
/// characters with no mapping vanish.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        // Dotted capital I lowercases to "i\u{307}"; map it before the
        // generic lowercasing so the combining mark never appears.
        if c == 'İ' {
            out.push('i');
            continue;
        }
        for lower in c.to_lowercase() {
            if lower.is_ascii_alphanumeric() || lower == '-' {
                out.push(lower);
            } else if lower.is_whitespace() {
                out.push(' ');
            } else if let Some(mapped) = cyrillic(lower).or_else(|| turkish(lower)) {
                out.push_str(mapped);
            } else if let Some(pinyin) = pinyin(lower) {
                // Space-separate so multi-character names split into tokens.
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(pinyin);
                out.push(' ');
            }
        }
    }
    let collapsed: Vec<&str> = out.split_whitespace().collect();
    collapsed.join(" ")
}

fn cyrillic(c: char) -> Option<&'static str> {
    Some(match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    })
}

fn turkish(c: char) -> Option<&'static str> {
    Some(match c {
        'ç' => "c",
        'ğ' => "g",
        'ı' => "i",
        'ö' => "o",
        'ş' => "s",
        'ü' => "u",
        _ => return None,
    })
}

fn pinyin(c: char) -> Option<&'static str> {
    Some(match c {
        // Surnames
        '李' => "li",
        '王' => "wang",
        '张' => "zhang",
        '刘' => "liu",
        '陈' => "chen",
        '杨' => "yang",
        '黄' => "huang",
        '赵' => "zhao",
        '吴' => "wu",
        '周' => "zhou",
        '徐' => "xu",
        '孙' => "sun",
        '马' => "ma",
        '朱' => "zhu",
        '胡' => "hu",
        '林' => "lin",
        // Given names
        '伟' => "wei",
        '强' => "qiang",
        '磊' => "lei",
        '军' => "jun",
        '洋' => "yang",
        '勇' => "yong",
        '杰' => "jie",
        '涛' => "tao",
        '明' => "ming",
        '超' => "chao",
        '刚' => "gang",
        '平' => "ping",
        '辉' => "hui",
        '鹏' => "peng",
        '华' => "hua",
        '飞' => "fei",
        '芳' => "fang",
        '娜' => "na",
        '敏' => "min",
        '静' => "jing",
        '丽' => "li",
        '娟' => "juan",
        '霞' => "xia",
        '燕' => "yan",
        '玲' => "ling",
        '婷' => "ting",
        '雪' => "xue",
        '琳' => "lin",
        '晶' => "jing",
        '倩' => "qian",
        '蕾' => "lei",
        '欣' => "xin",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through_lowercased() {
        assert_eq!(transliterate("Ada Lovelace"), "ada lovelace");
    }

    #[test]
    fn test_cyrillic_name() {
        assert_eq!(transliterate("Александр Иванов"), "aleksandr ivanov");
        assert_eq!(transliterate("Юлия Щукина"), "yuliya shchukina");
    }

    #[test]
    fn test_turkish_diacritics() {
        assert_eq!(transliterate("Çağlar Yılmaz"), "caglar yilmaz");
        assert_eq!(transliterate("İbrahim Öztürk"), "ibrahim ozturk");
    }

    #[test]
    fn test_chinese_name_splits_into_tokens() {
        assert_eq!(transliterate("王 伟"), "wang wei");
        // No separator in the input: pinyin mapping inserts one.
        assert_eq!(transliterate("王伟"), "wang wei");
    }

    #[test]
    fn test_unmapped_characters_are_dropped() {
        assert_eq!(transliterate("a☃b"), "ab");
    }

    #[test]
    fn test_soft_and_hard_signs_vanish() {
        assert_eq!(transliterate("Игорь"), "igor");
    }
}
