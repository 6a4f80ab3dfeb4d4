//! Per-language person name pools.
//!
//! Chinese entries are native-script; their romanizations live in the
//! transliteration table so `basedOn` consumers (email, username, url,
//! fileName) can derive ASCII tokens from any generated name.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::schema::field::Language;

pub struct NamePool {
    pub male: &'static [&'static str],
    pub female: &'static [&'static str],
    pub last: &'static [&'static str],
}

/// Languages with a bundled name pool (`Language::Any` excluded).
pub const NAME_LANGUAGES: &[Language] = &[
    Language::En,
    Language::De,
    Language::Ru,
    Language::Tr,
    Language::Zh,
];

static EN: NamePool = NamePool {
    male: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
        "Daniel", "Matthew", "Henry", "Samuel", "Oliver", "Jack", "Ethan",
    ],
    female: &[
        "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Susan", "Jessica", "Sarah",
        "Karen", "Emily", "Emma", "Olivia", "Sophia", "Grace", "Chloe", "Hannah",
    ],
    last: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson", "Taylor",
        "Clark", "Walker", "Hall", "Young", "King", "Wright", "Baker",
    ],
};

static DE: NamePool = NamePool {
    male: &[
        "Lukas", "Leon", "Finn", "Jonas", "Paul", "Felix", "Maximilian", "Moritz", "Tobias",
        "Sebastian", "Florian", "Stefan", "Andreas", "Markus", "Thomas", "Jan",
    ],
    female: &[
        "Anna", "Lena", "Marie", "Laura", "Julia", "Sophie", "Hannah", "Lisa", "Sarah", "Katharina",
        "Claudia", "Sabine", "Monika", "Petra", "Nicole", "Franziska",
    ],
    last: &[
        "Mueller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Braun",
    ],
};

static RU: NamePool = NamePool {
    male: &[
        "Александр", "Дмитрий", "Максим", "Сергей", "Андрей", "Алексей", "Иван", "Михаил",
        "Никита", "Егор", "Павел", "Владимир", "Николай", "Виктор", "Олег", "Юрий",
    ],
    female: &[
        "Анастасия", "Мария", "Дарья", "Анна", "Елена", "Ольга", "Наталья", "Екатерина",
        "Татьяна", "Ирина", "Светлана", "Юлия", "Полина", "Вера", "Людмила", "Галина",
    ],
    last: &[
        "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
        "Новиков", "Федоров", "Морозов", "Волков", "Алексеев", "Лебедев", "Семенов", "Егоров",
    ],
};

static TR: NamePool = NamePool {
    male: &[
        "Mehmet", "Mustafa", "Ahmet", "Ali", "Hüseyin", "Hasan", "İbrahim", "Osman", "Yusuf",
        "Murat", "Ömer", "Emre", "Burak", "Kemal", "Serkan", "Çağlar",
    ],
    female: &[
        "Fatma", "Ayşe", "Emine", "Hatice", "Zeynep", "Elif", "Meryem", "Şerife", "Zehra",
        "Sultan", "Hülya", "Gül", "Esra", "Merve", "Özlem", "Derya",
    ],
    last: &[
        "Yılmaz", "Kaya", "Demir", "Şahin", "Çelik", "Yıldız", "Yıldırım", "Öztürk", "Aydın",
        "Özdemir", "Arslan", "Doğan", "Kılıç", "Aslan", "Çetin", "Kara",
    ],
};

static ZH: NamePool = NamePool {
    male: &[
        "伟", "强", "磊", "军", "洋", "勇", "杰", "涛", "明", "超", "刚", "平", "辉", "鹏", "华", "飞",
    ],
    female: &[
        "芳", "娜", "敏", "静", "丽", "娟", "霞", "燕", "玲", "婷", "雪", "琳", "晶", "倩", "蕾", "欣",
    ],
    last: &[
        "李", "王", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱", "胡", "林",
    ],
};

/// The pool for a concrete language. Returns `None` for `Language::Any`,
/// which callers must resolve with [`random_language`] first.
pub fn pool(language: Language) -> Option<&'static NamePool> {
    match language {
        Language::Any => None,
        Language::En => Some(&EN),
        Language::De => Some(&DE),
        Language::Ru => Some(&RU),
        Language::Tr => Some(&TR),
        Language::Zh => Some(&ZH),
    }
}

/// Uniformly random supported name language.
pub fn random_language(rng: &mut impl Rng) -> Language {
    *NAME_LANGUAGES.choose(rng).expect("name language table is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_language_has_a_pool() {
        for &lang in NAME_LANGUAGES {
            let pool = pool(lang).unwrap();
            assert!(!pool.male.is_empty());
            assert!(!pool.female.is_empty());
            assert!(!pool.last.is_empty());
        }
    }

    #[test]
    fn test_any_has_no_pool() {
        assert!(pool(Language::Any).is_none());
    }
}
