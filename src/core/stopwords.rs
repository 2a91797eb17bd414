//! Indonesian stopword set.
//!
//! The set is fixed when it is built and only read afterwards, so a single
//! instance can be shared across parallel slice processing.

use std::collections::HashSet;

/// Indonesian conjunctions, pronouns and other function words removed before counting.
pub const INDONESIAN_STOPWORDS: &[&str] = &[
    "dan", "yang", "atau", "di", "ke", "dari", "untuk", "dengan", "pada", "dalam", "oleh",
    "sebagai", "adalah", "akan", "telah", "sudah", "belum", "tidak", "bukan", "juga", "dapat",
    "bisa", "harus", "perlu", "mungkin", "karena", "sehingga", "namun", "tetapi", "jika",
    "kalau", "apabila", "ketika", "saat", "waktu", "setelah", "sebelum", "selama", "hingga",
    "sampai", "antara", "atas", "bawah", "depan", "belakang", "kiri", "kanan", "ini", "itu",
    "tersebut", "mereka", "kami", "kita", "saya", "anda", "dia", "ia", "nya", "mu", "ku",
    "kamu", "kalian", "beliau", "ada", "adanya", "bahwa", "hal", "cara", "bagaimana",
    "mengapa", "kapan", "dimana", "kemana", "darimana", "siapa", "apa", "mana", "sangat",
    "sekali", "lebih", "paling", "agak", "cukup", "kurang", "hampir", "kira", "sekitar",
    "rata", "semua", "setiap", "masing", "beberapa", "banyak", "sedikit", "seluruh",
    "sebagian", "lain", "lainnya", "sendiri", "bersama", "sama", "berbeda", "beda",
];

/// An immutable set of lowercase words excluded from the token stream.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::indonesian()
    }
}

impl Stopwords {
    /// The built-in Indonesian list.
    pub fn indonesian() -> Self {
        Self::from_words(INDONESIAN_STOPWORDS.iter().copied())
    }

    /// Build a set from arbitrary words. Words are lowercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The Indonesian list extended with caller-supplied words.
    pub fn with_extra<I, S>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words;
        words.extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        Self { words }
    }

    /// Exact-match membership. Callers pass already-lowercased words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
