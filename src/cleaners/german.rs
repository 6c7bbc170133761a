//! 德语音译引擎
//!
//! 把德语书面文本改写为可直接朗读的形式：缩写、首字母缩略词、金额/百分比、
//! 序数词、基数词、口语符号，最后应用可配置的字符替换表。
//!
//! 编译要求：
//! - 需要启用 `german` feature；未启用时只保留 [`Transliterate`] 接口

/// 音译接口
///
/// 清洗管道只依赖这个接口，具体引擎在启动时按能力绑定。
pub trait Transliterate: Send + Sync {
    fn transliterate(&self, text: &str) -> String;
}

#[cfg(feature = "german")]
pub use engine::GermanTransliterator;

#[cfg(feature = "german")]
mod engine {
    use lazy_static::lazy_static;
    use regex::{Captures, NoExpand, Regex};

    use super::Transliterate;
    use crate::cleaners::transforms::collapse_whitespace;

    /// 常见缩写（区分大小写，按顺序应用）
    const ABBREVIATIONS: &[(&str, &str)] = &[
        ("z.B.", "zum Beispiel"),
        ("z. B.", "zum Beispiel"),
        ("u.a.", "unter anderem"),
        ("u. a.", "unter anderem"),
        ("d.h.", "das heißt"),
        ("d. h.", "das heißt"),
        ("usw.", "und so weiter"),
        ("bzw.", "beziehungsweise"),
        ("ca.", "circa"),
        ("etc.", "et cetera"),
        ("evtl.", "eventuell"),
        ("ggf.", "gegebenenfalls"),
        ("inkl.", "inklusive"),
        ("vgl.", "vergleiche"),
        ("Nr.", "Nummer"),
        ("Dr.", "Doktor"),
        ("Prof.", "Professor"),
        ("Hr.", "Herr"),
        ("Fr.", "Frau"),
        ("Str.", "Straße"),
        ("St.", "Sankt"),
    ];

    /// 字母的德语读法
    const LETTER_NAMES: &[(char, &str)] = &[
        ('A', "a"),
        ('B', "be"),
        ('C', "ze"),
        ('D', "de"),
        ('E', "e"),
        ('F', "eff"),
        ('G', "ge"),
        ('H', "ha"),
        ('I', "i"),
        ('J', "jott"),
        ('K', "ka"),
        ('L', "ell"),
        ('M', "emm"),
        ('N', "enn"),
        ('O', "o"),
        ('P', "pe"),
        ('Q', "ku"),
        ('R', "err"),
        ('S', "ess"),
        ('T', "te"),
        ('U', "u"),
        ('V', "vau"),
        ('W', "we"),
        ('X', "ix"),
        ('Y', "ypsilon"),
        ('Z', "zett"),
        ('Ä', "ä"),
        ('Ö', "ö"),
        ('Ü', "ü"),
    ];

    /// 口语符号
    const SPOKEN_SYMBOLS: &[(char, &str)] = &[
        ('&', " und "),
        ('+', " plus "),
        ('=', " gleich "),
        ('§', " Paragraph "),
    ];

    const UNITS: [&str; 10] = [
        "", "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
    ];

    const TEENS: [&str; 10] = [
        "zehn", "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn",
        "achtzehn", "neunzehn",
    ];

    const TENS: [&str; 8] = [
        "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig",
    ];

    const DIGITS: [&str; 10] = [
        "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
    ];

    const SMALL_ORDINALS: [&str; 20] = [
        "nullte", "erste", "zweite", "dritte", "vierte", "fünfte", "sechste", "siebte", "achte",
        "neunte", "zehnte", "elfte", "zwölfte", "dreizehnte", "vierzehnte", "fünfzehnte",
        "sechzehnte", "siebzehnte", "achtzehnte", "neunzehnte",
    ];

    /// 可读出的最大基数（不含）
    const CARDINAL_LIMIT: u64 = 1_000_000_000_000;

    lazy_static! {
        static ref ABBREVIATION_RULES: Vec<(Regex, &'static str)> = ABBREVIATIONS
            .iter()
            .map(|(abbr, expansion)| {
                let pattern = Regex::new(&format!(r"\b{}", regex::escape(abbr)))
                    .expect("abbreviation pattern must compile");
                (pattern, *expansion)
            })
            .collect();

        static ref ACRONYM_REGEX: Regex = Regex::new(r"\b[A-ZÄÖÜ]{2,5}\b").unwrap();

        /// 千分位 1.000.000
        static ref THOUSANDS_REGEX: Regex = Regex::new(r"\b[0-9]{1,3}(?:\.[0-9]{3})+\b").unwrap();

        static ref EURO_PREFIX_REGEX: Regex = Regex::new(r"€\s*([0-9]+(?:,[0-9]+)?)").unwrap();
        static ref EURO_SUFFIX_REGEX: Regex = Regex::new(r"([0-9]+(?:,[0-9]+)?)\s*€").unwrap();
        static ref PERCENT_REGEX: Regex = Regex::new(r"([0-9]+(?:,[0-9]+)?)\s*%").unwrap();

        static ref DECIMAL_REGEX: Regex = Regex::new(r"([0-9]+),([0-9]+)").unwrap();

        /// 序数词：数字 + 句点 + 空白 + 字母
        static ref ORDINAL_REGEX: Regex =
            Regex::new(r"\b([0-9]{1,9})\.(\s+)([A-Za-zÄÖÜäöüß])").unwrap();

        static ref NUMBER_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
    }

    /// 德语音译引擎（可复用，预编译规则）
    pub struct GermanTransliterator {
        /// 最后阶段的字符替换表
        replace: Vec<(String, String)>,
        /// 首字母缩略词逐字母朗读时的分隔符
        sep_abbreviation: String,
    }

    impl GermanTransliterator {
        /// 创建引擎
        ///
        /// # Arguments
        /// * `replace` - 最后应用的替换表（如 `;` → `,`）
        /// * `sep_abbreviation` - 缩略词字母之间的分隔符
        pub fn new<I, K, V>(replace: I, sep_abbreviation: impl Into<String>) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            let replace = replace
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(k, _): &(String, String)| !k.is_empty())
                .collect();

            Self {
                replace,
                sep_abbreviation: sep_abbreviation.into(),
            }
        }

        fn expand_abbreviations(&self, text: &str) -> String {
            let mut result = text.to_string();
            for (pattern, expansion) in ABBREVIATION_RULES.iter() {
                result = pattern.replace_all(&result, NoExpand(*expansion)).into_owned();
            }
            result
        }

        fn spell_acronyms(&self, text: &str) -> String {
            ACRONYM_REGEX
                .replace_all(text, |caps: &Captures| {
                    caps[0]
                        .chars()
                        .map(letter_name)
                        .collect::<Vec<_>>()
                        .join(&self.sep_abbreviation)
                })
                .into_owned()
        }

        fn expand_numbers(&self, text: &str) -> String {
            let text = THOUSANDS_REGEX.replace_all(text, |caps: &Captures| caps[0].replace('.', ""));
            let text = EURO_PREFIX_REGEX.replace_all(&text, "${1} Euro");
            let text = EURO_SUFFIX_REGEX.replace_all(&text, "${1} Euro");
            let text = PERCENT_REGEX.replace_all(&text, "${1} Prozent");
            let text = DECIMAL_REGEX.replace_all(&text, |caps: &Captures| {
                format!("{} Komma {}", cardinal_digits(&caps[1]), spell_digits(&caps[2]))
            });
            let text = ORDINAL_REGEX.replace_all(&text, |caps: &Captures| {
                let words = caps[1]
                    .parse::<u64>()
                    .map(ordinal)
                    .unwrap_or_else(|_| caps[1].to_string());
                format!("{}{}{}", words, &caps[2], &caps[3])
            });
            let text = NUMBER_REGEX.replace_all(&text, |caps: &Captures| cardinal_digits(&caps[0]));
            text.into_owned()
        }

        fn speak_symbols(&self, text: &str) -> String {
            let mut result = String::with_capacity(text.len());
            for ch in text.chars() {
                match SPOKEN_SYMBOLS.iter().find(|(symbol, _)| *symbol == ch) {
                    Some((_, spoken)) => result.push_str(spoken),
                    None => result.push(ch),
                }
            }
            result
        }

        fn apply_replace(&self, text: &str) -> String {
            let mut result = text.to_string();
            for (from, to) in &self.replace {
                result = result.replace(from.as_str(), to);
            }
            result
        }
    }

    impl Transliterate for GermanTransliterator {
        fn transliterate(&self, text: &str) -> String {
            let text = self.expand_abbreviations(text);
            let text = self.spell_acronyms(&text);
            let text = self.expand_numbers(&text);
            let text = self.speak_symbols(&text);
            let text = self.apply_replace(&text);
            collapse_whitespace(&text)
        }
    }

    fn letter_name(ch: char) -> &'static str {
        LETTER_NAMES
            .iter()
            .find(|(letter, _)| *letter == ch)
            .map(|(_, name)| *name)
            .unwrap_or("")
    }

    /// 数字串读法，超出范围时逐位朗读
    fn cardinal_digits(digits: &str) -> String {
        match digits.parse::<u64>() {
            Ok(n) if n < CARDINAL_LIMIT => cardinal(n),
            _ => spell_digits(digits),
        }
    }

    fn spell_digits(digits: &str) -> String {
        digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| DIGITS[d as usize])
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 0 ~ 99，`final_eins` 表示结尾的 1 读作 "eins"
    fn below_hundred(n: u64, final_eins: bool) -> String {
        match n {
            0 => String::new(),
            1 if final_eins => "eins".to_string(),
            1..=9 => UNITS[n as usize].to_string(),
            10..=19 => TEENS[(n - 10) as usize].to_string(),
            _ => {
                let tens = TENS[(n / 10 - 2) as usize];
                match n % 10 {
                    0 => tens.to_string(),
                    unit => format!("{}und{}", UNITS[unit as usize], tens),
                }
            }
        }
    }

    fn below_thousand(n: u64, final_eins: bool) -> String {
        let mut out = String::new();
        let hundreds = n / 100;
        if hundreds > 0 {
            out.push_str(UNITS[hundreds as usize]);
            out.push_str("hundert");
        }
        out.push_str(&below_hundred(n % 100, final_eins));
        out
    }

    /// 基数词（n < 10^12）
    pub(super) fn cardinal(n: u64) -> String {
        if n == 0 {
            return "null".to_string();
        }

        let billions = n / 1_000_000_000;
        let millions = (n / 1_000_000) % 1000;
        let rest = n % 1_000_000;

        let mut parts = Vec::new();
        match billions {
            0 => {}
            1 => parts.push("eine Milliarde".to_string()),
            b => parts.push(format!("{} Milliarden", below_thousand(b, false))),
        }
        match millions {
            0 => {}
            1 => parts.push("eine Million".to_string()),
            m => parts.push(format!("{} Millionen", below_thousand(m, false))),
        }
        if rest > 0 {
            let mut words = String::new();
            let thousands = rest / 1000;
            if thousands > 0 {
                words.push_str(&below_thousand(thousands, false));
                words.push_str("tausend");
            }
            words.push_str(&below_thousand(rest % 1000, true));
            parts.push(words);
        }

        parts.join(" ")
    }

    /// 序数词（原形，不做变格）
    pub(super) fn ordinal(n: u64) -> String {
        let low = n % 100;
        if n < 20 {
            return SMALL_ORDINALS[n as usize].to_string();
        }
        if (1..20).contains(&low) {
            return format!("{}{}", cardinal(n - low), SMALL_ORDINALS[low as usize]);
        }
        format!("{}ste", cardinal(n))
    }
}
