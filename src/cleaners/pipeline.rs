//! 清洗管道
//!
//! 每个管道都是基础变换的固定顺序组合，按语言选择。
//! 德语管道依赖可选引擎，由 [`TextCleaner`] 在启动时探测并持有。

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::cleaners::german::Transliterate;
use crate::cleaners::korean;
use crate::cleaners::transforms::{
    collapse_whitespace, convert_to_ascii, expand_abbreviations, expand_numbers, lowercase,
};
use crate::config::{CleanerConfig, GermanConfig};
use crate::error::{CleanerError, Result};

/// 德语引擎缺失时的提示
const GERMAN_MISSING_MESSAGE: &str =
    "德语音译引擎未启用。请使用 `--features german` 编译，并在配置中启用 german 以使用 german_cleaners";

// ============================================================================
// 管道选择
// ============================================================================

/// 清洗管道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleaner {
    /// 小写 → 空白折叠
    Basic,
    /// ASCII 音译 → 小写 → 空白折叠
    Transliteration,
    /// 小写 → 数字 → 缩写 → 空白折叠
    English,
    /// 韩文字母分解（输出符号序列）
    Korean,
    /// 德语音译引擎
    German,
}

impl Cleaner {
    pub const ALL: [Cleaner; 5] = [
        Cleaner::Basic,
        Cleaner::Transliteration,
        Cleaner::English,
        Cleaner::Korean,
        Cleaner::German,
    ];

    /// 管道的规范名称
    pub fn name(&self) -> &'static str {
        match self {
            Cleaner::Basic => "basic_cleaners",
            Cleaner::Transliteration => "transliteration_cleaners",
            Cleaner::English => "english_cleaners",
            Cleaner::Korean => "korean_cleaners",
            Cleaner::German => "german_cleaners",
        }
    }
}

impl fmt::Display for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cleaner {
    type Err = CleanerError;

    /// 精确匹配规范名称或短名称
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic_cleaners" | "basic" => Ok(Cleaner::Basic),
            "transliteration_cleaners" | "transliteration" => Ok(Cleaner::Transliteration),
            "english_cleaners" | "english" => Ok(Cleaner::English),
            "korean_cleaners" | "korean" => Ok(Cleaner::Korean),
            "german_cleaners" | "german" => Ok(Cleaner::German),
            other => Err(CleanerError::UnknownCleaner(other.to_string())),
        }
    }
}

/// 清洗结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CleanedText {
    Text(String),
    Symbols(Vec<String>),
}

impl CleanedText {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CleanedText::Text(text) => Some(text),
            CleanedText::Symbols(_) => None,
        }
    }

    pub fn as_symbols(&self) -> Option<&[String]> {
        match self {
            CleanedText::Text(_) => None,
            CleanedText::Symbols(symbols) => Some(symbols),
        }
    }
}

// ============================================================================
// 无状态管道
// ============================================================================

/// 只做大小写与空白规范化，不转换文字
pub fn basic_cleaners(text: &str) -> String {
    let text = lowercase(text);
    collapse_whitespace(&text)
}

/// 非英文文本，先音译为 ASCII
pub fn transliteration_cleaners(text: &str) -> String {
    let text = convert_to_ascii(text);
    let text = lowercase(&text);
    collapse_whitespace(&text)
}

/// 英文文本，展开数字与缩写（假定输入已是 ASCII，不做音译）
pub fn english_cleaners(text: &str) -> String {
    let text = lowercase(text);
    let text = expand_numbers(&text);
    let text = expand_abbreviations(&text);
    collapse_whitespace(&text)
}

/// 韩文文本，分解为字母符号序列
pub fn korean_cleaners(text: &str) -> Vec<String> {
    korean::tokenize(text)
}

// ============================================================================
// 带可选引擎的清洗器
// ============================================================================

/// 清洗器（可复用，启动时探测可选引擎）
pub struct TextCleaner {
    /// 德语引擎，None 表示未绑定
    german: Option<Box<dyn Transliterate>>,
}

impl TextCleaner {
    /// 按配置创建清洗器
    pub fn new(config: &CleanerConfig) -> Self {
        Self {
            german: bind_german(&config.german),
        }
    }

    /// 不绑定德语引擎
    pub fn without_german() -> Self {
        Self { german: None }
    }

    /// 使用外部提供的德语引擎
    pub fn with_german_engine(engine: Box<dyn Transliterate>) -> Self {
        Self {
            german: Some(engine),
        }
    }

    pub fn has_german(&self) -> bool {
        self.german.is_some()
    }

    /// 德语管道
    ///
    /// 引擎未绑定时返回 `MissingDependency`，不产生任何输出
    pub fn german_cleaners(&self, text: &str) -> Result<String> {
        match &self.german {
            Some(engine) => Ok(engine.transliterate(text)),
            None => {
                tracing::warn!("调用 german_cleaners 但德语引擎未绑定");
                Err(CleanerError::MissingDependency(
                    GERMAN_MISSING_MESSAGE.to_string(),
                ))
            }
        }
    }

    /// 运行指定管道
    pub fn clean(&self, cleaner: Cleaner, text: &str) -> Result<CleanedText> {
        tracing::debug!("运行清洗管道 {}，输入 {} 字节", cleaner, text.len());

        let cleaned = match cleaner {
            Cleaner::Basic => CleanedText::Text(basic_cleaners(text)),
            Cleaner::Transliteration => CleanedText::Text(transliteration_cleaners(text)),
            Cleaner::English => CleanedText::Text(english_cleaners(text)),
            Cleaner::Korean => CleanedText::Symbols(korean_cleaners(text)),
            Cleaner::German => CleanedText::Text(self.german_cleaners(text)?),
        };

        Ok(cleaned)
    }

    /// 按名称运行管道
    pub fn clean_by_name(&self, name: &str, text: &str) -> Result<CleanedText> {
        let cleaner: Cleaner = name.parse()?;
        self.clean(cleaner, text)
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(&CleanerConfig::default())
    }
}

impl fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCleaner")
            .field("german", &self.has_german())
            .finish()
    }
}

/// 启动时探测德语引擎
fn bind_german(config: &GermanConfig) -> Option<Box<dyn Transliterate>> {
    if !config.enabled {
        tracing::info!("德语引擎已在配置中禁用");
        return None;
    }
    german_engine(config)
}

#[cfg(feature = "german")]
fn german_engine(config: &GermanConfig) -> Option<Box<dyn Transliterate>> {
    use crate::cleaners::german::GermanTransliterator;

    tracing::info!(
        "绑定德语引擎，替换规则 {} 条，分隔符 {:?}",
        config.replace.len(),
        config.sep_abbreviation
    );
    Some(Box::new(GermanTransliterator::new(
        config.replace.clone(),
        config.sep_abbreviation.clone(),
    )))
}

#[cfg(not(feature = "german"))]
fn german_engine(_config: &GermanConfig) -> Option<Box<dyn Transliterate>> {
    tracing::warn!("未启用 `german` feature，german_cleaners 不可用");
    None
}

lazy_static! {
    /// 进程级默认清洗器（默认配置）
    static ref DEFAULT_CLEANER: TextCleaner = TextCleaner::default();
}

/// 使用默认清洗器的德语管道
pub fn german_cleaners(text: &str) -> Result<String> {
    DEFAULT_CLEANER.german_cleaners(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseEngine;

    impl Transliterate for UppercaseEngine {
        fn transliterate(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_basic_cleaners_order() {
        assert_eq!(basic_cleaners("  Foo   BAR "), " foo bar ");

        let input = "Mixed\tCase \n\n TEXT";
        assert_eq!(
            basic_cleaners(input),
            collapse_whitespace(&lowercase(input))
        );
    }

    #[test]
    fn test_transliteration_cleaners() {
        assert_eq!(
            transliteration_cleaners("Ça   Va, Überall!"),
            "ca va, uberall!"
        );
    }

    #[test]
    fn test_transliteration_cleaners_ascii_only() {
        for input in ["Ελληνικά  κείμενο", "日本語のテキスト", "Привет,\tмир", "naïve café 🎉"] {
            let out = transliteration_cleaners(input);
            assert!(out.chars().all(|c| (c as u32) < 128), "非 ASCII 输出: {:?}", out);
        }
    }

    #[test]
    fn test_english_cleaners() {
        assert_eq!(english_cleaners("2 wlh."), "two wallahi");
        assert_eq!(english_cleaners("  WLH.   I have 3 cats "), " wallahi i have three cats ");
    }

    #[test]
    fn test_english_cleaners_no_digits_left() {
        let out = english_cleaners("Ngd.  1st  of 12\tdays");
        assert!(!out.chars().any(|c| c.is_ascii_digit()));
        assert!(out.starts_with("nagode first of "));
    }

    #[test]
    fn test_english_cleaners_keeps_non_ascii() {
        // 英文管道不做音译
        assert_eq!(english_cleaners("Café"), "café");
    }

    #[test]
    fn test_korean_cleaners_symbols() {
        let symbols = korean_cleaners("한국어");
        assert_eq!(symbols.len(), 8);
        assert!(symbols.iter().all(|s| s.chars().count() == 1));
    }

    #[test]
    fn test_cleaner_from_str() {
        assert_eq!("basic_cleaners".parse::<Cleaner>(), Ok(Cleaner::Basic));
        assert_eq!("english".parse::<Cleaner>(), Ok(Cleaner::English));
        assert_eq!(
            "English".parse::<Cleaner>(),
            Err(CleanerError::UnknownCleaner("English".to_string()))
        );
        for cleaner in Cleaner::ALL {
            assert_eq!(cleaner.name().parse::<Cleaner>(), Ok(cleaner));
        }
    }

    #[test]
    fn test_german_missing_dependency() {
        let cleaner = TextCleaner::without_german();
        assert!(!cleaner.has_german());

        let err = cleaner.german_cleaners("Hallo; Welt").unwrap_err();
        match err {
            CleanerError::MissingDependency(message) => assert!(message.contains("german")),
            other => panic!("意外的错误: {:?}", other),
        }

        assert!(cleaner.clean(Cleaner::German, "Hallo").is_err());
    }

    #[test]
    fn test_german_disabled_in_config() {
        let mut config = CleanerConfig::default();
        config.german.enabled = false;

        let cleaner = TextCleaner::new(&config);
        assert!(matches!(
            cleaner.german_cleaners("Hallo"),
            Err(CleanerError::MissingDependency(_))
        ));
    }

    #[test]
    fn test_german_delegates_to_engine() {
        let cleaner = TextCleaner::with_german_engine(Box::new(UppercaseEngine));
        assert_eq!(cleaner.german_cleaners("hallo").unwrap(), "HALLO");
    }

    #[cfg(feature = "german")]
    #[test]
    fn test_german_default_engine() {
        let cleaner = TextCleaner::default();
        assert!(cleaner.has_german());
        assert_eq!(cleaner.german_cleaners("ja; nein: 3").unwrap(), "ja, nein drei");
        assert_eq!(german_cleaners("ja; nein").unwrap(), "ja, nein");
    }

    #[test]
    fn test_clean_dispatch() {
        let cleaner = TextCleaner::without_german();

        let out = cleaner.clean(Cleaner::Basic, "A  B").unwrap();
        assert_eq!(out.as_text(), Some("a b"));

        let out = cleaner.clean_by_name("korean_cleaners", "가").unwrap();
        assert_eq!(
            out.as_symbols(),
            Some(&["\u{1100}".to_string(), "\u{1161}".to_string()][..])
        );

        assert!(matches!(
            cleaner.clean_by_name("french", "bonjour"),
            Err(CleanerError::UnknownCleaner(_))
        ));
    }

    #[test]
    fn test_cleaned_text_serializes_untagged() {
        let text = CleanedText::Text("a b".to_string());
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""a b""#);

        let symbols = TextCleaner::without_german()
            .clean(Cleaner::Korean, "가 ")
            .unwrap();
        assert_eq!(
            serde_json::to_string(&symbols).unwrap(),
            "[\"\u{1100}\",\"\u{1161}\",\" \"]"
        );
    }
}
