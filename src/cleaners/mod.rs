//! 文本清洗层
//!
//! 在语音合成的分词之前，把原始文本规范化为统一形式。
//!
//! ## 管道
//! 1. basic: 小写 + 空白折叠
//! 2. transliteration: ASCII 音译 + 小写 + 空白折叠
//! 3. english: 小写 + 数字展开 + 缩写展开 + 空白折叠
//! 4. korean: 韩文字母分解（输出符号序列）
//! 5. german: 德语音译引擎（需 `german` feature）

mod abbreviations;
mod german;
mod korean;
mod numbers;
mod pipeline;
mod transforms;

#[cfg(feature = "german")]
pub use german::GermanTransliterator;
pub use german::Transliterate;
pub use pipeline::{
    basic_cleaners, english_cleaners, german_cleaners, korean_cleaners, transliteration_cleaners,
    CleanedText, Cleaner, TextCleaner,
};
pub use transforms::{
    collapse_whitespace, convert_to_ascii, expand_abbreviations, expand_numbers, lowercase,
};
