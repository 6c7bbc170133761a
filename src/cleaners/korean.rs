//! 韩文字母（Jamo）分解
//!
//! 把韩文音节块拆成初声/中声/终声三个组合字母，其余字符原样保留为单独符号。

use unicode_normalization::UnicodeNormalization;

/// 韩文音节块范围（가 ~ 힣）
const HANGUL_SYLLABLES: std::ops::RangeInclusive<u32> = 0xAC00..=0xD7A3;

/// 分解为符号序列
///
/// `"존경하는"` → `["ᄌ", "ᅩ", "ᆫ", "ᄀ", "ᅧ", "ᆼ", "ᄒ", "ᅡ", "ᄂ", "ᅳ", "ᆫ"]`
pub fn tokenize(text: &str) -> Vec<String> {
    let mut symbols = Vec::with_capacity(text.len());

    for ch in text.chars() {
        if is_hangul_syllable(ch) {
            // 音节块的 NFD 即为组合字母序列
            symbols.extend(std::iter::once(ch).nfd().map(String::from));
        } else {
            symbols.push(ch.to_string());
        }
    }

    symbols
}

fn is_hangul_syllable(ch: char) -> bool {
    HANGUL_SYLLABLES.contains(&(ch as u32))
}
