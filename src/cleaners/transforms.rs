//! 基础变换
//!
//! 五个互相独立的纯函数，清洗管道由它们组合而成。

use crate::cleaners::abbreviations::{apply_rules, ABBREVIATION_RULES};
use crate::cleaners::numbers::normalize_numbers;

/// 小写（与区域设置无关）
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// 空白折叠：每段连续空白 -> 单个空格
///
/// 不做 trim，首尾空白同样折叠为一个空格。
/// 信息分隔符 U+001C ~ U+001F 也按空白处理。
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_whitespace = false;

    for ch in text.chars() {
        if is_collapsible_whitespace(ch) {
            if !prev_whitespace {
                result.push(' ');
                prev_whitespace = true;
            }
        } else {
            result.push(ch);
            prev_whitespace = false;
        }
    }

    result
}

fn is_collapsible_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// 音译为 ASCII，无法映射的字符被丢弃
pub fn convert_to_ascii(text: &str) -> String {
    deunicode::deunicode_with_tofu(text, "")
}

/// 数字展开为英文读法
pub fn expand_numbers(text: &str) -> String {
    normalize_numbers(text)
}

/// 按缩写表展开 `<缩写>.`
pub fn expand_abbreviations(text: &str) -> String {
    apply_rules(&ABBREVIATION_RULES, text)
}
