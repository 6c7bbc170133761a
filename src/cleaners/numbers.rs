//! 英文数字规范化
//!
//! 把文本中的数字串替换为英文读法：千分位、英镑、美元、小数、序数词、整数（含年份读法）。
//! 单词本身由 `num2words` 生成，这里只负责识别与拼装。

use lazy_static::lazy_static;
use num2words::Num2Words;
use regex::{Captures, Regex};

lazy_static! {
    /// 带千分位的数字，如 1,000,000
    static ref COMMA_NUMBER_REGEX: Regex = Regex::new(r"([0-9][0-9,]+[0-9])").unwrap();

    /// 英镑
    static ref POUNDS_REGEX: Regex = Regex::new(r"£([0-9,]*[0-9]+)").unwrap();

    /// 美元（可带美分）
    static ref DOLLARS_REGEX: Regex = Regex::new(r"\$([0-9.,]*[0-9]+)").unwrap();

    /// 小数
    static ref DECIMAL_REGEX: Regex = Regex::new(r"([0-9]+\.[0-9]+)").unwrap();

    /// 序数词，如 1st / 22nd / 3rd / 4th
    static ref ORDINAL_REGEX: Regex = Regex::new(r"([0-9]+)(st|nd|rd|th)").unwrap();

    /// 整数
    static ref NUMBER_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// 规范化文本中的所有数字
///
/// 规则按固定顺序执行，后面的规则处理前面规则留下的数字（如 "5 dollars" 中的 5）。
pub fn normalize_numbers(text: &str) -> String {
    let text = COMMA_NUMBER_REGEX.replace_all(text, |caps: &Captures| caps[1].replace(',', ""));
    let text = POUNDS_REGEX.replace_all(&text, "${1} pounds");
    let text = DOLLARS_REGEX.replace_all(&text, |caps: &Captures| expand_dollars(&caps[1]));
    let text = DECIMAL_REGEX.replace_all(&text, |caps: &Captures| caps[1].replace('.', " point "));
    let text = ORDINAL_REGEX.replace_all(&text, |caps: &Captures| expand_ordinal(&caps[0], &caps[1]));
    let text = NUMBER_REGEX.replace_all(&text, |caps: &Captures| expand_number(&caps[0]));
    text.into_owned()
}

/// 美元金额，数字部分留给后续整数规则
fn expand_dollars(amount: &str) -> String {
    let parts: Vec<&str> = amount.split('.').collect();
    if parts.len() > 2 {
        // 格式异常，保留原样
        return format!("{} dollars", amount);
    }

    let dollars = strip_leading_zeros(parts[0]);
    let cents = parts.get(1).map_or("0", |c| strip_leading_zeros(c));

    let dollar_unit = if dollars == "1" { "dollar" } else { "dollars" };
    let cent_unit = if cents == "1" { "cent" } else { "cents" };

    // 金额以数字串保留，超出 i64 时由整数规则逐位朗读
    match (dollars, cents) {
        ("0", "0") => "zero dollars".to_string(),
        (d, "0") => format!("{} {}", d, dollar_unit),
        ("0", c) => format!("{} {}", c, cent_unit),
        (d, c) => format!("{} {}, {} {}", d, dollar_unit, c, cent_unit),
    }
}

/// "007" -> "7"，全零或空串 -> "0"
fn strip_leading_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

fn expand_ordinal(matched: &str, digits: &str) -> String {
    let Ok(num) = digits.parse::<i64>() else {
        return spell_ordinal_digits(matched, digits);
    };
    match Num2Words::new(num).ordinal().to_words() {
        Ok(words) => clean_words(&words),
        Err(_) => matched.to_string(),
    }
}

/// 超出 i64 的序数：前面逐位朗读，最后一位读作序数词
fn spell_ordinal_digits(matched: &str, digits: &str) -> String {
    let (head, last) = digits.split_at(digits.len() - 1);
    let Ok(last) = last.parse::<i64>() else {
        return matched.to_string();
    };
    let last_words = match Num2Words::new(last).ordinal().to_words() {
        Ok(words) => clean_words(&words),
        Err(_) => return matched.to_string(),
    };
    if head.is_empty() {
        last_words
    } else {
        format!("{} {}", spell_digits(head), last_words)
    }
}

/// 整数读法，1000 < n < 3000 按年份读
fn expand_number(digits: &str) -> String {
    let Ok(num) = digits.parse::<i64>() else {
        return spell_digits(digits);
    };

    if num > 1000 && num < 3000 {
        if num == 2000 {
            "two thousand".to_string()
        } else if num > 2000 && num < 2010 {
            format!("two thousand {}", cardinal(num % 100))
        } else if num % 100 == 0 {
            format!("{} hundred", cardinal(num / 100))
        } else {
            let low = num % 100;
            let low_words = if low < 10 {
                format!("oh {}", cardinal(low))
            } else {
                cardinal(low)
            };
            format!("{} {}", cardinal(num / 100), low_words)
        }
    } else {
        cardinal(num)
    }
}

fn cardinal(num: i64) -> String {
    match Num2Words::new(num).to_words() {
        Ok(words) => clean_words(&words),
        Err(_) => num.to_string(),
    }
}

/// 去掉连接词 "and" 与分组逗号
fn clean_words(words: &str) -> String {
    words.replace(", ", " ").replace(" and ", " ")
}

/// 超出 i64 的数字逐位朗读
fn spell_digits(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGIT_WORDS[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}
