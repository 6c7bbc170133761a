//! 缩写表
//!
//! Hausa 语料中常见的宗教/文化短语缩写，形如 `wlh.`。
//! 顺序即匹配顺序：同一个键出现两次时只有第一条会生效。

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

/// 缩写 → 展开文本（按表顺序应用）
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("wlh", "wallahi"),
    ("isa", "inshaallah"),
    ("slm", "salam"),
    ("aslm", "assalamu alaikum"),
    ("aslm", "assalam alaikum"),
    ("wslm", "wa'alaikumu salam"),
    ("w/slm", "wa'alaikumu salam"),
    ("saw", "salallahu alaihi wasalam"),
    ("as", "alaihi salam"),
    ("sw", "subhanahu wata’allah"),
    ("ra", "radiyallahu anhu"),
    ("ra", "radiyallahu anha"),
    ("alhmd", "alhamdulillah"),
    ("ykk", "yakake"),
    ("ykk", "yakike"),
    ("ngd", "nagode"),
    ("gsky", "gaskiya"),
    ("lfy", "lafiya"),
    ("lpy", "lafiya"),
    ("gdy", "godiya"),
    ("hkr", "hakuri"),
    ("alh", "alhaji"),
    ("haj", "hajiya"),
    ("hkr", "hakuri"),
    ("mal", "mallam"),
    ("mal", "malama"),
    ("srk", "sarki"),
    ("klu", "kalau"),
    ("lbr", "labari"),
    ("lbr", "labarai"),
    ("bb", "babu"),
    ("lit", "litinin"),
    ("lrb", "laraba"),
    ("lhd", "lahadi"),
    ("asb", "asabar"),
    ("tlt", "talata"),
    ("min", "minti"),
    ("kyye", "kiyaye"),
    ("wnn", "wannan"),
    ("y", "ya"),
    ("yy", "yaya"),
    ("lkc", "lokaci"),
    ("lkcn", "lokacin"),
    ("mgn", "magana"),
    ("hk", "haka"),
    ("ahk", "ahaka"),
    ("ynz", "yanzu"),
    ("bbu", "babu"),
    ("dmw", "damuwa"),
    ("bkt", "bukata"),
    ("hausw", "hausawa"),
    ("2rai", "turai"),
    ("2ra", "tura"),
    ("lau", "kalau"),
    ("dftn", "dafatan"),
    ("mgd", "mungode"),
];

/// 单条缩写规则（预编译）
pub struct AbbreviationRule {
    pattern: Regex,
    expansion: &'static str,
}

impl AbbreviationRule {
    /// `\b<key>\.`，大小写不敏感；句点被匹配消费
    fn new(key: &str, expansion: &'static str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\.", regex::escape(key)))
            .expect("abbreviation pattern must compile");
        Self { pattern, expansion }
    }

    /// 替换全部匹配，展开文本原样插入（不解析 `$`）
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(self.expansion))
            .into_owned()
    }
}

lazy_static! {
    /// 进程级只读规则表
    pub static ref ABBREVIATION_RULES: Vec<AbbreviationRule> = ABBREVIATIONS
        .iter()
        .map(|(key, expansion)| AbbreviationRule::new(key, *expansion))
        .collect();
}

/// 按表顺序依次应用每条规则
///
/// 每条规则都重新扫描整段文本，后面的规则可以匹配前面规则产生的文本。
pub fn apply_rules(rules: &[AbbreviationRule], text: &str) -> String {
    let mut result = text.to_string();
    for rule in rules {
        result = rule.apply(&result);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_compiles() {
        assert_eq!(ABBREVIATION_RULES.len(), ABBREVIATIONS.len());
        assert_eq!(ABBREVIATION_RULES[0].apply("wlh."), "wallahi");
    }

    #[test]
    fn test_rule_requires_period() {
        let rule = AbbreviationRule::new("wlh", "wallahi");
        assert_eq!(rule.apply("wlh."), "wallahi");
        assert_eq!(rule.apply("wlh"), "wlh");
        assert_eq!(rule.apply("wlhx."), "wlhx.");
    }

    #[test]
    fn test_rule_case_insensitive() {
        let rule = AbbreviationRule::new("wlh", "wallahi");
        // 展开文本不随原文大小写变化
        assert_eq!(rule.apply("WLH. Wlh."), "wallahi wallahi");
    }

    #[test]
    fn test_rule_word_boundary() {
        let rule = AbbreviationRule::new("as", "alaihi salam");
        assert_eq!(rule.apply("was."), "was.");
        assert_eq!(rule.apply("musa as. ne"), "musa alaihi salam ne");
    }

    #[test]
    fn test_rule_escapes_key() {
        let rule = AbbreviationRule::new("w/slm", "wa'alaikumu salam");
        assert_eq!(rule.apply("w/slm."), "wa'alaikumu salam");
    }

    #[test]
    fn test_first_duplicate_wins() {
        let rules = vec![
            AbbreviationRule::new("ra", "radiyallahu anhu"),
            AbbreviationRule::new("ra", "radiyallahu anha"),
        ];
        assert_eq!(apply_rules(&rules, "ra."), "radiyallahu anhu");
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        // 第一条规则的产物中包含第二条规则的键
        let rules = vec![
            AbbreviationRule::new("a", "b."),
            AbbreviationRule::new("b", "c"),
        ];
        assert_eq!(apply_rules(&rules, "a."), "c");

        // 顺序反过来则不会连锁
        let reversed = vec![
            AbbreviationRule::new("b", "c"),
            AbbreviationRule::new("a", "b."),
        ];
        assert_eq!(apply_rules(&reversed, "a."), "b.");
    }

    #[test]
    fn test_expansion_with_dollar_is_verbatim() {
        let rule = AbbreviationRule::new("usd", "$1 dollar");
        assert_eq!(rule.apply("usd."), "$1 dollar");
    }
}
