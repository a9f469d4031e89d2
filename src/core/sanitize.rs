// src/core/sanitize.rs
use crate::config::consts::PLACEHOLDER;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop every whitespace char: `"Str. Acc."` → `"Str.Acc."`.
/// Profile labels are matched in this form so spacing changes on the site don't matter.
pub fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `"Round:\n   3"` with label `"Round:"` → `"3"`.
pub fn strip_label(s: &str, label: &str) -> String {
    normalize_ws(&s.replace('\n', " ").replace(label, ""))
}

/// `"\"The Spider\""` → `"The Spider"`.
pub fn strip_quotes(s: &str) -> String {
    normalize_ws(&s.replace('"', ""))
}

/// First whitespace-separated token, or empty.
pub fn first_token(s: &str) -> String {
    s.split_whitespace().next().map(String::from).unwrap_or_default()
}

/// Split a `label: value` list item at the first colon.
/// Items without a colon (spacers, headings) yield `None`.
pub fn split_label_value(s: &str) -> Option<(String, String)> {
    let (label, value) = s.split_once(':')?;
    Some((compact(label), normalize_ws(value)))
}

/// The site's "no data" marker, exactly.
pub fn is_placeholder(s: &str) -> bool {
    s.trim() == PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_value_pairs() {
        assert_eq!(
            split_label_value("  Str. Acc.:\n      45%  "),
            Some((s!("Str.Acc."), s!("45%")))
        );
        assert_eq!(
            split_label_value("DOB: Jul 13, 1978"),
            Some((s!("DOB"), s!("Jul 13, 1978")))
        );
        assert_eq!(split_label_value("   "), None);
    }

    #[test]
    fn labels_and_quotes() {
        assert_eq!(strip_label("\n  Time format:\n  3 Rnd (5-5-5)\n", "Time format:"), "3 Rnd (5-5-5)");
        assert_eq!(strip_label("Referee:\n Herb Dean", "Referee:"), "Herb Dean");
        assert_eq!(strip_quotes("  \"The Spider\" "), "The Spider");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn tokens() {
        assert_eq!(first_token("\n  W \n  Anderson Silva"), "W");
        assert_eq!(first_token("   "), "");
    }

    #[test]
    fn placeholder_is_exact() {
        assert!(is_placeholder("--"));
        assert!(is_placeholder(" -- "));
        assert!(!is_placeholder("---"));
        assert!(!is_placeholder("0"));
    }
}
