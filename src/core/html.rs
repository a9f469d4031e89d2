// src/core/html.rs
// Thin helpers over `scraper` for class-list selection and positional access.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};
use super::sanitize::normalize_ws;

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css: s!(css),
        reason: format!("{e:?}"),
    })
}

/// `("a", "b-link b-link_style_black")` → `a.b-link.b-link_style_black`.
/// Matches elements carrying *all* of the listed classes.
pub fn class_selector(tag: &str, classes: &str) -> Result<Selector> {
    let mut css = s!(tag);
    for class in classes.split_whitespace() {
        css.push('.');
        css.push_str(class);
    }
    parse_selector(&css)
}

/// Raw concatenated text of an element and its descendants.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text with whitespace runs collapsed and ends trimmed.
pub fn clean_text(el: ElementRef<'_>) -> String {
    normalize_ws(&raw_text(el))
}

/// The `n`-th element of a selection, or a `MissingElement` naming what was expected.
pub fn nth<'a>(
    mut it: impl Iterator<Item = ElementRef<'a>>,
    n: usize,
    context: &str,
) -> Result<ElementRef<'a>> {
    it.nth(n)
        .ok_or_else(|| ScrapeError::missing(format!("{context} #{n}")))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &'static str, context: &'static str) -> Result<&'a str> {
    el.value()
        .attr(name)
        .ok_or(ScrapeError::MissingAttribute { context, attr: name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn class_selector_requires_every_class() {
        let doc = Html::parse_fragment(
            r#"<a class="b-link b-link_style_black" href="1">One</a>
               <a class="b-link" href="2">Two</a>
               <a class="b-link_style_black b-link extra" href="3">Three</a>"#,
        );
        let sel = class_selector("a", "b-link b-link_style_black").unwrap();
        let hrefs: Vec<&str> = doc
            .select(&sel)
            .map(|a| a.value().attr("href").unwrap())
            .collect();
        assert_eq!(hrefs, ["1", "3"]);
    }

    #[test]
    fn nth_reports_position_when_missing() {
        let doc = Html::parse_fragment("<p>a</p><p>b</p>");
        let sel = parse_selector("p").unwrap();
        assert_eq!(clean_text(nth(doc.select(&sel), 1, "paragraph").unwrap()), "b");

        let err = nth(doc.select(&sel), 2, "paragraph").unwrap_err();
        assert_eq!(err.to_string(), "element not found: paragraph #2");
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<div>\n   Round:\n\n   3 \n</div>");
        let sel = parse_selector("div").unwrap();
        let div = doc.select(&sel).next().unwrap();
        assert_eq!(clean_text(div), "Round: 3");
    }

    #[test]
    fn attr_names_context() {
        let doc = Html::parse_fragment("<a>no link</a>");
        let sel = parse_selector("a").unwrap();
        let a = doc.select(&sel).next().unwrap();
        let err = attr(a, "href", "fighter link").unwrap_err();
        assert_eq!(err.to_string(), "fighter link has no `href` attribute");
    }
}
