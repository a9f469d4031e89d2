// src/specs/events.rs
// Listing page (all completed events) and single event pages.

use scraper::Html;
use tracing::debug;

use crate::config::site::Classes;
use crate::core::html::{attr, class_selector, clean_text, parse_selector};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLink {
    /// As printed on the listing, e.g. `June 29, 2024`.
    pub date: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterLink {
    pub name: String,
    pub url: String,
}

/// Fighter anchors found on one event page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FighterLinks {
    pub links: Vec<FighterLink>,
    /// Anchors without an `href`; dropped.
    pub malformed: usize,
}

/// Listing rows: `<i class="b-statistics__table-content"><a href=…>Name</a><span>Date</span></i>`.
pub fn parse_listing(doc: &Html, classes: &Classes) -> Result<Vec<EventLink>> {
    let row_sel = class_selector("i", classes.event_row)?;
    let a_sel = parse_selector("a")?;
    let span_sel = parse_selector("span")?;

    let mut out = Vec::new();
    for row in doc.select(&row_sel) {
        let a = row
            .select(&a_sel)
            .next()
            .ok_or_else(|| ScrapeError::missing("event link in listing row"))?;
        let url = attr(a, "href", "event link")?.trim().to_string();
        let date = row
            .select(&span_sel)
            .next()
            .map(clean_text)
            .ok_or_else(|| ScrapeError::missing(format!("event date for {url}")))?;
        out.push(EventLink { date, url });
    }
    debug!(events = out.len(), "parsed listing");
    Ok(out)
}

/// Every fighter anchor on an event page, in page order.
pub fn parse_fighter_links(doc: &Html, classes: &Classes) -> Result<FighterLinks> {
    let sel = class_selector("a", classes.fighter_link)?;

    let mut out = FighterLinks::default();
    for a in doc.select(&sel) {
        match a.value().attr("href") {
            Some(href) => out.links.push(FighterLink {
                name: clean_text(a),
                url: href.trim().to_string(),
            }),
            None => {
                debug!(text = %clean_text(a), "fighter anchor without href");
                out.malformed += 1;
            }
        }
    }
    Ok(out)
}

/// Bout detail URLs from an event page's clickable rows (`data-link`).
pub fn parse_bout_links(doc: &Html, classes: &Classes) -> Result<Vec<String>> {
    let sel = class_selector("tr", classes.bout_row)?;
    doc.select(&sel)
        .map(|tr| attr(tr, "data-link", "bout row").map(|s| s.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <table class="b-statistics__table-events"><tbody>
          <tr class="b-statistics__table-row">
            <td class="b-statistics__table-col">
              <i class="b-statistics__table-content">
                <a href="http://ufcstats.com/event-details/aaa" class="b-link b-link_style_black">
                  UFC 303: Pereira vs. Prochazka 2
                </a>
                <span class="b-statistics__date">
                  June 29, 2024
                </span>
              </i>
            </td>
          </tr>
          <tr class="b-statistics__table-row">
            <td class="b-statistics__table-col">
              <i class="b-statistics__table-content">
                <a href="http://ufcstats.com/event-details/bbb" class="b-link b-link_style_black">UFC 302</a>
                <span class="b-statistics__date">June 01, 2024</span>
              </i>
            </td>
          </tr>
        </tbody></table>
    "#;

    #[test]
    fn listing_yields_date_and_url_in_order() {
        let doc = Html::parse_document(LISTING);
        let events = parse_listing(&doc, &Classes::default()).unwrap();
        assert_eq!(events, vec![
            EventLink { date: s!("June 29, 2024"), url: s!("http://ufcstats.com/event-details/aaa") },
            EventLink { date: s!("June 01, 2024"), url: s!("http://ufcstats.com/event-details/bbb") },
        ]);
    }

    #[test]
    fn listing_row_without_link_is_an_error() {
        let doc = Html::parse_document(
            r#"<i class="b-statistics__table-content"><span>June 29, 2024</span></i>"#,
        );
        assert!(matches!(
            parse_listing(&doc, &Classes::default()),
            Err(ScrapeError::MissingElement { .. })
        ));
    }

    #[test]
    fn fighter_links_drop_anchors_without_href() {
        let doc = Html::parse_document(r#"
            <table><tr>
              <td><p><a class="b-link b-link_style_black" href="http://ufcstats.com/fighter-details/1"> Alex Pereira </a></p>
                  <p><a class="b-link b-link_style_black" href="http://ufcstats.com/fighter-details/2">Jiri Prochazka</a></p></td>
              <td><p><a class="b-link b-link_style_black">Nobody</a></p></td>
              <td><p><a class="b-link" href="http://ufcstats.com/other">Not a fighter</a></p></td>
            </tr></table>
        "#);
        let found = parse_fighter_links(&doc, &Classes::default()).unwrap();
        assert_eq!(found.malformed, 1);
        assert_eq!(found.links, vec![
            FighterLink { name: s!("Alex Pereira"), url: s!("http://ufcstats.com/fighter-details/1") },
            FighterLink { name: s!("Jiri Prochazka"), url: s!("http://ufcstats.com/fighter-details/2") },
        ]);
    }

    #[test]
    fn bout_links_come_from_data_link() {
        let doc = Html::parse_document(r#"
            <table><tbody>
              <tr class="b-fight-details__table-row b-fight-details__table-row__hover js-fight-details-click"
                  data-link="http://ufcstats.com/fight-details/f1"><td>a</td></tr>
              <tr class="b-fight-details__table-row"><td>header-ish</td></tr>
              <tr class="b-fight-details__table-row b-fight-details__table-row__hover js-fight-details-click"
                  data-link="http://ufcstats.com/fight-details/f2"><td>b</td></tr>
            </tbody></table>
        "#);
        let links = parse_bout_links(&doc, &Classes::default()).unwrap();
        assert_eq!(links, ["http://ufcstats.com/fight-details/f1", "http://ufcstats.com/fight-details/f2"]);
    }
}
