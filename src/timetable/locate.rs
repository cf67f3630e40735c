// src/timetable/locate.rs

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use tracing::{debug, trace};

use super::normalized_text;
use crate::error::{ExtractError, Result};

/// Third element child of `body`, which must be a `table`.
pub const DEFAULT_SELECTOR: &str = "body > table:nth-child(3)";

/// How to find the timetable table inside a document.
#[derive(Debug, Clone)]
pub enum TableLocator {
    /// First element matching a CSS selector.
    Selector(String),
    /// First `table` whose `caption`, or failing that whose nearest
    /// preceding element sibling, has text matching the pattern.
    Heading(Regex),
}

impl Default for TableLocator {
    fn default() -> Self {
        TableLocator::Selector(DEFAULT_SELECTOR.to_owned())
    }
}

impl fmt::Display for TableLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableLocator::Selector(css) => write!(f, "selector `{}`", css),
            TableLocator::Heading(re) => write!(f, "heading /{}/", re.as_str()),
        }
    }
}

impl TableLocator {
    pub fn locate<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>> {
        let found = match self {
            TableLocator::Selector(css) => {
                let sel = parse_selector(css)?;
                doc.select(&sel).next()
            }
            TableLocator::Heading(re) => {
                let sel = parse_selector("table")?;
                doc.select(&sel).find(|table| match heading_text(*table) {
                    Some(text) => {
                        trace!(heading = %text, "candidate table");
                        re.is_match(&text)
                    }
                    None => false,
                })
            }
        };
        match found {
            Some(el) => {
                debug!(locator = %self, element = el.value().name(), "located table");
                Ok(el)
            }
            None => Err(ExtractError::TableNotFound {
                locator: self.to_string(),
            }),
        }
    }
}

pub(crate) fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css.to_owned(),
        reason: e.to_string(),
    })
}

/// Caption text, else the text of the element right before the table.
fn heading_text(table: ElementRef<'_>) -> Option<String> {
    let caption = table
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "caption");
    if let Some(caption) = caption {
        return Some(normalized_text(caption));
    }
    table
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .map(normalized_text)
}
