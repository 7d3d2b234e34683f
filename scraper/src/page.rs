//! Parsed careers page: posting sections and pagination markers.

use scraper::{ElementRef, Html, Selector};

use crate::ScrapeError;

/// One `<section>` per job posting.
pub const SECTION_SELECTOR: &str = "section.crr_app_stt";

const PAGINATION_CONTAINERS: [&str; 4] = [
    "div.pagination",
    "nav.pagination",
    "div.pager",
    "ul.pagination",
];

const PAGINATION_LINK_WORDS: [&str; 5] = ["next", "more", "»", ">", "page"];

pub(crate) fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(format!("'{selector}': {e:?}")))
}

pub struct Page {
    document: Html,
    sections: Selector,
    containers: Vec<Selector>,
    links: Selector,
    buttons: Selector,
}

impl Page {
    /// Malformed markup never fails; it just yields fewer matches.
    pub fn parse(html: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            document: Html::parse_document(html),
            sections: compile(SECTION_SELECTOR)?,
            containers: PAGINATION_CONTAINERS
                .iter()
                .map(|selector| compile(selector))
                .collect::<Result<Vec<_>, _>>()?,
            links: compile("a")?,
            buttons: compile("button")?,
        })
    }

    /// Posting sections in document order.
    pub fn sections(&self) -> Vec<ElementRef<'_>> {
        self.document.select(&self.sections).collect()
    }

    /// Whether the page shows any pagination UI. Only the first page is ever scraped.
    pub fn has_pagination(&self) -> bool {
        let lowered = |element: ElementRef<'_>| element.text().collect::<String>().to_lowercase();

        self.containers
            .iter()
            .any(|selector| self.document.select(selector).next().is_some())
            || self.document.select(&self.links).any(|link| {
                let text = lowered(link);
                PAGINATION_LINK_WORDS.iter().any(|word| text.contains(word))
            })
            || self
                .document
                .select(&self.buttons)
                .any(|button| lowered(button).contains("load more"))
    }
}
