//! Per-posting field extraction.
//!
//! Each output field is described by a [`FieldRule`] in [`FIELD_RULES`]; the
//! [`JobExtractor`] evaluates every rule against one posting section. A missing
//! element yields an empty string. A broken traversal step yields a
//! [`StructuralError`] and the posting is skipped as a whole.

use std::collections::HashMap;

use careers_common::{CaptureInfo, JobRecord};
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::page::compile;
use crate::{ScrapeError, StructuralError};

/// Experience phrasings, tried in order. The first pattern that matches wins,
/// even if a later one would match a longer span.
pub const EXPERIENCE_PATTERNS: [&str; 4] = [
    r"(?i)\d+\+?\s*years?\s*of\s*experience",
    r"(?i)Minimum\s*of\s*\d+\s*years",
    r"(?i)\d+\+\s*years?\s*in",
    r"(?i)minimum\s*\d+\s*years",
];

pub const SKILLS_HEADINGS: [&str; 4] = [
    "Preferred Skills",
    "Required Skills",
    "Must-Have Skills",
    "Technical Stack",
];

const MAILTO: &str = "mailto:";

/// Output slot on [`JobRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobTitle,
    JobCategory,
    Location,
    ExperienceRequired,
    PostingDate,
    JobDescriptionSummary,
    SkillsRequired,
    ContactEmail,
    CompanyBenefits,
    Salary,
    JobUrl,
    JobId,
}

impl Field {
    fn slot(self, job: &mut JobRecord) -> &mut String {
        match self {
            Self::JobTitle => &mut job.job_title,
            Self::JobCategory => &mut job.job_category,
            Self::Location => &mut job.location,
            Self::ExperienceRequired => &mut job.experience_required,
            Self::PostingDate => &mut job.posting_date,
            Self::JobDescriptionSummary => &mut job.job_description_summary,
            Self::SkillsRequired => &mut job.skills_required,
            Self::ContactEmail => &mut job.contact_email,
            Self::CompanyBenefits => &mut job.company_benefits,
            Self::Salary => &mut job.salary,
            Self::JobUrl => &mut job.job_url,
            Self::JobId => &mut job.job_id,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Text of the first element matching the selector.
    Text(&'static str),
    /// Attribute of the first element matching the selector.
    Attr(&'static str, &'static str),
    /// First paragraph whose text contains the needle.
    ParagraphContaining(&'static str),
    /// `<strong>` with exactly this text, then the next `tag` sibling of its parent.
    AfterHeading {
        heading: &'static str,
        sibling: &'static str,
    },
    /// Regex scan of the whole section text.
    Experience,
    /// Items of the `<ul>` after every `<strong>` naming one of the keywords.
    HeadingLists(&'static [&'static str]),
    /// First `mailto:` link, prefix stripped.
    MailTo,
    /// Never published by the source.
    Blank,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub strategy: Strategy,
}

const fn rule(field: Field, strategy: Strategy) -> FieldRule {
    FieldRule { field, strategy }
}

pub const FIELD_RULES: [FieldRule; 12] = [
    rule(Field::JobTitle, Strategy::Text("h3.crr_app_hh")),
    rule(Field::JobCategory, Strategy::Text("span.crr_app_tp.bluecrr")),
    rule(Field::Location, Strategy::Text("span.crr_app_plc")),
    rule(Field::JobUrl, Strategy::Attr("a.crr_app_nw", "href")),
    rule(Field::JobId, Strategy::Attr("a.crr_app_nw", "datatitle")),
    rule(Field::PostingDate, Strategy::ParagraphContaining("Posted on")),
    rule(
        Field::JobDescriptionSummary,
        Strategy::AfterHeading {
            heading: "What's important to us:",
            sibling: "p",
        },
    ),
    rule(Field::ExperienceRequired, Strategy::Experience),
    rule(Field::SkillsRequired, Strategy::HeadingLists(&SKILLS_HEADINGS)),
    rule(Field::ContactEmail, Strategy::MailTo),
    rule(
        Field::CompanyBenefits,
        Strategy::AfterHeading {
            heading: "What Company Offers:",
            sibling: "p",
        },
    ),
    rule(Field::Salary, Strategy::Blank),
];

/// Compiled form of [`FIELD_RULES`].
pub struct JobExtractor {
    rules: Vec<FieldRule>,
    by_css: HashMap<&'static str, Selector>,
    experience: Vec<Regex>,
    strong: Selector,
    paragraph: Selector,
    list_item: Selector,
    link: Selector,
}

impl JobExtractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_rules(&FIELD_RULES)
    }

    pub fn with_rules(rules: &[FieldRule]) -> Result<Self, ScrapeError> {
        let mut by_css = HashMap::new();
        for rule in rules {
            if let Strategy::Text(css) | Strategy::Attr(css, _) = rule.strategy {
                if !by_css.contains_key(css) {
                    by_css.insert(css, compile(css)?);
                }
            }
        }

        Ok(Self {
            rules: rules.to_vec(),
            by_css,
            experience: EXPERIENCE_PATTERNS
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<Result<Vec<_>, _>>()?,
            strong: compile("strong")?,
            paragraph: compile("p")?,
            list_item: compile("li")?,
            link: compile("a[href]")?,
        })
    }

    /// Builds one record from a posting section.
    pub fn extract(
        &self,
        section: ElementRef<'_>,
        capture: &CaptureInfo,
    ) -> Result<JobRecord, StructuralError> {
        let mut job = JobRecord::stamped(capture);
        for rule in &self.rules {
            let value = self.evaluate(rule.strategy, section)?;
            debug!(field = ?rule.field, %value, "extracted");
            *rule.field.slot(&mut job) = value;
        }
        Ok(job)
    }

    fn evaluate(&self, strategy: Strategy, section: ElementRef<'_>) -> Result<String, StructuralError> {
        let value = match strategy {
            Strategy::Text(css) => self
                .first(section, css)
                .map(stripped_text)
                .unwrap_or_default(),
            Strategy::Attr(css, attr) => self
                .first(section, css)
                .and_then(|element| element.value().attr(attr))
                .unwrap_or_default()
                .to_string(),
            Strategy::ParagraphContaining(needle) => section
                .select(&self.paragraph)
                .find(|p| p.text().collect::<String>().contains(needle))
                .map(stripped_text)
                .unwrap_or_default(),
            Strategy::AfterHeading { heading, sibling } => {
                match self.headings(section, |text| text == heading).next() {
                    Some(strong) => {
                        parent_sibling(strong, sibling)?.map(stripped_text).unwrap_or_default()
                    }
                    None => String::new(),
                }
            }
            Strategy::Experience => self.experience(&section.text().collect::<String>()),
            Strategy::HeadingLists(keywords) => {
                let mut items = Vec::new();
                for strong in self.headings(section, |text| keywords.iter().any(|k| text.contains(k))) {
                    if let Some(list) = parent_sibling(strong, "ul")? {
                        items.extend(
                            list.select(&self.list_item)
                                .map(stripped_text)
                                .filter(|item| !item.is_empty()),
                        );
                    }
                }
                items.join("; ")
            }
            Strategy::MailTo => section
                .select(&self.link)
                .filter_map(|a| a.value().attr("href"))
                .find(|href| href.contains(MAILTO))
                .map(|href| href.replace(MAILTO, ""))
                .unwrap_or_default(),
            Strategy::Blank => String::new(),
        };
        Ok(value)
    }

    /// First experience phrase in `text`, by pattern priority.
    pub fn experience(&self, text: &str) -> String {
        self.experience
            .iter()
            .find_map(|re| re.find(text))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn first<'a>(&self, section: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
        self.by_css.get(css).and_then(|selector| section.select(selector).next())
    }

    fn headings<'a, 's, F>(
        &'s self,
        section: ElementRef<'a>,
        matches: F,
    ) -> impl Iterator<Item = ElementRef<'a>> + 's
    where
        F: Fn(&str) -> bool + 's,
        'a: 's,
    {
        section
            .select(&self.strong)
            .filter(move |strong| matches(&stripped_text(*strong)))
    }
}

/// Visible text with each text node trimmed and joined by single spaces.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Headings sit inside a wrapper (`<p><strong>..</strong></p>`); the content
/// is the wrapper's next sibling with the given tag.
///
/// A heading selected from inside a posting section always has at least the
/// section as its parent, so `DetachedHeading` only fires for a heading that
/// is not attached to any element.
fn parent_sibling<'a>(heading: ElementRef<'a>, tag: &str) -> Result<Option<ElementRef<'a>>, StructuralError> {
    let parent = heading
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or_else(|| StructuralError::DetachedHeading {
            heading: stripped_text(heading),
        })?;

    Ok(parent
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == tag))
}
