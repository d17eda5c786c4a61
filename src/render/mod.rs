//! HTML rendering for the portfolio views.
//!
//! Every view renders to a plain string. Cards, buttons and the byline are
//! built by small template functions; all data-derived text goes through
//! [`html_escape`].

use crate::scroll::SCROLL_OFFSET_PX;
use crate::{Link, SELF_ID};

mod cards;
mod pages;
mod publication;

pub use cards::{course_card, education_card, thesis_card};
pub use pages::{author_page, home_page, not_found_page, AuthorView};
pub use publication::{
    byline, format_venue_type, publication_card, sort_publications, venue_line, SortOrder,
};

/// Per-site settings handed to every renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub self_id: String,
    pub initial_order: SortOrder,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            self_id: SELF_ID.to_string(),
            initial_order: SortOrder::Descending,
        }
    }
}

/// A rendered view plus the element ids it contains, for deep-link scrolling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedPage {
    pub title: String,
    pub body: String,
    pub anchors: Vec<String>,
}

impl RenderedPage {
    pub fn has_anchor(&self, id: &str) -> bool {
        self.anchors.iter().any(|a| a == id)
    }

    pub fn to_html(&self) -> String {
        page_shell(&self.title, &self.body)
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Lower-case, dash-separated id usable as a URL fragment.
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            id.push(c);
        } else if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }
    while id.ends_with('-') {
        id.pop();
    }
    id
}

pub fn author_href(id: &str) -> String {
    format!("/author/{}", urlencoding::encode(id))
}

/// Outlined button opening the link in a new browsing context.
pub fn link_button(link: &Link) -> String {
    format!(
        r#"<a class="button" href="{}" target="_blank" rel="noopener">{}</a>"#,
        html_escape(&link.url),
        html_escape(&link.kind.to_uppercase())
    )
}

/// Single year when both ends agree, otherwise "start - end".
pub fn date_range_label(start_year: &str, end_year: &str) -> String {
    if start_year == end_year {
        start_year.to_string()
    } else {
        format!("{} - {}", start_year, end_year)
    }
}

pub fn card_date_range(start_year: &str, end_year: &str) -> String {
    format!(
        r#"<div class="date-range">{}</div>"#,
        html_escape(&date_range_label(start_year, end_year))
    )
}

const ICONS: &[(&str, &str)] = &[
    (
        "uhasselt",
        "https://www.uhasselt.be/media/ipqjpjbk/favicon_uhasselt.jpg?width=32&height=32",
    ),
    ("orcid", "https://orcid.org/assets/icons/favicon.ico"),
    ("github", "https://github.githubassets.com/favicons/favicon.png"),
    ("scholar", "https://scholar.google.com/favicon.ico"),
    (
        "researchgate",
        "https://c5.rgstatic.net/m/42199702882742/images/favicon/favicon-32x32.png",
    ),
];

pub fn icon_for(kind: &str) -> Option<&'static str> {
    ICONS.iter().find(|(k, _)| *k == kind).map(|(_, url)| *url)
}

/// Indeterminate progress indicator and nothing else.
pub fn loading_page() -> RenderedPage {
    RenderedPage {
        title: "Loading".to_string(),
        body: r#"<div class="progress" role="progressbar" aria-busy="true"></div>"#.to_string(),
        anchors: Vec::new(),
    }
}

pub fn error_page(message: &str) -> RenderedPage {
    RenderedPage {
        title: "Error".to_string(),
        body: format!(
            r#"<p class="error">Could not load the site data: {}</p>"#,
            html_escape(message)
        ),
        anchors: Vec::new(),
    }
}

pub fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}{}</style>
</head>
<body>
    <main class="container">
{}
    </main>
</body>
</html>
"#,
        html_escape(title),
        CSS,
        scroll_css(),
        body
    )
}

/// Smooth scrolling to fragment targets, stopping short of the page top.
fn scroll_css() -> String {
    format!(
        "html {{ scroll-behavior: smooth; }}\nsection, .card {{ scroll-margin-top: {}px; }}\n",
        SCROLL_OFFSET_PX
    )
}

/// Static stand-in for a redirect: meta refresh, plus a script so the
/// fragment survives the hop.
pub fn redirect_page(to: &str) -> String {
    let to = html_escape(to);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="refresh" content="0; url={to}">
    <link rel="canonical" href="{to}">
    <title>Redirecting</title>
    <script>location.replace("{to}" + location.hash);</script>
</head>
<body>
    <p><a href="{to}">Continue</a></p>
</body>
</html>
"#
    )
}

const CSS: &str = r#"
.container { max-width: 900px; margin: 0 auto; padding: 2rem 1rem; font-family: sans-serif; }
.card { border: 1px solid #ddd; border-radius: 4px; padding: 1rem; margin-bottom: 1rem; }
.card-row { display: flex; justify-content: space-between; gap: 1rem; }
.card-title { font-weight: 600; margin: 0; }
.secondary { color: #666; }
.date-range { min-width: 100px; text-align: right; color: #666; font-weight: 500; }
.button { display: inline-block; border: 1px solid #1976d2; border-radius: 4px; padding: 2px 8px; margin-right: 0.5rem; color: #1976d2; text-decoration: none; font-size: 0.8rem; }
.progress { width: 40px; height: 40px; border: 4px solid #ddd; border-top-color: #1976d2; border-radius: 50%; }
"#;
