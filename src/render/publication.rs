use crate::date;
use crate::resolve::AuthorResolver;
use crate::Publication;

use super::{anchor_id, author_href, html_escape, link_button, SiteConfig};

const ORCID_ICON: &str = "https://info.orcid.org/wp-content/uploads/2019/11/orcid_16x16.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
        }
    }

    /// Label of the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Descending => "Newest First",
            SortOrder::Ascending => "Oldest First",
        }
    }
}

/// Stable sort by date value; equal dates keep their input order.
pub fn sort_publications(publications: &[Publication], order: SortOrder) -> Vec<&Publication> {
    let mut sorted: Vec<&Publication> = publications.iter().collect();
    sorted.sort_by(|a, b| {
        let (a, b) = (date::sort_key(&a.date), date::sort_key(&b.date));
        match order {
            SortOrder::Descending => b.cmp(&a),
            SortOrder::Ascending => a.cmp(&b),
        }
    });
    sorted
}

/// "book-chapter" becomes "Book Chapter".
pub fn format_venue_type(kind: &str) -> String {
    kind.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Authors in citation order. Unknown keys render as the raw key.
pub fn byline(author_ids: &[String], resolver: AuthorResolver<'_>, self_id: &str) -> String {
    author_ids
        .iter()
        .map(|id| {
            let Some(author) = resolver.resolve(id) else {
                return html_escape(id);
            };

            let name = html_escape(&author.full_name());
            let mut entry = if id == self_id {
                format!("<strong>{}</strong>", name)
            } else {
                format!(r#"<a href="{}">{}</a>"#, html_escape(&author_href(id)), name)
            };

            if let Some(orcid) = author.link("orcid") {
                entry.push_str(&format!(
                    r#" <a class="orcid" href="{}" target="_blank" rel="noopener" title="View ORCID profile"><img src="{}" alt="ORCID iD" width="10" height="10"></a>"#,
                    html_escape(&orcid.url),
                    ORCID_ICON
                ));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn venue_line(publication: &Publication) -> String {
    let venue = &publication.venue;
    let mut line = format!(
        r#"{} (<a href="{}" target="_blank" rel="noopener">{}</a>) &middot; {}"#,
        html_escape(&venue.name),
        html_escape(&venue.url),
        html_escape(&venue.short),
        format_venue_type(venue.kind.as_str())
    );
    if let Some(publisher) = &venue.publisher {
        line.push_str(&format!(", <em>{}</em>", html_escape(publisher)));
    }
    if publication.presented {
        line.push_str(r#" &middot; <span class="presented">Presented</span>"#);
    }
    line
}

pub fn publication_card(
    publication: &Publication,
    resolver: AuthorResolver<'_>,
    config: &SiteConfig,
) -> String {
    indexed_publication_card(publication, None, resolver, config)
}

/// `index` is the position in the loaded collection; client-side re-sorting
/// uses it to break date ties the same way [`sort_publications`] does.
pub(super) fn indexed_publication_card(
    publication: &Publication,
    index: Option<usize>,
    resolver: AuthorResolver<'_>,
    config: &SiteConfig,
) -> String {
    let buttons: String = publication.links.iter().map(link_button).collect();
    let sort_date = date::sort_key(&publication.date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let index_attr = index
        .map(|i| format!(r#" data-index="{}""#, i))
        .unwrap_or_default();

    format!(
        r#"<article class="card publication" id="{}" data-date="{}"{}>
    <div class="card-row">
        <h3 class="card-title">{}</h3>
        <div class="date-range">{}</div>
    </div>
    <p class="byline secondary">{}</p>
    <p class="venue secondary">{}</p>
    <div class="links">{}</div>
</article>
"#,
        anchor_id(&publication.title),
        sort_date,
        index_attr,
        html_escape(&publication.title),
        html_escape(&date::year_label(&publication.date)),
        byline(&publication.authors, resolver, &config.self_id),
        venue_line(publication),
        buttons
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_types_are_capitalised_per_segment() {
        assert_eq!(format_venue_type("book-chapter"), "Book Chapter");
        assert_eq!(format_venue_type("journal"), "Journal");
        assert_eq!(format_venue_type("a--b"), "A  B");
    }

    #[test]
    fn toggle_label_follows_order() {
        assert_eq!(SortOrder::Descending.label(), "Newest First");
        assert_eq!(SortOrder::Descending.toggled().label(), "Oldest First");
    }
}
