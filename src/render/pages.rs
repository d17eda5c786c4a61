use crate::load::Snapshot;
use crate::resolve::AuthorResolver;

use super::{
    anchor_id, course_card, education_card, html_escape, icon_for, link_button,
    publication::indexed_publication_card, publication_card, sort_publications, thesis_card,
    RenderedPage, SiteConfig, SortOrder,
};

/// Outcome of mounting the author-scoped view.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorView {
    /// The requested id is the site's own subject.
    RedirectHome,
    InvalidId,
    NotFound,
    Found(RenderedPage),
}

impl AuthorView {
    /// The page to show, `None` when the view redirects instead.
    pub fn into_page(self) -> Option<RenderedPage> {
        match self {
            AuthorView::RedirectHome => None,
            AuthorView::InvalidId => Some(message_page("Invalid author id.")),
            AuthorView::NotFound => Some(message_page("Author not found.")),
            AuthorView::Found(page) => Some(page),
        }
    }
}

fn message_page(message: &str) -> RenderedPage {
    RenderedPage {
        title: message.trim_end_matches('.').to_string(),
        body: format!("<p>{}</p>", html_escape(message)),
        anchors: Vec::new(),
    }
}

pub fn not_found_page(path: &str) -> RenderedPage {
    message_page(&format!("No page at {}.", path))
}

fn order_attr(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Descending => "desc",
        SortOrder::Ascending => "asc",
    }
}

/// Re-sorts the publication cards on every toggle: by `data-date`, ties by
/// `data-index`, exactly like the server-side ordering.
const SORT_TOGGLE_SCRIPT: &str = r#"<script>
(function () {
    var button = document.querySelector(".sort-toggle");
    var list = document.getElementById("publication-list");
    if (!button || !list) return;
    button.addEventListener("click", function () {
        var descending = button.dataset.order !== "desc";
        var cards = Array.prototype.slice.call(list.querySelectorAll(".publication"));
        cards.sort(function (a, b) {
            var x = a.dataset.date, y = b.dataset.date;
            if (x !== y) return (x < y ? -1 : 1) * (descending ? -1 : 1);
            return Number(a.dataset.index) - Number(b.dataset.index);
        });
        cards.forEach(function (card) { list.appendChild(card); });
        button.dataset.order = descending ? "desc" : "asc";
        button.textContent = descending ? "@DESC@" : "@ASC@";
    });
})();
</script>
"#;

fn sort_toggle_script() -> String {
    SORT_TOGGLE_SCRIPT
        .replace("@DESC@", SortOrder::Descending.label())
        .replace("@ASC@", SortOrder::Ascending.label())
}

fn section(id: &str, heading: &str, extra: &str, cards: &str) -> String {
    format!(
        r#"<section id="{}">
<div class="card-row"><h2>{}</h2>{}</div>
{}</section>
<hr>
"#,
        id, heading, extra, cards
    )
}

pub fn home_page(snapshot: &Snapshot, order: SortOrder, config: &SiteConfig) -> RenderedPage {
    let resolver = AuthorResolver::new(&snapshot.authors);
    let me = resolver.resolve(&config.self_id);
    let name = resolver.display_name(&config.self_id);
    let mut anchors = Vec::new();
    let mut body = String::new();

    let icons: String = me
        .map(|author| {
            author
                .links
                .iter()
                .filter_map(|link| {
                    icon_for(&link.kind).map(|icon| {
                        format!(
                            r#"<a href="{}" target="_blank" rel="noopener"><img src="{}" alt="{}" width="24" height="24"></a>"#,
                            html_escape(&link.url),
                            html_escape(icon),
                            html_escape(&link.kind)
                        )
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    body.push_str(&format!(
        r#"<header class="card-row"><h1>{}</h1><nav class="icons">{}</nav></header>
<hr>
"#,
        html_escape(&name),
        icons
    ));

    let education: String = snapshot.education.iter().map(education_card).collect();
    anchors.push("education".to_string());
    anchors.extend(snapshot.education.iter().map(|e| anchor_id(&e.title)));
    body.push_str(&section("education", "Education", "", &education));

    if !snapshot.theses.is_empty() {
        let theses: String = snapshot.theses.iter().map(thesis_card).collect();
        anchors.push("theses".to_string());
        anchors.extend(snapshot.theses.iter().map(|t| anchor_id(&t.title)));
        body.push_str(&section("theses", "Supervised Theses", "", &theses));
    }

    if !snapshot.courses.is_empty() {
        let courses: String = snapshot.courses.iter().map(course_card).collect();
        anchors.push("courses".to_string());
        anchors.extend(snapshot.courses.iter().map(|c| anchor_id(&c.title)));
        body.push_str(&section("courses", "Courses", "", &courses));
    }

    let sorted = sort_publications(&snapshot.publications, order);
    let cards: String = sorted
        .iter()
        .map(|p| {
            let index = snapshot
                .publications
                .iter()
                .position(|q| std::ptr::eq(q, *p));
            indexed_publication_card(p, index, resolver, config)
        })
        .collect();
    let toggle = format!(
        r#"<button class="button sort-toggle" type="button" data-order="{}">{}</button>"#,
        order_attr(order),
        order.label()
    );
    anchors.push("publications".to_string());
    anchors.extend(sorted.iter().map(|p| anchor_id(&p.title)));
    body.push_str(&section(
        "publications",
        "Publications",
        &toggle,
        &format!(r#"<div id="publication-list">{}</div>"#, cards),
    ));
    body.push_str(&sort_toggle_script());

    RenderedPage {
        title: name,
        body,
        anchors,
    }
}

pub fn author_page(snapshot: &Snapshot, id: &str, config: &SiteConfig) -> AuthorView {
    if id.is_empty() {
        return AuthorView::InvalidId;
    }
    if id == config.self_id {
        return AuthorView::RedirectHome;
    }

    let resolver = AuthorResolver::new(&snapshot.authors);
    let Some(author) = resolver.resolve(id) else {
        return AuthorView::NotFound;
    };

    let own: Vec<_> = snapshot
        .publications
        .iter()
        .filter(|p| p.has_author(id))
        .cloned()
        .collect();
    let sorted = sort_publications(&own, SortOrder::Descending);

    let buttons: String = author.links.iter().map(link_button).collect();
    let cards: String = sorted
        .iter()
        .map(|p| publication_card(p, resolver, config))
        .collect();

    let mut anchors = vec!["publications".to_string()];
    anchors.extend(sorted.iter().map(|p| anchor_id(&p.title)));

    let body = format!(
        r#"<header>
<h1>{}</h1>
<div class="links">{}</div>
</header>
<hr>
<section id="publications">
<h2>{}'s Publications with {}</h2>
{}</section>
"#,
        html_escape(&author.heading_name()),
        buttons,
        html_escape(&author.full_name()),
        html_escape(&resolver.display_name(&config.self_id)),
        cards
    );

    AuthorView::Found(RenderedPage {
        title: author.full_name(),
        body,
        anchors,
    })
}
