use portfolio::render::RenderedPage;
use portfolio::router::{navigate, Navigation, Route};
use portfolio::scroll::{DeepLink, SCROLL_OFFSET_PX};

fn page_with(anchors: &[&str]) -> RenderedPage {
    RenderedPage {
        anchors: anchors.iter().map(|a| a.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_self_author_redirects_home() {
    assert_eq!(
        navigate("/author/svanbrabant", "svanbrabant"),
        Navigation::Redirect("/".to_string())
    );
    assert_eq!(
        navigate("/author/svanbrabant/", "svanbrabant"),
        Navigation::Redirect("/".to_string())
    );
}

#[test]
fn test_self_author_redirect_keeps_fragment() {
    assert_eq!(
        navigate("/author/svanbrabant#publications", "svanbrabant"),
        Navigation::Redirect("/#publications".to_string())
    );
    assert_eq!(
        navigate("/author/svanbrabant#", "svanbrabant"),
        Navigation::Redirect("/".to_string())
    );

    match navigate("/#publications", "svanbrabant") {
        Navigation::Render(location) => {
            assert_eq!(location.route, Route::Home);
            assert_eq!(location.fragment.as_deref(), Some("publications"));
        }
        other => panic!("unexpected navigation {other:?}"),
    }
}

#[test]
fn test_other_author_renders_author_route() {
    match navigate("/author/jdoe#paper-a", "svanbrabant") {
        Navigation::Render(location) => {
            assert_eq!(location.route, Route::Author("jdoe".to_string()));
            assert_eq!(location.fragment.as_deref(), Some("paper-a"));
        }
        other => panic!("unexpected navigation {other:?}"),
    }
}

#[test]
fn test_scroll_to_existing_anchor() {
    let mut deep_link = DeepLink::new();
    let generation = deep_link.navigate(Some("publications"));

    let scroll = deep_link
        .content_ready(generation, &page_with(&["education", "publications"]))
        .unwrap();

    assert_eq!(scroll.id, "publications");
    assert_eq!(scroll.offset, SCROLL_OFFSET_PX);
    assert!(scroll.smooth);
    assert!(deep_link.pending().is_none());
}

#[test]
fn test_missing_anchor_does_nothing() {
    let mut deep_link = DeepLink::new();
    let generation = deep_link.navigate(Some("nowhere"));

    assert!(deep_link
        .content_ready(generation, &page_with(&["publications"]))
        .is_none());
}

#[test]
fn test_no_fragment_does_nothing() {
    let mut deep_link = DeepLink::new();
    let generation = deep_link.navigate(None);

    assert!(deep_link
        .content_ready(generation, &page_with(&["publications"]))
        .is_none());
}

#[test]
fn test_superseded_navigation_never_scrolls() {
    let mut deep_link = DeepLink::new();
    let stale = deep_link.navigate(Some("publications"));
    let current = deep_link.navigate(Some("education"));

    let page = page_with(&["education", "publications"]);
    assert!(deep_link.content_ready(stale, &page).is_none());

    let scroll = deep_link.content_ready(current, &page).unwrap();
    assert_eq!(scroll.id, "education");
}

#[test]
fn test_cancelled_target_never_scrolls() {
    let mut deep_link = DeepLink::new();
    let generation = deep_link.navigate(Some("publications"));
    deep_link.cancel();

    assert!(deep_link
        .content_ready(generation, &page_with(&["publications"]))
        .is_none());
}
