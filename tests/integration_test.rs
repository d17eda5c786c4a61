use portfolio::build::{run_async, BuildArgs};
use portfolio::load::{Resource, Source};
use portfolio::render::SiteConfig;
use clap::Parser;
use portfolio::show::{run_async as run_async_show, show_path, ShowArgs};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn site_data() -> Vec<(Resource, Value)> {
    vec![
        (
            Resource::Authors,
            json!({
                "svanbrabant": {
                    "firstName": "Sebe",
                    "lastName": "Vanbrabant",
                    "links": [{"type": "orcid", "url": "https://orcid.org/0000-0001"}]
                },
                "jdoe": {"firstName": "Jane", "lastName": "Doe", "links": []},
                "j doe": {"firstName": "Jan", "lastName": "Doe", "links": []}
            }),
        ),
        (
            Resource::Publications,
            json!([
                {
                    "title": "Explaining Latent Spaces",
                    "authors": ["svanbrabant", "jdoe"],
                    "date": "2020-01-01",
                    "venue": {"name": "Journal", "parent": "", "short": "J", "type": "journal", "url": "https://j.org"},
                    "links": [{"type": "doi", "url": "https://doi.org/10.1/x"}]
                },
                {
                    "title": "LLMs for XAI",
                    "authors": ["svanbrabant", "ghost", "j doe"],
                    "date": "2023-01-01",
                    "venue": {"name": "Conference", "parent": "", "short": "C", "type": "conference", "url": "https://c.org"},
                    "links": []
                }
            ]),
        ),
        (
            Resource::Education,
            json!([
                {"title": "Master", "institution": "UHasselt", "faculty": "Sciences", "start": "2019-09-01", "end": "2021-06-30"},
                {"title": "PhD", "institution": "UHasselt", "faculty": "Sciences", "start": "2021-10-01", "end": "2025-09-30"}
            ]),
        ),
        (
            Resource::Theses,
            json!([
                {"title": "Counterfactuals", "student": "Ann", "type": "master", "faculty": "iiw", "start": "2023-09-01", "end": "2024-06-30"}
            ]),
        ),
        (Resource::Courses, json!([])),
    ]
}

fn write_site(root: &Path) {
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    for (resource, body) in site_data() {
        fs::write(data_dir.join(resource.file_name()), body.to_string()).unwrap();
    }
}

#[tokio::test]
async fn test_build_writes_home_and_author_pages() {
    let temp_dir = TempDir::new().unwrap();
    let site_dir = temp_dir.path().join("site");
    let out_dir = temp_dir.path().join("out");
    write_site(&site_dir);

    let args = BuildArgs {
        source: site_dir.to_string_lossy().into_owned(),
        output: out_dir.clone(),
        self_id: "svanbrabant".to_string(),
        oldest_first: false,
        timeout: 5,
    };
    run_async(args).await.unwrap();

    let home = fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(home.starts_with("<!DOCTYPE html>"));
    assert!(home.contains("<title>Sebe Vanbrabant</title>"));
    assert!(home.find("LLMs for XAI").unwrap() < home.find("Explaining Latent Spaces").unwrap());
    assert!(home.find(r#"id="phd""#).unwrap() < home.find(r#"id="master""#).unwrap());
    assert!(home.contains(r#"<div class="date-range">2024</div>"#));

    let jane = fs::read_to_string(out_dir.join("author/jdoe/index.html")).unwrap();
    assert!(jane.contains("Jane DOE"));
    assert!(jane.contains("Explaining Latent Spaces"));
    assert!(!jane.contains("LLMs for XAI"));

    assert!(!out_dir.join("author/ghost").exists());
}

#[tokio::test]
async fn test_build_writes_self_author_redirect() {
    let temp_dir = TempDir::new().unwrap();
    let site_dir = temp_dir.path().join("site");
    let out_dir = temp_dir.path().join("out");
    write_site(&site_dir);

    let args = BuildArgs {
        source: site_dir.to_string_lossy().into_owned(),
        output: out_dir.clone(),
        self_id: "svanbrabant".to_string(),
        oldest_first: false,
        timeout: 5,
    };
    run_async(args).await.unwrap();

    let redirect = fs::read_to_string(out_dir.join("author/svanbrabant/index.html")).unwrap();
    assert!(redirect.contains(r#"<meta http-equiv="refresh" content="0; url=/">"#));
    assert!(redirect.contains(r#"<link rel="canonical" href="/">"#));
    assert!(!redirect.contains("Publications with"));
}

#[tokio::test]
async fn test_build_names_author_dirs_by_raw_id() {
    let temp_dir = TempDir::new().unwrap();
    let site_dir = temp_dir.path().join("site");
    let out_dir = temp_dir.path().join("out");
    write_site(&site_dir);

    let args = BuildArgs {
        source: site_dir.to_string_lossy().into_owned(),
        output: out_dir.clone(),
        self_id: "svanbrabant".to_string(),
        oldest_first: false,
        timeout: 5,
    };
    run_async(args).await.unwrap();

    let home = fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(home.contains(r#"<a href="/author/j%20doe">Jan Doe</a>"#));

    let jan = fs::read_to_string(out_dir.join("author/j doe/index.html")).unwrap();
    assert!(jan.contains("Jan DOE"));
    assert!(jan.contains("LLMs for XAI"));
    assert!(!out_dir.join("author/j%20doe").exists());
}

#[tokio::test]
async fn test_built_home_page_carries_toggle_script_and_scroll_styles() {
    let temp_dir = TempDir::new().unwrap();
    let site_dir = temp_dir.path().join("site");
    let out_dir = temp_dir.path().join("out");
    write_site(&site_dir);

    let args = BuildArgs {
        source: site_dir.to_string_lossy().into_owned(),
        output: out_dir.clone(),
        self_id: "svanbrabant".to_string(),
        oldest_first: false,
        timeout: 5,
    };
    run_async(args).await.unwrap();

    let home = fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(home.contains("<script>"));
    assert!(home.contains(r#"id="publication-list""#));
    assert!(home.contains(r#"data-order="desc""#));
    assert!(home.contains("scroll-behavior: smooth"));
    assert!(home.contains("scroll-margin-top: 80px"));
}

#[tokio::test]
async fn test_build_fails_on_missing_data() {
    let temp_dir = TempDir::new().unwrap();

    let args = BuildArgs {
        source: temp_dir.path().to_string_lossy().into_owned(),
        output: temp_dir.path().join("out"),
        self_id: "svanbrabant".to_string(),
        oldest_first: false,
        timeout: 5,
    };

    let err = run_async(args).await.unwrap_err();
    assert!(err.to_string().contains("Failed to load site data"));
    assert!(!temp_dir.path().join("out/index.html").exists());
}

#[tokio::test]
async fn test_show_over_http_redirects_self_and_scrolls() {
    let mock_server = MockServer::start().await;
    for (resource, body) in site_data() {
        Mock::given(method("GET"))
            .and(path(resource.path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;
    }

    let source = Source::parse(&mock_server.uri(), 5).unwrap();
    let config = SiteConfig::default();

    let shown = show_path(&source, "/author/svanbrabant", &config, 0).await.unwrap();
    assert_eq!(shown.path, "/");
    assert!(shown.page.body.contains("Publications"));

    let shown = show_path(&source, "/author/svanbrabant#publications", &config, 0)
        .await
        .unwrap();
    assert_eq!(shown.path, "/#publications");
    assert_eq!(shown.scroll.unwrap().id, "publications");

    let shown = show_path(&source, "/#publications", &config, 0).await.unwrap();
    assert_eq!(shown.scroll.unwrap().id, "publications");

    let shown = show_path(&source, "/#does-not-exist", &config, 0).await.unwrap();
    assert!(shown.scroll.is_none());

    let shown = show_path(&source, "/author/jdoe#explaining-latent-spaces", &config, 0)
        .await
        .unwrap();
    assert_eq!(shown.scroll.unwrap().id, "explaining-latent-spaces");

    let shown = show_path(&source, "/author/nobody", &config, 0).await.unwrap();
    assert!(shown.page.body.contains("Author not found."));
}

#[tokio::test]
async fn test_show_toggles_publication_order() {
    let temp_dir = TempDir::new().unwrap();
    write_site(temp_dir.path());
    let source = Source::parse(temp_dir.path().to_str().unwrap(), 5).unwrap();
    let config = SiteConfig::default();

    let shown = show_path(&source, "/", &config, 1).await.unwrap();
    let body = &shown.page.body;

    assert!(body.contains("Oldest First"));
    assert!(body.find("Explaining Latent Spaces").unwrap() < body.find("LLMs for XAI").unwrap());
}

#[derive(Parser)]
struct ShowCli {
    #[command(flatten)]
    show: ShowArgs,
}

#[tokio::test]
async fn test_show_toggle_flag_reaches_the_view() {
    let temp_dir = TempDir::new().unwrap();
    write_site(temp_dir.path());
    let source_arg = temp_dir.path().to_string_lossy().into_owned();

    let cli = ShowCli::parse_from(["show", "--source", &source_arg, "--toggle", "1", "/"]);
    assert_eq!(cli.show.toggle, 1);
    run_async_show(cli.show).await.unwrap();

    let cli = ShowCli::parse_from(["show", "--source", &source_arg]);
    assert_eq!(cli.show.toggle, 0);

    let source = Source::parse(&source_arg, 5).unwrap();
    let shown = show_path(&source, "/", &SiteConfig::default(), 2).await.unwrap();
    assert!(shown.page.body.contains("Newest First"));
}
