use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::{debug, info};

use crate::build::{loading_spinner, site_config};
use crate::load::Source;
use crate::render::{RenderedPage, SiteConfig};
use crate::router::{self, Navigation};
use crate::scroll::{DeepLink, ScrollTo};
use crate::view::{self, ViewEvent, ViewState};
use crate::SELF_ID;

#[derive(Args)]
pub struct ShowArgs {
    /// Base URL or directory holding data/*.json
    #[arg(short, long)]
    pub source: String,

    /// Site path to render, e.g. "/", "/author/jdoe" or "/#publications"
    #[arg(default_value = "/")]
    pub path: String,

    /// Author key of the site's subject
    #[arg(long, default_value = SELF_ID)]
    pub self_id: String,

    /// List publications oldest first
    #[arg(long)]
    pub oldest_first: bool,

    /// Press the publication sort toggle this many times before rendering
    #[arg(long, default_value = "0")]
    pub toggle: usize,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}

#[derive(Debug)]
pub struct Shown {
    /// Path actually rendered after redirects.
    pub path: String,
    pub state: ViewState,
    pub page: RenderedPage,
    pub scroll: Option<ScrollTo>,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: ShowArgs) -> Result<()> {
    let config = site_config(&args.self_id, args.oldest_first);
    let source = Source::parse(&args.source, args.timeout).context("Invalid source")?;

    let pb = loading_spinner(&source)?;
    let shown = show_path(&source, &args.path, &config, args.toggle).await;
    pb.finish_and_clear();
    let shown = shown?;

    match &shown.scroll {
        Some(scroll) => debug!("Scroll to #{} offset {}px", scroll.id, scroll.offset),
        None => debug!("No scroll target"),
    }
    println!("{}", shown.page.to_html());

    if let ViewState::Failed { message } = &shown.state {
        bail!("Failed to load site data: {}", message);
    }
    Ok(())
}

/// Navigates to `path`, mounts the view and renders it, toggling the sort order `toggles` times.
pub async fn show_path(
    source: &Source,
    path: &str,
    config: &SiteConfig,
    toggles: usize,
) -> Result<Shown> {
    let mut target = path.to_string();
    let location = loop {
        match router::navigate(&target, &config.self_id) {
            Navigation::Render(location) => break location,
            Navigation::Redirect(to) if to != target => {
                info!("Redirecting {} to {}", target, to);
                target = to;
            }
            Navigation::Redirect(to) => bail!("Redirect loop at {}", to),
        }
    };

    let mut deep_link = DeepLink::new();
    let generation = deep_link.navigate(location.fragment.as_deref());

    let mut state = view::mount(source, &location.route, config).await;
    for _ in 0..toggles {
        state = state.reduce(ViewEvent::SortToggled, config);
    }

    let Some(page) = view::render(&state, &location.route, config) else {
        bail!("{} redirects", target);
    };
    let scroll = deep_link.content_ready(generation, &page);

    Ok(Shown {
        path: target,
        state,
        page,
        scroll,
    })
}
