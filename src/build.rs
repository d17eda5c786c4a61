use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::load::Source;
use crate::render::{self, AuthorView, SiteConfig, SortOrder};
use crate::router::Route;
use crate::view::{self, ViewState};
use crate::SELF_ID;

#[derive(Args)]
pub struct BuildArgs {
    /// Base URL or directory holding data/*.json
    #[arg(short, long)]
    pub source: String,

    /// Directory the rendered site is written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Author key of the site's subject
    #[arg(long, default_value = SELF_ID)]
    pub self_id: String,

    /// List publications oldest first
    #[arg(long)]
    pub oldest_first: bool,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    pub timeout: u64,
}

impl BuildArgs {
    pub fn site_config(&self) -> SiteConfig {
        site_config(&self.self_id, self.oldest_first)
    }
}

pub(crate) fn site_config(self_id: &str, oldest_first: bool) -> SiteConfig {
    SiteConfig {
        self_id: self_id.to_string(),
        initial_order: if oldest_first {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        },
    }
}

pub(crate) fn loading_spinner(source: &Source) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Loading data from {}", source));
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

pub fn run(args: BuildArgs) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: BuildArgs) -> Result<()> {
    let config = args.site_config();
    let source = Source::parse(&args.source, args.timeout).context("Invalid source")?;

    let pb = loading_spinner(&source)?;
    let state = view::mount(&source, &Route::Home, &config).await;
    pb.finish_and_clear();

    let (snapshot, order) = match &state {
        ViewState::Ready { snapshot, order } => (snapshot, *order),
        ViewState::Failed { message } => bail!("Failed to load site data: {}", message),
        other => bail!("Unexpected view state {}", other.name()),
    };

    fs::create_dir_all(&args.output).context("Failed to create output directory")?;

    let home = render::home_page(snapshot, order, &config);
    write_page(&args.output.join("index.html"), &home.to_html())?;

    let author_ids: BTreeSet<&str> = snapshot
        .publications
        .iter()
        .flat_map(|p| p.authors.iter().map(String::as_str))
        .filter(|id| *id != config.self_id)
        .collect();

    let mut written = 0usize;
    for id in author_ids {
        if !is_safe_dir_name(id) {
            warn!("Skipping author id {:?}", id);
            continue;
        }
        // Unknown keys are never linked from a byline.
        let AuthorView::Found(page) = render::author_page(snapshot, id, &config) else {
            continue;
        };
        write_page(&author_dir(&args.output, id)?.join("index.html"), &page.to_html())?;
        written += 1;
    }

    // `/author/<self>` sends visitors home.
    if is_safe_dir_name(&config.self_id) {
        write_page(
            &author_dir(&args.output, &config.self_id)?.join("index.html"),
            &render::redirect_page("/"),
        )?;
    }

    info!("Wrote home page and {} author pages", written);
    info!("Output: {}", args.output.display());

    Ok(())
}

/// Static servers decode the request path before looking it up, so author
/// directories carry the raw id. Ids that would escape `author/` are refused.
fn is_safe_dir_name(id: &str) -> bool {
    !matches!(id, "" | "." | "..") && !id.contains(['/', '\\'])
}

fn author_dir(output: &Path, id: &str) -> Result<PathBuf> {
    let dir = output.join("author").join(id);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
