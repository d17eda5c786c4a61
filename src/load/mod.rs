use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::{date, AuthorMap, Course, Education, Publication, Thesis};

mod client;
mod dir;
pub use client::DataClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Authors,
    Publications,
    Education,
    Theses,
    Courses,
}

impl Resource {
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Authors => "authors.json",
            Resource::Publications => "publications.json",
            Resource::Education => "education.json",
            Resource::Theses => "theses.json",
            Resource::Courses => "courses.json",
        }
    }

    /// Site-relative path, e.g. `/data/authors.json`.
    pub fn path(&self) -> String {
        format!("/data/{}", self.file_name())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for {resource} failed: {source}")]
    Request {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource} returned HTTP {status}")]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {resource}: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the static JSON documents live.
pub enum Source {
    Http(DataClient),
    Dir(PathBuf),
}

impl Source {
    /// `http://` and `https://` values are base URLs, anything else a directory.
    pub fn parse(value: &str, timeout_secs: u64) -> Result<Self, LoadError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(Source::Http(DataClient::new(value.to_string(), timeout_secs)?))
        } else {
            Ok(Source::Dir(PathBuf::from(value)))
        }
    }

    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, LoadError> {
        match self {
            Source::Http(client) => client.fetch(resource).await,
            Source::Dir(root) => dir::read_resource(root, resource).await,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(client) => f.write_str(client.base_url()),
            Source::Dir(root) => write!(f, "{}", root.display()),
        }
    }
}

/// Which view the data is for. The author view only needs two resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Home,
    Author,
}

/// Everything a view mount reads. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub authors: AuthorMap,
    pub publications: Vec<Publication>,
    pub education: Vec<Education>,
    pub theses: Vec<Thesis>,
    pub courses: Vec<Course>,
}

impl Snapshot {
    /// Fetches every resource the scope needs concurrently; any failure fails the load.
    pub async fn load(source: &Source, scope: Scope) -> Result<Self, LoadError> {
        let snapshot = match scope {
            Scope::Home => {
                let (authors, publications, education, theses, courses) = tokio::try_join!(
                    source.fetch::<AuthorMap>(Resource::Authors),
                    source.fetch::<Vec<Publication>>(Resource::Publications),
                    source.fetch::<Vec<Education>>(Resource::Education),
                    source.fetch::<Vec<Thesis>>(Resource::Theses),
                    source.fetch::<Vec<Course>>(Resource::Courses),
                )?;
                Snapshot {
                    authors,
                    publications,
                    education,
                    theses,
                    courses,
                }
            }
            Scope::Author => {
                let (authors, publications) = tokio::try_join!(
                    source.fetch::<AuthorMap>(Resource::Authors),
                    source.fetch::<Vec<Publication>>(Resource::Publications),
                )?;
                Snapshot {
                    authors,
                    publications,
                    ..Default::default()
                }
            }
        };

        info!(
            "Loaded {} authors, {} publications, {} education, {} theses, {} courses from {}",
            snapshot.authors.len(),
            snapshot.publications.len(),
            snapshot.education.len(),
            snapshot.theses.len(),
            snapshot.courses.len(),
            source
        );

        Ok(snapshot.normalized())
    }

    /// Education newest start first (stable); theses reversed from file order.
    pub fn normalized(mut self) -> Self {
        self.education
            .sort_by(|a, b| date::sort_key(&b.start).cmp(&date::sort_key(&a.start)));
        self.theses.reverse();
        self
    }
}
