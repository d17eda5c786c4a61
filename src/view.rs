//! Per-mount view state as immutable snapshots moved along by events.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::load::{Scope, Snapshot, Source};
use crate::render::{self, RenderedPage, SiteConfig, SortOrder};
use crate::router::Route;

#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    NotStarted,
    Loading,
    Ready {
        snapshot: Arc<Snapshot>,
        order: SortOrder,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug)]
pub enum ViewEvent {
    Started,
    DataReady(Snapshot),
    LoadFailed(String),
    SortToggled,
    Navigated,
}

impl ViewState {
    pub fn reduce(self, event: ViewEvent, config: &SiteConfig) -> ViewState {
        match (self, event) {
            (_, ViewEvent::Navigated) => ViewState::NotStarted,
            (ViewState::NotStarted, ViewEvent::Started) => ViewState::Loading,
            (ViewState::Loading, ViewEvent::DataReady(snapshot)) => ViewState::Ready {
                snapshot: Arc::new(snapshot),
                order: config.initial_order,
            },
            (ViewState::Loading, ViewEvent::LoadFailed(message)) => {
                ViewState::Failed { message }
            }
            (ViewState::Ready { snapshot, order }, ViewEvent::SortToggled) => ViewState::Ready {
                snapshot,
                order: order.toggled(),
            },
            (state, event) => {
                debug!("Ignoring {:?} in state {}", event, state.name());
                state
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::NotStarted => "not-started",
            ViewState::Loading => "loading",
            ViewState::Ready { .. } => "ready",
            ViewState::Failed { .. } => "failed",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }
}

pub fn scope_for(route: &Route) -> Scope {
    match route {
        Route::Author(_) => Scope::Author,
        Route::Home | Route::NotFound(_) => Scope::Home,
    }
}

/// Runs one mount: start, load everything the route needs, settle.
pub async fn mount(source: &Source, route: &Route, config: &SiteConfig) -> ViewState {
    let state = ViewState::NotStarted.reduce(ViewEvent::Started, config);
    let event = match Snapshot::load(source, scope_for(route)).await {
        Ok(snapshot) => ViewEvent::DataReady(snapshot),
        Err(e) => {
            warn!("Load failed: {}", e);
            ViewEvent::LoadFailed(e.to_string())
        }
    };
    state.reduce(event, config)
}

/// Renders whatever the state allows. `None` means the route redirects home.
pub fn render(state: &ViewState, route: &Route, config: &SiteConfig) -> Option<RenderedPage> {
    let (snapshot, order) = match state {
        ViewState::NotStarted | ViewState::Loading => return Some(render::loading_page()),
        ViewState::Failed { message } => return Some(render::error_page(message)),
        ViewState::Ready { snapshot, order } => (snapshot, *order),
    };

    match route {
        Route::Home => Some(render::home_page(snapshot, order, config)),
        Route::Author(id) => render::author_page(snapshot, id, config).into_page(),
        Route::NotFound(path) => Some(render::not_found_page(path)),
    }
}
