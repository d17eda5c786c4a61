//! URL to view mapping: `/` and `/author/{id}`, plus an optional `#fragment`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Author(String),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub fragment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Location),
    Redirect(String),
}

pub fn parse(url: &str) -> Location {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (url, None),
    };
    let path = rest.split_once('?').map_or(rest, |(path, _)| path);
    let trimmed = path.trim_end_matches('/');

    let route = if trimmed.is_empty() {
        Route::Home
    } else if let Some(id) = trimmed.strip_prefix("/author/") {
        if id.contains('/') {
            Route::NotFound(path.to_string())
        } else {
            let id = urlencoding::decode(id)
                .map(|id| id.into_owned())
                .unwrap_or_else(|_| id.to_string());
            Route::Author(id)
        }
    } else if trimmed == "/author" {
        Route::Author(String::new())
    } else {
        Route::NotFound(path.to_string())
    };

    Location {
        route,
        fragment: fragment
            .filter(|f| !f.is_empty())
            .map(|f| urlencoding::decode(f).map_or_else(|_| f.to_string(), |f| f.into_owned())),
    }
}

/// Applies the self-author redirect on top of [`parse`]. The fragment, if
/// any, rides along so deep links survive the redirect.
pub fn navigate(url: &str, self_id: &str) -> Navigation {
    let location = parse(url);
    match &location.route {
        Route::Author(id) if id == self_id => {
            let target = match url.split_once('#') {
                Some((_, fragment)) if !fragment.is_empty() => format!("/#{}", fragment),
                _ => "/".to_string(),
            };
            Navigation::Redirect(target)
        }
        _ => Navigation::Render(location),
    }
}
