use crate::{Author, AuthorMap};

/// Looks author keys up in a loaded author map. Keys are used verbatim.
#[derive(Clone, Copy)]
pub struct AuthorResolver<'a> {
    authors: &'a AuthorMap,
}

impl<'a> AuthorResolver<'a> {
    pub fn new(authors: &'a AuthorMap) -> Self {
        Self { authors }
    }

    pub fn resolve(&self, id: &str) -> Option<&'a Author> {
        self.authors.get(id)
    }

    /// "first last", or the raw key when the author is unknown.
    pub fn display_name(&self, id: &str) -> String {
        self.resolve(id)
            .map(Author::full_name)
            .unwrap_or_else(|| id.to_string())
    }
}
