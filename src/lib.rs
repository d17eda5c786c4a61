use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod build;
pub mod date;
pub mod load;
pub mod render;
pub mod resolve;
pub mod router;
pub mod scroll;
pub mod show;
pub mod view;

/// Author key of the person the site is about.
pub const SELF_ID: &str = "svanbrabant";

pub type AuthorMap = HashMap<String, Author>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Heading form: optional prefix, first name, upper-cased last name.
    pub fn heading_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name.to_uppercase());
        match self.prefix.as_deref().map(str::trim) {
            Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, name),
            _ => name,
        }
    }

    pub fn link(&self, kind: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.kind == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VenueType {
    Journal,
    Conference,
    Workshop,
    BookChapter,
}

impl VenueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueType::Journal => "journal",
            VenueType::Conference => "conference",
            VenueType::Workshop => "workshop",
            VenueType::BookChapter => "book-chapter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub parent: String,
    pub short: String,
    #[serde(rename = "type")]
    pub kind: VenueType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    /// Citation order.
    pub authors: Vec<String>,
    /// Older files carry a `year` field instead, sometimes as a bare number.
    #[serde(alias = "year", deserialize_with = "date::string_or_number")]
    pub date: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub presented: bool,
    pub venue: Venue,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Publication {
    pub fn has_author(&self, id: &str) -> bool {
        self.authors.iter().any(|a| a == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub faculty: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThesisType {
    Bachelor,
    Master,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faculty {
    Iiw,
    Wet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thesis {
    pub title: String,
    /// Free text, not an author key.
    pub student: String,
    #[serde(rename = "type")]
    pub kind: ThesisType,
    pub faculty: Faculty,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub start: String,
    pub end: String,
}
