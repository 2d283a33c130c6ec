//! Typed entity contracts shared by the whole application.
//!
//! These structs mirror the platform's JSON records one-to-one. Deserialization
//! tolerates unknown fields so fixture files can carry extra data, but an
//! unknown `kind` is rejected: the variant set is the renderer contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identity of an entity record.
///
/// Compared and hashed as a plain string; the display form is the raw id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A maker profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable record id.
    pub id: EntityId,
    /// Name shown on the card header.
    pub display_name: String,
    /// Primary craft or discipline.
    pub craft: String,
    /// Short self-description.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image reference; absent falls back to an initial.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Free-form location.
    #[serde(default)]
    pub location: Option<String>,
    /// Skill/material tags, in record order.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A stated price for a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the given currency.
    pub amount: f64,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// A service offered by a maker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Stable record id.
    pub id: EntityId,
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Category tags, in record order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form location.
    #[serde(default)]
    pub location: Option<String>,
    /// Stated price; absent means the service is free.
    #[serde(default)]
    pub price: Option<Price>,
}

/// A downloadable resource shared with the community.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable record id.
    pub id: EntityId,
    /// Resource title.
    pub title: String,
    /// Resource description.
    pub description: String,
    /// Topic tags, in record order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Size of the downloadable file in bytes, when known.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// How often the resource was downloaded.
    #[serde(default)]
    pub download_count: u64,
    /// Whether moderation has approved the resource for download.
    #[serde(default)]
    pub is_approved: bool,
}

/// A community post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable record id.
    pub id: EntityId,
    /// Author display name.
    pub author: String,
    /// Post text.
    pub body: String,
    /// Topic tags, in record order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of likes.
    #[serde(default)]
    pub like_count: u64,
    /// Number of comments.
    #[serde(default)]
    pub comment_count: u64,
}

/// A platform event with a fixed schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable record id.
    pub id: EntityId,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Topic tags, in record order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form location.
    #[serde(default)]
    pub location: Option<String>,
    /// Scheduled start (UTC).
    pub start: DateTime<Utc>,
    /// Scheduled end (UTC).
    pub end: DateTime<Utc>,
}

/// Any entity record the dashboard can display.
///
/// Tagged by the `kind` field in JSON (`profile`, `service`, `resource`,
/// `post`, `event`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityRecord {
    /// Maker profile.
    Profile(Profile),
    /// Offered service.
    Service(Service),
    /// Downloadable resource.
    Resource(Resource),
    /// Community post.
    Post(Post),
    /// Platform event.
    Event(Event),
}

impl EntityRecord {
    /// Stable id of the wrapped record.
    #[must_use]
    pub const fn id(&self) -> &EntityId {
        match self {
            Self::Profile(p) => &p.id,
            Self::Service(s) => &s.id,
            Self::Resource(r) => &r.id,
            Self::Post(p) => &p.id,
            Self::Event(e) => &e.id,
        }
    }

    /// Primary display line of the wrapped record.
    #[must_use]
    pub fn headline(&self) -> &str {
        match self {
            Self::Profile(p) => &p.display_name,
            Self::Service(s) => &s.title,
            Self::Resource(r) => &r.title,
            Self::Post(p) => &p.author,
            Self::Event(e) => &e.title,
        }
    }
}
