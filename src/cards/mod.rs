//! Entity card renderer family.
//!
//! One renderer per entity variant, each a pure mapping from
//! `(record, options, current time)` to a [`CardNode`] presentation
//! structure. Renderers perform no I/O, never mutate the record they borrow,
//! and cannot fail: missing optional fields degrade to an alternate visual
//! (e.g. an initial instead of an avatar image) or an empty slot.
//!
//! Common behavior across the family:
//! - body text is clipped to at most two width-measured display lines
//! - tag lists are clipped to the first three entries plus a "+N more" count
//! - the actions row renders only when [`RenderOptions::show_actions`] is set
//! - action labels come from the dictionary carried in the options, so a card
//!   is fully localized by construction
//!
//! Interaction callbacks are optional; dispatching an action without one
//! falls back to the instance-local [`LikeToggle`] (for likes) or a no-op.

mod event;
mod local;
mod node;
mod options;
mod post;
mod profile;
mod resource;
mod service;
pub mod text;

pub use event::{TemporalState, temporal_state};
pub use local::LikeToggle;
pub use node::{ActionKind, ActionNode, AvatarNode, Badge, CardKind, CardNode, TagStrip, Tone};
pub use options::{ActionCallback, DEFAULT_BODY_WIDTH, RenderOptions};

use chrono::{DateTime, Utc};

use crate::model::EntityRecord;

/// What: Render any entity record with its variant's renderer.
///
/// Inputs:
/// - `record`: Record borrowed read-only for this call
/// - `opts`: Per-call render options
/// - `now`: Current time (used by the event renderer's temporal label)
///
/// Output:
/// - The variant's `CardNode`
pub fn render_entity(
    record: &EntityRecord,
    opts: &RenderOptions<'_>,
    now: DateTime<Utc>,
) -> CardNode {
    match record {
        EntityRecord::Profile(p) => profile::render(p, opts),
        EntityRecord::Service(s) => service::render(s, opts),
        EntityRecord::Resource(r) => resource::render(r, opts),
        EntityRecord::Post(p) => post::render(p, opts),
        EntityRecord::Event(e) => event::render(e, opts, now),
    }
}
