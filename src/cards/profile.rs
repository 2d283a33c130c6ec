//! Maker profile card renderer.

use crate::cards::node::{ActionKind, ActionNode, AvatarNode, CardKind, CardNode};
use crate::cards::options::RenderOptions;
use crate::cards::text::{MAX_BODY_LINES, clip_text, initial_of, tag_strip};
use crate::i18n::t;
use crate::model::Profile;

/// What: Render a maker profile into its presentation structure.
///
/// Inputs:
/// - `profile`: Record borrowed read-only for this call
/// - `opts`: Per-call render options
///
/// Output:
/// - `CardNode` with avatar, craft subtitle, clipped bio and tags
///
/// Details:
/// - Absent avatar degrades to the uppercased first character of the display
///   name
/// - Absent bio/location simply leave their slots empty
pub fn render(profile: &Profile, opts: &RenderOptions<'_>) -> CardNode {
    let mut node = CardNode::new(CardKind::Profile, profile.display_name.clone());

    node.avatar = Some(profile.avatar.as_ref().map_or_else(
        || AvatarNode::Initial(initial_of(&profile.display_name)),
        |image| AvatarNode::Image(image.clone()),
    ));
    node.subtitle = Some(profile.craft.clone());

    if let Some(bio) = &profile.bio {
        node.body = clip_text(bio, opts.body_width, MAX_BODY_LINES);
    }
    if let Some(location) = &profile.location {
        node.meta.push((
            t(opts.dict, "dashboard.labels.location"),
            location.clone(),
        ));
    }
    node.tags = tag_strip(&profile.tags);

    if opts.show_actions {
        node.actions = vec![
            ActionNode {
                kind: ActionKind::Connect,
                label: t(opts.dict, "common.connect"),
                enabled: true,
            },
            ActionNode {
                kind: ActionKind::Flag,
                label: t(opts.dict, "common.flag"),
                enabled: true,
            },
        ];
    }
    node
}
