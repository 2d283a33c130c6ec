//! Downloadable resource card renderer.

use crate::cards::node::{ActionKind, ActionNode, Badge, CardKind, CardNode, Tone};
use crate::cards::options::RenderOptions;
use crate::cards::text::{MAX_BODY_LINES, clip_text, human_bytes, tag_strip};
use crate::i18n::t;
use crate::model::Resource;

/// What: Render a shared resource into its presentation structure.
///
/// Details:
/// - Approval gates the download action: an unapproved resource renders the
///   action disabled with a pending-approval label and a warning badge
/// - File size and download count become metadata rows when known
pub fn render(resource: &Resource, opts: &RenderOptions<'_>) -> CardNode {
    let mut node = CardNode::new(CardKind::Resource, resource.title.clone());

    node.body = clip_text(&resource.description, opts.body_width, MAX_BODY_LINES);
    node.tags = tag_strip(&resource.tags);

    if !resource.is_approved {
        node.badges.push(Badge {
            label: t(opts.dict, "common.download_pending"),
            tone: Tone::Warning,
        });
    }
    if let Some(size) = resource.file_size {
        node.meta.push((
            t(opts.dict, "dashboard.labels.file_size"),
            human_bytes(size),
        ));
    }
    node.meta.push((
        t(opts.dict, "dashboard.labels.downloads"),
        resource.download_count.to_string(),
    ));

    if opts.show_actions {
        let download_label = if resource.is_approved {
            t(opts.dict, "common.download")
        } else {
            t(opts.dict, "common.download_pending")
        };
        node.actions = vec![
            ActionNode {
                kind: ActionKind::Download,
                label: download_label,
                enabled: resource.is_approved,
            },
            ActionNode {
                kind: ActionKind::Share,
                label: t(opts.dict, "common.share"),
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
