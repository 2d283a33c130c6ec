//! Community post card renderer.

use crate::cards::node::{ActionKind, ActionNode, CardKind, CardNode};
use crate::cards::options::RenderOptions;
use crate::cards::text::{MAX_BODY_LINES, clip_text, tag_strip};
use crate::i18n::{t, t_fmt1};
use crate::model::Post;

/// What: Render a community post into its presentation structure.
///
/// Details:
/// - The author byline becomes the subtitle ("by {author}")
/// - Like and comment counts become metadata rows
pub fn render(post: &Post, opts: &RenderOptions<'_>) -> CardNode {
    let mut node = CardNode::new(CardKind::Post, post.author.clone());

    node.subtitle = Some(t_fmt1(opts.dict, "common.by", &post.author));
    node.body = clip_text(&post.body, opts.body_width, MAX_BODY_LINES);
    node.tags = tag_strip(&post.tags);
    node.meta.push((
        t(opts.dict, "dashboard.labels.likes"),
        post.like_count.to_string(),
    ));
    node.meta.push((
        t(opts.dict, "dashboard.labels.comments"),
        post.comment_count.to_string(),
    ));

    if opts.show_actions {
        node.actions = vec![
            ActionNode {
                kind: ActionKind::Like,
                label: t(opts.dict, "common.like"),
                enabled: true,
            },
            ActionNode {
                kind: ActionKind::Comment,
                label: t(opts.dict, "common.comment"),
                enabled: true,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{self, LanguageTag};
    use crate::model::EntityId;

    fn sample_post() -> Post {
        Post {
            id: EntityId("post-1".into()),
            author: "Meera".into(),
            body: "First indigo vat of the season is ready".into(),
            tags: vec!["indigo".into(), "dyeing".into()],
            like_count: 12,
            comment_count: 3,
        }
    }

    #[test]
    fn counts_become_meta_rows() {
        let dict = i18n::resolve(LanguageTag::En);
        let node = render(&sample_post(), &RenderOptions::new(dict));
        assert!(node.meta.iter().any(|(k, v)| k == "Likes" && v == "12"));
        assert!(node.meta.iter().any(|(k, v)| k == "Comments" && v == "3"));
        assert_eq!(node.subtitle.as_deref(), Some("by Meera"));
    }

    #[test]
    fn actions_row_lists_all_post_interactions() {
        let dict = i18n::resolve(LanguageTag::En);
        let node = render(&sample_post(), &RenderOptions::new(dict).with_actions());
        let kinds: Vec<ActionKind> = node.actions.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActionKind::Like,
                ActionKind::Comment,
                ActionKind::Share,
                ActionKind::Flag
            ]
        );
        assert!(node.actions.iter().all(|a| a.enabled));
    }

    #[test]
    fn rendering_twice_is_structurally_identical() {
        let dict = i18n::resolve(LanguageTag::Hi);
        let post = sample_post();
        let opts = RenderOptions::new(dict).with_actions();
        assert_eq!(render(&post, &opts), render(&post, &opts));
    }
}
