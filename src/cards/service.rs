//! Offered service card renderer.

use crate::cards::node::{ActionKind, ActionNode, Badge, CardKind, CardNode, Tone};
use crate::cards::options::RenderOptions;
use crate::cards::text::{MAX_BODY_LINES, clip_text, tag_strip};
use crate::i18n::t;
use crate::model::Service;

/// What: Render a service listing into its presentation structure.
///
/// Details:
/// - A stated price becomes an informational badge and a metadata row; an
///   absent price renders the service as free (positive badge)
pub fn render(service: &Service, opts: &RenderOptions<'_>) -> CardNode {
    let mut node = CardNode::new(CardKind::Service, service.title.clone());

    node.body = clip_text(&service.description, opts.body_width, MAX_BODY_LINES);
    node.tags = tag_strip(&service.tags);

    match &service.price {
        Some(price) => {
            let label = format!("{:.0} {}", price.amount, price.currency);
            node.badges.push(Badge {
                label: label.clone(),
                tone: Tone::Info,
            });
            node.meta
                .push((t(opts.dict, "dashboard.labels.price"), label));
        }
        None => {
            node.badges.push(Badge {
                label: t(opts.dict, "common.free"),
                tone: Tone::Positive,
            });
        }
    }
    if let Some(location) = &service.location {
        node.meta.push((
            t(opts.dict, "dashboard.labels.location"),
            location.clone(),
        ));
    }

    if opts.show_actions {
        node.actions = vec![
            ActionNode {
                kind: ActionKind::Connect,
                label: t(opts.dict, "common.connect"),
                enabled: true,
            },
            ActionNode {
                kind: ActionKind::Share,
                label: t(opts.dict, "common.share"),
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
    use crate::model::{EntityId, Price};

    fn sample_service() -> Service {
        Service {
            id: EntityId("svc-1".into()),
            title: "Custom block-printed yardage".into(),
            description: "Made-to-order yardage in dabu and indigo, minimum five meters".into(),
            tags: vec!["textile".into(), "custom".into()],
            location: Some("Bagru".into()),
            price: Some(Price {
                amount: 450.0,
                currency: "INR".into(),
            }),
        }
    }

    #[test]
    fn priced_service_gets_info_badge_and_meta_row() {
        let dict = i18n::resolve(LanguageTag::En);
        let node = render(&sample_service(), &RenderOptions::new(dict));
        assert_eq!(
            node.badges,
            vec![Badge {
                label: "450 INR".into(),
                tone: Tone::Info
            }]
        );
        assert!(node.meta.iter().any(|(k, v)| k == "Price" && v == "450 INR"));
    }

    #[test]
    fn unpriced_service_is_listed_as_free() {
        let dict = i18n::resolve(LanguageTag::En);
        let mut service = sample_service();
        service.price = None;
        let node = render(&service, &RenderOptions::new(dict));
        assert_eq!(
            node.badges,
            vec![Badge {
                label: "Free".into(),
                tone: Tone::Positive
            }]
        );
        assert!(node.meta.iter().all(|(k, _)| k != "Price"));
    }

    #[test]
    fn body_is_clipped_to_two_lines() {
        let dict = i18n::resolve(LanguageTag::En);
        let mut service = sample_service();
        service.description = "word ".repeat(60);
        let node = render(&service, &RenderOptions::new(dict).with_body_width(20));
        assert_eq!(node.body.len(), 2);
        assert!(node.body[1].ends_with('…'));
    }
}
