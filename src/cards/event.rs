//! Event card renderer and temporal state derivation.

use chrono::{DateTime, Utc};

use crate::cards::node::{ActionKind, ActionNode, Badge, CardKind, CardNode, Tone};
use crate::cards::options::RenderOptions;
use crate::cards::text::{MAX_BODY_LINES, clip_text, tag_strip};
use crate::i18n::t;
use crate::model::Event;

/// Temporal state of an event relative to a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemporalState {
    /// Start lies in the future.
    Upcoming,
    /// End lies in the past.
    Past,
    /// Neither: the event is running.
    Ongoing,
}

impl TemporalState {
    /// Dictionary key of the localized state label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Upcoming => "dashboard.event.upcoming",
            Self::Past => "dashboard.event.past",
            Self::Ongoing => "dashboard.event.ongoing",
        }
    }

    /// Badge tone matching the state.
    const fn tone(self) -> Tone {
        match self {
            Self::Upcoming => Tone::Info,
            Self::Past => Tone::Muted,
            Self::Ongoing => Tone::Positive,
        }
    }
}

/// What: Derive the temporal state of an event.
///
/// Inputs:
/// - `start`, `end`: Stored event bounds
/// - `now`: Caller-supplied current time
///
/// Output:
/// - `Upcoming` if `start > now`, `Past` if `end < now`, else `Ongoing`
///
/// Details:
/// - A bound exactly equal to `now` is not "in the future"/"in the past", so
///   such events report `Ongoing`
#[must_use]
pub fn temporal_state(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> TemporalState {
    if start > now {
        TemporalState::Upcoming
    } else if end < now {
        TemporalState::Past
    } else {
        TemporalState::Ongoing
    }
}

/// What: Render an event into its presentation structure.
///
/// Inputs:
/// - `event`: Record borrowed read-only for this call
/// - `opts`: Per-call render options
/// - `now`: Current time used only for the temporal state label
///
/// Details:
/// - The temporal state becomes the leading badge; start/end times become
///   metadata rows in UTC
pub fn render(event: &Event, opts: &RenderOptions<'_>, now: DateTime<Utc>) -> CardNode {
    let mut node = CardNode::new(CardKind::Event, event.title.clone());

    let state = temporal_state(event.start, event.end, now);
    node.badges.push(Badge {
        label: t(opts.dict, state.label_key()),
        tone: state.tone(),
    });

    node.body = clip_text(&event.description, opts.body_width, MAX_BODY_LINES);
    node.tags = tag_strip(&event.tags);
    node.meta.push((
        t(opts.dict, "dashboard.labels.starts"),
        event.start.format("%Y-%m-%d %H:%M").to_string(),
    ));
    node.meta.push((
        t(opts.dict, "dashboard.labels.ends"),
        event.end.format("%Y-%m-%d %H:%M").to_string(),
    ));
    if let Some(location) = &event.location {
        node.meta.push((
            t(opts.dict, "dashboard.labels.location"),
            location.clone(),
        ));
    }

    if opts.show_actions {
        node.actions = vec![ActionNode {
            kind: ActionKind::Share,
            label: t(opts.dict, "common.share"),
            enabled: true,
        }];
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{self, LanguageTag};
    use crate::model::EntityId;
    use chrono::Duration;

    fn sample_event(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event {
            id: EntityId("evt-1".into()),
            title: "Natural dye workshop".into(),
            description: "Two-day hands-on indigo and madder workshop".into(),
            tags: vec!["workshop".into()],
            location: Some("Bhuj".into()),
            start,
            end,
        }
    }

    #[test]
    fn temporal_state_matches_documented_examples() {
        let now = Utc::now();
        assert_eq!(
            temporal_state(now + Duration::days(1), now + Duration::days(2), now),
            TemporalState::Upcoming
        );
        assert_eq!(
            temporal_state(now - Duration::days(2), now - Duration::days(1), now),
            TemporalState::Past
        );
        assert_eq!(
            temporal_state(now - Duration::hours(1), now + Duration::hours(1), now),
            TemporalState::Ongoing
        );
    }

    #[test]
    fn boundary_times_count_as_ongoing() {
        let now = Utc::now();
        assert_eq!(
            temporal_state(now, now + Duration::hours(1), now),
            TemporalState::Ongoing
        );
        assert_eq!(
            temporal_state(now - Duration::hours(1), now, now),
            TemporalState::Ongoing
        );
    }

    #[test]
    fn badge_carries_localized_state_label() {
        let now = Utc::now();
        let event = sample_event(now + Duration::days(1), now + Duration::days(2));

        let en = i18n::resolve(LanguageTag::En);
        let node = render(&event, &RenderOptions::new(en), now);
        assert_eq!(node.badges[0].label, "Upcoming");
        assert_eq!(node.badges[0].tone, Tone::Info);

        let hi = i18n::resolve(LanguageTag::Hi);
        let node = render(&event, &RenderOptions::new(hi), now);
        assert_eq!(node.badges[0].label, "आगामी");
    }

    #[test]
    fn schedule_and_location_become_meta_rows() {
        let now = Utc::now();
        let event = sample_event(now - Duration::days(2), now - Duration::days(1));
        let dict = i18n::resolve(LanguageTag::En);
        let node = render(&event, &RenderOptions::new(dict), now);

        assert_eq!(node.badges[0].label, "Past");
        assert!(node.meta.iter().any(|(k, _)| k == "Starts"));
        assert!(node.meta.iter().any(|(k, _)| k == "Ends"));
        assert!(node.meta.iter().any(|(k, v)| k == "Location" && v == "Bhuj"));
    }
}
