//! Integration tests for the card renderer family.

use chrono::{Duration, Utc};
use kalasetu::cards::{
    ActionKind, AvatarNode, CardKind, RenderOptions, TemporalState, render_entity, temporal_state,
};
use kalasetu::fixtures;
use kalasetu::i18n::{self, LanguageTag, t_fmt1};
use kalasetu::model::{EntityId, EntityRecord, Event, Profile, Resource};

fn sample_event(start_offset: Duration, end_offset: Duration) -> EntityRecord {
    let now = Utc::now();
    EntityRecord::Event(Event {
        id: EntityId("evt-1".into()),
        title: "Natural dye workshop".into(),
        description: "Two-day hands-on workshop".into(),
        tags: vec!["workshop".into()],
        location: None,
        start: now + start_offset,
        end: now + end_offset,
    })
}

#[test]
fn rendering_the_same_record_twice_is_identical() {
    let now = Utc::now();
    for tag in LanguageTag::ALL {
        let dict = i18n::resolve(tag);
        let opts = RenderOptions::new(dict).with_actions();
        for record in fixtures::sample_entities() {
            let first = render_entity(&record, &opts, now);
            let second = render_entity(&record, &opts, now);
            assert_eq!(first, second, "unstable render for {}", record.id());
        }
    }
}

#[test]
fn event_badges_follow_the_temporal_state() {
    let dict = i18n::resolve(LanguageTag::En);
    let opts = RenderOptions::new(dict);
    let now = Utc::now();

    let upcoming = sample_event(Duration::days(1), Duration::days(2));
    assert_eq!(render_entity(&upcoming, &opts, now).badges[0].label, "Upcoming");

    let past = sample_event(Duration::days(-2), Duration::days(-1));
    assert_eq!(render_entity(&past, &opts, now).badges[0].label, "Past");

    let running = sample_event(Duration::hours(-1), Duration::hours(1));
    assert_eq!(render_entity(&running, &opts, now).badges[0].label, "Ongoing");
}

#[test]
fn temporal_state_treats_exact_bounds_as_ongoing() {
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
fn five_tags_clip_to_three_plus_a_count() {
    let dict = i18n::resolve(LanguageTag::En);
    let record = EntityRecord::Profile(Profile {
        id: EntityId("maker-1".into()),
        display_name: "Asha Devi".into(),
        craft: "Block printing".into(),
        bio: None,
        avatar: None,
        location: None,
        tags: ["dabu", "indigo", "handloom", "natural-dye", "cotton"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    });

    let node = render_entity(&record, &RenderOptions::new(dict), Utc::now());
    assert_eq!(node.tags.visible, vec!["dabu", "indigo", "handloom"]);
    assert_eq!(node.tags.more, 2);
    assert_eq!(t_fmt1(dict, "common.more_tags", node.tags.more), "+2 more");
}

#[test]
fn download_action_is_gated_by_approval() {
    let dict = i18n::resolve(LanguageTag::En);
    let opts = RenderOptions::new(dict).with_actions();
    let resource = |approved: bool| {
        EntityRecord::Resource(Resource {
            id: EntityId("res-1".into()),
            title: "Dye recipes".into(),
            description: "Mordant ratios and vat notes".into(),
            tags: Vec::new(),
            file_size: Some(1024),
            download_count: 7,
            is_approved: approved,
        })
    };

    let node = render_entity(&resource(true), &opts, Utc::now());
    let download = node
        .actions
        .iter()
        .find(|a| a.kind == ActionKind::Download)
        .expect("download action present");
    assert!(download.enabled);
    assert_eq!(download.label, "Download");

    let node = render_entity(&resource(false), &opts, Utc::now());
    let download = node
        .actions
        .iter()
        .find(|a| a.kind == ActionKind::Download)
        .expect("download action present");
    assert!(!download.enabled);
    assert_eq!(download.label, "Pending approval");
}

#[test]
fn profiles_without_avatars_fall_back_to_an_initial() {
    let dict = i18n::resolve(LanguageTag::En);
    let entities = fixtures::sample_entities();

    let bare = entities
        .iter()
        .find(|r| r.id().to_string() == "maker-asha")
        .expect("fixture profile without avatar");
    let node = render_entity(bare, &RenderOptions::new(dict), Utc::now());
    assert_eq!(node.kind, CardKind::Profile);
    assert_eq!(node.avatar, Some(AvatarNode::Initial('A')));

    let pictured = entities
        .iter()
        .find(|r| r.id().to_string() == "maker-ravi")
        .expect("fixture profile with avatar");
    let node = render_entity(pictured, &RenderOptions::new(dict), Utc::now());
    assert_eq!(
        node.avatar,
        Some(AvatarNode::Image("avatars/ravi.png".into()))
    );
}

#[test]
fn action_labels_follow_the_dictionary_language() {
    let hi = i18n::resolve(LanguageTag::Hi);
    let opts = RenderOptions::new(hi).with_actions();
    let entities = fixtures::sample_entities();

    let post = entities
        .iter()
        .find(|r| matches!(r, EntityRecord::Post(_)))
        .expect("fixture post");
    let node = render_entity(post, &opts, Utc::now());
    let like = node
        .actions
        .iter()
        .find(|a| a.kind == ActionKind::Like)
        .expect("like action present");
    assert_eq!(like.label, "पसंद");
}
