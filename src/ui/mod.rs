//! Dashboard screen rendering.
//!
//! The UI is a single screen: an entity list on the left, the selected
//! entity's card on the right, a title bar and a footer with key hints. All
//! text comes from the active dictionary; all colors from [`crate::theme`].

pub mod card;

pub use card::card_lines;

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::cards::{ActionKind, CardNode, RenderOptions, render_entity};
use crate::i18n::{Dictionary, t};
use crate::model::EntityRecord;
use crate::state::AppState;
use crate::theme::theme;

/// What: Dictionary key of the section label for an entity variant.
const fn section_key(record: &EntityRecord) -> &'static str {
    match record {
        EntityRecord::Profile(_) => "dashboard.sections.profiles",
        EntityRecord::Service(_) => "dashboard.sections.services",
        EntityRecord::Resource(_) => "dashboard.sections.resources",
        EntityRecord::Post(_) => "dashboard.sections.posts",
        EntityRecord::Event(_) => "dashboard.sections.events",
    }
}

/// What: Draw the full dashboard frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (list selection is updated by the list widget)
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    draw_title_bar(f, app, chunks[0]);
    draw_main(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);
}

/// What: Draw the title bar with the platform name and active language.
fn draw_title_bar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let dict = app.dict();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", t(dict, "dashboard.title")),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}]", app.tag()),
            Style::default().fg(th.overlay2),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).style(Style::default().bg(th.mantle)),
        area,
    );
}

/// What: Draw the entity list and the selected card side by side.
fn draw_main(f: &mut Frame, app: &mut AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    // Entity list: section label plus headline per row.
    let items: Vec<ListItem> = {
        let dict = app.dict();
        app.entities
            .iter()
            .map(|record| {
                let section = t(dict, section_key(record));
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{section} "), Style::default().fg(th.subtext0)),
                    Span::styled(
                        record.headline().to_string(),
                        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect()
    };
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(
            Style::default()
                .bg(th.surface1)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay1))
                .title(Span::styled(
                    format!(" {} ", t(app.dict(), "nav.explore")),
                    Style::default().fg(th.lavender),
                )),
        );
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    draw_card_pane(f, app, chunks[1]);
}

/// What: Render the selected entity's card into the right pane.
fn draw_card_pane(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let dict = app.dict();
    let Some(record) = app.selected() else {
        return;
    };

    let body_width = usize::from(area.width.saturating_sub(4).max(16));
    let opts = if app.show_actions {
        RenderOptions::new(dict)
            .with_actions()
            .with_body_width(body_width)
    } else {
        RenderOptions::new(dict).with_body_width(body_width)
    };
    let mut node = render_entity(record, &opts, Utc::now());
    if app.is_liked(record.id()) {
        mark_local_like(&mut node, dict);
    }

    let lines = card_lines(&node, &th, dict);
    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay1))
            .title(Span::styled(
                format!(" {} ", t(dict, section_key(record))),
                Style::default().fg(th.lavender),
            )),
    );
    f.render_widget(pane, area);
}

/// What: Reflect the ephemeral local like state in the actions row.
///
/// Details:
/// - Display-only: the node's like action label switches to the liked form;
///   nothing is persisted and the next unliked render is unaffected
fn mark_local_like(node: &mut CardNode, dict: &Dictionary) {
    for action in &mut node.actions {
        if action.kind == ActionKind::Like {
            action.label = t(dict, "common.liked");
        }
    }
}

/// What: Draw the footer hint row.
fn draw_footer(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let th = theme();
    let dict = app.dict();
    let hints = [
        "dashboard.hints.quit",
        "dashboard.hints.navigate",
        "dashboard.hints.language",
        "dashboard.hints.actions",
        "dashboard.hints.like",
    ]
    .map(|key| t(dict, key))
    .join("  ·  ");
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(th.subtext0),
        )))
        .style(Style::default().bg(th.mantle)),
        area,
    );
}
