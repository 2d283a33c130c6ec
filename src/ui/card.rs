//! Conversion of card presentation nodes into themed `ratatui` lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::cards::{ActionNode, AvatarNode, CardNode, Tone};
use crate::i18n::{Dictionary, t_fmt1};
use crate::theme::Theme;

/// What: Map a badge tone to its theme color.
const fn tone_color(tone: Tone, th: &Theme) -> Color {
    match tone {
        Tone::Info => th.sapphire,
        Tone::Positive => th.green,
        Tone::Warning => th.yellow,
        Tone::Muted => th.overlay1,
    }
}

/// What: Format a [`CardNode`] into themed `ratatui` lines.
///
/// Inputs:
/// - `node`: Presentation structure produced by a card renderer
/// - `th`: Theme palette
/// - `dict`: Dictionary for display-layer markers (the "+N more" tag marker)
///
/// Output:
/// - Header, subtitle, body, metadata, tag and action rows, in that order;
///   empty slots produce no line
pub fn card_lines(node: &CardNode, th: &Theme, dict: &Dictionary) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Header: avatar marker, title, badges.
    let mut header: Vec<Span<'static>> = Vec::new();
    match &node.avatar {
        Some(AvatarNode::Initial(c)) => header.push(Span::styled(
            format!("({c}) "),
            Style::default()
                .fg(th.lavender)
                .add_modifier(Modifier::BOLD),
        )),
        Some(AvatarNode::Image(_)) => {
            header.push(Span::styled("◉ ", Style::default().fg(th.sapphire)));
        }
        None => {}
    }
    header.push(Span::styled(
        node.title.clone(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ));
    for badge in &node.badges {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            format!("[{}]", badge.label),
            Style::default().fg(tone_color(badge.tone, th)),
        ));
    }
    lines.push(Line::from(header));

    if let Some(subtitle) = &node.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            Style::default()
                .fg(th.subtext0)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    for body_line in &node.body {
        lines.push(Line::from(Span::styled(
            body_line.clone(),
            Style::default().fg(th.text),
        )));
    }

    for (label, value) in &node.meta {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default()
                    .fg(th.sapphire)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value.clone(), Style::default().fg(th.text)),
        ]));
    }

    if !node.tags.visible.is_empty() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, tag) in node.tags.visible.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("#{tag}"),
                Style::default().fg(th.lavender),
            ));
        }
        if node.tags.more > 0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                t_fmt1(dict, "common.more_tags", node.tags.more),
                Style::default().fg(th.overlay1),
            ));
        }
        lines.push(Line::from(spans));
    }

    if !node.actions.is_empty() {
        lines.push(Line::from(action_spans(&node.actions, th)));
    }

    lines
}

/// What: Build the actions row spans.
///
/// Details:
/// - Enabled actions are underlined accents; disabled ones render muted so a
///   gated action (pending approval) stays visible but inert
fn action_spans(actions: &[ActionNode], th: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, action) in actions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if action.enabled {
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC)
        };
        spans.push(Span::styled(format!("[{}]", action.label), style));
    }
    spans
}
