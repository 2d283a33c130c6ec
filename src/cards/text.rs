//! Width-aware text helpers shared by the card renderers.

use unicode_width::UnicodeWidthStr;

use crate::cards::node::TagStrip;

/// Maximum number of tags a card shows before clipping to "+N more".
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Maximum number of body lines a card shows.
pub const MAX_BODY_LINES: usize = 2;

/// What: Wrap text to display lines, clipping to a line budget.
///
/// Inputs:
/// - `text`: Source text (whitespace-normalized during wrapping)
/// - `width`: Maximum display width per line, in columns
/// - `max_lines`: Line budget
///
/// Output:
/// - At most `max_lines` lines; the last carries an ellipsis when text was
///   clipped
///
/// Details:
/// - Greedy word wrap measured with `unicode-width`, so wide scripts count
///   their real column width
/// - A single word wider than `width` is hard-clipped rather than overflowing
pub fn clip_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = clip_word(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
            if lines.len() == max_lines {
                break;
            }
        }
    }
    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
        current = String::new();
    }

    // Anything left over means we clipped; mark the last line.
    if lines.len() > max_lines || !current.is_empty() {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            while last.width() + 1 > width && !last.is_empty() {
                last.pop();
            }
            last.push('…');
        }
    }
    lines
}

/// What: Hard-clip a single word to a column budget.
fn clip_word(word: &str, width: usize) -> String {
    if word.width() <= width {
        return word.to_string();
    }
    let mut out = String::new();
    for ch in word.chars() {
        let candidate_width = out.width() + unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if candidate_width + 1 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Clip a tag list for display.
///
/// Inputs:
/// - `tags`: Full tag list in record order
///
/// Output:
/// - The first [`MAX_VISIBLE_TAGS`] tags plus the count of clipped ones
pub fn tag_strip(tags: &[String]) -> TagStrip {
    let visible: Vec<String> = tags.iter().take(MAX_VISIBLE_TAGS).cloned().collect();
    TagStrip {
        more: tags.len().saturating_sub(visible.len()),
        visible,
    }
}

/// What: Derive the avatar fallback initial from a display name.
///
/// Output:
/// - Uppercased first character, or '?' for an empty name
pub fn initial_of(display_name: &str) -> char {
    display_name
        .trim()
        .chars()
        .next()
        .map_or('?', |c| c.to_uppercase().next().unwrap_or(c))
}

/// What: Convert a byte count to a concise human-readable string.
///
/// Uses 1024-based units (KiB, MiB, GiB, ...) with one decimal place.
pub fn human_bytes(n: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
    #[allow(clippy::cast_precision_loss)]
    let mut v = n as f64;
    let mut i = 0;
    while v >= 1024.0 && i < UNITS.len() - 1 {
        v /= 1024.0;
        i += 1;
    }
    format!("{:.1} {}", v, UNITS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_text_respects_line_budget_and_marks_overflow() {
        let text = "hand woven cotton stole with natural dye and a very long finish";
        let lines = clip_text(text, 20, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        for line in &lines {
            assert!(line.width() <= 20);
        }
    }

    #[test]
    fn clip_text_short_input_is_untouched() {
        let lines = clip_text("block printing", 40, 2);
        assert_eq!(lines, vec!["block printing".to_string()]);
    }

    #[test]
    fn clip_text_handles_empty_and_zero_budgets() {
        assert!(clip_text("", 20, 2).is_empty());
        assert!(clip_text("   ", 20, 2).is_empty());
        assert!(clip_text("text", 0, 2).is_empty());
        assert!(clip_text("text", 20, 0).is_empty());
    }

    #[test]
    fn clip_text_measures_wide_scripts_by_columns() {
        // Devanagari text should still wrap within the column budget.
        let lines = clip_text("हाथ से बुने सूती वस्त्र और प्राकृतिक रंग", 12, 2);
        for line in &lines {
            assert!(line.width() <= 12, "line too wide: {line}");
        }
    }

    #[test]
    fn tag_strip_clips_to_three_with_remainder() {
        let tags: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let strip = tag_strip(&tags);
        assert_eq!(strip.visible, vec!["a", "b", "c"]);
        assert_eq!(strip.more, 2);

        let short = tag_strip(&tags[..2]);
        assert_eq!(short.visible.len(), 2);
        assert_eq!(short.more, 0);
    }

    #[test]
    fn initial_of_uppercases_and_defaults() {
        assert_eq!(initial_of("asha"), 'A');
        assert_eq!(initial_of("  ravi"), 'R');
        assert_eq!(initial_of("मीरा"), 'म');
        assert_eq!(initial_of(""), '?');
    }

    #[test]
    fn human_bytes_uses_binary_units() {
        assert_eq!(human_bytes(512), "512.0 B");
        assert_eq!(human_bytes(2048), "2.0 KiB");
        assert_eq!(human_bytes(5 * 1024 * 1024), "5.0 MiB");
    }
}
