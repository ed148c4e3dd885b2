//! Line-oriented text formatting with inline chips.

use super::{Chip, LineStyle, Span, TextLine};

/// Characters a divider line may be built from.
const DIVIDER_CHARS: &[char] = &['-', '─', '━', '═', '—'];

/// Minimum length of a divider line, in characters.
const DIVIDER_MIN: usize = 5;

/// Classify one line. Rules are evaluated in priority order.
pub fn classify(line: &str) -> LineStyle {
    let trimmed = line.trim();
    if header_label(trimmed).is_some() {
        LineStyle::Header
    } else if is_divider(trimmed) {
        LineStyle::Divider
    } else if trimmed.starts_with("--") {
        LineStyle::SubLabel
    } else if trimmed.starts_with('*') {
        LineStyle::Accent
    } else if line.contains("Details:") {
        LineStyle::Dim
    } else {
        LineStyle::Normal
    }
}

/// Format a text payload into styled lines.
pub fn format_text(text: &str) -> Vec<TextLine> {
    text.lines().map(format_line).collect()
}

fn format_line(line: &str) -> TextLine {
    let style = classify(line);
    let spans = match style {
        LineStyle::Header => {
            let label = header_label(line.trim()).unwrap_or_default();
            vec![Span::Text(label.to_string())]
        },
        LineStyle::Divider => vec![Span::Text(line.trim().to_string())],
        _ => split_chips(line),
    };
    TextLine { style, spans }
}

/// Inner label of a line wrapped in exactly one bracket pair.
fn header_label(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    let valid = !inner.trim().is_empty() && !inner.contains(['[', ']']);
    valid.then_some(inner)
}

fn is_divider(trimmed: &str) -> bool {
    trimmed.chars().count() >= DIVIDER_MIN && trimmed.chars().all(|c| DIVIDER_CHARS.contains(&c))
}

/// Split a line into text runs and `[label]` chips.
pub fn split_chips(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            break;
        };
        let label = &after[..close];
        if label.trim().is_empty() || label.contains('[') {
            // Not a chip; keep the bracket as text and continue past it.
            push_text(&mut spans, &rest[..=open]);
            rest = after;
            continue;
        }
        push_text(&mut spans, &rest[..open]);
        spans.push(Span::Chip(Chip::for_label(label)));
        rest = &after[close + 1..];
    }
    push_text(&mut spans, rest);
    spans
}

fn push_text(spans: &mut Vec<Span>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Span::Text(prev)) = spans.last_mut() {
        prev.push_str(text);
    } else {
        spans.push(Span::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_line_is_header() {
        assert_eq!(classify("[OVERVIEW]"), LineStyle::Header);
        assert_eq!(classify("  [design-system]  "), LineStyle::Header);
    }

    #[test]
    fn two_chips_are_not_a_header() {
        assert_eq!(classify("[status] and [help]"), LineStyle::Normal);
    }

    #[test]
    fn divider_needs_five_chars() {
        assert_eq!(classify("-----"), LineStyle::Divider);
        assert_eq!(classify("─────────"), LineStyle::Divider);
        assert_eq!(classify("━━═══"), LineStyle::Divider);
        assert_eq!(classify("----"), LineStyle::SubLabel);
        assert_eq!(classify("--- x ---"), LineStyle::SubLabel);
    }

    #[test]
    fn sub_label_accent_dim() {
        assert_eq!(classify("--impact"), LineStyle::SubLabel);
        assert_eq!(classify("  * item"), LineStyle::Accent);
        assert_eq!(classify("Details: more"), LineStyle::Dim);
        assert_eq!(classify("plain text"), LineStyle::Normal);
    }

    #[test]
    fn priority_sub_label_over_dim() {
        assert_eq!(classify("-- Details: x"), LineStyle::SubLabel);
    }

    #[test]
    fn chips_split_from_text() {
        let spans = split_chips("* [status]     system summary");
        assert_eq!(
            spans,
            vec![
                Span::Text("* ".to_string()),
                Span::Chip(Chip {
                    label: "status".to_string(),
                    command: "status".to_string(),
                }),
                Span::Text("     system summary".to_string()),
            ]
        );
    }

    #[test]
    fn unmapped_chip_falls_back_to_lowercase() {
        let spans = split_chips("see [Blog]");
        assert_eq!(spans[1], Span::Chip(Chip::for_label("Blog")));
        match &spans[1] {
            Span::Chip(chip) => assert_eq!(chip.command, "blog"),
            other => panic!("expected chip, got {other:?}"),
        }
    }

    #[test]
    fn unbalanced_brackets_stay_text() {
        assert_eq!(
            split_chips("a [b"),
            vec![Span::Text("a [b".to_string())]
        );
        assert_eq!(
            split_chips("a [] b"),
            vec![Span::Text("a [] b".to_string())]
        );
    }

    #[test]
    fn header_spans_strip_brackets() {
        let lines = format_text("[OVERVIEW]\nbody");
        assert_eq!(lines[0].spans, vec![Span::Text("OVERVIEW".to_string())]);
        assert_eq!(lines[1].style, LineStyle::Normal);
    }
}
