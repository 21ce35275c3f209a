/// Present in the injected CSS, never in the widget markup itself.
pub const STYLE_MARKER: &str = ".buy-section";
const WIDGET_MARKER: &str = "buy-section";
const PARAGRAPH_CLOSE: &str = "</p>";
/// Characters inspected after the first paragraph close.
const WINDOW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardReport {
    pub has_style: bool,
    pub widget_in_place: bool,
}

impl GuardReport {
    pub fn already_updated(&self) -> bool {
        self.has_style && self.widget_in_place
    }
}

pub fn inspect(content: &str) -> GuardReport {
    GuardReport {
        has_style: content.contains(STYLE_MARKER),
        widget_in_place: widget_follows_first_paragraph(content),
    }
}

/// Looks between the first `</p>` and the next one, capped at
/// `WINDOW_CHARS`. Only the first paragraph close counts, even when the
/// description itself holds several paragraphs.
fn widget_follows_first_paragraph(content: &str) -> bool {
    let Some((_, rest)) = content.split_once(PARAGRAPH_CLOSE) else {
        return false;
    };
    let segment = rest.split(PARAGRAPH_CLOSE).next().unwrap_or("");
    let end = segment
        .char_indices()
        .nth(WINDOW_CHARS)
        .map(|(i, _)| i)
        .unwrap_or(segment.len());
    segment[..end].contains(WIDGET_MARKER)
}

// ── Tests ──
