use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::guard::STYLE_MARKER;
use super::widget;
use crate::settings::Settings;

/// Description paragraph close, blank line(s), details block open.
static DESC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"</p>\s*\n\s*<div class="details">"#).unwrap());

/// The love widget as it used to sit at the bottom of the page, followed by
/// the close of its container and of `<main>`.
static LEGACY_LOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"\s*<div class="love-section">"#,
        r#"\s*<button class="love-btn" id="love-btn">"#,
        r#"\s*<span class="heart">♡</span>"#,
        r#"\s*<span class="love-count" id="love-count">0</span>"#,
        r#"\s*</button>"#,
        r#"\s*<span class="love-label">Show some love</span>"#,
        r#"\s*</div>\s*</div>\s*</main>"#,
    ))
    .unwrap()
});

const CANONICAL_CLOSE: &str = "\n      </div>\n    </main>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    AlreadyPresent,
    Injected,
    /// Marker missing and the anchor too; page still gets the widget.
    AnchorMissing,
}

#[derive(Debug)]
pub enum Transform {
    Patched {
        content: String,
        style: StyleChange,
        legacy_removed: usize,
    },
    /// No description/details adjacency: nothing must be written.
    PatternMissing,
}

/// Pure text edit of one page. Callers decide whether to write.
pub fn apply(content: &str, id: &str, settings: &Settings) -> Transform {
    let (styled, style) = inject_style(content, &settings.style_anchor);

    let Some(m) = DESC_RE.find(&styled) else {
        return Transform::PatternMissing;
    };

    let mut out = String::with_capacity(styled.len() + 2048);
    out.push_str(&styled[..m.start()]);
    out.push_str(&widget::render(&settings.widget, id));
    out.push_str(&styled[m.end()..]);

    let (out, legacy_removed) = remove_legacy_love(out);

    Transform::Patched {
        content: out,
        style,
        legacy_removed,
    }
}

fn inject_style(content: &str, anchor: &str) -> (String, StyleChange) {
    if content.contains(STYLE_MARKER) {
        return (content.to_string(), StyleChange::AlreadyPresent);
    }
    match content.find(anchor) {
        Some(at) if !anchor.is_empty() => {
            let mut out = String::with_capacity(content.len() + widget::BUY_CSS.len() + 8);
            out.push_str(&content[..at]);
            out.push_str(widget::BUY_CSS);
            out.push_str("\n    ");
            out.push_str(&content[at..]);
            (out, StyleChange::Injected)
        }
        _ => (content.to_string(), StyleChange::AnchorMissing),
    }
}

fn remove_legacy_love(content: String) -> (String, usize) {
    let n = LEGACY_LOVE_RE.find_iter(&content).count();
    if n == 0 {
        return (content, 0);
    }
    let out = LEGACY_LOVE_RE
        .replace_all(&content, NoExpand(CANONICAL_CLOSE))
        .into_owned();
    (out, n)
}

// ── Tests ──
