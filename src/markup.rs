//! String-level rendering helpers for content that is injected as markup.
//!
//! Everything user- or model-provided passes through [`escape_html`] before
//! it is spliced into a template.

use crate::analysis::{DocumentMetadata, MindMap};
use crate::workspace::{ChatEntry, Role};

pub const THINKING_TEXT: &str = "Thinking...";

/// Entity substitution for the five characters that matter in text and
/// attribute context.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `1200` -> `"1,200"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Upper-cases the first character, leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub icon: &'static str,
    pub label: String,
}

pub fn metadata_badges(meta: &DocumentMetadata) -> Vec<Badge> {
    vec![
        Badge {
            icon: "📄",
            label: format!("{} pages", meta.page_count),
        },
        Badge {
            icon: "📝",
            label: format!("{} words", format_thousands(meta.word_count)),
        },
        Badge {
            icon: "⏱️",
            label: format!("{} min read", meta.reading_time),
        },
        Badge {
            icon: "🌐",
            label: capitalize_first(&meta.language),
        },
        Badge {
            icon: "👤",
            label: capitalize_first(&meta.audience),
        },
    ]
}

pub fn render_mindmap_html(map: &MindMap) -> String {
    let mut html = format!(
        r#"<div class="mindmap-central">{}</div>"#,
        escape_html(&map.central)
    );
    for branch in &map.branches {
        html.push_str(r#"<div class="mindmap-branch">"#);
        html.push_str(&format!(
            r#"<div class="mindmap-branch-title">{}</div>"#,
            escape_html(&branch.name)
        ));
        for sub in &branch.subbranches {
            html.push_str(&format!(
                r#"<div class="mindmap-subbranch">{}</div>"#,
                escape_html(sub)
            ));
        }
        html.push_str("</div>");
    }
    html
}

pub fn chat_entry_html(entry: &ChatEntry) -> String {
    let speaker = match entry.role {
        Role::User => "You:",
        Role::Assistant => "AI:",
    };
    let body = if entry.pending {
        THINKING_TEXT.to_string()
    } else {
        escape_html(&entry.text)
    };
    format!("<strong>{speaker}</strong> {body}")
}
