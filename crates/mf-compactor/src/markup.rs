//! Output wrappers. Renderers hand over plain text; escaping happens here.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Wraps each level of the rendered hierarchy.
pub trait Markup: Send + Sync {
    /// Outermost container around every merged category group.
    fn types(&self, groups: &[String]) -> String;
    /// One category group: optional label, then its modes blocks.
    fn type_content(&self, label: Option<&str>, blocks: &[String]) -> String;
    fn label(&self, text: &str, postfix: &str) -> String;
    fn modes(&self, blocks: &[String], delimiter: &str) -> String;
    fn mode(&self, units: &[String], delimiter: &str) -> String;
    /// One `<days> <time>` pairing with an optional break span.
    fn mode_content(&self, text: &str, pause: Option<&str>) -> String;
}

/// Span/div markup with the legacy class names stylesheets target.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl HtmlMarkup {
    fn spans(class: &str, items: &[String], delimiter: &str) -> String {
        let separator = format!(
            "</span><span class=\"{class}-delimeter\">{}</span><span class=\"{class}\">",
            escape(delimiter)
        );
        format!("<span class=\"{class}\">{}</span>", items.join(separator.as_str()))
    }
}

impl Markup for HtmlMarkup {
    fn types(&self, groups: &[String]) -> String {
        if groups.is_empty() {
            return "<div class=\"types\"></div>".to_string();
        }
        format!(
            "<div class=\"types\"><div class=\"type\">{}</div></div>",
            groups.join("</div><div class=\"type\">")
        )
    }

    fn type_content(&self, label: Option<&str>, blocks: &[String]) -> String {
        format!("<span class=\"type-content\">{}{}</span>", label.unwrap_or(""), blocks.concat())
    }

    fn label(&self, text: &str, postfix: &str) -> String {
        format!(
            "<span class=\"type-content-label\">{}</span><span class=\"type-content-label-postfix\">{}</span>",
            escape(text),
            escape(postfix)
        )
    }

    fn modes(&self, blocks: &[String], delimiter: &str) -> String {
        Self::spans("modes", blocks, delimiter)
    }

    fn mode(&self, units: &[String], delimiter: &str) -> String {
        Self::spans("mode", units, delimiter)
    }

    fn mode_content(&self, text: &str, pause: Option<&str>) -> String {
        match pause {
            Some(pause) => format!(
                "<span class=\"mode-content\">{} <span class=\"mode-content-timeout\">({})</span></span>",
                escape(text),
                escape(pause)
            ),
            None => format!("<span class=\"mode-content\">{}</span>", escape(text)),
        }
    }
}

/// Plain text: one line per group, blocks of a group joined like modes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

const PLAIN_BLOCK_SEPARATOR: &str = "; ";

fn join_non_empty(items: &[String], delimiter: &str) -> String {
    items
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(delimiter)
}

impl Markup for PlainMarkup {
    fn types(&self, groups: &[String]) -> String {
        groups.join("\n")
    }

    fn type_content(&self, label: Option<&str>, blocks: &[String]) -> String {
        let body = join_non_empty(blocks, PLAIN_BLOCK_SEPARATOR);
        format!("{}{}", label.unwrap_or(""), body).trim_end().to_string()
    }

    fn label(&self, text: &str, postfix: &str) -> String {
        format!("{text}{postfix}")
    }

    fn modes(&self, blocks: &[String], delimiter: &str) -> String {
        join_non_empty(blocks, delimiter)
    }

    fn mode(&self, units: &[String], delimiter: &str) -> String {
        units.join(delimiter)
    }

    fn mode_content(&self, text: &str, pause: Option<&str>) -> String {
        match pause {
            Some(pause) => format!("{text} ({pause})"),
            None => text.to_string(),
        }
    }
}

/// Markup selector for callers that pick the format at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Plain,
}

impl OutputFormat {
    pub fn markup(&self) -> &'static dyn Markup {
        static HTML: HtmlMarkup = HtmlMarkup;
        static PLAIN: PlainMarkup = PlainMarkup;
        match self {
            Self::Html => &HTML,
            Self::Plain => &PLAIN,
        }
    }
}

/// Escape text for HTML element content.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"')) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
