//! Intermediate document model shared by the on-screen preview and the export.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Superscript(String),
    /// Text carrying a CSS class, e.g. `duplicate`.
    Span { class: String, text: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.inlines.last_mut() {
            Some(Inline::Text(existing)) => existing.push_str(&text),
            _ => self.inlines.push(Inline::Text(text)),
        }
    }

    pub fn push(&mut self, inline: Inline) {
        match inline {
            Inline::Text(text) => self.push_text(text),
            other => self.inlines.push(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub paragraphs: Vec<Paragraph>,
}

impl Markup {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// HTML fragment, one `<p>` per paragraph.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for paragraph in &self.paragraphs {
            html.push_str("<p>");
            for inline in &paragraph.inlines {
                match inline {
                    Inline::Text(text) => html.push_str(&escape_html(text)),
                    Inline::Superscript(text) => {
                        html.push_str("<sup>");
                        html.push_str(&escape_html(text));
                        html.push_str("</sup>");
                    }
                    Inline::Span { class, text } => {
                        html.push_str(&format!(
                            "<span class=\"{}\">{}</span>",
                            escape_html(class),
                            escape_html(text)
                        ));
                    }
                }
            }
            html.push_str("</p>");
        }
        html
    }

    /// Complete HTML document wrapping [`Markup::to_html`], as embedded in exports.
    pub fn to_html_document(&self) -> String {
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>{}</body></html>",
            self.to_html()
        )
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
