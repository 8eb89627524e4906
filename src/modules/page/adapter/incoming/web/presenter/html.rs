// src/modules/page/adapter/incoming/web/presenter/html.rs
use std::fmt::Write;

use crate::page::domain::blocks::{Block, ContactFormView, NoticeLevel, Span};
use crate::page::domain::page::{Page, TabHeader};

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Breaks up every `</style` (any letter case) so stylesheet text cannot end
/// the element it is inlined in.
fn guard_style_text(css: &str) -> String {
    const CLOSE: &[u8] = b"</style";

    let bytes = css.as_bytes();
    let mut out = String::with_capacity(css.len());
    let mut start = 0;
    let mut i = 0;
    while i + CLOSE.len() <= bytes.len() {
        if bytes[i..i + CLOSE.len()].eq_ignore_ascii_case(CLOSE) {
            out.push_str(&css[start..i]);
            out.push_str("<\\/");
            start = i + 2;
            i += CLOSE.len();
        } else {
            i += 1;
        }
    }
    out.push_str(&css[start..]);
    out
}

fn spans(out: &mut String, spans: &[Span]) {
    for span in spans {
        match span {
            Span::Plain(t) => out.push_str(&escape_html(t)),
            Span::Strong(t) => {
                let _ = write!(out, "<strong>{}</strong>", escape_html(t));
            }
            Span::Emphasis(t) => {
                let _ = write!(out, "<em>{}</em>", escape_html(t));
            }
        }
    }
}

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Error => "notice notice-error",
    }
}

fn full_width_class(base: &str, full_width: bool) -> String {
    if full_width {
        format!("{} full-width", base)
    } else {
        base.to_string()
    }
}

fn contact_form(out: &mut String, form: &ContactFormView) {
    let _ = write!(
        out,
        concat!(
            "<form class=\"contact-form\" method=\"post\" action=\"{action}\">",
            "<label>Your Name<input type=\"text\" name=\"name\" value=\"{name}\"></label>",
            "<label>Your Email<input type=\"email\" name=\"email\" value=\"{email}\"></label>",
            "<label>Message<textarea name=\"message\" rows=\"6\">{message}</textarea></label>",
            "<button type=\"submit\" class=\"button full-width\">{submit}</button>",
            "</form>"
        ),
        action = escape_html(&form.action),
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        message = escape_html(&form.message),
        submit = escape_html(&form.submit_label),
    );
}

fn block(out: &mut String, b: &Block) {
    match b {
        Block::Heading { level, spans: s } => {
            let level = (*level).clamp(1, 6);
            let _ = write!(out, "<h{}>", level);
            spans(out, s);
            let _ = write!(out, "</h{}>", level);
        }
        Block::Paragraph(s) => {
            out.push_str("<p>");
            spans(out, s);
            out.push_str("</p>");
        }
        Block::RichText(paragraphs) => {
            out.push_str("<div class=\"rich-text\">");
            for p in paragraphs {
                // Authored markup, emitted as-is.
                let _ = write!(out, "<p>{}</p>", p);
            }
            out.push_str("</div>");
        }
        Block::Caption(s) => {
            out.push_str("<p class=\"caption\">");
            spans(out, s);
            out.push_str("</p>");
        }
        Block::Code(text) => {
            let _ = write!(out, "<pre class=\"text\">{}</pre>", escape_html(text));
        }
        Block::Divider => out.push_str("<hr>"),
        Block::Image { src, alt, width } => {
            let _ = write!(out, "<img src=\"{}\" alt=\"{}\"", escape_html(src), escape_html(alt));
            if let Some(w) = width {
                let _ = write!(out, " width=\"{}\"", w);
            }
            out.push('>');
        }
        Block::LinkButton {
            label,
            url,
            full_width,
        } => {
            let _ = write!(
                out,
                "<a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                full_width_class("button link-button", *full_width),
                escape_html(url),
                escape_html(label)
            );
        }
        Block::DownloadButton {
            label,
            href,
            file_name,
            mime,
            full_width,
        } => {
            let _ = write!(
                out,
                "<a class=\"{}\" href=\"{}\" download=\"{}\" type=\"{}\">{}</a>",
                full_width_class("button download-button", *full_width),
                escape_html(href),
                escape_html(file_name),
                escape_html(mime),
                escape_html(label)
            );
        }
        Block::Columns { weights, columns } => {
            out.push_str("<div class=\"columns\">");
            for (weight, column) in weights.iter().zip(columns) {
                let _ = write!(out, "<div class=\"column\" style=\"flex: {}\">", weight);
                blocks(out, column);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        Block::Metric { label, value } => {
            let _ = write!(
                out,
                "<div class=\"metric\"><div class=\"metric-label\">{}</div><div class=\"metric-value\">{}</div></div>",
                escape_html(label),
                escape_html(value)
            );
        }
        Block::Progress { percent, label } => {
            let _ = write!(
                out,
                "<div class=\"progress\"><div class=\"progress-label\">{}</div><progress value=\"{}\" max=\"100\">{}%</progress></div>",
                escape_html(label),
                percent,
                percent
            );
        }
        Block::Container { bordered, children } => {
            out.push_str(if *bordered {
                "<div class=\"container bordered\">"
            } else {
                "<div class=\"container\">"
            });
            blocks(out, children);
            out.push_str("</div>");
        }
        Block::Expander { label, children } => {
            let _ = write!(out, "<details class=\"expander\"><summary>{}</summary>", escape_html(label));
            blocks(out, children);
            out.push_str("</details>");
        }
        Block::BulletList(items) => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", escape_html(item));
            }
            out.push_str("</ul>");
        }
        Block::Notice { level, message } => {
            let _ = write!(
                out,
                "<div class=\"{}\" role=\"alert\">{}</div>",
                notice_class(*level),
                escape_html(message)
            );
        }
        Block::ContactForm(form) => contact_form(out, form),
    }
}

fn blocks(out: &mut String, list: &[Block]) {
    for b in list {
        block(out, b);
    }
}

/// Markup for a list of blocks, without any document wrapper.
#[cfg(test)]
fn render_blocks(list: &[Block]) -> String {
    let mut out = String::new();
    blocks(&mut out, list);
    out
}

fn tab_bar(out: &mut String, tabs: &[TabHeader]) {
    out.push_str("<nav class=\"tabs\">");
    for tab in tabs {
        let _ = write!(
            out,
            "<a class=\"{}\" href=\"/?tab={}\">{}</a>",
            if tab.active { "tab active" } else { "tab" },
            tab.tab.as_str(),
            escape_html(&tab.label)
        );
    }
    out.push_str("</nav>");
}

/// Full HTML document for a page.
pub fn render_document(page: &Page) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(out, "<title>{}</title>", escape_html(&page.meta.title));
    let _ = write!(
        out,
        "<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{}</text></svg>\">",
        escape_html(&page.meta.icon)
    );
    if let Some(css) = &page.style {
        let _ = write!(out, "<style>{}</style>", guard_style_text(css));
    }
    out.push_str("</head><body class=\"layout-wide\">");

    out.push_str("<aside class=\"sidebar\">");
    blocks(&mut out, &page.sidebar);
    out.push_str("</aside>");

    out.push_str("<main class=\"main\">");
    blocks(&mut out, &page.notices);
    tab_bar(&mut out, &page.tabs);
    let _ = write!(
        out,
        "<section class=\"tab-panel\" id=\"tab-{}\">",
        page.selected_tab.as_str()
    );
    blocks(&mut out, &page.body);
    out.push_str("</section></main></body></html>");

    out
}

/// Minimal document shown when the page itself cannot be rendered.
pub fn render_error_document(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head><body><div class=\"notice notice-error\" role=\"alert\">{}</div></body></html>",
        escape_html(title),
        escape_html(message)
    )
}
