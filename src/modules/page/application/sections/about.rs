use crate::content::domain::entities::AboutContent;
use crate::page::domain::blocks::Block;

/// Splits authored text into paragraphs on blank lines, dropping indentation
/// left over from the source literal.
fn paragraphs(summary: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in summary.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

pub fn render_about(about: &AboutContent) -> Vec<Block> {
    vec![
        Block::heading(2, "About Me"),
        Block::RichText(paragraphs(&about.summary)),
        Block::Divider,
        Block::heading(3, "At a Glance"),
        Block::equal_columns(
            about
                .metrics
                .iter()
                .map(|m| {
                    vec![Block::Metric {
                        label: m.label.clone(),
                        value: m.value.clone(),
                    }]
                })
                .collect(),
        ),
    ]
}
