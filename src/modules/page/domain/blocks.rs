/// A run of inline text with optional emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
    Emphasis(String),
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Span::Strong(text.into())
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Span::Emphasis(text.into())
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(t) | Span::Strong(t) | Span::Emphasis(t) => t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Snapshot of the contact form as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub action: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit_label: String,
}

/// One node of the renderable tree. Section renderers produce these; the
/// presenter turns them into markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `level` is 1..=6.
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    /// Authored markup, emitted verbatim. One entry per paragraph.
    RichText(Vec<String>),
    Caption(Vec<Span>),
    /// Preformatted-looking plain text line.
    Code(String),
    Divider,
    Image {
        src: String,
        alt: String,
        width: Option<u32>,
    },
    /// Opens `url` in a new browsing context.
    LinkButton {
        label: String,
        url: String,
        full_width: bool,
    },
    DownloadButton {
        label: String,
        href: String,
        file_name: String,
        mime: String,
        full_width: bool,
    },
    /// Relative widths, one per column. `weights.len() == columns.len()`.
    Columns {
        weights: Vec<u32>,
        columns: Vec<Vec<Block>>,
    },
    Metric { label: String, value: String },
    Progress { percent: u8, label: String },
    Container { bordered: bool, children: Vec<Block> },
    Expander { label: String, children: Vec<Block> },
    BulletList(Vec<String>),
    Notice { level: NoticeLevel, message: String },
    ContactForm(ContactFormView),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            spans: vec![Span::plain(text)],
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Span::plain(text)])
    }

    pub fn notice(level: NoticeLevel, message: impl Into<String>) -> Self {
        Block::Notice {
            level,
            message: message.into(),
        }
    }

    /// Columns of equal width.
    pub fn equal_columns(columns: Vec<Vec<Block>>) -> Self {
        Block::Columns {
            weights: vec![1; columns.len()],
            columns,
        }
    }
}

#[cfg(test)]
impl Block {
    fn children(&self) -> &[Block] {
        match self {
            Block::Container { children, .. } | Block::Expander { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first walk over this block and everything nested in it.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Block)) {
        visit(self);
        if let Block::Columns { columns, .. } = self {
            for column in columns {
                for block in column {
                    block.walk(visit);
                }
            }
        }
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Flattens a list of blocks (and their descendants) in document order.
#[cfg(test)]
pub fn flatten(blocks: &[Block]) -> Vec<&Block> {
    let mut out = Vec::new();
    for block in blocks {
        block.walk(&mut |b| out.push(b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_columns_has_one_weight_per_column() {
        let block = Block::equal_columns(vec![vec![], vec![], vec![]]);
        match block {
            Block::Columns { weights, columns } => {
                assert_eq!(weights, vec![1, 1, 1]);
                assert_eq!(columns.len(), 3);
            }
            other => panic!("Expected Columns, got {:?}", other),
        }
    }

    #[test]
    fn flatten_visits_nested_blocks_in_document_order() {
        let tree = vec![
            Block::heading(1, "top"),
            Block::Container {
                bordered: true,
                children: vec![
                    Block::equal_columns(vec![
                        vec![Block::paragraph("left")],
                        vec![Block::paragraph("right")],
                    ]),
                    Block::Expander {
                        label: "more".to_string(),
                        children: vec![Block::BulletList(vec!["x".to_string()])],
                    },
                ],
            },
        ];

        let paragraphs: Vec<&str> = flatten(&tree)
            .into_iter()
            .filter_map(|b| match b {
                Block::Paragraph(spans) => Some(spans[0].text()),
                _ => None,
            })
            .collect();
        assert_eq!(paragraphs, vec!["left", "right"]);
        assert_eq!(flatten(&tree).len(), 7);
    }
}
