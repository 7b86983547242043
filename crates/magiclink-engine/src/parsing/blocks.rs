use super::span::Span;

/// Which character a fenced code block was opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence at the start of `line`, returning its kind and the
    /// text after the fence characters (the info string on an opener).
    pub fn sig(line: &str) -> Option<(Self, &str)> {
        let (kind, ch) = if line.starts_with(Self::BACKTICKS) {
            (FenceKind::Backticks, '`')
        } else if line.starts_with(Self::TILDES) {
            (FenceKind::Tildes, '~')
        } else {
            return None;
        };
        Some((kind, line.trim_start_matches(ch)))
    }
}

/// A leaf block of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Consecutive non-blank lines. `text` keeps interior newlines (and the
    /// trailing spaces that mark hard breaks) but is trimmed at both ends.
    Paragraph { span: Span, text: String },
    /// A fenced code block. Raw zone: its content never reaches inline rules.
    FencedCode {
        span: Span,
        kind: FenceKind,
        info: String,
        code: String,
    },
}

impl Block {
    pub fn span(&self) -> Span {
        match self {
            Block::Paragraph { span, .. } | Block::FencedCode { span, .. } => *span,
        }
    }
}

/// Splits `source` into paragraphs and fenced code blocks.
pub fn parse_blocks(source: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    let mut offset = 0usize;
    for raw in source.split_inclusive('\n') {
        let line = LineClass::classify(offset, raw);
        offset += raw.len();
        builder.push(&line);
    }
    builder.finish()
}

/// Local facts about one line, computed without looking at its neighbours.
struct LineClass<'a> {
    /// Byte span of the line including its newline.
    line: Span,
    /// Line text without the trailing `\n` / `\r\n`.
    text: &'a str,
    is_blank: bool,
    fence: Option<(FenceKind, &'a str)>,
}

impl<'a> LineClass<'a> {
    fn classify(offset: usize, raw: &'a str) -> Self {
        let text = raw.trim_end_matches(['\r', '\n']);
        LineClass {
            line: Span::new(offset, offset + raw.len()),
            text,
            is_blank: text.trim().is_empty(),
            fence: FenceKind::sig(text),
        }
    }
}

#[derive(Debug, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph {
        start: usize,
        end: usize,
        text: String,
    },
    Fence {
        kind: FenceKind,
        start: usize,
        end: usize,
        info: String,
        code: String,
    },
}

#[derive(Default)]
struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    fn push(&mut self, c: &LineClass<'_>) {
        if let LeafState::Fence { kind, end, code, .. } = &mut self.leaf {
            let closes = matches!(c.fence, Some((k, rest)) if k == *kind && rest.trim().is_empty());
            *end = c.line.end;
            if closes {
                self.flush_fence();
            } else {
                code.push_str(c.text);
                code.push('\n');
            }
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some((kind, info)) = c.fence {
            self.flush_paragraph();
            self.leaf = LeafState::Fence {
                kind,
                start: c.line.start,
                end: c.line.end,
                info: info.trim().to_string(),
                code: String::new(),
            };
            return;
        }

        match &mut self.leaf {
            LeafState::Paragraph { end, text, .. } => {
                text.push('\n');
                text.push_str(c.text);
                *end = c.line.end;
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    start: c.line.start,
                    end: c.line.end,
                    text: c.text.to_string(),
                };
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence still becomes a fence block
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::take(&mut self.leaf);
        if let LeafState::Paragraph { start, end, text } = prev {
            self.out.push(Block::Paragraph {
                span: Span::new(start, end),
                text: text.trim().to_string(),
            });
        } else {
            self.leaf = prev;
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::take(&mut self.leaf);
        if let LeafState::Fence {
            kind,
            start,
            end,
            info,
            code,
        } = prev
        {
            self.out.push(Block::FencedCode {
                span: Span::new(start, end),
                kind,
                info,
                code,
            });
        } else {
            self.leaf = prev;
        }
    }
}
