use crate::inline::{Extension, InlineNode, InlineRegistry, RegistryError, process};
use crate::parsing::{Block, parse_blocks};
use crate::render;

/// One processing session: a registry of inline rules plus the block splitter
/// and HTML renderer around it.
///
/// Build one per document (or per thread); nothing is shared between
/// sessions.
///
/// ```
/// use magiclink_engine::{LinkConfig, MagicLinkExtension, Markdown};
///
/// let md = Markdown::new()
///     .with_extension(&MagicLinkExtension::new(LinkConfig::default()))
///     .unwrap();
/// assert_eq!(
///     md.render("Visit http://example.com today"),
///     "<p>Visit <a href=\"http://example.com\">http://example.com</a> today</p>\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Markdown {
    registry: InlineRegistry,
}

impl Markdown {
    /// A session with the builtin inline rules and no extensions.
    pub fn new() -> Self {
        Self {
            registry: InlineRegistry::with_defaults(),
        }
    }

    pub fn with_registry(registry: InlineRegistry) -> Self {
        Self { registry }
    }

    /// Registers `extension` and returns the session.
    pub fn with_extension(mut self, extension: &dyn Extension) -> Result<Self, RegistryError> {
        self.registry.register(extension)?;
        Ok(self)
    }

    pub fn registry(&self) -> &InlineRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut InlineRegistry {
        &mut self.registry
    }

    /// Runs the inline rules over one text run.
    pub fn parse_inline(&self, text: &str) -> Vec<InlineNode> {
        process(&self.registry, text)
    }

    /// Splits `source` into blocks; paragraphs are not inline-processed yet.
    pub fn parse_blocks(&self, source: &str) -> Vec<Block> {
        parse_blocks(source)
    }

    /// Renders a whole document to HTML.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() + source.len() / 4);
        for block in parse_blocks(source) {
            match block {
                Block::Paragraph { text, .. } => {
                    let nodes = self.parse_inline(&text);
                    render::push_paragraph(&mut out, &nodes);
                }
                Block::FencedCode { info, code, .. } => {
                    render::push_code_block(&mut out, &info, &code);
                }
            }
        }
        out
    }
}
