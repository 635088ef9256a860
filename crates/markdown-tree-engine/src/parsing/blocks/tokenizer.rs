use crate::parsing::ParserOptions;

use super::kinds::{CodeFence, FenceKind};

/// Splits source text into blocks separated by blank lines.
///
/// Lines inside a fenced code region are never treated as separators, so a
/// fenced block comes out whole, fences included. A fence left open at the end
/// of input runs to the end of the source.
///
/// The tokenizer can be reused; each call to [`Tokenizer::tokenize`] starts
/// from a clean state.
#[derive(Debug)]
pub struct Tokenizer {
    output: Vec<String>,
    block: Vec<String>,
    fence: Option<FenceKind>,
    allow_tildes: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_options(&ParserOptions::default())
    }

    pub fn with_options(options: &ParserOptions) -> Self {
        Self {
            output: Vec::new(),
            block: Vec::new(),
            fence: None,
            allow_tildes: options.tilde_fences,
        }
    }

    pub fn tokenize(&mut self, content: &str) -> Vec<String> {
        self.output.clear();
        self.block.clear();
        self.fence = None;

        for line in content.split('\n') {
            if let Some(kind) = self.fence {
                self.block.push(line.to_string());
                if CodeFence::closes(kind, line) {
                    log::trace!("fence closed: {kind:?}");
                    self.fence = None;
                }
            } else if line.trim().is_empty() {
                self.flush_block();
            } else {
                self.block.push(line.to_string());
                if let Some(kind) = CodeFence::open(line, self.allow_tildes) {
                    log::trace!("fence opened: {kind:?}");
                    self.fence = Some(kind);
                }
            }
        }

        if let Some(kind) = self.fence.take() {
            log::debug!("unterminated {kind:?} fence runs to end of input");
        }
        self.flush_block();

        std::mem::take(&mut self.output)
    }

    /// Moves the accumulated lines to the output as one block.
    fn flush_block(&mut self) {
        if !self.block.is_empty() {
            let block = self.block.join("\n");
            log::trace!("block: {} line(s)", self.block.len());
            self.output.push(block);
            self.block.clear();
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize with default options.
pub fn tokenize(content: &str) -> Vec<String> {
    Tokenizer::new().tokenize(content)
}
