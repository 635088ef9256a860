pub mod blocks;
pub mod options;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use options::ParserOptions;

use blocks::{BlockClassifier, Tokenizer, TreeBuilder};

use crate::models::Document;

/// Parse Markdown source into a document tree using the default options.
///
/// Total: any input, including the empty string, produces a document.
pub fn parse(source: &str) -> Document {
    parse_with_options(source, &ParserOptions::default())
}

pub fn parse_with_options(source: &str, options: &ParserOptions) -> Document {
    let classifier = BlockClassifier::new(*options);
    let mut builder = TreeBuilder::new();

    let blocks = Tokenizer::with_options(options).tokenize(source);
    let block_count = blocks.len();

    for block in blocks.iter().filter(|b| !b.is_empty()) {
        let classified = classifier.classify(block);
        log::trace!("classified block as {}", classified.kind());
        builder.push(classified);
    }

    let doc = builder.finish();
    log::debug!("parsed {block_count} block(s) into {} element(s)", doc.len());
    doc
}
