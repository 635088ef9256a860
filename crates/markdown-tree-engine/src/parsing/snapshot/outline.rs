use std::fmt::Write;

use crate::models::{Document, Element};

/// Renders the tree one element per line, two spaces of indent per level.
///
/// Text-bearing elements print their payload `{:?}`-escaped after the kind, so
/// embedded newlines stay on one line:
///
/// ```text
/// document
///   heading-1 "Title"
///     paragraph "Body\ntext"
/// ```
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    write_element(&mut out, doc.root(), 0);
    out
}

fn write_element(out: &mut String, element: Element<'_>, depth: usize) {
    let kind = element.kind();
    let indent = "  ".repeat(depth);
    // Writing into a String cannot fail.
    let _ = if kind.carries_text() {
        writeln!(out, "{indent}{kind} {:?}", element.text())
    } else {
        writeln!(out, "{indent}{kind}")
    };
    for child in element.children() {
        write_element(out, child, depth + 1);
    }
}
