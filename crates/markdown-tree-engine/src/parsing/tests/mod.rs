//! End-to-end tests for `parse`: tokenizer, classifier and tree builder
//! together. Every parsed document is also run through the invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Document, Element, ElementKind, HeadingLevel, ListStyle};
use crate::parsing::{ParserOptions, parse, parse_with_options, snapshot};

fn parse_checked(source: &str) -> Document {
    let doc = parse(source);
    snapshot::invariants(&doc);
    doc
}

fn h(level: u8) -> ElementKind {
    ElementKind::Heading(HeadingLevel::new(level).unwrap())
}

fn only_child(element: Element<'_>) -> Element<'_> {
    let mut children = element.children();
    let child = children.next().expect("expected a child");
    assert!(children.next().is_none(), "expected exactly one child");
    child
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t\n  ")]
fn empty_and_blank_input_yield_empty_document(#[case] source: &str) {
    let doc = parse_checked(source);
    assert!(doc.is_empty());
    assert_eq!(doc, Document::new());
}

#[test]
fn simple_paragraph() {
    let doc = parse_checked("Test");
    let p = only_child(doc.root());

    assert_eq!(p.kind(), ElementKind::Paragraph);
    assert_eq!(p.text(), "Test");
    assert_eq!(p.child_count(), 0);
}

#[test]
fn soft_wrapped_lines_form_one_paragraph() {
    let doc = parse_checked("Test\nTest2");
    assert_eq!(only_child(doc.root()).text(), "Test\nTest2");
}

#[test]
fn blank_line_separates_sibling_paragraphs() {
    let doc = parse_checked("Test\n\nTest2");
    let texts: Vec<_> = doc.root().children().map(|e| e.text()).collect();
    assert_eq!(texts, vec!["Test", "Test2"]);
}

#[rstest]
#[case("# Title", 1)]
#[case("## Title", 2)]
#[case("###### Title", 6)]
fn single_heading(#[case] source: &str, #[case] level: u8) {
    let doc = parse_checked(source);
    let heading = only_child(doc.root());

    assert_eq!(heading.kind(), h(level));
    assert_eq!(heading.text(), "Title");
}

#[test]
fn heading_nesting() {
    let doc = parse_checked("# H1\n\n## H2");
    let h1 = only_child(doc.root());
    let h2 = only_child(h1);

    assert_eq!((h1.kind(), h1.text()), (h(1), "H1"));
    assert_eq!((h2.kind(), h2.text()), (h(2), "H2"));
    assert_eq!(h2.child_count(), 0);
}

#[test]
fn sibling_demotion() {
    let doc = parse_checked("# A\n\n## B\n\n## C");
    let a = only_child(doc.root());
    let children: Vec<_> = a.children().map(|e| (e.kind(), e.text())).collect();

    assert_eq!(children, vec![(h(2), "B"), (h(2), "C")]);
}

#[test]
fn equal_or_higher_heading_closes_section() {
    let doc = parse_checked("## A\n\ntext\n\n# B\n\n### C\n\n## D");
    let top: Vec<_> = doc.root().children().map(|e| e.text()).collect();
    assert_eq!(top, vec!["A", "B"]);

    let b = doc.root().children().nth(1).unwrap();
    let under_b: Vec<_> = b.children().map(|e| e.text()).collect();
    assert_eq!(under_b, vec!["C", "D"]);
}

#[test]
fn blocks_after_heading_attach_to_heading_not_previous_block() {
    let doc = parse_checked("# Intro\n\npara\n\n```\ncode\n```\n\n* item\n\nlast");
    let intro = only_child(doc.root());
    let kinds: Vec<_> = intro.children().map(|e| e.kind()).collect();

    assert_eq!(
        kinds,
        vec![
            ElementKind::Paragraph,
            ElementKind::CodeBlock,
            ElementKind::List(ListStyle::Unordered),
            ElementKind::Paragraph,
        ]
    );
}

#[test]
fn fence_containment() {
    let doc = parse_checked("```\na\n\nb\n```");
    let code = only_child(doc.root());

    assert_eq!(code.kind(), ElementKind::CodeBlock);
    assert_eq!(code.text(), "a\n\nb");
}

#[test]
fn table_rectangularity() {
    let doc = parse_checked("| H1 | H2 |\n| --- | --- |\n| a | b |\n| c | d |");
    let table = only_child(doc.root());
    assert_eq!(table.kind(), ElementKind::Table);
    assert_eq!(table.text(), "");

    let rows: Vec<Vec<&str>> = table
        .children()
        .map(|row| {
            assert_eq!(row.kind(), ElementKind::TableRow);
            row.children().map(|cell| cell.text()).collect()
        })
        .collect();
    assert_eq!(rows, vec![vec!["H1", "H2"], vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn ragged_table_is_a_paragraph() {
    let source = "| H1 | H2 |\n| --- | --- |\n| a | b |\n| c |";
    let doc = parse_checked(source);
    let p = only_child(doc.root());

    assert_eq!(p.kind(), ElementKind::Paragraph);
    assert_eq!(p.text(), source);
}

#[test]
fn lists_become_items() {
    let doc = parse_checked("* a\n* b\n\n1. x\n2. y");
    let lists: Vec<_> = doc
        .root()
        .children()
        .map(|list| {
            let items: Vec<_> = list.children().map(|i| i.text()).collect();
            (list.kind(), items)
        })
        .collect();

    assert_eq!(
        lists,
        vec![
            (ElementKind::List(ListStyle::Unordered), vec!["a", "b"]),
            (ElementKind::List(ListStyle::Ordered), vec!["x", "y"]),
        ]
    );
}

#[test]
fn round_trip_order() {
    let texts = ["one", "two", "three", "four", "five", "six"];
    let source = texts.join("\n\n");
    let doc = parse_checked(&source);

    let parsed: Vec<_> = doc.root().children().map(|e| e.text()).collect();
    assert_eq!(parsed, texts);
}

#[test]
fn blank_run_length_does_not_matter() {
    let one = parse_checked("# A\n\nbody");
    let many = parse_checked(&format!("# A{}body", "\n".repeat(16)));
    assert_eq!(one, many);
}

#[test]
fn unterminated_fence_degrades_to_paragraph() {
    let doc = parse_checked("# Notes\n\n```\nnever closed\n\nstill inside");
    let notes = only_child(doc.root());
    let p = only_child(notes);

    assert_eq!(p.kind(), ElementKind::Paragraph);
    assert_eq!(p.text(), "```\nnever closed\n\nstill inside");
}

#[test]
fn setext_headings_nest_like_atx() {
    let doc = parse_checked("Title\n=====\n\nSub\n---\n\ntext");
    let title = only_child(doc.root());
    let sub = only_child(title);

    assert_eq!((title.kind(), title.text()), (h(1), "Title"));
    assert_eq!((sub.kind(), sub.text()), (h(2), "Sub"));
    assert_eq!(only_child(sub).text(), "text");
}

#[test]
fn options_disable_rules() {
    let options = ParserOptions {
        lists: false,
        ..ParserOptions::default()
    };
    let doc = parse_with_options("* a\n* b", &options);
    snapshot::invariants(&doc);

    assert_eq!(only_child(doc.root()).kind(), ElementKind::Paragraph);
}

#[test]
fn concurrent_parses_are_independent() {
    let sources = ["# A\n\na", "## B\n\nb\n\n* x", "| h |\n| --- |\n| v |"];
    let expected: Vec<_> = sources.iter().map(|s| parse(s)).collect();

    let handles: Vec<_> = sources
        .iter()
        .map(|s| {
            let s = s.to_string();
            std::thread::spawn(move || parse(&s))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
