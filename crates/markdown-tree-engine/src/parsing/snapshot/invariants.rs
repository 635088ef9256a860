use crate::models::{Document, Element, ElementKind, NodeId};

/// Validates the structural invariants of a parsed tree.
///
/// Asserts that:
/// - The root is a `document` with no text and no parent
/// - Every other element has a parent, and appears exactly once in that
///   parent's children
/// - Children are in creation (source) order, and created after their parent
/// - Containers carry no text
/// - Leaf blocks (everything with text except headings) have no children
/// - Tables hold only rows, rows hold only cells, and every row has as many
///   cells as the header row
/// - Lists hold only list items
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    let root = doc.root();
    assert_eq!(root.kind(), ElementKind::Document, "root must be a document");
    assert!(root.text().is_empty(), "root must not carry text");
    assert!(root.parent().is_none(), "root must not have a parent");

    let mut seen = 0usize;
    for element in doc.descendants() {
        seen += 1;
        let id = element.id();
        let kind = element.kind();

        assert_ne!(kind, ElementKind::Document, "nested document at {id:?}");
        let parent = element
            .parent()
            .unwrap_or_else(|| panic!("{kind} at {id:?} has no parent"));
        let occurrences = parent.children().filter(|c| c.id() == id).count();
        assert_eq!(
            occurrences, 1,
            "{kind} at {id:?} appears {occurrences} times in its parent's children"
        );
        assert!(
            id.index() > parent.id().index(),
            "{kind} at {id:?} was created before its parent {:?}",
            parent.id()
        );

        if !kind.carries_text() {
            assert!(
                element.text().is_empty(),
                "container {kind} at {id:?} carries text {:?}",
                element.text()
            );
        } else if !kind.is_heading() {
            assert_eq!(
                element.child_count(),
                0,
                "leaf {kind} at {id:?} contains other elements"
            );
        }

        let children: Vec<NodeId> = element.children().map(|c| c.id()).collect();
        assert!(
            children.windows(2).all(|w| w[0] < w[1]),
            "children of {kind} at {id:?} are out of source order: {children:?}"
        );

        match kind {
            ElementKind::Table => check_table(element),
            ElementKind::List(_) => {
                for item in element.children() {
                    assert_eq!(
                        item.kind(),
                        ElementKind::ListItem,
                        "list at {id:?} holds {}",
                        item.kind()
                    );
                }
            }
            _ => {}
        }
    }

    assert_eq!(seen, doc.len(), "unreachable elements in the arena");
}

fn check_table(table: Element<'_>) {
    let id = table.id();
    let widths: Vec<usize> = table
        .children()
        .map(|row| {
            assert_eq!(
                row.kind(),
                ElementKind::TableRow,
                "table at {id:?} holds {}",
                row.kind()
            );
            for cell in row.children() {
                assert_eq!(
                    cell.kind(),
                    ElementKind::TableCell,
                    "row in table at {id:?} holds {}",
                    cell.kind()
                );
            }
            row.child_count()
        })
        .collect();

    assert!(!widths.is_empty(), "table at {id:?} has no header row");
    assert!(
        widths.iter().all(|&w| w == widths[0]),
        "table at {id:?} is not rectangular: {widths:?}"
    );
}
