//! Inputs shaped to load the tokenizer and the tree builder.

/// `paragraphs` two-line paragraphs, each pair separated by `gap` blank lines.
pub fn blank_runs(paragraphs: usize, gap: usize) -> String {
    let separator = "\n".repeat(gap + 1);
    (0..paragraphs)
        .map(|i| format!("paragraph {i}\nsoft-wrapped continuation"))
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Fenced blocks alternating backticks and tildes, each with `inner_blanks`
/// blank lines between its content lines.
pub fn fenced_blocks(blocks: usize, inner_blanks: usize) -> String {
    let gap = "\n".repeat(inner_blanks);
    let mut content = String::new();
    for i in 0..blocks {
        let fence = if i % 2 == 0 { "```" } else { "~~~" };
        content.push_str(&format!("{fence}text\n"));
        for line in 0..4 {
            content.push_str(&format!("block {i} line {line}\n{gap}"));
        }
        content.push_str(&format!("{fence}\n\n"));
    }
    content
}

/// A single pipe table with `columns` columns and `rows` body rows.
pub fn wide_table(columns: usize, rows: usize) -> String {
    let mut lines = vec![
        table_row((0..columns).map(|c| format!("h{c}"))),
        table_row((0..columns).map(|_| "---".to_string())),
    ];
    lines.extend((0..rows).map(|r| table_row((0..columns).map(|c| format!("r{r}c{c}")))));
    lines.join("\n")
}

fn table_row(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}

/// Heading ladders that descend from level 1 to 6 and climb back to 1, with a
/// paragraph and a list under every heading.
pub fn heading_ladders(rounds: usize) -> String {
    let mut content = String::new();
    for round in 0..rounds {
        for level in (1..=6).chain((1..=6).rev()) {
            content.push_str(&format!(
                "{} Round {round} level {level}\n\nBody at level {level}.\n\n* one\n* two\n\n",
                "#".repeat(level)
            ));
        }
    }
    content
}
