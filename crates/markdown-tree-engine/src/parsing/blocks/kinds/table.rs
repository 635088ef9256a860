/// Pipe table syntax: header row, separator row, then body rows.
///
/// Escaped pipes inside cells are not recognized; every `|` splits a cell.
pub struct Table;

/// Cells of a table split out of a block, header first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRows {
    pub header: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl Table {
    pub const DELIMITER: char = '|';
    pub const MIN_LINES: usize = 3;
    pub const MIN_DASHES: usize = 3;

    /// Split a row on `|`, dropping the empty segments produced by boundary
    /// pipes and trimming each cell.
    pub fn split_row(line: &str) -> Vec<String> {
        let t = line.trim();
        let mut cells: Vec<&str> = t.split(Self::DELIMITER).collect();
        if t.starts_with(Self::DELIMITER) {
            cells.remove(0);
        }
        if t.ends_with(Self::DELIMITER) {
            cells.pop();
        }
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }

    /// Every separator cell is an optional colon followed by three or more
    /// dashes. Only a leading colon is accepted: `---:` and `:---:` are
    /// rejected, which rejects the whole table.
    pub fn is_separator_cell(cell: &str) -> bool {
        let dashes = cell.strip_prefix(':').unwrap_or(cell);
        dashes.len() >= Self::MIN_DASHES && dashes.bytes().all(|b| b == b'-')
    }

    pub fn separator_columns(line: &str) -> Option<usize> {
        if !line.contains(Self::DELIMITER) {
            return None;
        }
        let cells = Self::split_row(line);
        (!cells.is_empty() && cells.iter().all(|c| Self::is_separator_cell(c)))
            .then_some(cells.len())
    }

    /// Rejects the whole block if any row's column count differs from the
    /// header's.
    pub fn parse(block: &str) -> Option<TableRows> {
        let lines: Vec<&str> = block.split('\n').collect();
        if lines.len() < Self::MIN_LINES {
            return None;
        }

        let header = Self::split_row(lines[0]);
        let columns = Self::separator_columns(lines[1])?;
        if header.len() != columns {
            return None;
        }

        let body = lines[2..]
            .iter()
            .map(|line| Self::split_row(line))
            .map(|row| (row.len() == columns).then_some(row))
            .collect::<Option<Vec<_>>>()?;

        Some(TableRows { header, body })
    }
}
