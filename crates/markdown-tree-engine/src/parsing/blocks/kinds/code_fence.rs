#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// Fenced code block syntax: the opener, the matching bare closer, and the
/// verbatim payload between them.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    pub const MIN_LEN: usize = 3;

    /// Detects a fence opener. Anything after the fence (a language token) is
    /// ignored.
    pub fn open(line: &str, allow_tildes: bool) -> Option<FenceKind> {
        if line.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if allow_tildes && line.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    /// A closer is a bare run of the opener's fence character.
    pub fn closes(kind: FenceKind, line: &str) -> bool {
        let t = line.trim_end();
        t.len() >= Self::MIN_LEN && t.chars().all(|c| c == kind.marker())
    }

    /// Returns the lines strictly between the opening and closing fence,
    /// untouched. `None` unless the block both opens and closes a fence.
    pub fn body(block: &str, allow_tildes: bool) -> Option<String> {
        let lines: Vec<&str> = block.split('\n').collect();
        let (first, rest) = lines.split_first()?;
        let (last, inner) = rest.split_last()?;

        let kind = Self::open(first, allow_tildes)?;
        Self::closes(kind, last).then(|| inner.join("\n"))
    }
}
