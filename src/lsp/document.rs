use tower_lsp::lsp_types::{Position, Range};

/// State for each open document
#[derive(Debug)]
pub struct DocumentState {
    pub content: String,
}

impl DocumentState {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Byte offset of an LSP position, clamped to the document.
    pub fn offset_at(&self, position: Position) -> usize {
        let mut offset = 0usize;
        let mut remaining = position.line;
        while remaining > 0 {
            match self.content[offset..].find('\n') {
                Some(n) => {
                    offset += n + 1;
                    remaining -= 1;
                }
                None => return self.content.len(),
            }
        }
        let line_end = self.content[offset..]
            .find('\n')
            .map_or(self.content.len(), |n| offset + n);
        (offset + position.character as usize).min(line_end)
    }

    /// Substring addressed by an LSP range.
    pub fn slice(&self, range: Range) -> &str {
        let start = self.offset_at(range.start);
        let end = self.offset_at(range.end).max(start);
        &self.content[start..end]
    }

    /// Range covering the whole document.
    pub fn full_range(&self) -> Range {
        let mut line = 0u32;
        let mut character = 0u32;
        for ch in self.content.chars() {
            if ch == '\n' {
                line += 1;
                character = 0;
            } else {
                character += 1;
            }
        }
        Range::new(Position::new(0, 0), Position::new(line, character))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_at() {
        let doc = DocumentState::new("fof(a, axiom, p).\ncnf(b, axiom, q).".to_string());
        assert_eq!(doc.offset_at(Position::new(0, 0)), 0);
        assert_eq!(doc.offset_at(Position::new(1, 0)), 18);
        assert_eq!(doc.offset_at(Position::new(1, 3)), 21);
        // Past end of line clamps to the line end.
        assert_eq!(doc.offset_at(Position::new(0, 999)), 17);
        // Past end of document clamps to the document end.
        assert_eq!(doc.offset_at(Position::new(9, 0)), doc.content.len());
    }

    #[test]
    fn test_slice() {
        let doc = DocumentState::new("fof(a, axiom, p).\ncnf(b, axiom, q).".to_string());
        let range = Range::new(Position::new(1, 0), Position::new(1, 3));
        assert_eq!(doc.slice(range), "cnf");
    }

    #[test]
    fn test_full_range() {
        let doc = DocumentState::new("fof(a, axiom, p).\ncnf(b, axiom, q).".to_string());
        let range = doc.full_range();
        assert_eq!(range.start, Position::new(0, 0));
        assert_eq!(range.end, Position::new(1, 17));
    }
}
