//! Placeholder scanning
//!
//! A placeholder is the text between a `<` and the next `>` on the same line.
//! An unmatched bracket is plain text.

/// Bounds of one `<name>` span within a line, both brackets inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte index of `<`
    pub open: usize,
    /// Byte index of the matching `>`
    pub close: usize,
}

impl Span {
    /// Text strictly between the brackets
    pub fn name<'a>(&self, line: &'a str) -> &'a str {
        &line[self.open + 1..self.close]
    }

    /// Byte index just past the closing bracket
    pub fn end(&self) -> usize {
        self.close + 1
    }
}

/// Find the next span starting the search at byte offset `from`
pub fn find_span(line: &str, from: usize) -> Option<Span> {
    let rest = line.get(from..)?;
    let open = from + rest.find('<')?;
    let close = open + 1 + line[open + 1..].find('>')?;
    Some(Span { open, close })
}

/// Iterate over all spans of a line in left-to-right order
pub fn spans(line: &str) -> Spans<'_> {
    Spans { line, pos: 0 }
}

/// Iterator returned by [`spans`]
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    line: &'a str,
    pos: usize,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let span = find_span(self.line, self.pos)?;
        self.pos = span.end();
        Some(span)
    }
}

/// Names of all placeholders on a line, in order
pub fn placeholder_names(line: &str) -> impl Iterator<Item = &str> {
    spans(line).map(move |span| span.name(line))
}
