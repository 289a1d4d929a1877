// ── DocumentModel ──
//
// Owns the original text of a fetched document plus a derived wrap result:
// one `DisplayLine` per wrapped segment, numbered on the first segment of
// each logical source line. Re-wrapping is a pure function of (text, width),
// so calling it again at the same width always yields the same lines.
//
// Widths are display columns (unicode-width), not char counts, so CJK and
// other wide glyphs wrap where the terminal actually breaks them.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::list::ListModel;

/// One rendered line of a wrapped document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// Logical (1-based) line number; present only on the first segment of
    /// each logical line.
    pub number: Option<usize>,
    pub text: String,
}

/// A text document wrapped into a scrollable list of display lines.
#[derive(Debug, Clone)]
pub struct DocumentModel {
    text: String,
    lines: ListModel<DisplayLine>,
    logical_count: usize,
}

impl DocumentModel {
    /// Build a model with an unwrapped (infinite-width) layout: every
    /// logical line becomes exactly one display line.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines: Vec<DisplayLine> = text
            .split('\n')
            .enumerate()
            .map(|(i, line)| DisplayLine {
                number: Some(i + 1),
                text: line.to_owned(),
            })
            .collect();
        let logical_count = lines.len();
        Self {
            text,
            lines: ListModel::from_items(lines),
            logical_count,
        }
    }

    /// The original text, byte for byte. Hand this to the editor or the
    /// clipboard, never the wrapped lines.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display lines of the current wrap result.
    pub fn lines(&self) -> &ListModel<DisplayLine> {
        &self.lines
    }

    /// Mutable access for scrolling.
    pub fn lines_mut(&mut self) -> &mut ListModel<DisplayLine> {
        &mut self.lines
    }

    /// Number of display lines in the current wrap result.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of logical (source) lines; sizes the line-number gutter.
    pub fn logical_line_count(&self) -> usize {
        self.logical_count
    }

    /// Recompute the wrap result for `width` display columns.
    ///
    /// Word wrap with hard breaks: segments break on spaces where possible
    /// and mid-word only when a single word exceeds the width. Resets the
    /// scroll position to the top.
    pub fn rewrap(&mut self, width: usize) {
        let mut lines = Vec::with_capacity(self.logical_count);
        for (i, logical) in self.text.split('\n').enumerate() {
            for (j, segment) in wrap_line(logical, width).into_iter().enumerate() {
                lines.push(DisplayLine {
                    number: (j == 0).then_some(i + 1),
                    text: segment,
                });
            }
        }
        self.lines.replace_all(lines);
    }
}

/// Wrap one logical line into segments of at most `width` display columns.
///
/// Splitting and re-joining on single spaces keeps the round trip exact:
/// `segments.join(" ") == line` for any input. An empty line yields one
/// empty segment, so the line keeps its number in the wrap result.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.width() <= width {
        return vec![line.to_owned()];
    }

    let mut segments = Vec::new();
    let mut current = String::new();

    for (i, word) in line.split(' ').enumerate() {
        let word_width = word.width();

        if i == 0 {
            // First word seeds the segment; empty when the line starts
            // with a space.
        } else if current.width() + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        } else {
            segments.push(std::mem::take(&mut current));
        }

        if word_width <= width {
            current.push_str(word);
        } else {
            // Hard-break an over-long word into width-sized chunks.
            hard_break(word, width, &mut segments, &mut current);
        }
    }

    segments.push(current);
    segments
}

/// Split `word` into full-width chunks, leaving the trailing partial chunk
/// in `current` so following words can share its segment.
fn hard_break(word: &str, width: usize, segments: &mut Vec<String>, current: &mut String) {
    let mut chunk = String::new();
    let mut chunk_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if chunk_width + ch_width > width && !chunk.is_empty() {
            // A glyph wider than the whole width still gets its own chunk;
            // never emit a blank segment ahead of it.
            segments.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += ch_width;
    }
    *current = chunk;
}
