//! Selection-aware symbol insertion and the dual-notation edit session.
//!
//! The editing surface keeps two loosely-synchronized buffers, one per
//! dialect; they are reconciled only on an explicit notation toggle,
//! never kept continuously identical while typing. All positions are
//! character indices — that is how the surface addresses its buffers,
//! and the natural dialect freely contains multi-byte symbols.

use serde::Serialize;

use crate::core::latex2natural::to_natural;
use crate::core::natural2latex::to_latex;
use crate::data::patterns::SymbolMapping;

/// A selection range in character indices. `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Selection { start, end }
    }

    pub fn caret(position: usize) -> Self {
        Selection {
            start: position,
            end: position,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

/// Result of one insertion: the new buffer and selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertOutcome {
    pub buffer: String,
    pub sel_start: usize,
    pub sel_end: usize,
}

/// Insert or wrap a palette symbol at the given selection.
///
/// With a non-empty selection the selected text is wrapped as
/// `prefix + selected + suffix` and the new selection covers exactly the
/// wrapped substring. With a caret, `prefix + suffix` is inserted and
/// the caret moves to `sel_start + prefix length + cursor_offset`,
/// clamped into the inserted span — which is how a two-group macro
/// parks the caret inside its first empty group.
///
/// Out-of-range and inverted selections are clamped and swapped rather
/// than rejected; the call is stateless and total.
pub fn insert(
    buffer: &str,
    sel_start: usize,
    sel_end: usize,
    prefix: &str,
    suffix: &str,
    cursor_offset: i32,
) -> InsertOutcome {
    let chars: Vec<char> = buffer.chars().collect();
    let len = chars.len();

    let mut start = sel_start.min(len);
    let mut end = sel_end.min(len);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let mut out = String::with_capacity(buffer.len() + prefix.len() + suffix.len());
    out.extend(&chars[..start]);
    out.push_str(prefix);
    out.extend(&chars[start..end]);
    out.push_str(suffix);
    out.extend(&chars[end..]);

    let prefix_len = prefix.chars().count();
    let suffix_len = suffix.chars().count();

    if start == end {
        let inserted_len = prefix_len + suffix_len;
        let caret = start as i64 + prefix_len as i64 + cursor_offset as i64;
        let caret = caret.clamp(start as i64, (start + inserted_len) as i64) as usize;
        InsertOutcome {
            buffer: out,
            sel_start: caret,
            sel_end: caret,
        }
    } else {
        let wrapped_len = prefix_len + (end - start) + suffix_len;
        InsertOutcome {
            buffer: out,
            sel_start: start,
            sel_end: start + wrapped_len,
        }
    }
}

/// Which notation a buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Natural,
    Latex,
}

impl Notation {
    pub fn other(self) -> Self {
        match self {
            Notation::Natural => Notation::Latex,
            Notation::Latex => Notation::Natural,
        }
    }
}

/// One dialect's buffer plus its selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    pub content: String,
    pub selection: Selection,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::caret(0)
    }
}

impl EditState {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let caret = content.chars().count();
        EditState {
            content,
            selection: Selection::caret(caret),
        }
    }
}

/// The editing surface's pair of dialect buffers.
///
/// Only the active buffer changes while the user types; the other is
/// regenerated from it when the notation is toggled.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    natural: EditState,
    latex: EditState,
    active: Notation,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from recognized LaTeX (the camera/OCR path).
    pub fn from_latex(content: impl Into<String>) -> Self {
        EditSession {
            natural: EditState::default(),
            latex: EditState::new(content),
            active: Notation::Latex,
        }
    }

    pub fn notation(&self) -> Notation {
        self.active
    }

    pub fn state(&self) -> &EditState {
        match self.active {
            Notation::Natural => &self.natural,
            Notation::Latex => &self.latex,
        }
    }

    fn state_mut(&mut self) -> &mut EditState {
        match self.active {
            Notation::Natural => &mut self.natural,
            Notation::Latex => &mut self.latex,
        }
    }

    /// Replace the active buffer (the user typed).
    pub fn set_content(&mut self, content: impl Into<String>, selection: Selection) {
        let state = self.state_mut();
        state.content = content.into();
        let len = state.content.chars().count();
        state.selection = Selection::new(selection.start.min(len), selection.end.min(len));
    }

    /// Apply a palette symbol to the active buffer, in the active
    /// dialect's form.
    pub fn insert_symbol(&mut self, symbol: &SymbolMapping) -> &EditState {
        let (prefix, suffix) = match self.active {
            Notation::Natural => symbol.natural(),
            Notation::Latex => symbol.latex(),
        };
        let state = self.state_mut();
        let outcome = insert(
            &state.content,
            state.selection.start,
            state.selection.end,
            prefix,
            suffix,
            symbol.cursor_offset,
        );
        state.content = outcome.buffer;
        state.selection = Selection::new(outcome.sel_start, outcome.sel_end);
        self.state()
    }

    /// Switch dialects: regenerate the other buffer from the active one
    /// via the converter and collapse its selection to the end. The
    /// buffers are otherwise left independent.
    pub fn toggle_notation(&mut self) -> &EditState {
        match self.active {
            Notation::Natural => {
                self.latex = EditState::new(to_latex(&self.natural.content));
            }
            Notation::Latex => {
                self.natural = EditState::new(to_natural(&self.latex.content));
            }
        }
        self.active = self.active.other();
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_selection() {
        let outcome = insert("x+1", 0, 3, "\\sqrt{", "}", 0);
        assert_eq!(outcome.buffer, "\\sqrt{x+1}");
        assert_eq!((outcome.sel_start, outcome.sel_end), (0, 10));
    }

    #[test]
    fn test_wrap_inner_selection() {
        let outcome = insert("a+b=c", 2, 3, "(", ")", 0);
        assert_eq!(outcome.buffer, "a+(b)=c");
        // Selection covers exactly the wrapped substring
        assert_eq!((outcome.sel_start, outcome.sel_end), (2, 5));
    }

    #[test]
    fn test_caret_insert_places_cursor_inside_first_group() {
        let outcome = insert("", 0, 0, "\\frac{", "}{}", 0);
        assert_eq!(outcome.buffer, "\\frac{}{}");
        // Immediately after the first brace, in the numerator slot
        assert_eq!((outcome.sel_start, outcome.sel_end), (6, 6));
    }

    #[test]
    fn test_caret_offset_moves_back_into_prefix() {
        let outcome = insert("", 0, 0, "\\frac{", "}{}", -1);
        assert_eq!(outcome.buffer, "\\frac{}{}");
        assert_eq!((outcome.sel_start, outcome.sel_end), (5, 5));
    }

    #[test]
    fn test_caret_offset_clamped_to_inserted_span() {
        let outcome = insert("ab", 1, 1, "^{", "}", 100);
        assert_eq!(outcome.buffer, "a^{}b");
        // Never past the inserted text
        assert_eq!((outcome.sel_start, outcome.sel_end), (4, 4));

        let outcome = insert("ab", 1, 1, "^{", "}", -100);
        // Never before the insertion point
        assert_eq!((outcome.sel_start, outcome.sel_end), (1, 1));
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let outcome = insert("ab", 10, 20, "(", ")", 0);
        assert_eq!(outcome.buffer, "ab()");
        assert_eq!((outcome.sel_start, outcome.sel_end), (3, 3));
    }

    #[test]
    fn test_inverted_selection_is_swapped() {
        let outcome = insert("abcd", 3, 1, "[", "]", 0);
        assert_eq!(outcome.buffer, "a[bc]d");
        assert_eq!((outcome.sel_start, outcome.sel_end), (1, 5));
    }

    #[test]
    fn test_multibyte_buffer_uses_char_indices() {
        let outcome = insert("π+1", 0, 1, "(", ")", 0);
        assert_eq!(outcome.buffer, "(π)+1");
        assert_eq!((outcome.sel_start, outcome.sel_end), (0, 3));
    }

    #[test]
    fn test_empty_everything() {
        let outcome = insert("", 0, 0, "", "", 0);
        assert_eq!(outcome.buffer, "");
        assert_eq!((outcome.sel_start, outcome.sel_end), (0, 0));
    }

    #[test]
    fn test_session_insert_uses_active_dialect() {
        let fraction = crate::data::patterns::symbol("fraction").unwrap();

        let mut session = EditSession::new();
        session.insert_symbol(fraction);
        assert_eq!(session.state().content, "()/()");
        assert_eq!(session.state().selection, Selection::caret(1));

        let mut session = EditSession::from_latex("");
        session.insert_symbol(fraction);
        assert_eq!(session.state().content, "\\frac{}{}");
        assert_eq!(session.state().selection, Selection::caret(6));
    }

    #[test]
    fn test_session_wraps_selection() {
        let sqrt = crate::data::patterns::symbol("sqrt").unwrap();
        let mut session = EditSession::new();
        session.set_content("x+1", Selection::new(0, 3));
        session.insert_symbol(sqrt);
        assert_eq!(session.state().content, "sqrt(x+1)");
        assert_eq!(session.state().selection, Selection::new(0, 9));
    }

    #[test]
    fn test_toggle_regenerates_other_buffer() {
        let mut session = EditSession::new();
        session.set_content("x^2 + sqrt(9)", Selection::caret(0));

        let state = session.toggle_notation().clone();
        assert_eq!(session.notation(), Notation::Latex);
        assert_eq!(state.content, "x^{2} + \\sqrt{9}");
        // Selection collapses to the end of the regenerated buffer
        assert_eq!(state.selection, Selection::caret(16));

        let state = session.toggle_notation().clone();
        assert_eq!(session.notation(), Notation::Natural);
        assert_eq!(state.content, "x^2 + sqrt(9)");
    }

    #[test]
    fn test_buffers_stay_loose_until_toggle() {
        let mut session = EditSession::from_latex("\\frac{1}{2}");
        session.toggle_notation();
        assert_eq!(session.state().content, "(1)/(2)");

        // Editing the natural buffer leaves the latex buffer stale
        session.set_content("(1)/(3)", Selection::caret(7));
        session.toggle_notation();
        assert_eq!(session.state().content, "\\frac{1}{3}");
    }
}
