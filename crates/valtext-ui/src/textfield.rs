use std::ops::Range;

use bitflags::bitflags;
use unicode_segmentation::UnicodeSegmentation;

bitflags! {
    /// Focus/selection state reported by the text input primitive.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Focus: u8 {
        /// The input holds keyboard focus and is accepting edits.
        const EDITING = 1 << 0;
        /// The host marked the control selected (e.g. a design preview).
        const SELECTED = 1 << 1;
    }
}

impl Focus {
    /// Editing or selected; decorations render in their emphasized form.
    pub fn is_active(self) -> bool {
        self.intersects(Focus::EDITING | Focus::SELECTED)
    }
}

/// The capabilities a decorated field needs from the plain text input it
/// wraps. Implemented by [`TextInputState`]; hosts with a native text widget
/// implement it over that widget instead.
pub trait TextInput {
    fn text(&self) -> &str;
    /// Replace the whole content (programmatic edit or native text echo).
    fn set_text(&mut self, text: &str);
    fn focus(&self) -> Focus;
    fn set_focus(&mut self, focus: Focus);
}

/// find prev/next grapheme boundaries around a byte index
fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

fn clamp_to_char_boundary(s: &str, i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    let mut j = i;
    while j > 0 && !s.is_char_boundary(j) {
        j -= 1;
    }
    j
}

/// Platform-neutral single-line editing state.
#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    pub text: String,
    /// Byte range; `start == end` is a caret.
    pub selection: Range<usize>,
    pub focus: Focus,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: end..end,
            focus: Focus::empty(),
        }
    }

    fn normalized_selection(&self) -> Range<usize> {
        let a = clamp_to_char_boundary(&self.text, self.selection.start);
        let b = clamp_to_char_boundary(&self.text, self.selection.end);
        a.min(b)..a.max(b)
    }

    pub fn insert_text(&mut self, text: &str) {
        let range = self.normalized_selection();
        let start = range.start;
        self.text.replace_range(range, text);
        let new_pos = start + text.len();
        self.selection = new_pos..new_pos;
    }

    pub fn delete_backward(&mut self) {
        if self.selection.start == self.selection.end {
            let pos = clamp_to_char_boundary(&self.text, self.selection.start);
            if pos > 0 {
                let prev = prev_grapheme_boundary(&self.text, pos);
                self.text.replace_range(prev..pos, "");
                self.selection = prev..prev;
            }
        } else {
            self.insert_text("");
        }
    }

    pub fn delete_forward(&mut self) {
        if self.selection.start == self.selection.end {
            let pos = clamp_to_char_boundary(&self.text, self.selection.start);
            if pos < self.text.len() {
                let next = next_grapheme_boundary(&self.text, pos);
                self.text.replace_range(pos..next, "");
            }
            self.selection = pos..pos;
        } else {
            self.insert_text("");
        }
    }

    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        let mut pos = clamp_to_char_boundary(&self.text, self.selection.end);
        let step = if delta < 0 {
            prev_grapheme_boundary
        } else {
            next_grapheme_boundary
        };
        for _ in 0..delta.unsigned_abs() {
            let next = step(&self.text, pos);
            if next == pos {
                break;
            }
            pos = next;
        }
        if extend_selection {
            self.selection.end = pos;
        } else {
            self.selection = pos..pos;
        }
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.normalized_selection()]
    }

    pub fn caret_index(&self) -> usize {
        self.selection.end
    }

    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }
}

impl TextInput for TextInputState {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        let end = self.text.len();
        self.selection = end..end;
    }

    fn focus(&self) -> Focus {
        self.focus
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }
}
