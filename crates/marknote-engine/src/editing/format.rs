//! Selection-aware markdown insertion.
//!
//! Given the document text, the current selection and a formatting action,
//! compute the new text and the caret position. Pure text transformation,
//! no widget access - the shell is responsible for writing the result back
//! and restoring the caret.

/// Formatting actions available from the toolbar and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    Bold,
    Italic,
    Heading1,
    Heading2,
    BulletList,
    NumberedList,
    Link,
    Image,
    CodeBlock,
}

/// Result of applying a formatting action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    /// The full document text after the insertion.
    pub text: String,
    /// Caret position (char offset) immediately after the inserted block.
    pub cursor: usize,
}

/// Apply `action` to `text`, replacing the selection `[selection_start,
/// selection_end)` (char offsets) with the formatted block.
///
/// An empty selection inserts the action's placeholder text instead; a
/// non-empty selection is carried into the replacement verbatim. Offsets
/// beyond the end of the text are clamped.
pub fn apply(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    action: FormatAction,
) -> FormatOutcome {
    let len = text.chars().count();
    let end = selection_end.min(len);
    let start = selection_start.min(end);

    let byte_start = byte_index(text, start);
    let byte_end = byte_index(text, end);
    let selected = &text[byte_start..byte_end];

    let replacement = replacement_for(selected, start == end, action);

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..byte_start]);
    out.push_str(&replacement);
    out.push_str(&text[byte_end..]);

    FormatOutcome {
        text: out,
        cursor: start + replacement.chars().count(),
    }
}

fn replacement_for(selected: &str, selection_empty: bool, action: FormatAction) -> String {
    // Placeholder text is only substituted for an empty selection.
    let body = |placeholder: &str| {
        if selection_empty {
            placeholder.to_string()
        } else {
            selected.to_string()
        }
    };

    match action {
        FormatAction::Bold => format!("**{}**", body("bold text")),
        FormatAction::Italic => format!("*{}*", body("italic text")),
        FormatAction::Heading1 => format!("# {}", body("Heading 1")),
        FormatAction::Heading2 => format!("## {}", body("Heading 2")),
        FormatAction::BulletList => format!("- {}", body("List item")),
        FormatAction::NumberedList => format!("1. {}", body("List item")),
        FormatAction::Link => format!("[{}](url)", body("Link text")),
        FormatAction::Image => format!("![{}](image-url)", body("Alt text")),
        FormatAction::CodeBlock => format!("```\n{}\n```", body("code")),
    }
}

fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
