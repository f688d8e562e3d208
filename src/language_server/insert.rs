//! Insertion of a chosen status code into the active editor.
//!
//! Planning is pure: every selection of the focused editor becomes one
//! edit operation (insert at an empty caret, replace a non-empty range),
//! and all operations belong to a single atomic edit. Applying the plan is
//! the host's job; the LSP adapter packages it as one `workspace/applyEdit`
//! transaction.

use std::fmt;

use super::hover::{Position, Range};

/// One cursor or selection of the focused editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// A caret with no selected text.
    pub fn caret(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// True when the selection spans no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One operation of the atomic insertion edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEditOp {
    /// Insert `text` at a caret position.
    Insert { at: Position, text: String },
    /// Replace the selected range with `text`.
    Replace { range: Range, text: String },
}

/// Errors the insertion path can surface to the user.
///
/// Both leave the extension fully operational; they are reported as a
/// transient notification and nothing else happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// The command arrived without a focused editor to write into.
    NoActiveEditor,
    /// The host refused to apply the edit (read-only buffer, stale state).
    EditRejected,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::NoActiveEditor => {
                write!(f, "Cannot insert status code because no editor is active.")
            }
            InsertError::EditRejected => write!(f, "Failed to insert status code."),
        }
    }
}

impl std::error::Error for InsertError {}

/// Plans the atomic edit that writes `text` into every selection.
///
/// Empty selections get an insert at their position; non-empty selections
/// are replaced. An empty selection set means there is no editor to write
/// into.
pub fn plan_insertion(text: &str, selections: &[Selection]) -> Result<Vec<TextEditOp>, InsertError> {
    if selections.is_empty() {
        return Err(InsertError::NoActiveEditor);
    }

    Ok(selections
        .iter()
        .map(|selection| {
            if selection.is_empty() {
                TextEditOp::Insert {
                    at: selection.start,
                    text: text.to_string(),
                }
            } else {
                TextEditOp::Replace {
                    range: Range::new(selection.start, selection.end),
                    text: text.to_string(),
                }
            }
        })
        .collect())
}
