//! Language Server Protocol surface (feature `lsp`).
//!
//! The tower-lsp backend and the open-document store. Everything in here
//! is adapter code: the actual hover/picker/insertion logic lives in
//! `language_server` and has no protocol types in its signatures.

pub mod backend;
pub mod document;

pub use backend::{Backend, INSERT_CODE_COMMAND, OPEN_DOCS_COMMAND};
pub use document::{Document, DocumentError, DocumentStore};
