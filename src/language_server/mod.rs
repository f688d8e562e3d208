//! Host-agnostic core of the HTTP Status Helper.
//!
//! Everything here is plain library code with no protocol types in its
//! signatures: hover resolution, the per-document filetype filter, the
//! picker flows, and insertion planning. The `lsp_server` module adapts
//! these to the Language Server Protocol.

pub mod filter;
pub mod hover;
pub mod insert;
pub mod picker;

pub use filter::{file_extension, FiletypeFilter, ALL_FILETYPES_WILDCARD};
pub use hover::{provide_hover, Hover, Position, Range};
pub use insert::{plan_insertion, InsertError, Selection, TextEditOp};
pub use picker::{run_docs_flow, run_insert_flow, CodePick, StatusPrompt};
