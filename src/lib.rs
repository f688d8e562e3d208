//! HTTP Status Helper Extension for Zed Editor
//!
//! This extension explains HTTP status codes where you write them: hovering
//! a 3-digit code like `404` shows its title, a one-sentence description,
//! and a link to the MDN reference page, and a guided picker inserts a code
//! at the cursor.
//!
//! # Architecture
//!
//! - **status**: the immutable status-code table and its derived indexes
//! - **config**: the `http-status` settings schema and global config
//! - **language_server**: host-agnostic core (hover resolution, filetype
//!   filter, picker flows, insertion planning)
//! - **lsp_server**: tower-lsp backend and document store (feature `lsp`)
//!
//! # Host integration
//!
//! The WASM extension itself only launches the companion `lsp-server`
//! binary; all interactive behavior runs over the Language Server Protocol:
//!
//! - hover: `textDocument/hover`
//! - insert picker: `workspace/executeCommand` with `http-status.insertCode`
//!   (prompts via `window/showMessageRequest`, edit via `workspace/applyEdit`)
//! - documentation: `workspace/executeCommand` with `http-status.openDocs`
//!   (opens the MDN page via `window/showDocument`)
//!
//! # Configuration
//!
//! One setting, `http-status.hover.enabledFiletypes`: a list of language
//! ids or file extensions the hover is active for. Absent or empty means
//! every document.

use zed_extension_api as zed;

pub mod config;
pub mod language_server;
#[cfg(feature = "lsp")]
pub mod lsp_server;
pub mod status;

/// HTTP Status Helper extension for Zed.
///
/// Stateless: the status table is fixed data and all per-document state
/// lives in the language server process.
struct HttpStatusExtension;

impl zed::Extension for HttpStatusExtension {
    fn new() -> Self {
        Self
    }

    fn language_server_command(
        &mut self,
        _language_server_id: &zed::LanguageServerId,
        worktree: &zed::Worktree,
    ) -> zed::Result<zed::Command> {
        // The lsp-server binary ships alongside extension.wasm; Zed runs
        // extensions from their install directory, so a relative path works
        // when the binary is not on PATH.
        let binary_name = if cfg!(target_os = "windows") {
            "lsp-server.exe"
        } else {
            "lsp-server"
        };

        let command = worktree.which(binary_name).unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                ".\\lsp-server.exe".to_string()
            } else {
                "./lsp-server".to_string()
            }
        });

        Ok(zed::Command {
            command,
            args: vec![],
            env: vec![],
        })
    }

    fn language_server_initialization_options(
        &mut self,
        _language_server_id: &zed::LanguageServerId,
        _worktree: &zed::Worktree,
    ) -> zed::Result<Option<zed::serde_json::Value>> {
        Ok(None)
    }
}

zed::register_extension!(HttpStatusExtension);
