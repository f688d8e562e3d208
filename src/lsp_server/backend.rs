//! LSP backend for the HTTP Status Helper language server.
//!
//! Implements the Language Server Protocol via tower-lsp and adapts the
//! host-agnostic core to it: hover requests go through the filetype filter
//! and hover resolver, and the two commands drive the picker flows with
//! `window/showMessageRequest` prompts, apply insertions through
//! `workspace/applyEdit`, and open documentation through
//! `window/showDocument`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DidChangeConfigurationParams, DidChangeTextDocumentParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, ExecuteCommandOptions, ExecuteCommandParams, Hover as LspHover,
    HoverContents, HoverParams, HoverProviderCapability, InitializeParams, InitializeResult,
    InitializedParams, MarkupContent, MarkupKind, MessageActionItem, MessageType,
    Position as LspPosition, Range as LspRange, ServerCapabilities, ServerInfo,
    ShowDocumentParams, TextDocumentSyncCapability, TextDocumentSyncKind, TextEdit, WorkspaceEdit,
};
use tower_lsp::{Client, LanguageServer};
use url::Url;

use super::document::DocumentStore;
use crate::config;
use crate::language_server::filter::FiletypeFilter;
use crate::language_server::hover::{self, Position};
use crate::language_server::insert::{plan_insertion, InsertError, Selection, TextEditOp};
use crate::language_server::picker::{
    run_docs_flow, run_insert_flow, CodePick, StatusPrompt, BACK_LABEL,
};
use crate::status::{self, CategoryEntry, StatusCategory, StatusCodeInfo};

/// Command that runs the category/code picker and inserts the chosen code.
pub const INSERT_CODE_COMMAND: &str = "http-status.insertCode";

/// Command that runs the flat picker and opens the MDN page.
pub const OPEN_DOCS_COMMAND: &str = "http-status.openDocs";

/// LSP backend state: the client handle and the open-document store.
#[derive(Debug)]
pub struct Backend {
    client: Client,
    documents: Arc<DocumentStore>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(DocumentStore::new()),
        }
    }

    async fn log_info(&self, message: impl std::fmt::Display) {
        self.client.log_message(MessageType::INFO, message).await;
    }

    async fn log_warn(&self, message: impl std::fmt::Display) {
        self.client.log_message(MessageType::WARNING, message).await;
    }

    async fn log_error(&self, message: impl std::fmt::Display) {
        self.client.log_message(MessageType::ERROR, message).await;
    }

    /// Runs the category/code picker, then applies the chosen code to every
    /// selection of the target editor as one atomic edit.
    async fn handle_insert_code(&self, arguments: &[serde_json::Value]) {
        let Some((uri, selections)) = parse_insert_target(arguments) else {
            self.client
                .show_message(MessageType::ERROR, InsertError::NoActiveEditor.to_string())
                .await;
            return;
        };

        let mut prompt = MessagePrompt {
            client: &self.client,
        };
        let Some(chosen) = run_insert_flow(&mut prompt, status::table()).await else {
            // Cancelled at some level; nothing to do.
            return;
        };

        let ops = match plan_insertion(&chosen.code.to_string(), &selections) {
            Ok(ops) => ops,
            Err(e) => {
                self.client
                    .show_message(MessageType::ERROR, e.to_string())
                    .await;
                return;
            }
        };

        let mut changes = HashMap::new();
        changes.insert(uri, ops.into_iter().map(op_to_text_edit).collect());
        let edit = WorkspaceEdit {
            changes: Some(changes),
            ..Default::default()
        };

        match self.client.apply_edit(edit).await {
            Ok(response) if response.applied => {
                self.log_info(format!("Inserted status code {}", chosen.code)).await;
            }
            Ok(_) | Err(_) => {
                self.client
                    .show_message(MessageType::ERROR, InsertError::EditRejected.to_string())
                    .await;
            }
        }
    }

    /// Runs the flat docs picker and opens the MDN page externally.
    async fn handle_open_docs(&self) {
        let mut prompt = MessagePrompt {
            client: &self.client,
        };
        let Some(chosen) = run_docs_flow(&mut prompt, status::table()).await else {
            return;
        };

        match Url::parse(&chosen.docs_url()) {
            Ok(uri) => {
                let result = self
                    .client
                    .show_document(ShowDocumentParams {
                        uri,
                        external: Some(true),
                        take_focus: None,
                        selection: None,
                    })
                    .await;
                if let Err(e) = result {
                    self.log_warn(format!("Could not open documentation: {}", e))
                        .await;
                }
            }
            Err(e) => {
                self.log_error(format!("Invalid documentation URL: {}", e))
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        self.log_info(format!(
            "Initializing HTTP Status Helper Language Server (process ID: {:?})",
            params.process_id
        ))
        .await;

        config::load_config(params.initialization_options);

        let capabilities = ServerCapabilities {
            // Full sync: the hover resolver always sees complete documents.
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),

            hover_provider: Some(HoverProviderCapability::Simple(true)),

            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![
                    INSERT_CODE_COMMAND.to_string(),
                    OPEN_DOCS_COMMAND.to_string(),
                ],
                work_done_progress_options: Default::default(),
            }),

            ..Default::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "http-status-helper-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log_info("HTTP Status Helper Language Server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_info("Shutting down HTTP Status Helper Language Server")
            .await;
        self.documents.clear();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Err(e) = self.documents.insert(
            uri.clone(),
            params.text_document.language_id,
            params.text_document.text,
        ) {
            self.log_error(format!("Failed to track document {}: {}", uri, e))
                .await;
        }
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // Full sync delivers exactly one change holding the whole document.
        if let Some(change) = params.content_changes.into_iter().next() {
            match self.documents.update_text(uri.clone(), change.text.clone()) {
                Ok(_) => {}
                Err(super::document::DocumentError::NotFound) => {
                    // didOpen was missed; recover with an unknown language id.
                    if let Err(e) =
                        self.documents
                            .insert(uri.clone(), String::new(), change.text)
                    {
                        self.log_error(format!("Failed to track document {}: {}", uri, e))
                            .await;
                    }
                }
                Err(e) => {
                    self.log_error(format!("Failed to update document {}: {}", uri, e))
                        .await;
                }
            }
        } else {
            self.log_warn(format!("No content changes received for: {}", uri))
                .await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.remove(&params.text_document.uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        config::load_config(Some(params.settings));
        self.log_info("Reloaded http-status configuration").await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<LspHover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let lsp_position = params.text_document_position_params.position;

        let Some(document) = self.documents.get(uri) else {
            return Ok(None);
        };

        let filter = FiletypeFilter::from_config(&config::get_config());
        let position = Position::new(lsp_position.line as usize, lsp_position.character as usize);

        let resolved = hover::provide_hover(
            position,
            &document.text,
            &filter,
            &document.language_id,
            &file_name_from_uri(uri),
        );

        Ok(resolved.map(|internal| LspHover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: internal.contents,
            }),
            range: Some(range_to_lsp(internal.range)),
        }))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        match params.command.as_str() {
            INSERT_CODE_COMMAND => {
                self.handle_insert_code(&params.arguments).await;
                Ok(None)
            }
            OPEN_DOCS_COMMAND => {
                self.handle_open_docs().await;
                Ok(None)
            }
            other => {
                self.log_warn(format!("Unknown command: {}", other)).await;
                Err(tower_lsp::jsonrpc::Error::invalid_params(format!(
                    "Unknown command: {}",
                    other
                )))
            }
        }
    }
}

/// Picker prompts backed by `window/showMessageRequest`.
///
/// Each prompt suspends until the client answers; a dismissed request comes
/// back as no action, which maps to cancellation.
struct MessagePrompt<'a> {
    client: &'a Client,
}

#[async_trait]
impl StatusPrompt for MessagePrompt<'_> {
    async fn pick_category(&mut self, categories: &[CategoryEntry]) -> Option<StatusCategory> {
        let actions: Vec<MessageActionItem> = categories
            .iter()
            .map(|entry| action(category_title(entry)))
            .collect();

        let picked = self
            .client
            .show_message_request(
                MessageType::INFO,
                "Select an HTTP status category".to_string(),
                Some(actions),
            )
            .await
            .ok()
            .flatten()?;

        categories
            .iter()
            .find(|entry| category_title(entry) == picked.title)
            .map(|entry| entry.category)
    }

    async fn pick_code(
        &mut self,
        category: StatusCategory,
        statuses: &[&'static StatusCodeInfo],
    ) -> CodePick {
        let mut actions = vec![action(BACK_LABEL.to_string())];
        actions.extend(statuses.iter().map(|status| action(status.title.to_string())));

        let picked = match self
            .client
            .show_message_request(
                MessageType::INFO,
                format!("Select an HTTP status code from {}", category),
                Some(actions),
            )
            .await
        {
            Ok(Some(picked)) => picked,
            _ => return CodePick::Cancelled,
        };

        if picked.title == BACK_LABEL {
            return CodePick::Back;
        }

        statuses
            .iter()
            .copied()
            .find(|status| status.title == picked.title)
            .map(CodePick::Status)
            .unwrap_or(CodePick::Cancelled)
    }

    async fn pick_docs_target(
        &mut self,
        statuses: &[&'static StatusCodeInfo],
    ) -> Option<&'static StatusCodeInfo> {
        let actions: Vec<MessageActionItem> = statuses
            .iter()
            .map(|status| action(docs_title(status)))
            .collect();

        let picked = self
            .client
            .show_message_request(
                MessageType::INFO,
                "Select an HTTP status code to open docs".to_string(),
                Some(actions),
            )
            .await
            .ok()
            .flatten()?;

        statuses
            .iter()
            .copied()
            .find(|status| docs_title(status) == picked.title)
    }

    async fn warn(&mut self, message: String) {
        self.client.show_message(MessageType::WARNING, message).await;
    }
}

fn action(title: String) -> MessageActionItem {
    MessageActionItem {
        title,
        properties: Default::default(),
    }
}

/// Category prompt label, e.g. `4xx (25 codes)`.
fn category_title(entry: &CategoryEntry) -> String {
    format!("{} ({} codes)", entry.category, entry.count)
}

/// Docs prompt label, e.g. `404 Not Found (4xx)`.
fn docs_title(status: &StatusCodeInfo) -> String {
    format!("{} ({})", status.title, status.category)
}

/// Extracts the insertion target from command arguments: a document URI
/// string and a non-empty array of selection ranges. Anything else means
/// there is no focused editor to write into.
fn parse_insert_target(arguments: &[serde_json::Value]) -> Option<(Url, Vec<Selection>)> {
    let uri = Url::parse(arguments.first()?.as_str()?).ok()?;
    let ranges: Vec<LspRange> = serde_json::from_value(arguments.get(1)?.clone()).ok()?;

    if ranges.is_empty() {
        return None;
    }

    let selections = ranges
        .into_iter()
        .map(|range| Selection {
            start: position_from_lsp(range.start),
            end: position_from_lsp(range.end),
        })
        .collect();

    Some((uri, selections))
}

fn op_to_text_edit(op: TextEditOp) -> TextEdit {
    match op {
        TextEditOp::Insert { at, text } => TextEdit {
            range: LspRange {
                start: position_to_lsp(at),
                end: position_to_lsp(at),
            },
            new_text: text,
        },
        TextEditOp::Replace { range, text } => TextEdit {
            range: range_to_lsp(range),
            new_text: text,
        },
    }
}

fn position_from_lsp(position: LspPosition) -> Position {
    Position::new(position.line as usize, position.character as usize)
}

fn position_to_lsp(position: Position) -> LspPosition {
    LspPosition {
        line: position.line as u32,
        character: position.character as u32,
    }
}

fn range_to_lsp(range: hover::Range) -> LspRange {
    LspRange {
        start: position_to_lsp(range.start),
        end: position_to_lsp(range.end),
    }
}

/// Last path segment of the document URI, used for extension matching.
/// Non-hierarchical URIs (e.g. untitled buffers) fall back to the raw path.
fn file_name_from_uri(uri: &Url) -> String {
    uri.path_segments()
        .and_then(|segments| segments.last())
        .map(|segment| segment.to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
