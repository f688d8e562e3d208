//! Guided selection flows for status codes.
//!
//! Two flows exist: the two-level insert flow (category, then code, with a
//! "back" affordance) and the single-level flat docs flow. Both are pure
//! state machines over the [`StatusPrompt`] trait, so the LSP adapter can
//! drive them with real editor prompts and tests can drive them with
//! scripted answers. Cancellation is expected control flow everywhere a
//! prompt can be dismissed; it is modeled as an absent result, never as an
//! error.

use async_trait::async_trait;

use crate::status::{CategoryEntry, StatusCategory, StatusCodeInfo, StatusTable};

/// Label of the synthetic "back" entry shown at the top of every code list.
pub const BACK_LABEL: &str = "\u{2190} Back to categories";

/// Detail text of the "back" entry.
pub const BACK_DETAIL: &str = "Return to 1xx, 2xx, 3xx, 4xx, 5xx, WebDAV/Other";

/// Outcome of one code-level prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePick {
    /// A concrete status was chosen.
    Status(&'static StatusCodeInfo),
    /// The synthetic "back" entry was chosen.
    Back,
    /// The prompt was dismissed.
    Cancelled,
}

/// Host-provided selection prompts.
///
/// Implementations suspend until the user answers or dismisses the prompt;
/// dismissal maps to `None` / [`CodePick::Cancelled`].
#[async_trait]
pub trait StatusPrompt {
    /// Presents the six categories in fixed order, each annotated with its
    /// member count.
    async fn pick_category(&mut self, categories: &[CategoryEntry]) -> Option<StatusCategory>;

    /// Presents a leading "back" entry followed by the category's members,
    /// ascending by code, labeled with title and description.
    async fn pick_code(
        &mut self,
        category: StatusCategory,
        statuses: &[&'static StatusCodeInfo],
    ) -> CodePick;

    /// Presents every status ascending by code, labeled with title,
    /// category, and description.
    async fn pick_docs_target(
        &mut self,
        statuses: &[&'static StatusCodeInfo],
    ) -> Option<&'static StatusCodeInfo>;

    /// Surfaces a transient warning to the user.
    async fn warn(&mut self, message: String);
}

/// Runs the category → code selection flow.
///
/// Loops between the two levels until a status is chosen or the user
/// cancels at either level. An empty category (defensive; unreachable with
/// the fixed data set) warns and terminates with no result.
pub async fn run_insert_flow<P>(prompt: &mut P, table: &StatusTable) -> Option<&'static StatusCodeInfo>
where
    P: StatusPrompt + Send,
{
    let categories = table.categories();

    loop {
        let category = prompt.pick_category(&categories).await?;

        let members = table.in_category(category);
        if members.is_empty() {
            prompt
                .warn(format!("No status codes available for {}.", category))
                .await;
            return None;
        }

        match prompt.pick_code(category, members).await {
            CodePick::Status(status) => return Some(status),
            CodePick::Back => continue,
            CodePick::Cancelled => return None,
        }
    }
}

/// Runs the flat docs selection flow: every status, sorted by code.
pub async fn run_docs_flow<P>(prompt: &mut P, table: &StatusTable) -> Option<&'static StatusCodeInfo>
where
    P: StatusPrompt + Send,
{
    let statuses = table.all_by_code();
    prompt.pick_docs_target(&statuses).await
}
