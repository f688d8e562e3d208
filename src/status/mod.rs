//! HTTP status code reference data for the extension.
//!
//! The table of known codes lives in [`table`] as plain constant data. This
//! module builds the two read-only indexes over it (exact code lookup and
//! per-category grouping) exactly once, at first access, and exposes them
//! through [`StatusTable`].

mod table;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Base URL of the MDN reference pages, one page per status code.
pub const DOCS_BASE_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status";

/// The six fixed groupings used for picker navigation.
///
/// Membership is data, not arithmetic: a handful of codes with WebDAV or
/// otherwise non-generic semantics (102, 207, 208, 422, 423, 424, 507, 508)
/// are assigned to [`StatusCategory::WebDavOther`] rather than to the group
/// their numeric prefix would suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    WebDavOther,
}

impl StatusCategory {
    /// Fixed presentation order: 1xx, 2xx, 3xx, 4xx, 5xx, WebDAV/Other.
    pub const ORDER: [StatusCategory; 6] = [
        StatusCategory::Informational,
        StatusCategory::Success,
        StatusCategory::Redirection,
        StatusCategory::ClientError,
        StatusCategory::ServerError,
        StatusCategory::WebDavOther,
    ];

    /// User-facing label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Informational => "1xx",
            StatusCategory::Success => "2xx",
            StatusCategory::Redirection => "3xx",
            StatusCategory::ClientError => "4xx",
            StatusCategory::ServerError => "5xx",
            StatusCategory::WebDavOther => "WebDAV/Other",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One known HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeInfo {
    /// Numeric code, 100..=599, unique across the table.
    pub code: u16,
    /// Display title, `"<code> <reason phrase>"`.
    pub title: &'static str,
    /// One-sentence explanation.
    pub description: &'static str,
    /// The fixed category this code belongs to.
    pub category: StatusCategory,
}

impl StatusCodeInfo {
    /// MDN documentation URL for this code.
    pub fn docs_url(&self) -> String {
        docs_url(self.code)
    }
}

/// MDN documentation URL for an arbitrary code value.
pub fn docs_url(code: u16) -> String {
    format!("{}/{}", DOCS_BASE_URL, code)
}

/// A category together with its member count, for picker labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: StatusCategory,
    pub count: usize,
}

/// Immutable status table with its two derived indexes.
///
/// Built once behind [`table()`] and never mutated afterwards; lookups are
/// cheap enough to run on every hover event.
#[derive(Debug)]
pub struct StatusTable {
    records: &'static [StatusCodeInfo],
    by_code: HashMap<u16, &'static StatusCodeInfo>,
    by_category: HashMap<StatusCategory, Vec<&'static StatusCodeInfo>>,
}

static TABLE: Lazy<StatusTable> = Lazy::new(|| StatusTable::from_records(table::STATUS_CODES));

/// The process-wide status table.
pub fn table() -> &'static StatusTable {
    &TABLE
}

impl StatusTable {
    /// Builds the by-code and by-category indexes over `records`.
    ///
    /// Category groups are sorted ascending by code so pickers render in a
    /// stable order regardless of how the raw table is arranged.
    pub fn from_records(records: &'static [StatusCodeInfo]) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        let mut by_category: HashMap<StatusCategory, Vec<&'static StatusCodeInfo>> =
            HashMap::new();

        for record in records {
            by_code.insert(record.code, record);
            by_category.entry(record.category).or_default().push(record);
        }

        for members in by_category.values_mut() {
            members.sort_by_key(|record| record.code);
        }

        Self {
            records,
            by_code,
            by_category,
        }
    }

    /// Exact-match lookup. Absence is a normal result, not a failure.
    pub fn lookup(&self, code: u16) -> Option<&'static StatusCodeInfo> {
        self.by_code.get(&code).copied()
    }

    /// Members of `category`, ascending by code. Empty when the category
    /// has no members.
    pub fn in_category(&self, category: StatusCategory) -> &[&'static StatusCodeInfo] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The six categories in fixed order, each with its member count.
    pub fn categories(&self) -> Vec<CategoryEntry> {
        StatusCategory::ORDER
            .iter()
            .map(|&category| CategoryEntry {
                category,
                count: self.in_category(category).len(),
            })
            .collect()
    }

    /// Every record, ascending by code. Used by the flat docs picker.
    pub fn all_by_code(&self) -> Vec<&'static StatusCodeInfo> {
        let mut all: Vec<_> = self.records.iter().collect();
        all.sort_by_key(|record| record.code);
        all
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_known_codes() {
        let table = table();
        assert_eq!(table.lookup(200).unwrap().title, "200 OK");
        assert_eq!(table.lookup(404).unwrap().title, "404 Not Found");
        assert_eq!(
            table.lookup(511).unwrap().title,
            "511 Network Authentication Required"
        );
    }

    #[test]
    fn lookup_unknown_codes() {
        let table = table();
        assert!(table.lookup(99).is_none());
        assert!(table.lookup(419).is_none());
        assert!(table.lookup(999).is_none());
        assert!(table.lookup(0).is_none());
    }

    #[test]
    fn lookup_306_keeps_historical_entry() {
        let info = table().lookup(306).unwrap();
        assert_eq!(info.title, "306 Switch Proxy");
        assert!(info.description.contains("Historical"));
        assert_eq!(info.category, StatusCategory::Redirection);
    }

    #[test]
    fn codes_are_unique() {
        let table = table();
        let mut seen = HashSet::new();
        for entry in table.all_by_code() {
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
        }
        assert_eq!(seen.len(), table.len());
    }

    #[test]
    fn categories_partition_the_table() {
        let table = table();
        let mut seen = HashSet::new();
        let mut total = 0;
        for entry in table.categories() {
            for record in table.in_category(entry.category) {
                assert_eq!(record.category, entry.category);
                assert!(seen.insert(record.code));
                total += 1;
            }
        }
        assert_eq!(total, table.len());
    }

    #[test]
    fn category_order_and_counts() {
        let entries = table().categories();
        let labels: Vec<_> = entries.iter().map(|e| e.category.label()).collect();
        assert_eq!(labels, ["1xx", "2xx", "3xx", "4xx", "5xx", "WebDAV/Other"]);

        let counts: Vec<_> = entries.iter().map(|e| e.count).collect();
        assert_eq!(counts, [3, 8, 9, 25, 9, 8]);
    }

    #[test]
    fn category_members_sorted_ascending() {
        let table = table();
        for entry in table.categories() {
            let members = table.in_category(entry.category);
            for pair in members.windows(2) {
                assert!(pair[0].code < pair[1].code);
            }
        }
    }

    #[test]
    fn webdav_membership_is_fixed_data() {
        let table = table();
        let codes: Vec<u16> = table
            .in_category(StatusCategory::WebDavOther)
            .iter()
            .map(|record| record.code)
            .collect();
        assert_eq!(codes, [102, 207, 208, 422, 423, 424, 507, 508]);
    }

    #[test]
    fn client_error_group_spans_400_to_451() {
        let members = table().in_category(StatusCategory::ClientError);
        assert_eq!(members.first().unwrap().code, 400);
        assert_eq!(members.last().unwrap().code, 451);
        // 422/423/424 belong to WebDAV/Other, not here.
        assert!(members.iter().all(|record| ![422, 423, 424].contains(&record.code)));
    }

    #[test]
    fn all_by_code_is_sorted() {
        let all = table().all_by_code();
        assert_eq!(all.first().unwrap().code, 100);
        assert_eq!(all.last().unwrap().code, 511);
        for pair in all.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn docs_url_format() {
        assert_eq!(
            docs_url(404),
            "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404"
        );
        let info = table().lookup(200).unwrap();
        assert_eq!(
            info.docs_url(),
            "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/200"
        );
    }

    #[test]
    fn titles_start_with_code() {
        for record in table().all_by_code() {
            assert!(
                record.title.starts_with(&record.code.to_string()),
                "title {:?} does not lead with its code",
                record.title
            );
        }
    }
}
