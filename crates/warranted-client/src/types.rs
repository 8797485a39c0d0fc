//! Request and response types for the Warranted API.
//!
//! The API speaks camelCase JSON; the serde renames below keep the Rust
//! field names idiomatic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints.
///
/// Both fields are optional; the API returns its default page size when
/// `limit` is absent and the first page when `start_key` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Opaque cursor returned by a previous page.
    pub start_key: Option<String>,
    /// Maximum number of items to return.
    pub limit: Option<u32>,
}

impl ListParams {
    /// Parameters for the page following `start_key`.
    #[must_use]
    pub fn starting_at(start_key: impl Into<String>) -> Self {
        Self {
            start_key: Some(start_key.into()),
            ..Self::default()
        }
    }

    /// Set the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(start_key) = &self.start_key {
            query.push(("startKey", start_key.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// A decision rendered by Warranted for a law enforcement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Decision identifier.
    pub id: String,
    /// The law enforcement request this decision concerns.
    pub law_enforcement_request_id: String,
    /// The decision payload, shaped by the account's schema.
    pub decision: serde_json::Value,
    /// When the decision was rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One page of decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionList {
    /// The decisions on this page.
    pub decisions: Vec<Decision>,
    /// Cursor for the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_key: Option<String>,
}

/// A law enforcement request uploaded to Warranted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawEnforcementRequest {
    /// Request identifier.
    pub id: String,
    /// Processing status (e.g. `"pending"`, `"processed"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Original filename of the uploaded document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// When the request was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One page of law enforcement requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawEnforcementRequestList {
    /// The requests on this page.
    pub law_enforcement_requests: Vec<LawEnforcementRequest>,
    /// Cursor for the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_key: Option<String>,
}

/// Acknowledgement returned when a law enforcement request is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    /// Identifier of the deleted request.
    pub id: String,
    /// Whether the deletion took effect.
    pub deleted: bool,
}

/// Details about the authenticated account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// The account identifier.
    pub account_id: String,
    /// Display name, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub message: String,
}
