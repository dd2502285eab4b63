//! Commit history entity models and DTOs.
//!
//! Commit and commit-item rows are append-only and immutable once written
//! (no `updated_at`). Item rows keep a `position` column so the engine's
//! deterministic ordering survives the round-trip through storage.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waymark_core::commit::CommitItem;
use waymark_core::compare::RouteSnapshot;
use waymark_core::history::Commit;
use waymark_core::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Commit rows
// ---------------------------------------------------------------------------

/// One row in `route_commits`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitRow {
    pub id: String,
    pub route_id: String,
    pub user_id: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

impl CommitRow {
    pub fn from_commit(commit: &Commit) -> Self {
        Self {
            id: commit.id.clone(),
            route_id: commit.route_id.clone(),
            user_id: commit.user_id.clone(),
            message: commit.message.clone(),
            created_at: commit.created_at,
        }
    }
}

/// One row in `route_commit_items`.
///
/// `action` and `resource_table` hold the exact taxonomy strings the history
/// UI routes on; `payload` is the before/after fragment pair as JSONB.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommitItemRow {
    pub id: String,
    pub commit_id: String,
    pub action: String,
    pub payload: serde_json::Value,
    pub resource_id: String,
    pub resource_table: String,
    pub position: i32,
}

impl CommitItemRow {
    pub fn from_item(
        commit_id: &str,
        position: i32,
        item: &CommitItem,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: item.id.clone(),
            commit_id: commit_id.to_string(),
            action: item.action.as_str().to_string(),
            payload: serde_json::to_value(&item.payload)?,
            resource_id: item.resource_id.clone(),
            resource_table: item.resource_table.as_str().to_string(),
            position,
        })
    }
}

/// Convert a commit's items to rows, numbering positions in engine order.
pub fn item_rows(commit_id: &str, items: &[CommitItem]) -> Result<Vec<CommitItemRow>, serde_json::Error> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| CommitItemRow::from_item(commit_id, position as i32, item))
        .collect()
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request to record one edit against a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordCommit {
    pub route_id: EntityId,
    pub user_id: Option<EntityId>,
    pub message: Option<String>,
    pub prev: RouteSnapshot,
    pub next: RouteSnapshot,
}

/// Filter parameters for listing a route's commits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitQuery {
    pub user_id: Option<EntityId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
