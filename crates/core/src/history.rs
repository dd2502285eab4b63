//! Commit records: the unit of history a saved edit produces.
//!
//! The comparator decides *what* changed; this module wraps that item list
//! into the record the storage layer persists, and synthesizes the two
//! orchestration-level events that do not come out of field diffing
//! (`fork_route` now, ownership transfer once that flow exists).

use uuid::Uuid;

use crate::actions::RouteAction;
use crate::commit::CommitItem;
use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// One saved edit: an ordered batch of commit items against a single route.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Commit {
    pub id: String,
    pub route_id: EntityId,
    pub user_id: Option<EntityId>,
    /// Optional user-supplied summary of the edit.
    pub message: Option<String>,
    pub created_at: Timestamp,
    pub items: Vec<CommitItem>,
}

/// Wrap comparator output into a commit record.
///
/// An empty item list is rejected: "nothing changed" is a caller decision to
/// skip recording, not a storable commit.
pub fn build_commit(
    route_id: EntityId,
    user_id: Option<EntityId>,
    message: Option<String>,
    items: Vec<CommitItem>,
) -> Result<Commit, CoreError> {
    if route_id.is_empty() {
        return Err(CoreError::Validation(
            "Commit must reference a route id".to_string(),
        ));
    }
    if items.is_empty() {
        return Err(CoreError::Validation(
            "Commit must contain at least one item".to_string(),
        ));
    }
    Ok(Commit {
        id: Uuid::now_v7().to_string(),
        route_id,
        user_id,
        message,
        created_at: chrono::Utc::now(),
        items,
    })
}

/// Synthesize the single `fork_route` item recorded when a route is forked.
///
/// Forking copies the whole graph at once, so its history entry is one
/// wholesale item carrying the new route as `payload.next` -- it never goes
/// through the field comparator.
pub fn fork_commit_item(forked: &crate::models::PartialRoute) -> CommitItem {
    CommitItem::route(RouteAction::ForkRoute, None, Some(forked.clone()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
