//! Write-side service: turn an edit submission into persisted history.
//!
//! The engine decides what a commit would contain; this service decides the
//! rest of the write path -- skip the no-op edit, wrap the items into a
//! commit record, and store it.

use sqlx::PgPool;
use waymark_core::compare::compare_commits;
use waymark_core::error::CoreError;
use waymark_core::history::{build_commit, fork_commit_item, Commit};
use waymark_core::models::PartialRoute;
use waymark_core::types::EntityId;

use crate::models::commit::{item_rows, CommitRow, RecordCommit};
use crate::repositories::CommitRepo;

/// Errors from the recording path.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A domain-level error from `waymark-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A payload could not be serialized for storage.
    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Compare the submitted snapshots and persist the resulting commit.
///
/// Returns `Ok(None)` when nothing changed: an edit that alters no field is
/// a quiet no-op, not an error.
pub async fn record_route_commit(
    pool: &PgPool,
    req: RecordCommit,
) -> Result<Option<Commit>, RecordError> {
    let items = compare_commits(&req.prev, &req.next);
    if items.is_empty() {
        tracing::debug!(route_id = %req.route_id, "No changes detected, skipping commit");
        return Ok(None);
    }

    let commit = build_commit(req.route_id, req.user_id, req.message, items)?;
    persist(pool, &commit).await?;
    tracing::info!(
        commit_id = %commit.id,
        route_id = %commit.route_id,
        items = commit.items.len(),
        "Recorded route commit"
    );
    Ok(Some(commit))
}

/// Record the wholesale `fork_route` history entry for a freshly forked
/// route. Forks bypass the comparator entirely.
pub async fn record_route_fork(
    pool: &PgPool,
    forked: &PartialRoute,
    user_id: Option<EntityId>,
) -> Result<Commit, RecordError> {
    let route_id = forked.id.clone().unwrap_or_default();
    let commit = build_commit(route_id, user_id, None, vec![fork_commit_item(forked)])?;
    persist(pool, &commit).await?;
    tracing::info!(
        commit_id = %commit.id,
        route_id = %commit.route_id,
        "Recorded route fork"
    );
    Ok(commit)
}

async fn persist(pool: &PgPool, commit: &Commit) -> Result<(), RecordError> {
    let row = CommitRow::from_commit(commit);
    let items = item_rows(&commit.id, &commit.items)?;
    CommitRepo::insert(pool, &row, &items).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
