//! Repository for the `route_commits` and `route_commit_items` tables.

use sqlx::PgPool;

use crate::models::commit::{CommitItemRow, CommitQuery, CommitRow};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for `route_commits` queries.
const COMMIT_COLUMNS: &str = "id, route_id, user_id, message, created_at";

/// Column list for `route_commit_items` queries.
const ITEM_COLUMNS: &str = "\
    id, commit_id, action, payload, resource_id, resource_table, position";

/// Number of bound values per item row in the batch INSERT.
const ITEM_PARAMS: u32 = 7;

// ---------------------------------------------------------------------------
// CommitRepo
// ---------------------------------------------------------------------------

/// Query and insert operations for route history rows.
pub struct CommitRepo;

impl CommitRepo {
    /// Insert a commit and its item rows in one transaction.
    ///
    /// Items go in as a single multi-row INSERT so a large edit does not
    /// turn into dozens of round-trips.
    pub async fn insert(
        pool: &PgPool,
        commit: &CommitRow,
        items: &[CommitItemRow],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO route_commits (id, route_id, user_id, message, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&commit.id)
        .bind(&commit.route_id)
        .bind(&commit.user_id)
        .bind(&commit.message)
        .bind(commit.created_at)
        .execute(&mut *tx)
        .await?;

        if !items.is_empty() {
            let mut query =
                format!("INSERT INTO route_commit_items ({ITEM_COLUMNS}) VALUES ");
            let mut param_idx = 1u32;
            let mut first = true;

            for _ in items {
                if !first {
                    query.push_str(", ");
                }
                first = false;
                query.push('(');
                for i in 0..ITEM_PARAMS {
                    if i > 0 {
                        query.push_str(", ");
                    }
                    query.push_str(&format!("${param_idx}"));
                    param_idx += 1;
                }
                query.push(')');
            }

            let mut q = sqlx::query(&query);
            for item in items {
                q = q
                    .bind(&item.id)
                    .bind(&item.commit_id)
                    .bind(&item.action)
                    .bind(&item.payload)
                    .bind(&item.resource_id)
                    .bind(&item.resource_table)
                    .bind(item.position);
            }
            q.execute(&mut *tx).await?;
        }

        tx.commit().await
    }

    /// List a route's commits, newest first.
    pub async fn list_for_route(
        pool: &PgPool,
        route_id: &str,
        params: &CommitQuery,
    ) -> Result<Vec<CommitRow>, sqlx::Error> {
        let limit = params.limit.unwrap_or(50).min(200);
        let offset = params.offset.unwrap_or(0);

        match &params.user_id {
            Some(user_id) => {
                let query = format!(
                    "SELECT {COMMIT_COLUMNS} FROM route_commits \
                     WHERE route_id = $1 AND user_id = $2 \
                     ORDER BY created_at DESC LIMIT $3 OFFSET $4"
                );
                sqlx::query_as::<_, CommitRow>(&query)
                    .bind(route_id)
                    .bind(user_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COMMIT_COLUMNS} FROM route_commits \
                     WHERE route_id = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, CommitRow>(&query)
                    .bind(route_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Find a single commit by id.
    pub async fn find_by_id(
        pool: &PgPool,
        commit_id: &str,
    ) -> Result<Option<CommitRow>, sqlx::Error> {
        let query = format!("SELECT {COMMIT_COLUMNS} FROM route_commits WHERE id = $1");
        sqlx::query_as::<_, CommitRow>(&query)
            .bind(commit_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a commit's items in engine order.
    pub async fn items_for_commit(
        pool: &PgPool,
        commit_id: &str,
    ) -> Result<Vec<CommitItemRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM route_commit_items \
             WHERE commit_id = $1 ORDER BY position ASC"
        );
        sqlx::query_as::<_, CommitItemRow>(&query)
            .bind(commit_id)
            .fetch_all(pool)
            .await
    }

    /// Count a route's commits (for pagination metadata).
    pub async fn count_for_route(pool: &PgPool, route_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM route_commits WHERE route_id = $1",
        )
        .bind(route_id)
        .fetch_one(pool)
        .await
    }
}
