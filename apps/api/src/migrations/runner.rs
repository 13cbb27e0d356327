use anyhow::{anyhow, Result};
use sqlx::PgPool;
use tracing::info;

use super::{all, Migration};

/// Bookkeeping table recording which migrations have run.
const CREATE_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    id BIGINT PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Applies every migration not yet recorded, in id order.
///
/// Each migration's forward statements and its bookkeeping row share one
/// transaction, so a failing statement rolls the whole migration back and
/// partial application is impossible. Errors propagate immediately; there is
/// no retry.
pub async fn run_pending(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_MIGRATIONS_TABLE).execute(pool).await?;

    let applied: Vec<i64> = sqlx::query_scalar("SELECT id FROM schema_migrations ORDER BY id")
        .fetch_all(pool)
        .await?;

    let mut ran = 0usize;
    for migration in all() {
        if applied.contains(&migration.id) {
            continue;
        }
        apply(pool, migration).await?;
        ran += 1;
    }

    if ran == 0 {
        info!("Schema is up to date ({} migrations applied)", applied.len());
    }
    Ok(())
}

async fn apply(pool: &PgPool, migration: &Migration) -> Result<()> {
    let mut tx = pool.begin().await?;
    for statement in migration.forward {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    sqlx::query("INSERT INTO schema_migrations (id, name) VALUES ($1, $2)")
        .bind(migration.id)
        .bind(migration.name)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    info!("Applied migration {}", migration.name);
    Ok(())
}

/// Reverts the most recently applied migration by running its backward list,
/// also transactionally. A no-op when nothing has been applied.
pub async fn revert_last(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_MIGRATIONS_TABLE).execute(pool).await?;

    let last: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM schema_migrations")
        .fetch_one(pool)
        .await?;
    let Some(id) = last else {
        info!("No applied migrations to revert");
        return Ok(());
    };

    let migration = all()
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| anyhow!("applied migration {id} is not in the registry"))?;

    let mut tx = pool.begin().await?;
    for statement in migration.backward {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    sqlx::query("DELETE FROM schema_migrations WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    info!("Reverted migration {}", migration.name);
    Ok(())
}
