use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::models::{Movie, TrendingEntry};

/// How many trending entries the home page shows.
pub const TRENDING_LIMIT: u32 = 5;

/// Store of trending-search counter documents, one per distinct search term.
///
/// Increments use a conditional upsert so concurrent recorders cannot lose
/// updates; there is no read-then-write anywhere in this path.
#[derive(Debug, Clone)]
pub struct TrendingStore {
    pool: SqlitePool,
}

impl TrendingStore {
    /// Open (creating if necessary) the trending database at `database_path`.
    pub async fn new(database_path: &str) -> Result<Self, sqlx::Error> {
        // Use sqlite:// with ?mode=rwc to create if it doesn't exist
        let database_url = format!("sqlite://{}?mode=rwc", database_path);
        info!("Connecting to {}", database_url);
        Self::connect_url(&database_url).await
    }

    pub(crate) async fn connect_url(database_url: &str) -> Result<Self, sqlx::Error> {
        // Single connection: every pooled connection to an in-memory sqlite
        // database would otherwise get its own empty database.
        let pool: SqlitePool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        let store = TrendingStore { pool };
        store.create_tables().await?;
        Ok(store)
    }

    async fn create_tables(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS searches (
                id TEXT PRIMARY KEY,
                term TEXT NOT NULL,
                count INTEGER NOT NULL DEFAULT 1,
                movie_id INTEGER NOT NULL,
                poster_url TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_searches_count ON searches (count DESC)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Document id for a search term. Case and surrounding whitespace do not
    /// create distinct counters.
    pub fn term_key(term: &str) -> String {
        term.trim().to_lowercase()
    }

    /// Find-or-create the counter document for `term` and bump its count.
    /// On first sight the document is initialized with count 1 and the poster
    /// of the first matching movie.
    pub async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT INTO searches (id, term, count, movie_id, poster_url, created_at, updated_at)
            VALUES (?, ?, 1, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                count = count + 1,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(Self::term_key(term))
        .bind(term.trim())
        .bind(movie.id as i64)
        .bind(movie.poster_url())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Up to `limit` counter documents, most searched first.
    pub async fn top_searches(&self, limit: u32) -> Result<Vec<TrendingEntry>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, term, count, movie_id, poster_url
            FROM searches
            ORDER BY count DESC, updated_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| TrendingEntry {
                id: row.get("id"),
                term: row.get("term"),
                count: row.get("count"),
                movie_id: row.get::<i64, _>("movie_id") as u64,
                poster_url: row.get("poster_url"),
            })
            .collect())
    }
}
