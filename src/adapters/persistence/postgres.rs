//! PostgreSQL implementation for account store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Postgres as PostgresConfig;
use crate::domain::{Account, HashedAccountDraft};
use crate::error::{Result, ToInternal};
use crate::ports::outbound::AccountStore;

pub const DEFAULT_CREDENTIALS: &str = "postgres";
pub const DEFAULT_DATABASE_NAME: &str = "signup";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// PostgreSQL account store.
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    /// Create a new [`PgAccountStore`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and run pending migrations.
    pub async fn connect(
        config: &PostgresConfig,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let username = config.username.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
        let password = config.password.as_deref().unwrap_or(DEFAULT_CREDENTIALS);
        let db = config.database.as_deref().unwrap_or(DEFAULT_DATABASE_NAME);
        let hostname = &config.address;

        let addr = format!("postgres://{username}:{password}@{hostname}/{db}");
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size.unwrap_or(DEFAULT_POOL_SIZE))
            .connect(&addr)
            .await?;

        tracing::info!(%hostname, %db, "postgres connected");

        sqlx::migrate!().run(&pool).await?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn add(&self, draft: HashedAccountDraft) -> Result<Account> {
        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO accounts (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(draft.name())
        .bind(draft.email())
        .bind(draft.password().as_str())
        .fetch_one(&self.pool)
        .await
        .catch()?;

        Ok(draft.into_account(id))
    }
}
