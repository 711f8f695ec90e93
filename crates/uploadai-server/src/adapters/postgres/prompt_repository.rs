//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use uploadai::{DomainError, Prompt, PromptRepository};

/// PostgreSQL implementation of PromptRepository
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PromptRow {
    id: Uuid,
    title: String,
    template: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptRow> for Prompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            template: row.template,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>("SELECT * FROM prompts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        let rows = sqlx::query_as::<_, PromptRow>("SELECT * FROM prompts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, prompt: &Prompt) -> Result<Prompt, DomainError> {
        // Upsert keyed on id; created_at is only written on insert
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            INSERT INTO prompts (id, title, template, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title, template = EXCLUDED.template, updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(prompt.id)
        .bind(&prompt.title)
        .bind(&prompt.template)
        .bind(prompt.created_at)
        .bind(prompt.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>("DELETE FROM prompts WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
