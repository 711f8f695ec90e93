//! PostgreSQL implementation of VideoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use uploadai::{DomainError, Video, VideoRepository};

/// PostgreSQL implementation of VideoRepository
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct VideoRow {
    id: Uuid,
    name: String,
    path: String,
    transcription: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            path: row.path,
            transcription: row.transcription,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        let row = sqlx::query_as::<_, VideoRow>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, video: &Video) -> Result<Video, DomainError> {
        let row = sqlx::query_as::<_, VideoRow>(
            r#"
            INSERT INTO videos (id, name, path, transcription, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(video.id)
        .bind(&video.name)
        .bind(&video.path)
        .bind(&video.transcription)
        .bind(video.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn save_transcription(
        &self,
        id: Uuid,
        transcription: &str,
    ) -> Result<Video, DomainError> {
        let updated = sqlx::query_as::<_, VideoRow>(
            r#"
            UPDATE videos
            SET transcription = $2
            WHERE id = $1 AND transcription IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(transcription)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        if let Some(row) = updated {
            return Ok(row.into());
        }

        // Either already transcribed or gone
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Video", id))
    }
}
