use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{RepositoryError, UploadRepository};
use crate::domain::{AudioUpload, UploadId, UploadStatus};

pub struct PgUploadRepository {
    pool: PgPool,
}

impl PgUploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

fn map_row(row: &PgRow) -> Result<AudioUpload, RepositoryError> {
    let status: String = row.try_get("status").map_err(query_failed)?;
    let status = status
        .parse::<UploadStatus>()
        .map_err(RepositoryError::QueryFailed)?;

    Ok(AudioUpload {
        id: UploadId::from_uuid(row.try_get("id").map_err(query_failed)?),
        filename: row.try_get("filename").map_err(query_failed)?,
        original_audio_url: row.try_get("original_audio_url").map_err(query_failed)?,
        transcription_text: row.try_get("transcription_text").map_err(query_failed)?,
        status,
        file_size_bytes: row.try_get("file_size_bytes").map_err(query_failed)?,
        duration_seconds: row.try_get("duration_seconds").map_err(query_failed)?,
        created_at: row.try_get("created_at").map_err(query_failed)?,
    })
}

#[async_trait]
impl UploadRepository for PgUploadRepository {
    #[instrument(skip(self, upload), fields(upload_id = %upload.id.as_uuid()))]
    async fn create(&self, upload: &AudioUpload) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO audio_uploads
                (id, filename, original_audio_url, transcription_text, status,
                 file_size_bytes, duration_seconds, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(upload.id.as_uuid())
        .bind(&upload.filename)
        .bind(&upload.original_audio_url)
        .bind(&upload.transcription_text)
        .bind(upload.status.as_str())
        .bind(upload.file_size_bytes)
        .bind(upload.duration_seconds)
        .bind(upload.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(())
    }

    #[instrument(skip(self), fields(upload_id = %id.as_uuid()))]
    async fn get_by_id(&self, id: UploadId) -> Result<Option<AudioUpload>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, original_audio_url, transcription_text, status,
                   file_size_bytes, duration_seconds, created_at
            FROM audio_uploads
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(map_row).transpose()
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> Result<Vec<AudioUpload>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, filename, original_audio_url, transcription_text, status,
                   file_size_bytes, duration_seconds, created_at
            FROM audio_uploads
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(map_row).collect()
    }

    #[instrument(skip(self, text), fields(upload_id = %id.as_uuid()))]
    async fn set_transcription(&self, id: UploadId, text: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE audio_uploads
            SET transcription_text = $1, status = $2
            WHERE id = $3
            "#,
        )
        .bind(text)
        .bind(UploadStatus::Completed.as_str())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(upload_id = %id.as_uuid(), status = %status))]
    async fn update_status(
        &self,
        id: UploadId,
        status: UploadStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE audio_uploads SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(upload_id = %id.as_uuid()))]
    async fn delete(&self, id: UploadId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM audio_uploads WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }
}
