use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{DubbingRepository, RepositoryError};
use crate::domain::{Dubbing, DubbingId, DubbingStatus, LanguageCode, UploadId};

pub struct PgDubbingRepository {
    pool: PgPool,
}

impl PgDubbingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

fn map_row(row: &PgRow) -> Result<Dubbing, RepositoryError> {
    let status: String = row.try_get("status").map_err(query_failed)?;
    let status = status
        .parse::<DubbingStatus>()
        .map_err(RepositoryError::QueryFailed)?;
    let target_language: String = row.try_get("target_language").map_err(query_failed)?;

    Ok(Dubbing {
        id: DubbingId::from_uuid(row.try_get("id").map_err(query_failed)?),
        audio_upload_id: UploadId::from_uuid(
            row.try_get("audio_upload_id").map_err(query_failed)?,
        ),
        target_language: LanguageCode::new(target_language),
        voice_id: row.try_get("voice_id").map_err(query_failed)?,
        dubbed_audio_url: row.try_get("dubbed_audio_url").map_err(query_failed)?,
        status,
        created_at: row.try_get("created_at").map_err(query_failed)?,
    })
}

#[async_trait]
impl DubbingRepository for PgDubbingRepository {
    #[instrument(skip(self, dubbing), fields(dubbing_id = %dubbing.id.as_uuid()))]
    async fn create(&self, dubbing: &Dubbing) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO dubbings
                (id, audio_upload_id, target_language, voice_id, dubbed_audio_url,
                 status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(dubbing.id.as_uuid())
        .bind(dubbing.audio_upload_id.as_uuid())
        .bind(dubbing.target_language.as_str())
        .bind(&dubbing.voice_id)
        .bind(&dubbing.dubbed_audio_url)
        .bind(dubbing.status.as_str())
        .bind(dubbing.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::ConstraintViolation(db.to_string())
            }
            _ => query_failed(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(dubbing_id = %id.as_uuid()))]
    async fn get_by_id(&self, id: DubbingId) -> Result<Option<Dubbing>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, audio_upload_id, target_language, voice_id, dubbed_audio_url,
                   status, created_at
            FROM dubbings
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(map_row).transpose()
    }

    #[instrument(skip(self), fields(upload_id = %upload_id.as_uuid()))]
    async fn list_for_upload(&self, upload_id: UploadId) -> Result<Vec<Dubbing>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, audio_upload_id, target_language, voice_id, dubbed_audio_url,
                   status, created_at
            FROM dubbings
            WHERE audio_upload_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(upload_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(map_row).collect()
    }

    #[instrument(skip(self, audio_url), fields(dubbing_id = %id.as_uuid()))]
    async fn set_completed(&self, id: DubbingId, audio_url: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE dubbings
            SET dubbed_audio_url = $1, status = $2
            WHERE id = $3
            "#,
        )
        .bind(audio_url)
        .bind(DubbingStatus::Completed.as_str())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.as_uuid().to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(dubbing_id = %id.as_uuid(), status = %status))]
    async fn update_status(
        &self,
        id: DubbingId,
        status: DubbingStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE dubbings SET status = $1 WHERE id = $2")
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

    #[instrument(skip(self), fields(dubbing_id = %id.as_uuid()))]
    async fn delete(&self, id: DubbingId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM dubbings WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }
}
