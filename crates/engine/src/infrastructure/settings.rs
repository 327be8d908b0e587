//! SQLite-backed settings storage.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use blockbustr_domain::AppSettings;

use crate::infrastructure::ports::{ClockPort, RepoError, SettingsRepo};

/// SQLite implementation for application settings storage.
///
/// A single JSON row, last write wins.
pub struct SqliteSettingsRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteSettingsRepo {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("settings", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS app_settings (
                scope TEXT PRIMARY KEY,
                settings_json TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("settings", e))?;

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl SettingsRepo for SqliteSettingsRepo {
    async fn get(&self) -> Result<Option<AppSettings>, RepoError> {
        let row = sqlx::query("SELECT settings_json FROM app_settings WHERE scope = 'global'")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("settings", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("settings_json");
                let settings = serde_json::from_str(&json)
                    .map_err(|e| RepoError::serialization(e))?;
                Ok(Some(settings))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, settings: AppSettings) -> Result<(), RepoError> {
        let json = serde_json::to_string(&settings).map_err(|e| RepoError::serialization(e))?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO app_settings (scope, settings_json, updated_at)
            VALUES ('global', ?, ?)
            ON CONFLICT(scope) DO UPDATE SET
                settings_json = excluded.settings_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("settings", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;

    async fn repo() -> (SqliteSettingsRepo, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.db");
        let repo = SqliteSettingsRepo::new(
            path.to_str().expect("utf-8 path"),
            Arc::new(SystemClock::new()),
        )
        .await
        .expect("create repo");
        (repo, dir)
    }

    #[tokio::test]
    async fn test_get_before_save_is_none() {
        let (repo, _dir) = repo().await;
        assert!(repo.get().await.expect("get").is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let (repo, _dir) = repo().await;

        let mut settings = AppSettings::default();
        settings.api_key = "first".to_string();
        repo.save(settings.clone()).await.expect("save");

        settings.api_key = "second".to_string();
        repo.save(settings.clone()).await.expect("save again");

        let loaded = repo.get().await.expect("get").expect("saved settings");
        assert_eq!(loaded.api_key, "second");
    }
}
