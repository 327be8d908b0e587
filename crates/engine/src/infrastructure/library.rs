//! SQLite-backed movie library storage (saved movies + Top 10 collections).
//!
//! Rows hold the serialized entity; the timestamp columns exist for
//! ordering, mirroring how entries stack newest-first in the UI.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use blockbustr_domain::{CollectionId, MovieId, SavedMovie, Top10Collection};

use crate::infrastructure::ports::{CollectionRepo, MovieRepo, RepoError};

/// SQLite implementation for the saved-movie library.
pub struct SqliteMovieRepo {
    pool: SqlitePool,
}

impl SqliteMovieRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("movies", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movies (
                id TEXT PRIMARY KEY,
                movie_json TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("movies", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl MovieRepo for SqliteMovieRepo {
    async fn list(&self) -> Result<Vec<SavedMovie>, RepoError> {
        let rows = sqlx::query("SELECT movie_json FROM movies ORDER BY saved_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("movies", e))?;

        rows.iter()
            .map(|row| {
                let json: String = row.get("movie_json");
                serde_json::from_str(&json).map_err(|e| RepoError::serialization(e))
            })
            .collect()
    }

    async fn save(&self, movie: SavedMovie) -> Result<(), RepoError> {
        let json = serde_json::to_string(&movie).map_err(|e| RepoError::serialization(e))?;

        sqlx::query(
            r#"
            INSERT INTO movies (id, movie_json, saved_at)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                movie_json = excluded.movie_json,
                saved_at = excluded.saved_at
            "#,
        )
        .bind(movie.id.to_string())
        .bind(json)
        .bind(movie.saved_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("movies", e))?;

        Ok(())
    }

    async fn delete(&self, id: MovieId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("movies", e))?;
        Ok(())
    }

    async fn delete_many(&self, ids: Vec<MovieId>) -> Result<(), RepoError> {
        for id in ids {
            self.delete(id).await?;
        }
        Ok(())
    }
}

/// SQLite implementation for Top 10 collections.
pub struct SqliteCollectionRepo {
    pool: SqlitePool,
}

impl SqliteCollectionRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("collections", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS collections (
                id TEXT PRIMARY KEY,
                collection_json TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("collections", e))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl CollectionRepo for SqliteCollectionRepo {
    async fn list(&self) -> Result<Vec<Top10Collection>, RepoError> {
        let rows = sqlx::query("SELECT collection_json FROM collections ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("collections", e))?;

        rows.iter()
            .map(|row| {
                let json: String = row.get("collection_json");
                serde_json::from_str(&json).map_err(|e| RepoError::serialization(e))
            })
            .collect()
    }

    async fn get(&self, id: CollectionId) -> Result<Option<Top10Collection>, RepoError> {
        let row = sqlx::query("SELECT collection_json FROM collections WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("collections", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("collection_json");
                let collection =
                    serde_json::from_str(&json).map_err(|e| RepoError::serialization(e))?;
                Ok(Some(collection))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, collection: Top10Collection) -> Result<(), RepoError> {
        let json = serde_json::to_string(&collection).map_err(|e| RepoError::serialization(e))?;

        sqlx::query(
            r#"
            INSERT INTO collections (id, collection_json, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                collection_json = excluded.collection_json,
                created_at = excluded.created_at
            "#,
        )
        .bind(collection.id.to_string())
        .bind(json)
        .bind(collection.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("collections", e))?;

        Ok(())
    }

    async fn delete(&self, id: CollectionId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM collections WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("collections", e))?;
        Ok(())
    }
}
