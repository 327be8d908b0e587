//! Saved-movie library and Top 10 collection management.

use std::sync::Arc;

use blockbustr_domain::{
    CollectionId, MovieId, MovieInfo, SavedMovie, Top10Collection,
};

use crate::infrastructure::ports::{
    ClockPort, CollectionRepo, MovieRepo, RandomPort, RepoError,
};

/// Fields supplied when saving a movie; id and timestamp are assigned here.
#[derive(Debug, Clone)]
pub struct NewSavedMovie {
    pub original: MovieInfo,
    pub action_title: String,
    pub action_summary: String,
    pub tags: Vec<String>,
    pub poster_url: String,
    pub poster_style: Option<String>,
}

/// Library use cases: CRUD over saved movies and collections.
pub struct Library {
    movies: Arc<dyn MovieRepo>,
    collections: Arc<dyn CollectionRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl Library {
    pub fn new(
        movies: Arc<dyn MovieRepo>,
        collections: Arc<dyn CollectionRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            movies,
            collections,
            clock,
            random,
        }
    }

    pub async fn list_movies(&self) -> Result<Vec<SavedMovie>, RepoError> {
        self.movies.list().await
    }

    pub async fn save_movie(&self, new: NewSavedMovie) -> Result<SavedMovie, RepoError> {
        let movie = SavedMovie {
            id: MovieId::from_uuid(self.random.gen_uuid()),
            original: new.original,
            action_title: new.action_title,
            action_summary: new.action_summary,
            tags: new.tags,
            poster_url: new.poster_url,
            poster_style: new.poster_style,
            saved_at: self.clock.now(),
        };
        self.movies.save(movie.clone()).await?;
        Ok(movie)
    }

    pub async fn delete_movie(&self, id: MovieId) -> Result<(), RepoError> {
        self.movies.delete(id).await
    }

    pub async fn list_collections(&self) -> Result<Vec<Top10Collection>, RepoError> {
        self.collections.list().await
    }

    pub async fn save_collection(
        &self,
        name: String,
        movie_ids: Vec<MovieId>,
    ) -> Result<Top10Collection, RepoError> {
        let collection = Top10Collection {
            id: CollectionId::from_uuid(self.random.gen_uuid()),
            name,
            movie_ids,
            created_at: self.clock.now(),
        };
        self.collections.save(collection.clone()).await?;
        Ok(collection)
    }

    /// Delete a collection and the movies it grouped.
    pub async fn delete_collection(&self, id: CollectionId) -> Result<(), RepoError> {
        if let Some(collection) = self.collections.get(id).await? {
            if !collection.movie_ids.is_empty() {
                self.movies.delete_many(collection.movie_ids).await?;
            }
        }
        self.collections.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::infrastructure::clock::{SystemClock, SystemRandom};
    use crate::infrastructure::ports::{MockCollectionRepo, MockMovieRepo};

    fn library(movies: MockMovieRepo, collections: MockCollectionRepo) -> Library {
        Library::new(
            Arc::new(movies),
            Arc::new(collections),
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }

    #[tokio::test]
    async fn test_save_movie_assigns_id_and_timestamp() {
        let mut movies = MockMovieRepo::new();
        movies.expect_save().times(1).returning(|_| Ok(()));

        let library = library(movies, MockCollectionRepo::new());
        let saved = library
            .save_movie(NewSavedMovie {
                original: MovieInfo::default(),
                action_title: "War Protocol".to_string(),
                action_summary: "Boom.".to_string(),
                tags: vec![],
                poster_url: String::new(),
                poster_style: None,
            })
            .await
            .expect("save");

        assert!(!saved.id.to_string().is_empty());
        assert!(saved.saved_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_delete_collection_cascades_member_movies() {
        let collection = Top10Collection {
            id: CollectionId::new(),
            name: "Weekend batch".to_string(),
            movie_ids: vec![MovieId::new(), MovieId::new()],
            created_at: Utc::now(),
        };
        let member_ids = collection.movie_ids.clone();
        let collection_id = collection.id;

        let mut movies = MockMovieRepo::new();
        movies
            .expect_delete_many()
            .with(eq(member_ids))
            .times(1)
            .returning(|_| Ok(()));

        let mut collections = MockCollectionRepo::new();
        let fetched = collection.clone();
        collections
            .expect_get()
            .with(eq(collection_id))
            .times(1)
            .returning(move |_| Ok(Some(fetched.clone())));
        collections
            .expect_delete()
            .with(eq(collection_id))
            .times(1)
            .returning(|_| Ok(()));

        library(movies, collections)
            .delete_collection(collection_id)
            .await
            .expect("delete");
    }

    #[tokio::test]
    async fn test_delete_missing_collection_skips_cascade() {
        let id = CollectionId::new();

        let mut movies = MockMovieRepo::new();
        movies.expect_delete_many().times(0);

        let mut collections = MockCollectionRepo::new();
        collections.expect_get().returning(|_| Ok(None));
        collections.expect_delete().times(1).returning(|_| Ok(()));

        library(movies, collections)
            .delete_collection(id)
            .await
            .expect("delete");
    }
}
