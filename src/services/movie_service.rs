use crate::database::manager::DatabaseError;
use crate::database::models::movie::Movie;
use crate::database::record::MovieDraft;
use crate::database::store::MovieStore;

/// Query-composition layer between the handlers and the store. All store
/// access, reads and writes alike, flows through here; handlers never touch
/// the store directly.
pub struct MovieService<S: MovieStore> {
    store: S,
}

impl<S: MovieStore> MovieService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_movies(&self) -> Result<Vec<Movie>, DatabaseError> {
        self.store.list().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>, DatabaseError> {
        self.store.get_by_id(id).await
    }

    pub async fn get_movies_by_category(&self, category: &str) -> Result<Vec<Movie>, DatabaseError> {
        self.store.get_by_category(category).await
    }

    pub async fn create_movie(&self, draft: &MovieDraft) -> Result<Movie, DatabaseError> {
        self.store.insert(draft).await
    }

    pub async fn update_movie(&self, id: i32, draft: &MovieDraft) -> Result<bool, DatabaseError> {
        self.store.update(id, draft).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<bool, DatabaseError> {
        self.store.delete(id).await
    }
}
