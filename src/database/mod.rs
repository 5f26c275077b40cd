pub mod manager;
pub mod models;
pub mod record;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use record::{FieldViolation, MovieDraft};
pub use store::{MovieStore, PgMovieStore};
