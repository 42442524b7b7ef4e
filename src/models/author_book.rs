//! Author-book junction model (N:M relationship)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Junction row linking one author to one book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthorBook {
    pub id: i64,
    pub author_id: i64,
    pub book_id: i64,
}
