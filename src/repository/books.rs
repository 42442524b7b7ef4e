//! Books repository for database operations

use sqlx::{Pool, Sqlite, SqliteConnection};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // WRITE (transaction-scoped: the caller owns the connection)
    // =========================================================================

    /// Insert a book on the caller's connection, returning its id.
    pub async fn insert(&self, conn: &mut SqliteConnection, book: &CreateBook) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, category, pages, release_date)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(book.category.as_str())
        .bind(book.pages)
        .bind(book.release_date)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    /// All book ids in insertion order. Runs on the caller's connection so a
    /// seeder transaction sees the rows it has staged but not yet committed.
    pub async fn ids(&self, conn: &mut SqliteConnection) -> AppResult<Vec<i64>> {
        let ids = sqlx::query_scalar("SELECT id FROM books ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;

        Ok(ids)
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Total number of books.
    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// All books, ordered by id.
    pub async fn all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, category, pages, release_date FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Maximum page count, or None when the table is empty.
    pub async fn max_pages(&self) -> AppResult<Option<i64>> {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(pages) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(max)
    }

    /// Every book with exactly the given page count, ordered by id.
    pub async fn with_pages(&self, pages: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, category, pages, release_date
            FROM books
            WHERE pages = ?
            ORDER BY id
            "#,
        )
        .bind(pages)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Arithmetic mean of page counts, or None when the table is empty.
    pub async fn average_pages(&self) -> AppResult<Option<f64>> {
        let avg: Option<f64> = sqlx::query_scalar("SELECT AVG(pages) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(avg)
    }
}
