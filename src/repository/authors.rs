//! Authors repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite, SqliteConnection};

use crate::{
    error::AppResult,
    models::author::{Author, AuthorWithBookCount, CreateAuthor},
    models::author_book::AuthorBook,
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // WRITE (transaction-scoped: the caller owns the connection)
    // =========================================================================

    /// Insert an author on the caller's connection, returning their id.
    pub async fn insert(
        &self,
        conn: &mut SqliteConnection,
        author: &CreateAuthor,
    ) -> AppResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO authors (first_name, last_name, birth_date, place_of_birth)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(author.birth_date)
        .bind(&author.birth_place)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    /// Create one authorship edge in the junction table.
    pub async fn attach_book(
        &self,
        conn: &mut SqliteConnection,
        author_id: i64,
        book_id: i64,
    ) -> AppResult<AuthorBook> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO author_book (author_id, book_id)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(author_id)
        .bind(book_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(AuthorBook {
            id,
            author_id,
            book_id,
        })
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Total number of authors.
    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// All authors, ordered by id.
    pub async fn all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name, birth_date, place_of_birth AS birth_place
            FROM authors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Latest birth date on record, or None when the table is empty.
    pub async fn latest_birth_date(&self) -> AppResult<Option<NaiveDate>> {
        let latest: Option<NaiveDate> = sqlx::query_scalar("SELECT MAX(birth_date) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        Ok(latest)
    }

    /// Every author born on exactly the given date, ordered by id.
    pub async fn with_birth_date(&self, birth_date: NaiveDate) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name, birth_date, place_of_birth AS birth_place
            FROM authors
            WHERE birth_date = ?
            ORDER BY id
            "#,
        )
        .bind(birth_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Up to `limit` authors with no junction row, ordered by id
    /// (anti-join via LEFT JOIN ... IS NULL).
    pub async fn without_books(&self, limit: i64) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT a.id, a.first_name, a.last_name, a.birth_date,
                   a.place_of_birth AS birth_place
            FROM authors a
            LEFT JOIN author_book ab ON ab.author_id = a.id
            WHERE ab.id IS NULL
            ORDER BY a.id
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Up to `limit` authors holding strictly more than `min_books` junction
    /// rows, with their counts, ordered by count descending then id.
    pub async fn with_book_count_above(
        &self,
        min_books: i64,
        limit: i64,
    ) -> AppResult<Vec<AuthorWithBookCount>> {
        let authors = sqlx::query_as::<_, AuthorWithBookCount>(
            r#"
            SELECT a.id, a.first_name, a.last_name, COUNT(ab.book_id) AS book_count
            FROM authors a
            JOIN author_book ab ON ab.author_id = a.id
            GROUP BY a.id
            HAVING COUNT(ab.book_id) > ?
            ORDER BY book_count DESC, a.id
            LIMIT ?
            "#,
        )
        .bind(min_books)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Counts of junction rows whose author or book no longer exists:
    /// (missing-author rows, missing-book rows).
    pub async fn orphan_link_counts(&self) -> AppResult<(i64, i64)> {
        let missing_authors: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM author_book ab
            LEFT JOIN authors a ON a.id = ab.author_id
            WHERE a.id IS NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let missing_books: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM author_book ab
            LEFT JOIN books b ON b.id = ab.book_id
            WHERE b.id IS NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok((missing_authors, missing_books))
    }
}
