//! Batch seeding of synthetic catalog data.
//!
//! One `seed` run is one transaction: books first, then authors with their
//! random book associations, committed atomically at the end.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::SqliteConnection;

use crate::{
    config::SeedConfig,
    datagen,
    error::AppResult,
    models::author::CreateAuthor,
    models::book::{Category, CreateBook},
    repository::Repository,
};

/// Page count bounds for generated books (inclusive).
const MIN_PAGES: i64 = 150;
const MAX_PAGES: i64 = 1000;

/// Release dates are drawn from this many years back through today.
const RELEASE_WINDOW_YEARS: i32 = 30;

/// Author age bounds at insertion time (inclusive).
const MIN_AGE: i32 = 15;
const MAX_AGE: i32 = 100;

/// Outcome of a completed seed run.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub books: u32,
    pub authors: u32,
    pub associations: u32,
}

#[derive(Clone)]
pub struct SeederService {
    repository: Repository,
    config: SeedConfig,
}

impl SeederService {
    pub fn new(repository: Repository, config: SeedConfig) -> Self {
        Self { repository, config }
    }

    /// Seed `books` books, then `authors` authors with random book
    /// associations, in a single transaction.
    pub async fn seed(
        &self,
        authors: u32,
        books: u32,
        rng_seed: Option<u64>,
    ) -> AppResult<SeedSummary> {
        let mut rng = match rng_seed.or(self.config.rng_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = Local::now().date_naive();

        let mut tx = self.repository.pool.begin().await?;

        self.seed_books(&mut *tx, books, &mut rng, today).await?;
        let associations = self.seed_authors(&mut *tx, authors, &mut rng, today).await?;

        tx.commit().await?;

        tracing::info!(books, authors, associations, "seed run committed");

        Ok(SeedSummary {
            books,
            authors,
            associations,
        })
    }

    /// Insert `count` books with randomized attributes.
    async fn seed_books(
        &self,
        conn: &mut SqliteConnection,
        count: u32,
        rng: &mut StdRng,
        today: NaiveDate,
    ) -> AppResult<()> {
        for _ in 0..count {
            let book = CreateBook {
                title: datagen::book_title(rng),
                category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
                pages: rng.gen_range(MIN_PAGES..=MAX_PAGES),
                release_date: datagen::date_within_years(rng, today, RELEASE_WINDOW_YEARS),
            };
            self.repository.books.insert(&mut *conn, &book).await?;
        }

        tracing::debug!(count, "books staged");
        Ok(())
    }

    /// Insert `count` authors, attaching each to a random sample of the
    /// already-staged books. Returns the number of junction rows created.
    ///
    /// Samples are drawn independently per author, so a book may end up
    /// with zero, one, or several authors.
    async fn seed_authors(
        &self,
        conn: &mut SqliteConnection,
        count: u32,
        rng: &mut StdRng,
        today: NaiveDate,
    ) -> AppResult<u32> {
        let book_ids = self.repository.books.ids(&mut *conn).await?;
        let max_sample = self.config.max_books_per_author as usize;

        let mut associations = 0u32;
        for _ in 0..count {
            let (first_name, last_name) = datagen::person_name(rng);
            let author = CreateAuthor {
                first_name,
                last_name,
                birth_date: datagen::birth_date(rng, today, MIN_AGE, MAX_AGE),
                birth_place: datagen::country(rng).to_string(),
            };
            let author_id = self.repository.authors.insert(&mut *conn, &author).await?;

            let sample = rng.gen_range(0..=max_sample.min(book_ids.len()));
            for book_id in book_ids.choose_multiple(rng, sample) {
                self.repository
                    .authors
                    .attach_book(&mut *conn, author_id, *book_id)
                    .await?;
                associations += 1;
            }
        }

        tracing::debug!(count, associations, "authors staged");
        Ok(associations)
    }
}
