//! Read-only catalog reports.
//!
//! Each report is a pure function of current store state and returns a typed
//! result; formatting is left to the CLI layer.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorWithBookCount},
    models::book::Book,
    repository::Repository,
};

/// Authors must hold strictly more than this many books to count as prolific.
pub const PROLIFIC_THRESHOLD: i64 = 3;

/// Books tied at the maximum page count.
#[derive(Debug, Clone, Serialize)]
pub struct MaxPagesReport {
    pub pages: i64,
    pub books: Vec<Book>,
}

/// The unique youngest author and their age at the reference date.
#[derive(Debug, Clone, Serialize)]
pub struct YoungestAuthorReport {
    pub author: Author,
    pub age: i32,
}

#[derive(Clone)]
pub struct ReportService {
    repository: Repository,
}

impl ReportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fail if any junction row references a missing author or book. The
    /// seeder cannot produce such rows; this guards against external
    /// mutation of the database file between runs.
    pub async fn verify_integrity(&self) -> AppResult<()> {
        let (missing_authors, missing_books) =
            self.repository.authors.orphan_link_counts().await?;
        if missing_authors > 0 || missing_books > 0 {
            return Err(AppError::ReferentialIntegrity(format!(
                "{} junction rows reference a missing author, {} a missing book",
                missing_authors, missing_books
            )));
        }
        Ok(())
    }

    /// All books tied at the maximum page count.
    pub async fn books_with_most_pages(&self) -> AppResult<MaxPagesReport> {
        let pages = self
            .repository
            .books
            .max_pages()
            .await?
            .ok_or_else(|| AppError::NoData("no books in the catalog".to_string()))?;
        let books = self.repository.books.with_pages(pages).await?;

        Ok(MaxPagesReport { pages, books })
    }

    /// Mean page count across all books, rounded to the nearest integer.
    pub async fn average_page_count(&self) -> AppResult<i64> {
        let avg = self
            .repository
            .books
            .average_pages()
            .await?
            .ok_or_else(|| AppError::NoData("no books in the catalog".to_string()))?;

        Ok(avg.round() as i64)
    }

    /// The unique author with the latest birth date, aged as of today.
    pub async fn youngest_author(&self) -> AppResult<YoungestAuthorReport> {
        self.youngest_author_as_of(Local::now().date_naive()).await
    }

    /// As [`Self::youngest_author`], with an explicit reference date.
    /// More than one author on the latest birth date is an ambiguity error.
    pub async fn youngest_author_as_of(&self, on: NaiveDate) -> AppResult<YoungestAuthorReport> {
        let latest = self
            .repository
            .authors
            .latest_birth_date()
            .await?
            .ok_or_else(|| AppError::NoData("no authors in the catalog".to_string()))?;

        let mut matches = self.repository.authors.with_birth_date(latest).await?;
        if matches.len() > 1 {
            return Err(AppError::AmbiguousResult(format!(
                "{} authors share the latest birth date {}",
                matches.len(),
                latest
            )));
        }
        let author = matches
            .pop()
            .ok_or_else(|| AppError::NoData("youngest author row vanished mid-query".to_string()))?;

        let age = author.age_on(on);
        Ok(YoungestAuthorReport { author, age })
    }

    /// Up to `limit` authors with no associated book, ordered by id.
    pub async fn authors_without_books(&self, limit: i64) -> AppResult<Vec<Author>> {
        self.repository.authors.without_books(limit).await
    }

    /// Up to `limit` authors with more than [`PROLIFIC_THRESHOLD`] books,
    /// with their counts, ordered by count descending then id.
    pub async fn prolific_authors(&self, limit: i64) -> AppResult<Vec<AuthorWithBookCount>> {
        self.repository
            .authors
            .with_book_count_above(PROLIFIC_THRESHOLD, limit)
            .await
    }
}
