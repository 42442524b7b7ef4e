//! Book model and the fixed category set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book category labels used by the seeder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Comedy,
    Drama,
    Horror,
    Thriller,
    Romance,
    Fantasy,
    Mystery,
    Adventure,
    ScienceFiction,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 9] = [
        Category::Comedy,
        Category::Drama,
        Category::Horror,
        Category::Thriller,
        Category::Romance,
        Category::Fantasy,
        Category::Mystery,
        Category::Adventure,
        Category::ScienceFiction,
    ];

    /// Label stored in the `category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Comedy => "Comedy",
            Category::Drama => "Drama",
            Category::Horror => "Horror",
            Category::Thriller => "Thriller",
            Category::Romance => "Romance",
            Category::Fantasy => "Fantasy",
            Category::Mystery => "Mystery",
            Category::Adventure => "Adventure",
            Category::ScienceFiction => "Science Fiction",
        }
    }

    /// Look up a category by its stored label.
    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full book row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub pages: i64,
    pub release_date: NaiveDate,
}

/// New book to insert
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub category: Category,
    pub pages: i64,
    pub release_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_label_rejected() {
        assert_eq!(Category::parse("Western"), None);
    }
}
