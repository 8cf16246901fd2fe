use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::BookCategory;

// BookDto is a data transfer object for the catalog service and its console report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub name: String,
    pub author: String,
    pub year: i32,
    pub price: f64,
    #[serde(default = "default_category")]
    pub category: BookCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_type: Option<String>,
}

fn default_category() -> BookCategory {
    BookCategory::General
}

impl BookDto {
    pub fn new(category: BookCategory, name: &str, author: &str, year: i32, price: f64) -> BookDto {
        BookDto {
            name: name.to_string(),
            author: author.to_string(),
            year,
            price,
            category,
            book_type: category.label().map(str::to_string),
        }
    }
}

impl Book for BookDto {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn category(&self) -> BookCategory {
        self.category
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        BookDto::new(other.category(), other.name(), other.author(), other.year(), other.price())
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::with_category(other.category, other.name.as_str(), other.author.as_str(),
                                  other.year, other.price)
    }
}
