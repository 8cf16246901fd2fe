use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookCategory;

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBookCommandRequest {
    pub name: String,
    pub author: String,
    pub year: i32,
    pub price: f64,
    #[serde(default)]
    pub category: Option<BookCategory>,
}

impl AddBookCommandRequest {
    pub fn new(category: BookCategory, name: &str, author: &str, year: i32, price: f64) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            year,
            price,
            category: Some(category),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.category.unwrap_or(BookCategory::General), self.name.as_str(),
                     self.author.as_str(), self.year, self.price)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
