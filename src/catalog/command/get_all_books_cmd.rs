use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetAllBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetAllBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetAllBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct GetAllBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl GetAllBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<GetAllBooksCommandRequest, GetAllBooksCommandResponse> for GetAllBooksCommand<'a> {
    fn execute(&mut self, _req: GetAllBooksCommandRequest) -> Result<GetAllBooksCommandResponse, CommandError> {
        Ok(GetAllBooksCommandResponse::new(self.catalog_service.get_all_books()))
    }
}
