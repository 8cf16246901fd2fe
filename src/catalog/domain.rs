pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn get_all_books(&self) -> Vec<BookDto>;
}
