use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::try_new(&self.config, book.category, book.name.as_str(),
                                         book.author.as_str(), book.year, book.price)?;
        let added = BookDto::from(&entity);
        self.book_repository.add_book(entity);
        debug!(catalog = self.config.catalog_name.as_str(), name = added.name.as_str(),
            category = %added.category, "added book");
        Ok(added)
    }

    fn get_all_books(&self) -> Vec<BookDto> {
        let books: Vec<BookDto> = self.book_repository.get_all_books().iter().map(BookDto::from).collect();
        info!(catalog = self.config.catalog_name.as_str(), size = books.len(), "listing books");
        books
    }
}
