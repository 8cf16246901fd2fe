pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository is the contract callers depend on instead of a concrete store.
pub trait BookRepository: Repository<BookEntity> {
    fn add_book(&mut self, book: BookEntity) {
        self.add(book)
    }

    fn get_all_books(&self) -> Vec<BookEntity> {
        self.all()
    }
}
