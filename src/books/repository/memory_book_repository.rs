use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order for the lifetime of the process.
// Duplicates are kept and nothing is ever removed.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: vec![],
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn add(&mut self, entity: BookEntity) {
        self.books.push(entity);
        debug!(size = self.books.len(), "book appended");
    }

    fn all(&self) -> Vec<BookEntity> {
        self.books.clone()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {}
