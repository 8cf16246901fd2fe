use crate::books::domain::Book;
use crate::core::domain::Configuration;
use crate::core::library::{BookCategory, LibraryError, LibraryResult};
use crate::utils::date::current_year;

// BookEntity is a catalog item. Fields are fixed at construction and only exposed
// through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    name: String,
    author: String,
    year: i32,
    price: f64,
    category: BookCategory,
}

impl BookEntity {
    pub fn new(name: &str, author: &str, year: i32, price: f64) -> Self {
        Self::with_category(BookCategory::General, name, author, year, price)
    }

    pub fn fun(name: &str, author: &str, year: i32, price: f64) -> Self {
        Self::with_category(BookCategory::Fun, name, author, year, price)
    }

    pub fn non_fun(name: &str, author: &str, year: i32, price: f64) -> Self {
        Self::with_category(BookCategory::NonFun, name, author, year, price)
    }

    pub fn fiction(name: &str, author: &str, year: i32, price: f64) -> Self {
        Self::with_category(BookCategory::Fiction, name, author, year, price)
    }

    pub fn non_fiction(name: &str, author: &str, year: i32, price: f64) -> Self {
        Self::with_category(BookCategory::NonFiction, name, author, year, price)
    }

    pub fn with_category(category: BookCategory, name: &str, author: &str, year: i32, price: f64) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            year,
            price,
            category,
        }
    }

    /// Builds a book and, when the configuration asks for it, rejects invalid
    /// arguments with [`LibraryError::Validation`].
    pub fn try_new(config: &Configuration, category: BookCategory, name: &str, author: &str,
                   year: i32, price: f64) -> LibraryResult<Self> {
        let book = Self::with_category(category, name, author, year, price);
        if config.strict_validation {
            book.validate(config)?;
        }
        Ok(book)
    }

    fn validate(&self, config: &Configuration) -> LibraryResult<()> {
        if self.name.trim().is_empty() {
            return Err(LibraryError::validation("book name is empty", Some("name".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("author of {:?} is empty", self.name).as_str(), Some("author".to_string())));
        }
        if self.year < 0 {
            return Err(LibraryError::validation(
                format!("year {} of {:?} is negative", self.year, self.name).as_str(), Some("year".to_string())));
        }
        if config.reject_future_years && self.year > current_year() {
            return Err(LibraryError::validation(
                format!("year {} of {:?} is in the future", self.year, self.name).as_str(), Some("year".to_string())));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(LibraryError::validation(
                format!("price {} of {:?} is invalid", self.price, self.name).as_str(), Some("price".to_string())));
        }
        Ok(())
    }
}

impl Book for BookEntity {
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

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Configuration;
    use crate::core::library::{BookCategory, LibraryError};

    fn describe(book: &dyn Book) -> (String, String, i32, f64) {
        (book.name().to_string(), book.author().to_string(), book.year(), book.price())
    }

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("learning solid principle", "Goodluck", 2024, 250.0);
        assert_eq!("learning solid principle", book.name());
        assert_eq!("Goodluck", book.author());
        assert_eq!(2024, book.year());
        assert_eq!(250.0, book.price());
        assert_eq!(BookCategory::General, book.category());
        assert_eq!(None, book.book_type());
    }

    #[test]
    fn test_should_label_fiction_books() {
        let fiction = BookEntity::fiction("The Adventure", "M.k Fiction", 2023, 100.0);
        let non_fiction = BookEntity::non_fiction("Real life", "ken.mild", 2005, 1000.0);
        assert_eq!(Some("Fiction Book"), fiction.book_type());
        assert_eq!(Some("Non-Fiction Book"), non_fiction.book_type());
    }

    #[test]
    fn test_should_substitute_variants_for_base_book() {
        let base = BookEntity::new("title", "author", 1999, 12.5);
        let variants = vec![
            BookEntity::fun("title", "author", 1999, 12.5),
            BookEntity::non_fun("title", "author", 1999, 12.5),
            BookEntity::fiction("title", "author", 1999, 12.5),
            BookEntity::non_fiction("title", "author", 1999, 12.5),
        ];
        for variant in variants {
            assert_eq!(describe(&base), describe(&variant));
        }
        assert_eq!(None, BookEntity::fun("title", "author", 1999, 12.5).book_type());
        assert_eq!(None, BookEntity::non_fun("title", "author", 1999, 12.5).book_type());
    }

    #[test]
    fn test_should_store_arguments_verbatim_without_validation() {
        let book = BookEntity::try_new(&Configuration::new("test"), BookCategory::General, "", "", -5, -1.5)
            .expect("should accept any values");
        assert_eq!("", book.name());
        assert_eq!(-5, book.year());
        assert_eq!(-1.5, book.price());
    }

    #[test]
    fn test_should_reject_invalid_arguments_in_strict_mode() {
        let config = Configuration::strict("test");
        let cases = vec![
            ("", "author", 2000, 1.0, "name"),
            ("title", " ", 2000, 1.0, "author"),
            ("title", "author", -1, 1.0, "year"),
            ("title", "author", 9999, 1.0, "year"),
            ("title", "author", 2000, -0.01, "price"),
            ("title", "author", 2000, f64::NAN, "price"),
        ];
        for (name, author, year, price, field) in cases {
            let res = BookEntity::try_new(&config, BookCategory::Fiction, name, author, year, price);
            match res {
                Err(LibraryError::Validation { reason_code, .. }) => {
                    assert_eq!(Some(field.to_string()), reason_code);
                }
                other => panic!("expected validation error for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_should_accept_valid_arguments_in_strict_mode() {
        let book = BookEntity::try_new(&Configuration::strict("test"), BookCategory::NonFiction,
                                       "Real life", "ken.mild", 2005, 1000.0).expect("should build book");
        assert_eq!(Some("Non-Fiction Book"), book.book_type());
    }
}
