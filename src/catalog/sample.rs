//! The sample catalog printed by the `catalog` binary: one general book, one fiction
//! book and one non-fiction book, added in that order.

use std::io::Write;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_all_books_cmd::{GetAllBooksCommand, GetAllBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookCategory, LibraryResult};

pub fn sample_requests() -> Vec<AddBookCommandRequest> {
    vec![
        AddBookCommandRequest::new(BookCategory::General, "learning solid principle", "Goodluck", 2024, 250.0),
        AddBookCommandRequest::new(BookCategory::Fiction, "The Adventure", "M.k Fiction", 2023, 100.0),
        AddBookCommandRequest::new(BookCategory::NonFiction, "Real life", "ken.mild", 2005, 1000.0),
    ]
}

/// Adds every sample book to the catalog and returns its full contents.
pub fn run_sample(catalog_service: &mut dyn CatalogService) -> Result<Vec<BookDto>, CommandError> {
    let mut add_cmd = AddBookCommand::new(catalog_service);
    for req in sample_requests() {
        let _ = add_cmd.execute(req)?;
    }
    let res = GetAllBooksCommand::new(catalog_service).execute(GetAllBooksCommandRequest::default())?;
    Ok(res.books)
}

pub fn render_catalog(books: &[BookDto]) -> LibraryResult<String> {
    Ok(serde_json::to_string_pretty(books)?)
}

pub fn print_catalog(out: &mut impl Write, books: &[BookDto]) -> LibraryResult<()> {
    let report = render_catalog(books)?;
    writeln!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Write;
    use crate::books::dto::BookDto;
    use crate::catalog::factory;
    use crate::catalog::sample::{print_catalog, render_catalog, run_sample};
    use crate::core::domain::Configuration;
    use crate::core::library::{BookCategory, LibraryError};

    struct ClosedConsole;

    impl Write for ClosedConsole {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_should_run_sample_in_order() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let books = run_sample(svc.as_mut()).expect("should run sample");
        assert_eq!(vec![
            BookDto::new(BookCategory::General, "learning solid principle", "Goodluck", 2024, 250.0),
            BookDto::new(BookCategory::Fiction, "The Adventure", "M.k Fiction", 2023, 100.0),
            BookDto::new(BookCategory::NonFiction, "Real life", "ken.mild", 2005, 1000.0),
        ], books);
        assert_eq!(None, books[0].book_type);
        assert_eq!(Some("Fiction Book"), books[1].book_type.as_deref());
        assert_eq!(Some("Non-Fiction Book"), books[2].book_type.as_deref());
    }

    #[test]
    fn test_should_pass_strict_validation() {
        let mut svc = factory::create_catalog_service(&Configuration::strict("test"));
        let books = run_sample(svc.as_mut()).expect("should run sample");
        assert_eq!(3, books.len());
    }

    #[test]
    fn test_should_render_catalog() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let books = run_sample(svc.as_mut()).expect("should run sample");
        let rendered = render_catalog(&books).expect("should render catalog");
        let parsed: Vec<BookDto> = serde_json::from_str(rendered.as_str()).expect("should parse catalog");
        assert_eq!(books, parsed);
        assert!(rendered.contains("\"book_type\": \"Non-Fiction Book\""));
    }

    #[test]
    fn test_should_render_empty_catalog() {
        assert_eq!("[]", render_catalog(&[]).expect("should render catalog"));
    }

    #[test]
    fn test_should_print_catalog() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let books = run_sample(svc.as_mut()).expect("should run sample");
        let mut out: Vec<u8> = vec![];
        print_catalog(&mut out, &books).expect("should print catalog");
        let printed = String::from_utf8(out).expect("should be utf8");
        assert_eq!(format!("{}\n", render_catalog(&books).expect("should render catalog")), printed);
    }

    #[test]
    fn test_should_fail_print_catalog_on_closed_console() {
        let books = vec![BookDto::new(BookCategory::Fiction, "The Adventure", "M.k Fiction", 2023, 100.0)];
        let res = print_catalog(&mut ClosedConsole, &books);
        assert!(matches!(res, Err(LibraryError::Runtime { reason_code: Some(_), .. })));
    }
}
