pub mod add_book_cmd;
pub mod get_all_books_cmd;
