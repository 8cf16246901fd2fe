use crate::core::library::BookCategory;

pub mod model;

// Book is the base contract every catalog item satisfies, whatever its category.
pub trait Book {
    fn name(&self) -> &str;
    fn author(&self) -> &str;
    fn year(&self) -> i32;
    fn price(&self) -> f64;
    fn category(&self) -> BookCategory;

    // fixed label of the category, only defined for fiction and non-fiction books
    fn book_type(&self) -> Option<&'static str> {
        self.category().label()
    }
}
