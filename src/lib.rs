pub mod core {
    pub mod command;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod books;
pub mod catalog;

pub mod utils {
    pub mod date;
    pub mod logs;
}
