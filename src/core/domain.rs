use serde::{Deserialize, Serialize};

// Configuration abstracts config options for the book catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub catalog_name: String,
    pub strict_validation: bool,
    pub reject_future_years: bool,
}

impl Configuration {
    pub fn new(catalog_name: &str) -> Self {
        Configuration {
            catalog_name: catalog_name.to_string(),
            strict_validation: false,
            reject_future_years: false,
        }
    }

    pub fn strict(catalog_name: &str) -> Self {
        Configuration {
            catalog_name: catalog_name.to_string(),
            strict_validation: true,
            reject_future_years: true,
        }
    }
}
