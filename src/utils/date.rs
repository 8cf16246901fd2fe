use chrono::{Datelike, Utc};

pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use crate::utils::date::current_year;

    #[test]
    fn test_should_return_current_year() {
        assert!(current_year() >= 2024);
    }
}
