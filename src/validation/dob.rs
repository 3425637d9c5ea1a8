pub struct DobValidator;

impl DobValidator {
    /// `15-08-1990` and `15/08/1990` name the same day.
    pub fn same_date(a: &str, b: &str) -> bool {
        Self::normalize(a) == Self::normalize(b)
    }

    pub fn normalize(date: &str) -> String {
        date.trim().replace('-', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_are_equivalent() {
        assert!(DobValidator::same_date("01-02-1990", "01/02/1990"));
        assert!(DobValidator::same_date("01/02/1990", "01/02/1990"));
    }

    #[test]
    fn test_different_days_do_not_match() {
        assert!(!DobValidator::same_date("01/02/1990", "02/01/1990"));
    }
}
