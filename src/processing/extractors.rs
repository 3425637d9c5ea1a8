// Field extraction for Indian identity documents (PAN card, Aadhaar card).
// Works on raw OCR / PDF text, so every rule tolerates noisy line breaks.
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use crate::models::DocumentDetails;

lazy_static! {
    static ref PAN_PATTERN: Regex = Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").unwrap();
    static ref AADHAR_PATTERN: Regex = Regex::new(r"[2-9][0-9]{3}\s[0-9]{4}\s[0-9]{4}").unwrap();
    static ref DATE_PATTERN: Regex = Regex::new(r"(\d{2}/\d{2}/\d{4}|\d{2}-\d{2}-\d{4})").unwrap();
    static ref DOB_LABEL_PATTERN: Regex =
        Regex::new(r"(?i)\b(dob|d\.o\.b|date of birth|birth)\b").unwrap();
}

// Words printed as labels or headings on the cards; a line made of these is
// never a holder's name.
const LABEL_WORDS: &[&str] = &[
    "ACCOUNT", "AADHAAR", "AADHAR", "BIRTH", "CARD", "DATE", "DEPARTMENT", "DOB",
    "FATHER", "FATHER'S", "FEMALE", "GOVERNMENT", "GOVT", "INCOME", "INDIA", "MALE",
    "NAME", "NUMBER", "OF", "PERMANENT", "SIGNATURE", "TAX", "UNIQUE", "YEAR",
];

pub struct DetailExtractor;

impl DetailExtractor {
    pub fn extract(text: &str) -> DocumentDetails {
        if text.is_empty() {
            return DocumentDetails::default();
        }

        DocumentDetails {
            pan_number: Self::extract_pan(text),
            aadhar_number: Self::extract_aadhar(text),
            name: Self::extract_name(text),
            dob: Self::extract_dob(text),
        }
    }

    pub fn extract_pan(text: &str) -> Option<String> {
        PAN_PATTERN.find(text).map(|m| m.as_str().to_string())
    }

    pub fn extract_aadhar(text: &str) -> Option<String> {
        AADHAR_PATTERN.find(text).map(|m| m.as_str().to_string())
    }

    /// A date on a birth-date line wins over any other date in the text.
    pub fn extract_dob(text: &str) -> Option<String> {
        let labelled = text
            .lines()
            .filter(|line| DOB_LABEL_PATTERN.is_match(line))
            .find_map(Self::first_valid_date);

        labelled.or_else(|| Self::first_valid_date(text))
    }

    pub fn extract_name(text: &str) -> Option<String> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Self::name_from_labels(&lines)
            .or_else(|| {
                lines
                    .iter()
                    .find(|line| Self::is_person_like(line))
                    .map(|line| line.to_string())
            })
            .map(|name| name.replace('\n', " "))
    }

    // PAN cards print the name under a "Name" label; Aadhaar cards print it
    // right above the DOB line.
    fn name_from_labels(lines: &[&str]) -> Option<String> {
        for (i, line) in lines.iter().enumerate() {
            if (line.contains("Name") || line.contains("NAME")) && i + 1 < lines.len() {
                return Some(lines[i + 1].to_string());
            }

            if (line.contains("DOB") || line.contains("fafa")) && i >= 1 {
                let prev_line = lines[i - 1];
                let words = prev_line.split_whitespace().count();
                if 1 < words && words < 4 && !prev_line.chars().any(|c| c.is_ascii_digit()) {
                    return Some(prev_line.to_string());
                }
            }
        }
        None
    }

    fn is_person_like(line: &str) -> bool {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() < 2 || words.len() > 4 {
            return false;
        }

        words.iter().all(|word| {
            let starts_upper = word.chars().next().map_or(false, char::is_uppercase);
            let alphabetic = word.chars().all(|c| c.is_alphabetic() || c == '.');
            starts_upper && alphabetic && !LABEL_WORDS.contains(&word.to_uppercase().as_str())
        })
    }

    fn first_valid_date(text: &str) -> Option<String> {
        DATE_PATTERN
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|date| Self::is_calendar_date(date))
            .map(str::to_string)
    }

    fn is_calendar_date(date: &str) -> bool {
        let normalized = date.replace('-', "/");
        NaiveDate::parse_from_str(&normalized, "%d/%m/%Y").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAN_TEXT: &str = "INCOME TAX DEPARTMENT\nGOVT. OF INDIA\nPermanent Account Number Card\nABCDE1234F\nName\nRAHUL KUMAR\nFather's Name\nSURESH KUMAR\nDate of Birth\n15/08/1990\n";

    const AADHAR_TEXT: &str = "Government of India\nRahul Kumar\nDOB: 15-08-1990\nMale\n2345 6789 0123\n";

    #[test]
    fn test_pan_card_details() {
        let details = DetailExtractor::extract(PAN_TEXT);
        assert_eq!(details.pan_number.as_deref(), Some("ABCDE1234F"));
        assert_eq!(details.aadhar_number, None);
        assert_eq!(details.name.as_deref(), Some("RAHUL KUMAR"));
        assert_eq!(details.dob.as_deref(), Some("15/08/1990"));
    }

    #[test]
    fn test_aadhar_card_details() {
        let details = DetailExtractor::extract(AADHAR_TEXT);
        assert_eq!(details.pan_number, None);
        assert_eq!(details.aadhar_number.as_deref(), Some("2345 6789 0123"));
        assert_eq!(details.name.as_deref(), Some("Rahul Kumar"));
        assert_eq!(details.dob.as_deref(), Some("15-08-1990"));
    }

    #[test]
    fn test_aadhar_number_cannot_start_with_zero_or_one() {
        assert_eq!(DetailExtractor::extract_aadhar("1234 5678 9012"), None);
        assert_eq!(DetailExtractor::extract_aadhar("0234 5678 9012"), None);
    }

    #[test]
    fn test_dob_prefers_birth_line() {
        let text = "Issue Date: 01/01/2020\nDOB: 02/03/1985\n";
        assert_eq!(DetailExtractor::extract_dob(text).as_deref(), Some("02/03/1985"));
    }

    #[test]
    fn test_dob_skips_impossible_dates() {
        let text = "Ref 45/13/2020\nissued 10-10-2010";
        assert_eq!(DetailExtractor::extract_dob(text).as_deref(), Some("10-10-2010"));
    }

    #[test]
    fn test_name_line_before_dob_needs_plausible_shape() {
        let text = "Government of India\nVID 1234\nDOB: 15-08-1990";
        // "VID 1234" holds digits, so no labelled match; heading words are skipped too.
        assert_eq!(DetailExtractor::extract_name(text), None);
    }

    #[test]
    fn test_person_like_fallback() {
        let text = "GOVERNMENT OF INDIA\nPriya Sharma\nFemale\n";
        assert_eq!(DetailExtractor::extract_name(text).as_deref(), Some("Priya Sharma"));
    }

    #[test]
    fn test_empty_text_gives_empty_details() {
        assert_eq!(DetailExtractor::extract(""), DocumentDetails::default());
    }
}
