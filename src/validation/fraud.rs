use crate::models::{CheckStatus, DobCheck, DocumentDetails, KycReport, NameCheck, ReportStatus};
use crate::validation::{DobValidator, NameMatcher};

pub const DEFAULT_NAME_THRESHOLD: u8 = 80;

const CONSISTENT_MESSAGE: &str = "Details are consistent.";
const FAILED_MESSAGE: &str = "Fraud check FAILED. Mismatched details found.";

/// Cross-checks the details of two documents belonging to the same person.
#[derive(Debug, Clone)]
pub struct FraudChecker {
    name_threshold: u8,
}

impl FraudChecker {
    pub fn new(name_threshold: u8) -> Self {
        FraudChecker { name_threshold }
    }

    pub fn check(&self, doc1: &DocumentDetails, doc2: &DocumentDetails) -> KycReport {
        let mut issues = Vec::new();

        let name_check = self.check_name(doc1, doc2, &mut issues);
        let dob_check = Self::check_dob(doc1, doc2, &mut issues);

        let (status, message) = if issues.is_empty() {
            (ReportStatus::Passed, CONSISTENT_MESSAGE)
        } else {
            (ReportStatus::Failed, FAILED_MESSAGE)
        };

        log::info!(
            "Fraud check {:?}: name {:?} ({}%), dob {:?}",
            status,
            name_check.status,
            name_check.similarity,
            dob_check.status
        );

        KycReport {
            status,
            message: message.to_string(),
            issues,
            name_check,
            dob_check,
            extracted_data: None,
            debug_raw_text: None,
        }
    }

    fn check_name(
        &self,
        doc1: &DocumentDetails,
        doc2: &DocumentDetails,
        issues: &mut Vec<String>,
    ) -> NameCheck {
        let mut check = NameCheck {
            status: CheckStatus::NotChecked,
            doc1: doc1.name.clone(),
            doc2: doc2.name.clone(),
            similarity: 0,
        };

        match (&doc1.name, &doc2.name) {
            (Some(name1), Some(name2)) if !name1.is_empty() && !name2.is_empty() => {
                let similarity = NameMatcher::token_sort_ratio(name1, name2);
                check.similarity = similarity;
                if similarity < self.name_threshold {
                    issues.push(format!("Name mismatch (Similarity: {}%)", similarity));
                    check.status = CheckStatus::Mismatch;
                } else {
                    check.status = CheckStatus::Match;
                }
            }
            _ => check.status = CheckStatus::MissingData,
        }

        check
    }

    fn check_dob(
        doc1: &DocumentDetails,
        doc2: &DocumentDetails,
        issues: &mut Vec<String>,
    ) -> DobCheck {
        let status = match (&doc1.dob, &doc2.dob) {
            (Some(dob1), Some(dob2)) if !dob1.is_empty() && !dob2.is_empty() => {
                if DobValidator::same_date(dob1, dob2) {
                    CheckStatus::Match
                } else {
                    issues.push("DOB mismatch".to_string());
                    CheckStatus::Mismatch
                }
            }
            _ => CheckStatus::MissingData,
        };

        DobCheck {
            status,
            doc1: doc1.dob.clone(),
            doc2: doc2.dob.clone(),
        }
    }
}

impl Default for FraudChecker {
    fn default() -> Self {
        FraudChecker::new(DEFAULT_NAME_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: Option<&str>, dob: Option<&str>) -> DocumentDetails {
        DocumentDetails {
            name: name.map(str::to_string),
            dob: dob.map(str::to_string),
            ..DocumentDetails::default()
        }
    }

    #[test]
    fn test_consistent_documents_pass() {
        let report = FraudChecker::default().check(
            &details(Some("RAHUL KUMAR"), Some("15/08/1990")),
            &details(Some("Rahul Kumar"), Some("15-08-1990")),
        );

        assert!(report.is_passed());
        assert_eq!(report.message, "Details are consistent.");
        assert!(report.issues.is_empty());
        assert_eq!(report.name_check.status, CheckStatus::Match);
        assert_eq!(report.name_check.similarity, 100);
        assert_eq!(report.dob_check.status, CheckStatus::Match);
    }

    #[test]
    fn test_name_and_dob_mismatch_fail() {
        let report = FraudChecker::default().check(
            &details(Some("Rahul Kumar"), Some("15/08/1990")),
            &details(Some("Priya Sharma"), Some("16/08/1990")),
        );

        assert_eq!(report.status, ReportStatus::Failed);
        assert_eq!(report.message, "Fraud check FAILED. Mismatched details found.");
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues[0].starts_with("Name mismatch (Similarity: "));
        assert_eq!(report.issues[1], "DOB mismatch");
        assert_eq!(report.name_check.status, CheckStatus::Mismatch);
        assert_eq!(report.dob_check.status, CheckStatus::Mismatch);
    }

    #[test]
    fn test_missing_data_is_not_an_issue() {
        let report = FraudChecker::default().check(
            &details(None, Some("15/08/1990")),
            &details(Some("Rahul Kumar"), None),
        );

        assert!(report.is_passed());
        assert_eq!(report.name_check.status, CheckStatus::MissingData);
        assert_eq!(report.name_check.similarity, 0);
        assert_eq!(report.dob_check.status, CheckStatus::MissingData);
        assert_eq!(report.dob_check.doc1.as_deref(), Some("15/08/1990"));
    }

    #[test]
    fn test_threshold_is_configurable() {
        let doc1 = details(Some("Rahul Kumar"), None);
        let doc2 = details(Some("Rahul Kumaar"), None);

        assert!(FraudChecker::new(96).check(&doc1, &doc2).is_passed());
        assert!(!FraudChecker::new(97).check(&doc1, &doc2).is_passed());
    }

    #[test]
    fn test_report_serializes_in_endpoint_shape() {
        let report = FraudChecker::default().check(
            &details(Some("Rahul Kumar"), None),
            &details(Some("Rahul Kumar"), None),
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "PASSED");
        assert_eq!(json["name_check"]["status"], "MATCH");
        assert_eq!(json["dob_check"]["status"], "MISSING_DATA");
        assert_eq!(json["dob_check"]["doc1"], serde_json::Value::Null);
        assert!(json.get("extracted_data").is_none());
    }
}
