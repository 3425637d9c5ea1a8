use crate::models::*;
use crate::processing::*;
use crate::utils::KycError;
use crate::validation::*;

pub struct KycChecker {
    extractor: Box<dyn TextExtractor>,
    fraud_checker: FraudChecker,
}

impl KycChecker {
    pub fn new(extractor: Box<dyn TextExtractor>, fraud_checker: FraudChecker) -> Self {
        KycChecker {
            extractor,
            fraud_checker,
        }
    }

    // Main check that orchestrates the entire process
    pub fn check(
        &self,
        doc1: &UploadedDocument,
        doc2: &UploadedDocument,
    ) -> Result<KycReport, KycError> {
        // Step 1: Read text out of both documents
        let doc1_text = self.read_text(doc1);
        let doc2_text = self.read_text(doc2);

        if doc1_text.trim().is_empty() || doc2_text.trim().is_empty() {
            log::warn!(
                "No text recovered from {} or {}",
                doc1.file_name,
                doc2.file_name
            );
            return Err(KycError::UnreadableDocument);
        }

        // Step 2: Pull identity fields
        let doc1_details = DetailExtractor::extract(&doc1_text);
        let doc2_details = DetailExtractor::extract(&doc2_text);
        log::debug!("doc1 details: {:?}", doc1_details);
        log::debug!("doc2 details: {:?}", doc2_details);

        // Step 3: Compare them
        let mut report = self.fraud_checker.check(&doc1_details, &doc2_details);

        report.extracted_data = Some(PerDocument {
            doc1: doc1_details,
            doc2: doc2_details,
        });
        report.debug_raw_text = Some(PerDocument {
            doc1: doc1_text,
            doc2: doc2_text,
        });

        Ok(report)
    }

    // Extraction failures are reported as "no text" so the caller sees a
    // single unreadable-document outcome.
    fn read_text(&self, document: &UploadedDocument) -> String {
        match self.extractor.extract_text(document) {
            Ok(text) => text,
            Err(err) => {
                log::error!(
                    "Error processing file {} (type: {}): {}",
                    document.file_name,
                    document.content_type,
                    err
                );
                String::new()
            }
        }
    }
}
