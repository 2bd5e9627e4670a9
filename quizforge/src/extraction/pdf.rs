//! Paginated-document (PDF) extractor built on pdf-extract.

use super::ExtractError;

pub struct PdfExtractor;

impl PdfExtractor {
    pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::Decode(format!("PDF decode error: {e}")))?;

        let mut text = String::new();
        for (index, page) in pages.iter().enumerate() {
            let page_number = index + 1;
            // The decoder emits layout line breaks; collapse to the
            // space-joined reading order the corpus wants.
            let page_text = page.split_whitespace().collect::<Vec<_>>().join(" ");
            text.push_str(&format!("[Page {page_number}] {page_text}\n"));
        }

        Ok(text)
    }
}
