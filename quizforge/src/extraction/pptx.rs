//! Slide-deck (PPTX) extractor using zip + quick-xml

use super::archive::Package;
use super::xml::collect_tag_text;
use super::ExtractError;

pub struct PptxExtractor;

impl PptxExtractor {
    const SLIDE_PREFIX: &'static str = "ppt/slides/slide";
    const SLIDE_SUFFIX: &'static str = ".xml";
    /// Text runs live in the drawing namespace, not the presentation one.
    const TEXT_RUN_TAG: &'static str = "a:t";

    pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
        let mut pkg = Package::open(bytes)?;

        // Slide parts carry their position in the file name. Sort on that
        // number: lexical order would put slide10 before slide2.
        let mut slides: Vec<(u32, String)> = pkg
            .part_names()
            .into_iter()
            .filter_map(|name| Self::slide_number(&name).map(|n| (n, name)))
            .collect();
        slides.sort_by_key(|(number, _)| *number);

        let mut text = String::new();
        for (number, part) in slides {
            let xml = pkg.read_part_text(&part)?;
            let runs = collect_tag_text(&xml, Self::TEXT_RUN_TAG)?;
            let slide_text = runs.join(" ");

            // Slides that hold only whitespace contribute nothing, not an
            // empty label.
            if !slide_text.trim().is_empty() {
                text.push_str(&format!("[Slide {number}] {slide_text}\n"));
            }
        }

        Ok(text)
    }

    fn slide_number(part_name: &str) -> Option<u32> {
        part_name
            .strip_prefix(Self::SLIDE_PREFIX)?
            .strip_suffix(Self::SLIDE_SUFFIX)?
            .parse()
            .ok()
    }
}
