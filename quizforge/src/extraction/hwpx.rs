//! Word-processor container (HWPX) extractor. Same package plumbing as
//! the slide deck, different part layout and XML vocabulary.

use super::archive::Package;
use super::xml::collect_tag_text;
use super::ExtractError;

pub struct HwpxExtractor;

impl HwpxExtractor {
    const SECTION_PREFIX: &'static str = "Contents/section";
    const SECTION_SUFFIX: &'static str = ".xml";
    const TEXT_RUN_TAG: &'static str = "hp:t";

    pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
        let mut pkg = Package::open(bytes)?;

        // Section names (section0.xml, section1.xml, ...) already sort in
        // document order lexically; no numeric reordering needed.
        let mut sections: Vec<String> = pkg
            .part_names()
            .into_iter()
            .filter(|name| {
                name.starts_with(Self::SECTION_PREFIX) && name.ends_with(Self::SECTION_SUFFIX)
            })
            .collect();
        sections.sort();

        let mut text = String::new();
        for section in sections {
            let xml = pkg.read_part_text(&section)?;
            let runs = collect_tag_text(&xml, Self::TEXT_RUN_TAG)?;
            text.push_str(&runs.join(" "));
            text.push('\n');
        }

        Ok(text)
    }
}
