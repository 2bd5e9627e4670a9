//! ZIP package access shared by the slide-deck and word-container extractors.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use super::ExtractError;

/// A named-part package (an OOXML/OWPML-style ZIP container) opened from
/// an in-memory byte buffer. Extra unrecognized parts are simply ignored
/// by callers; only the parts they ask for are read.
pub struct Package<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> Package<'a> {
    /// Open `bytes` as a package. Bytes that are not a readable ZIP
    /// archive fail with [`ExtractError::Corrupt`].
    pub fn open(bytes: &'a [u8]) -> Result<Self, ExtractError> {
        let archive = ZipArchive::new(Cursor::new(bytes)).map_err(map_zip_error)?;
        Ok(Self { archive })
    }

    /// Names of all parts in the package.
    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    /// Read one part as raw bytes.
    ///
    /// A missing part is [`ExtractError::PartMissing`]; an encrypted part
    /// surfaces as [`ExtractError::Protected`], which is how password
    /// protection is detected at all (the central directory itself stays
    /// readable in protected packages).
    pub fn read_part(&mut self, name: &str) -> Result<Vec<u8>, ExtractError> {
        let mut part = self.archive.by_name(name).map_err(map_zip_error)?;

        let mut content = Vec::new();
        part.read_to_end(&mut content)
            .map_err(|e| ExtractError::Corrupt(format!("failed to read part {name}: {e}")))?;

        Ok(content)
    }

    /// Read one part and decode it as UTF-8 text.
    pub fn read_part_text(&mut self, name: &str) -> Result<String, ExtractError> {
        let bytes = self.read_part(name)?;
        String::from_utf8(bytes)
            .map_err(|e| ExtractError::Corrupt(format!("part {name} is not valid UTF-8: {e}")))
    }
}

fn map_zip_error(error: ZipError) -> ExtractError {
    match error {
        ZipError::FileNotFound => ExtractError::PartMissing,
        other => {
            let message = other.to_string();
            if message.to_lowercase().contains("password") {
                ExtractError::Protected
            } else {
                ExtractError::Corrupt(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn package_with_parts(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buffer);
            let options = SimpleFileOptions::default();
            for (name, content) in parts {
                zip.start_file(*name, options).unwrap();
                zip.write_all(content.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer.into_inner()
    }

    #[test]
    fn test_open_and_read_part() {
        let bytes = package_with_parts(&[("a.xml", "<x/>"), ("b/c.xml", "<y/>")]);
        let mut pkg = Package::open(&bytes).unwrap();

        let mut names = pkg.part_names();
        names.sort();
        assert_eq!(names, vec!["a.xml", "b/c.xml"]);

        assert_eq!(pkg.read_part_text("b/c.xml").unwrap(), "<y/>");
        assert_eq!(pkg.read_part("a.xml").unwrap(), b"<x/>");
    }

    #[test]
    fn test_missing_part() {
        let bytes = package_with_parts(&[("a.xml", "<x/>")]);
        let mut pkg = Package::open(&bytes).unwrap();
        assert!(matches!(
            pkg.read_part_text("nope.xml"),
            Err(ExtractError::PartMissing)
        ));
    }

    #[test]
    fn test_garbage_bytes_are_corrupt() {
        let garbage = [0x00, 0x01, 0x02, 0x03, 0xFF, 0xFE];
        assert!(matches!(
            Package::open(&garbage),
            Err(ExtractError::Corrupt(_))
        ));
    }
}
