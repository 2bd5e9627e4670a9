#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Build an in-memory ZIP package from (part name, content) pairs.
pub fn build_package(parts: &[(&str, String)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for (name, content) in parts {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }

        zip.finish().unwrap();
    }
    buffer.into_inner()
}

pub fn slide_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld><p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
<p:sp><p:nvSpPr><p:cNvPr id="2" name="Content"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>
</p:spTree></p:cSld>
</p:sld>"#
    )
}

pub fn section_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<hs:sec xmlns:hp="http://www.hancom.co.kr/hwpml/2011/paragraph" xmlns:hs="http://www.hancom.co.kr/hwpml/2011/section">
<hp:p><hp:run><hp:t>{text}</hp:t></hp:run></hp:p>
</hs:sec>"#
    )
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
</Types>"#;

/// A slide deck whose slide parts carry the given (number, text) pairs.
pub fn build_pptx_with_numbers(slides: &[(u32, &str)]) -> Vec<u8> {
    let mut parts: Vec<(String, String)> = vec![
        ("[Content_Types].xml".to_string(), CONTENT_TYPES_XML.to_string()),
    ];
    for (number, text) in slides {
        parts.push((format!("ppt/slides/slide{number}.xml"), slide_xml(text)));
    }
    let borrowed: Vec<(&str, String)> = parts
        .iter()
        .map(|(name, content)| (name.as_str(), content.clone()))
        .collect();
    build_package(&borrowed)
}

/// A slide deck with slides numbered 1..=N in input order.
pub fn build_pptx(slide_texts: &[&str]) -> Vec<u8> {
    let numbered: Vec<(u32, &str)> = slide_texts
        .iter()
        .enumerate()
        .map(|(i, text)| (i as u32 + 1, *text))
        .collect();
    build_pptx_with_numbers(&numbered)
}

/// A word-processor container with sections numbered 0..N in input order.
pub fn build_hwpx(section_texts: &[&str]) -> Vec<u8> {
    let mut parts: Vec<(String, String)> = Vec::new();
    for (i, text) in section_texts.iter().enumerate() {
        parts.push((format!("Contents/section{i}.xml"), section_xml(text)));
    }
    let borrowed: Vec<(&str, String)> = parts
        .iter()
        .map(|(name, content)| (name.as_str(), content.clone()))
        .collect();
    build_package(&borrowed)
}
