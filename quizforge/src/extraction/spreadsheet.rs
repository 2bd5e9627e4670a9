//! Spreadsheet extractor: calamine for workbook containers, the csv crate
//! for bare CSV files. Both render to the same CSV-like text per sheet.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use super::ExtractError;

pub struct SpreadsheetExtractor;

impl SpreadsheetExtractor {
    /// `is_csv` routes bare `.csv` uploads past the workbook decoder,
    /// which only understands container formats.
    pub fn extract(bytes: &[u8], is_csv: bool) -> Result<String, ExtractError> {
        if is_csv {
            Self::extract_csv(bytes)
        } else {
            Self::extract_workbook(bytes)
        }
    }

    fn extract_workbook(bytes: &[u8]) -> Result<String, ExtractError> {
        let cursor = Cursor::new(bytes);
        let mut workbook = open_workbook_auto_from_rs(cursor)
            .map_err(|e| ExtractError::Decode(format!("workbook parse error: {e}")))?;

        let mut text = String::new();
        for (name, range) in workbook.worksheets() {
            text.push_str(&format!("[Sheet: {name}]\n"));

            for row in range.rows() {
                let cells: Vec<String> = row.iter().map(Self::format_cell_value).collect();
                text.push_str(&cells.join(","));
                text.push('\n');
            }
        }

        Ok(text)
    }

    fn extract_csv(bytes: &[u8]) -> Result<String, ExtractError> {
        let bytes = strip_bom(bytes);
        let delimiter = detect_delimiter(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        // Single logical sheet, named like workbook decoders name the
        // first sheet of a bare CSV.
        let mut text = String::from("[Sheet: Sheet1]\n");
        for result in reader.records() {
            let record =
                result.map_err(|e| ExtractError::Decode(format!("CSV parse error: {e}")))?;
            let cells: Vec<String> = record.iter().map(String::from).collect();
            text.push_str(&cells.join(","));
            text.push('\n');
        }

        Ok(text)
    }

    fn format_cell_value(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Trim trailing zeros so 2.50 prints as 2.5
                let s = format!("{f}");
                if s.contains('.') {
                    s.trim_end_matches('0').trim_end_matches('.').to_string()
                } else {
                    s
                }
            }
            Data::Bool(b) => b.to_string(),
            Data::DateTime(dt) => dt.to_string(),
            Data::DateTimeIso(dt) => dt.to_string(),
            Data::DurationIso(d) => d.to_string(),
            Data::Empty => String::new(),
            _ => String::new(),
        }
    }
}

/// Strip UTF-8 BOM if present
fn strip_bom(bytes: &[u8]) -> &[u8] {
    if bytes.len() >= 3 && bytes[0..3] == [0xEF, 0xBB, 0xBF] {
        &bytes[3..]
    } else {
        bytes
    }
}

/// Pick the delimiter that yields the most consistent multi-column rows
/// over the first few records.
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let candidates = [b',', b';', b'\t'];
    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delimiter in &candidates {
        let score = evaluate_delimiter(bytes, delimiter);
        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}

fn evaluate_delimiter(bytes: &[u8], delimiter: u8) -> usize {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut column_counts: Vec<usize> = Vec::new();
    for (i, result) in reader.records().enumerate() {
        if i >= 5 {
            break;
        }
        if let Ok(record) = result {
            column_counts.push(record.len());
        }
    }

    let Some(&first_count) = column_counts.first() else {
        return 0;
    };

    let consistent = column_counts.iter().all(|&c| c == first_count);
    let has_multiple_columns = first_count > 1;

    if consistent && has_multiple_columns {
        first_count * 10
    } else if has_multiple_columns {
        first_count
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell_value() {
        assert_eq!(
            SpreadsheetExtractor::format_cell_value(&Data::String("hello".to_string())),
            "hello"
        );
        assert_eq!(SpreadsheetExtractor::format_cell_value(&Data::Int(42)), "42");
        assert_eq!(
            SpreadsheetExtractor::format_cell_value(&Data::Float(2.5)),
            "2.5"
        );
        assert_eq!(
            SpreadsheetExtractor::format_cell_value(&Data::Bool(true)),
            "true"
        );
        assert_eq!(SpreadsheetExtractor::format_cell_value(&Data::Empty), "");
    }

    #[test]
    fn test_csv_extraction() {
        let csv = b"Name,Score\nAlice,90\nBob,85\n";
        let text = SpreadsheetExtractor::extract(csv, true).unwrap();
        assert!(text.starts_with("[Sheet: Sheet1]\n"));
        assert!(text.contains("Name,Score"));
        assert!(text.contains("Alice,90"));
        assert!(text.contains("Bob,85"));
    }

    #[test]
    fn test_csv_semicolon_delimiter_normalized() {
        let csv = b"Name;Score\nAlice;90\n";
        let text = SpreadsheetExtractor::extract(csv, true).unwrap();
        assert!(text.contains("Name,Score"));
        assert!(text.contains("Alice,90"));
    }

    #[test]
    fn test_csv_bom_stripped() {
        let csv = b"\xEF\xBB\xBFName,Score\nAlice,90\n";
        let text = SpreadsheetExtractor::extract(csv, true).unwrap();
        assert!(text.contains("Name,Score"));
        assert!(!text.contains('\u{FEFF}'));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter(b"a,b,c\n1,2,3"), b',');
        assert_eq!(detect_delimiter(b"a;b;c\n1;2;3"), b';');
        assert_eq!(detect_delimiter(b"a\tb\tc\n1\t2\t3"), b'\t');
    }

    #[test]
    fn test_garbage_workbook_is_decode_error() {
        let garbage = [0x00, 0x01, 0x02, 0x03];
        assert!(matches!(
            SpreadsheetExtractor::extract(&garbage, false),
            Err(ExtractError::Decode(_))
        ));
    }
}
