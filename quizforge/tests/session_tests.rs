mod common;

use common::build_pptx;
use pretty_assertions::assert_eq;

use quizforge::config::UploadConfig;
use quizforge::error::QuizforgeError;
use quizforge::models::RawUpload;
use quizforge::session::{aggregate, UploadSession, TRUNCATION_MARKER};

fn upload_limits() -> UploadConfig {
    UploadConfig {
        max_files: 10,
        max_file_size: 25 * 1024 * 1024,
        corpus_char_limit: 60_000,
    }
}

fn txt(name: &str, content: &str) -> RawUpload {
    RawUpload::new(name, content.as_bytes().to_vec())
}

#[test]
fn test_corpus_length_never_exceeds_cap() {
    let mut session = UploadSession::new(&UploadConfig {
        max_files: 10,
        max_file_size: 25 * 1024 * 1024,
        corpus_char_limit: 200,
    });

    session
        .ingest(vec![txt("long.txt", &"word ".repeat(200))])
        .unwrap();

    let corpus = session.corpus();
    assert_eq!(corpus.chars().count(), 200);
    assert!(corpus.ends_with(TRUNCATION_MARKER));
}

#[test]
fn test_corpus_under_cap_is_verbatim_and_unmarked() {
    let mut session = UploadSession::new(&upload_limits());
    session
        .ingest(vec![
            txt("a.txt", "alpha content"),
            txt("b.txt", "beta content"),
            txt("c.txt", "gamma content"),
        ])
        .unwrap();

    let corpus = session.corpus();
    assert!(corpus.contains("--- [File: a.txt] ---"));
    assert!(corpus.contains("alpha content"));
    assert!(corpus.contains("beta content"));
    assert!(corpus.contains("gamma content"));
    assert!(!corpus.contains(TRUNCATION_MARKER));

    let pa = corpus.find("alpha content").unwrap();
    let pb = corpus.find("beta content").unwrap();
    let pc = corpus.find("gamma content").unwrap();
    assert!(pa < pb && pb < pc, "files must appear in input order");
}

#[test]
fn test_truncation_cuts_the_tail_after_full_concatenation() {
    let files_short_then_long = vec![
        txt("head.txt", "short head"),
        txt("tail.txt", &"z".repeat(10_000)),
    ];
    let mut session = UploadSession::new(&UploadConfig {
        max_files: 10,
        max_file_size: 25 * 1024 * 1024,
        corpus_char_limit: 500,
    });
    session.ingest(files_short_then_long).unwrap();

    let corpus = session.corpus();
    // Head survives intact; only the tail is cut
    assert!(corpus.contains("short head"));
    assert!(corpus.ends_with(TRUNCATION_MARKER));
}

#[test]
fn test_eleven_files_rejected_and_set_unchanged() {
    let mut session = UploadSession::new(&upload_limits());
    session.ingest(vec![txt("keep.txt", "kept")]).unwrap();

    let batch: Vec<RawUpload> = (0..11).map(|i| txt(&format!("f{i}.txt"), "x")).collect();
    let err = session.ingest(batch).unwrap_err();

    assert!(matches!(err, QuizforgeError::BatchTooLarge { .. }));
    assert_eq!(session.files().len(), 1);
    assert_eq!(session.files()[0].name, "keep.txt");
}

#[test]
fn test_remove_reaggregates_without_removed_content() {
    let mut session = UploadSession::new(&upload_limits());
    session
        .ingest(vec![
            txt("a.txt", "alpha"),
            txt("b.txt", "bravo"),
            txt("c.txt", "charlie"),
            txt("d.txt", "delta"),
        ])
        .unwrap();

    session.remove(2).unwrap();

    let corpus = session.corpus();
    assert!(!corpus.contains("charlie"));
    assert!(!corpus.contains("--- [File: c.txt] ---"));

    let names: Vec<&str> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "d.txt"]);

    let pa = corpus.find("alpha").unwrap();
    let pb = corpus.find("bravo").unwrap();
    let pd = corpus.find("delta").unwrap();
    assert!(pa < pb && pb < pd);
}

#[test]
fn test_mixed_batch_end_to_end() {
    // One valid two-slide deck, one corrupted spreadsheet, one text file —
    // the classic partially-failing batch.
    let deck = build_pptx(&["Mitochondria are organelles", "They produce ATP"]);
    let corrupt_spreadsheet = vec![0x13, 0x37, 0x00, 0xFF];

    let mut session = UploadSession::new(&upload_limits());
    session
        .ingest(vec![
            RawUpload::new("biology.pptx", deck),
            RawUpload::new("scores.xlsx", corrupt_spreadsheet),
            txt("summary.txt", "Cells need energy."),
        ])
        .unwrap();

    // Every input occupies a slot, in order
    assert_eq!(session.files().len(), 3);
    assert!(!session.files()[0].placeholder);
    assert!(session.files()[1].placeholder);
    assert!(session.files()[1].content.contains("scores.xlsx"));
    assert!(!session.files()[2].placeholder);

    let corpus = session.corpus();
    let slide1 = corpus.find("[Slide 1]").expect("first slide label");
    let slide2 = corpus.find("[Slide 2]").expect("second slide label");
    let placeholder = corpus.find("scores.xlsx").expect("spreadsheet placeholder");
    let plain = corpus.find("Cells need energy.").expect("text content");

    assert!(slide1 < slide2);
    assert!(slide2 < placeholder);
    assert!(placeholder < plain);
}

#[test]
fn test_aggregate_of_empty_set_is_empty() {
    assert_eq!(aggregate(&[], 60_000), "");
}

#[test]
fn test_delimiter_line_contains_file_name() {
    let mut session = UploadSession::new(&upload_limits());
    session
        .ingest(vec![txt("복습노트.txt", "한국어 내용")])
        .unwrap();

    let corpus = session.corpus();
    assert!(corpus.contains("--- [File: 복습노트.txt] ---"));
    assert!(corpus.contains("한국어 내용"));
}
