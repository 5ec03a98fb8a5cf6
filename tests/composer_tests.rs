//! End-to-end tests: compose the CV into a temp directory, then re-open the
//! result with the oxidize-pdf parser and check its structure.

use cv_composer::{Composer, Style};
use oxidize_pdf::parser::{PdfDocument, PdfReader};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal baseline JPEG (16x16, RGB) that satisfies the SOF scan the PDF
/// library performs when embedding. Tests never need a real photograph.
fn test_jpeg() -> Vec<u8> {
    vec![
        // SOI
        0xFF, 0xD8, // SOF0, 16x16, 3 components
        0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x10, 0x00, 0x10, 0x03, 0x01, 0x11, 0x00, 0x02, 0x11,
        0x01, 0x03, 0x11, 0x01, // DHT
        0xFF, 0xC4, 0x00, 0x14, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // SOS + minimal scan data
        0xFF, 0xDA, 0x00, 0x0C, 0x03, 0x01, 0x00, 0x02, 0x11, 0x03, 0x11, 0x00, 0x3F, 0x00, 0x00,
        0x00, 0x00, 0x00, // EOI
        0xFF, 0xD9,
    ]
}

fn write_test_photo(dir: &Path) -> PathBuf {
    let path = dir.join("photo.jpg");
    fs::write(&path, test_jpeg()).unwrap();
    path
}

fn compose_cv(dir: &Path) -> PathBuf {
    let photo = write_test_photo(dir);
    let output = dir.join("cv.pdf");
    Composer::new(Style::default())
        .compose(&photo, &output)
        .expect("composing with a valid photo should succeed");
    output
}

/// First ASCII digit following the "VITAE" marker of the footer page line.
fn footer_page_digit(text: &str) -> Option<char> {
    let tail = &text[text.find("VITAE")? + "VITAE".len()..];
    tail.chars().find(|c| c.is_ascii_digit())
}

#[test]
fn composes_a_two_page_pdf() {
    let dir = TempDir::new().unwrap();
    let output = compose_cv(dir.path());

    assert!(output.exists());
    let bytes = fs::read(&output).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));

    let reader = PdfReader::open(&output).unwrap();
    let document = PdfDocument::new(reader);
    assert_eq!(document.page_count().unwrap(), 2);
}

#[test]
fn missing_photo_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cv.pdf");

    let result = Composer::new(Style::default())
        .compose(&dir.path().join("no-such-photo.jpg"), &output);

    assert!(result.is_err());
    assert!(!output.exists(), "no output file may exist after a failed run");
}

#[test]
fn pages_carry_the_expected_sections() {
    let dir = TempDir::new().unwrap();
    let output = compose_cv(dir.path());

    let reader = PdfReader::open(&output).unwrap();
    let document = PdfDocument::new(reader);
    let pages = document.extract_text().unwrap();
    assert_eq!(pages.len(), 2);

    // Employment and education live on page 1, certifications and languages
    // on page 2.
    assert!(pages[0].text.contains("FOORBAN"));
    assert!(pages[0].text.contains("Milano-Bicocca"));
    assert!(pages[1].text.contains("SAS CERTIFIED"));
    assert!(pages[1].text.contains("MOTHER TONGUE"));
}

#[test]
fn footer_numbers_pages_one_and_two() {
    let dir = TempDir::new().unwrap();
    let output = compose_cv(dir.path());

    let reader = PdfReader::open(&output).unwrap();
    let document = PdfDocument::new(reader);
    let pages = document.extract_text().unwrap();

    assert_eq!(footer_page_digit(&pages[0].text), Some('1'));
    assert_eq!(footer_page_digit(&pages[1].text), Some('2'));
}

#[test]
fn repeated_runs_produce_identical_content() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let first = compose_cv(dir_a.path());
    let second = compose_cv(dir_b.path());

    let doc_a = PdfDocument::new(PdfReader::open(&first).unwrap());
    let doc_b = PdfDocument::new(PdfReader::open(&second).unwrap());
    assert_eq!(doc_a.page_count().unwrap(), doc_b.page_count().unwrap());

    // Byte identity is only guaranteed modulo embedded timestamps, so the
    // comparison happens on the parsed text instead.
    let text_a: Vec<String> = doc_a
        .extract_text()
        .unwrap()
        .into_iter()
        .map(|p| p.text)
        .collect();
    let text_b: Vec<String> = doc_b
        .extract_text()
        .unwrap()
        .into_iter()
        .map(|p| p.text)
        .collect();
    assert_eq!(text_a, text_b);
}
