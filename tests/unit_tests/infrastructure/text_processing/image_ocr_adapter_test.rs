use std::io::Write;
use std::time::Duration;

use dropout_catcher::application::ports::{FileLoader, FileLoaderError};
use dropout_catcher::domain::{Document, FileFormat};
use dropout_catcher::infrastructure::text_processing::ImageOcrAdapter;

fn blank_png() -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    image::GrayImage::from_pixel(64, 32, image::Luma([255u8]))
        .save(file.path())
        .unwrap();
    file
}

fn document() -> Document {
    Document::new("scan.png".to_string(), FileFormat::Image, 0)
}

#[tokio::test]
async fn given_undecodable_image_when_extracting_then_returns_extraction_failed() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"definitely not a png").unwrap();

    let result = ImageOcrAdapter::default()
        .extract_text(file.path(), &document())
        .await;

    match result {
        Err(FileLoaderError::ExtractionFailed(msg)) => assert!(msg.contains("decode")),
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_ocr_binary_when_extracting_then_returns_extraction_failed() {
    let file = blank_png();
    let adapter = ImageOcrAdapter::new(
        "dropout-catcher-no-such-ocr-binary",
        "eng",
        Duration::from_secs(5),
    );

    let result = adapter.extract_text(file.path(), &document()).await;

    match result {
        Err(FileLoaderError::ExtractionFailed(msg)) => {
            assert!(msg.contains("dropout-catcher-no-such-ocr-binary"))
        }
        other => panic!("expected spawn failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_image_format_when_extracting_then_returns_unsupported() {
    let file = blank_png();
    let document = Document::new("scan.txt".to_string(), FileFormat::PlainText, 0);

    let result = ImageOcrAdapter::default()
        .extract_text(file.path(), &document)
        .await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}

#[tokio::test]
#[ignore = "requires the tesseract binary on PATH"]
async fn given_blank_image_and_tesseract_when_extracting_then_returns_trimmed_text() {
    let file = blank_png();

    let text = ImageOcrAdapter::default()
        .extract_text(file.path(), &document())
        .await
        .unwrap();

    assert_eq!(text, text.trim());
}
