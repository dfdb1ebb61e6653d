use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, FileFormat};

use super::run_blocking;

pub struct DocxAdapter {
    timeout: Duration,
}

impl DocxAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_paragraphs(path: &Path) -> Result<String, FileLoaderError> {
        let data = std::fs::read(path).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read DOCX file: {e}"))
        })?;

        let docx = docx_rs::read_docx(&data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n").trim().to_string())
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

// Hyperlinks nest their own runs.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) | RunChild::CarriageReturn(_) => text.push('\n'),
            _ => {}
        }
    }
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, path), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != FileFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let path: PathBuf = path.to_path_buf();
        let text =
            run_blocking(self.timeout, "DOCX", move || Self::extract_paragraphs(&path)).await?;

        tracing::info!(chars = text.len(), "DOCX text extraction complete");
        Ok(text)
    }
}
