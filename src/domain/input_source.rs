/// A file attached to a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// The single input chosen for a request.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    FileUpload { filename: String, bytes: Vec<u8> },
    JsonBody { text: String },
    RawBody { bytes: Vec<u8> },
}

/// Picks the request input by priority: file, then JSON text, then raw body.
pub fn select_input(
    file: Option<UploadedFile>,
    json_text: Option<String>,
    raw_body: Vec<u8>,
) -> InputSource {
    match (file, json_text) {
        (Some(file), _) => InputSource::FileUpload {
            filename: file.filename,
            bytes: file.data,
        },
        (None, Some(text)) => InputSource::JsonBody { text },
        (None, None) => InputSource::RawBody { bytes: raw_body },
    }
}

impl InputSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileUpload { .. } => "file",
            Self::JsonBody { .. } => "json",
            Self::RawBody { .. } => "raw",
        }
    }
}
