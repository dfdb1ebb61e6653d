mod document;
mod extracted_text;
mod input_source;
mod model_prompt;
mod prediction;

pub use document::{Document, FileFormat};
pub use extracted_text::ExtractedText;
pub use input_source::{InputSource, UploadedFile, select_input};
pub use model_prompt::{ModelPrompt, PromptContent, PromptPart};
pub use prediction::PredictionResult;
