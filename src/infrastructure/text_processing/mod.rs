mod blocking;
mod composite_file_loader;
mod docx_adapter;
mod image_ocr_adapter;
mod pdf_adapter;
mod plain_text_adapter;

use blocking::run_blocking;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use image_ocr_adapter::ImageOcrAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
