mod analyze;
mod root;

pub use analyze::{ErrorResponse, analyze_handler};
pub use root::{ServiceInfoResponse, root_handler};
