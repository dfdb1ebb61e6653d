use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::AnalysisService;

pub struct AppState<F: ?Sized, L: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
{
    pub analysis_service: Arc<AnalysisService<F, L>>,
    pub max_body_bytes: usize,
}

impl<F: ?Sized, L: ?Sized> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_service: Arc::clone(&self.analysis_service),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
