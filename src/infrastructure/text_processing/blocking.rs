use std::time::Duration;

use crate::application::ports::FileLoaderError;

/// Runs a parser on the blocking pool, bounded by `timeout`.
pub(super) async fn run_blocking<T, F>(
    timeout: Duration,
    label: &str,
    f: F,
) -> Result<T, FileLoaderError>
where
    F: FnOnce() -> Result<T, FileLoaderError> + Send + 'static,
    T: Send + 'static,
{
    tokio::time::timeout(timeout, tokio::task::spawn_blocking(f))
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed(format!("{label} extraction timed out")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
}
