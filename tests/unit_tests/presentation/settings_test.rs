use dropout_catcher::presentation::{Environment, LlmProvider, Settings};

#[test]
fn given_no_settings_file_when_loading_then_uses_builtin_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.max_body_bytes, 20 * 1024 * 1024);
    assert_eq!(settings.llm.provider, LlmProvider::Gemini);
    assert_eq!(settings.llm.model, "gemini-2.5-flash");
    assert_eq!(settings.llm.timeout_secs, 30);
    assert_eq!(settings.extraction.max_chars, 10_000);
    assert_eq!(settings.extraction.tesseract_command, "tesseract");
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_prod_environment_when_loading_then_json_logging_defaults_on() {
    let settings = Settings::load(Environment::Prod).unwrap();

    assert!(settings.logging.enable_json);
}

#[test]
fn given_no_llm_overrides_when_loading_then_matches_gemini_client_defaults() {
    use dropout_catcher::infrastructure::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.llm.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.llm.model, DEFAULT_MODEL);
    assert_eq!(settings.llm.timeout_secs, DEFAULT_TIMEOUT.as_secs());
}
