use dropout_catcher::infrastructure::observability::redact_for_log;

#[test]
fn given_empty_text_when_redacting_then_returns_empty_marker() {
    assert_eq!(redact_for_log(""), "[EMPTY]");
    assert_eq!(redact_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_redacting_then_returns_trimmed_text() {
    assert_eq!(redact_for_log("  Alice: 60% attendance  "), "Alice: 60% attendance");
}

#[test]
fn given_long_text_when_redacting_then_truncates_with_length() {
    let result = redact_for_log(&"a".repeat(150));

    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_long_multibyte_text_when_redacting_then_cuts_on_char_boundary() {
    let result = redact_for_log(&"ü".repeat(120));

    assert!(result.starts_with(&"ü".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_query_key_when_redacting_then_masks_it() {
    let result = redact_for_log("POST /models/x:generateContent?key=AIzaSecret&alt=json");

    assert!(result.contains("key=[REDACTED]&alt=json"));
    assert!(!result.contains("AIzaSecret"));
}

#[test]
fn given_bearer_and_password_when_redacting_then_masks_every_occurrence() {
    let result = redact_for_log("Bearer sk-1 then password=hunter2 and password=letmein");

    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-1"));
    assert!(!result.contains("hunter2"));
    assert!(!result.contains("letmein"));
}
