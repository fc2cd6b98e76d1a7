use std::env;

/// Read a boolean environment variable: accepts true/false/1/0 (case-insensitive).
pub fn env_is_true(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        }
        Err(_) => default,
    }
}

/// Read a string environment variable, falling back to a default.
pub fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_env_accepts_true_and_one() {
        env::set_var("NSE_SYNC_TEST_BOOL", "TRUE");
        assert!(env_is_true("NSE_SYNC_TEST_BOOL", false));
        env::set_var("NSE_SYNC_TEST_BOOL", "1");
        assert!(env_is_true("NSE_SYNC_TEST_BOOL", false));
        env::set_var("NSE_SYNC_TEST_BOOL", "0");
        assert!(!env_is_true("NSE_SYNC_TEST_BOOL", true));
        env::remove_var("NSE_SYNC_TEST_BOOL");
    }

    #[test]
    fn missing_env_uses_default() {
        env::remove_var("NSE_SYNC_TEST_MISSING");
        assert!(env_is_true("NSE_SYNC_TEST_MISSING", true));
        assert_eq!(env_or_default("NSE_SYNC_TEST_MISSING", "LOCAL"), "LOCAL");
    }
}
