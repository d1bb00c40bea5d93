//! API credential presence and format check.
//!
//! The key itself is never printed; only which sub-condition failed.

use crate::audit::CheckResult;

/// Check name shown in the report.
pub const NAME: &str = "API credential";

/// Environment variable holding the API key.
pub const CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Expected key prefix.
pub const KEY_PREFIX: &str = "sk-";

/// Keys at or below this length are rejected as too short.
pub const MIN_KEY_LENGTH: usize = 20;

/// Run the credential check against the process environment.
pub fn check() -> CheckResult {
    check_with(|var| std::env::var(var))
}

/// Run the credential check with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn check_with<F>(env_fn: F) -> CheckResult
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let key = match env_fn(CREDENTIAL_VAR) {
        Ok(key) => key,
        Err(_) => {
            return CheckResult::fail(
                NAME,
                format!("{} environment variable not set", CREDENTIAL_VAR),
            )
        }
    };

    if !key.starts_with(KEY_PREFIX) {
        return CheckResult::fail(
            NAME,
            format!("key format invalid (should start with '{}')", KEY_PREFIX),
        );
    }

    if key.len() <= MIN_KEY_LENGTH {
        return CheckResult::fail(NAME, "key appears too short");
    }

    CheckResult::pass(NAME, "key format appears valid")
}
