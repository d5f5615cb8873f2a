//! `.env` file loading
//!
//! Precedence, highest first: the process environment, the
//! environment-specific file (`.env.staging` etc.), then `.env`. The
//! environment itself may be selected from inside `.env`.

use std::collections::HashMap;
use std::path::Path;

use otp_shared::config::Environment;

const BASE_FILE: &str = ".env";

/// Variables that select the environment, in lookup order
const SELECTOR_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Load the `.env` files found in `dir` and return the selected environment
///
/// Missing files are skipped. Existing process variables are never overridden.
pub fn load_env_files(dir: &Path) -> Environment {
    let base = dir.join(BASE_FILE);
    let environment = selected_environment(&base);

    match dotenvy::from_path(dir.join(environment.env_file())) {
        Ok(()) => tracing::debug!(file = environment.env_file(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(file = environment.env_file(), error = %e, "Ignoring unreadable environment file"),
    }
    match dotenvy::from_path(&base) {
        Ok(()) => tracing::debug!(file = BASE_FILE, "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(file = BASE_FILE, error = %e, "Ignoring unreadable environment file"),
    }

    environment
}

/// Environment from the process, falling back to the selector inside `.env`
fn selected_environment(base: &Path) -> Environment {
    if SELECTOR_VARS.iter().any(|key| std::env::var(key).is_ok()) {
        return Environment::from_env();
    }

    let from_file = dotenvy::from_path_iter(base).ok().and_then(|iter| {
        let vars: HashMap<String, String> = iter.filter_map(Result::ok).collect();
        SELECTOR_VARS.iter().find_map(|key| vars.get(*key).cloned())
    });

    from_file
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
