//! Input rules shared by prompts and command-line flags.

use crate::error::{Api2tsError, Result};
use crate::paths::expand_home;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

static TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("type name pattern is valid")
});

/// Check that `input` parses as an absolute URL.
pub fn validate_url(input: &str) -> Result<Url> {
    Url::parse(input.trim()).map_err(|e| {
        Api2tsError::validation(
            "URL",
            format!("{} (enter a full URL such as https://api.example.com/users)", e),
        )
    })
}

/// Check that `input` is a usable TypeScript type name.
pub fn validate_type_name(input: &str) -> Result<String> {
    if TYPE_NAME.is_match(input) {
        Ok(input.to_string())
    } else {
        Err(Api2tsError::validation(
            "type name",
            "must start with a letter and contain only letters and digits",
        ))
    }
}

/// Check that `input` names an existing directory.
pub fn validate_existing_dir(input: &str) -> Result<PathBuf> {
    let path = expand_home(input.trim());
    if path.is_dir() {
        Ok(path)
    } else {
        Err(Api2tsError::validation(
            "path",
            format!("{} does not exist or is not a directory", path.display()),
        ))
    }
}
