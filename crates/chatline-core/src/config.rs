//! Configuration loader for Chatline.
//!
//! Reads a TOML file and deserializes it into [`ChatConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::Path;

use chatline_types::config::ChatConfig;

/// Default file name looked up by callers that keep config in a directory.
pub const CONFIG_FILE_NAME: &str = "chatline.toml";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`ChatConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub fn load_config(path: &Path) -> ChatConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ChatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ChatConfig::default();
        }
    };

    match parse_config(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ChatConfig::default()
        }
    }
}

/// Strictly parse a TOML document into [`ChatConfig`].
pub fn parse_config(content: &str) -> Result<ChatConfig, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn valid_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "first_chat_id = 50\nempty_chat_placeholder = \"(empty)\"\n",
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.first_chat_id, 50);
        assert_eq!(config.empty_chat_placeholder, "(empty)");
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "first_chat_id = \"not a number\"").unwrap();

        assert_eq!(load_config(&path), ChatConfig::default());
    }

    #[test]
    fn parse_config_reports_errors() {
        assert!(parse_config("first_chat_id = [").is_err());
        assert_eq!(parse_config("").unwrap(), ChatConfig::default());
    }
}
