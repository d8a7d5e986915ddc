//! Locale
//!
//! Buyer-facing strings, injected into rules and banners rather than read from global state.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of the discount phrase appended to the percentage.
pub const DISCOUNT_MESSAGE: &str = "discountMessage";

/// Key of the message raised for carts without lines.
pub const ERROR_NO_CART_LINES: &str = "errorNoCartLines";

/// Key of the default savings banner heading.
pub const DEFAULT_HEADING: &str = "defaultHeading";

/// Key of the default savings banner description template.
pub const DEFAULT_DESCRIPTION: &str = "defaultDescription";

const BUNDLED_EN: &str = include_str!("../../locales/en.default.json");

/// Errors raised while loading or reading a locale table.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// IO error reading a locale file.
    #[error("Failed to read locale file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("Failed to parse JSON locale: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML locale: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported locale format: {0}")]
    UnsupportedFormat(String),

    /// A required key is absent from the table.
    #[error("Missing locale key: {0}")]
    MissingKey(String),
}

/// An immutable key to string table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    strings: FxHashMap<String, String>,
}

impl LocaleTable {
    /// The English table shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError::Json`] if the bundled table is malformed.
    pub fn bundled() -> Result<Self, LocaleError> {
        Self::from_json_str(BUNDLED_EN)
    }

    /// Parse a table from a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError::Json`] if the input is not a string to string object.
    pub fn from_json_str(contents: &str) -> Result<Self, LocaleError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse a table from a flat YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError::Yaml`] if the input is not a string to string mapping.
    pub fn from_yaml_str(contents: &str) -> Result<Self, LocaleError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a table from a `.json`, `.yml` or `.yaml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported extension, or fails to parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LocaleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_str(&fs::read_to_string(path)?),
            "yml" | "yaml" => Self::from_yaml_str(&fs::read_to_string(path)?),
            _ => Err(LocaleError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Look up a string.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError::MissingKey`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&str, LocaleError> {
        self.strings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| LocaleError::MissingKey(key.to_string()))
    }

    /// Look up a string and replace each `{{name}}` placeholder with its value.
    ///
    /// Placeholders without a replacement are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError::MissingKey`] if the key is absent.
    pub fn translate(&self, key: &str, replacements: &[(&str, &str)]) -> Result<String, LocaleError> {
        let template = self.get(key)?;

        Ok(replacements
            .iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            }))
    }

    /// Check if the table holds no strings.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Get the number of strings in the table.
    pub fn len(&self) -> usize {
        self.strings.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            strings: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::Builder;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn bundled_table_has_rule_and_banner_keys() -> TestResult {
        let locale = LocaleTable::bundled()?;

        assert_eq!(locale.get(DISCOUNT_MESSAGE)?, "VIP Discount");
        assert_eq!(locale.get(ERROR_NO_CART_LINES)?, "No cart lines found");
        assert!(locale.get(DEFAULT_HEADING).is_ok());
        assert!(locale.get(DEFAULT_DESCRIPTION)?.contains("{{savingAmount}}"));

        Ok(())
    }

    #[test]
    fn missing_key_is_an_error() {
        let locale = LocaleTable::default();

        assert!(matches!(
            locale.get(DISCOUNT_MESSAGE),
            Err(LocaleError::MissingKey(key)) if key == DISCOUNT_MESSAGE
        ));
    }

    #[test]
    fn translate_replaces_every_placeholder() -> TestResult {
        let locale: LocaleTable = [("greeting", "{{name}} saved {{amount}}, well done {{name}}")]
            .into_iter()
            .collect();

        let text = locale.translate("greeting", &[("name", "Ada"), ("amount", "15.00")])?;

        assert_eq!(text, "Ada saved 15.00, well done Ada");

        Ok(())
    }

    #[test]
    fn translate_leaves_unknown_placeholders() -> TestResult {
        let locale: LocaleTable = [("greeting", "Hello {{name}}")].into_iter().collect();

        assert_eq!(locale.translate("greeting", &[])?, "Hello {{name}}");

        Ok(())
    }

    #[test]
    fn parses_yaml_tables() -> TestResult {
        let locale = LocaleTable::from_yaml_str("discountMessage: Remise VIP\nerrorNoCartLines: Panier vide\n")?;

        assert_eq!(locale.len(), 2);
        assert_eq!(locale.get(DISCOUNT_MESSAGE)?, "Remise VIP");

        Ok(())
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(matches!(
            LocaleTable::from_json_str(r#"{"discountMessage": 15}"#),
            Err(LocaleError::Json(_))
        ));
    }

    #[test]
    fn loads_tables_from_disk_by_extension() -> TestResult {
        let mut json = Builder::new().suffix(".json").tempfile()?;
        write!(json, r#"{{"discountMessage": "VIP Discount"}}"#)?;

        let mut yaml = Builder::new().suffix(".yml").tempfile()?;
        writeln!(yaml, "discountMessage: VIP Rabatt")?;

        assert_eq!(LocaleTable::from_path(json.path())?.get(DISCOUNT_MESSAGE)?, "VIP Discount");
        assert_eq!(LocaleTable::from_path(yaml.path())?.get(DISCOUNT_MESSAGE)?, "VIP Rabatt");

        Ok(())
    }

    #[test]
    fn rejects_unknown_extensions() -> TestResult {
        let file = Builder::new().suffix(".toml").tempfile()?;

        assert!(matches!(
            LocaleTable::from_path(file.path()),
            Err(LocaleError::UnsupportedFormat(_))
        ));

        Ok(())
    }

    #[test]
    fn unsupported_extension_is_reported_before_reading() -> TestResult {
        let dir = tempfile::tempdir()?;

        assert!(matches!(
            LocaleTable::from_path(dir.path().join("fr.toml")),
            Err(LocaleError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            LocaleTable::from_path(dir.path().join("fr.json")),
            Err(LocaleError::Io(_))
        ));

        Ok(())
    }
}
