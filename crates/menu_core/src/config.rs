//! Store configuration.

use serde::{Deserialize, Serialize};

/// Identifier assignment strategy for new menu items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdScheme {
    /// Decimal counter seeded from `len + 1`, skipping ids already taken.
    #[default]
    Sequential,
    /// Random v4 UUID string.
    Uuid,
}

impl IdScheme {
    /// Parses a scheme name (`sequential|uuid`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(Self::Sequential),
            "uuid" => Some(Self::Uuid),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Uuid => "uuid",
        }
    }
}

/// Options for constructing a [`crate::MenuStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuStoreConfig {
    pub id_scheme: IdScheme,
}

#[cfg(test)]
mod tests {
    use super::{IdScheme, MenuStoreConfig};

    #[test]
    fn parse_is_case_insensitive_and_rejects_unknown() {
        assert_eq!(IdScheme::parse(" UUID "), Some(IdScheme::Uuid));
        assert_eq!(IdScheme::parse("sequential"), Some(IdScheme::Sequential));
        assert_eq!(IdScheme::parse("random"), None);
    }

    #[test]
    fn config_uses_expected_wire_fields() {
        let config: MenuStoreConfig =
            serde_json::from_value(serde_json::json!({ "id_scheme": "uuid" })).unwrap();
        assert_eq!(config.id_scheme, IdScheme::Uuid);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "id_scheme": "uuid" }));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: MenuStoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MenuStoreConfig::default());
    }

    #[test]
    fn default_config_uses_sequential_ids() {
        assert_eq!(MenuStoreConfig::default().id_scheme, IdScheme::Sequential);
    }
}
