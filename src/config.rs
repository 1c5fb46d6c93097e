use serde::{Deserialize, Serialize};

use crate::providers::Provider;

/// Switches controlling which normalisation rules are applied.
///
/// Every switch defaults to enabled. `all_lowercase` governs lowercasing of
/// the local-part for domains outside the provider tables; for a known
/// provider the per-provider `*_lowercase` switch applies as well, and either
/// one being set lowercases the local-part. The domain is always lowercased
/// regardless of configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub all_lowercase: bool,
    pub gmail_lowercase: bool,
    pub gmail_remove_dots: bool,
    pub gmail_remove_subaddress: bool,
    pub gmail_convert_googlemaildotcom: bool,
    pub icloud_lowercase: bool,
    pub icloud_remove_subaddress: bool,
    pub outlookdotcom_lowercase: bool,
    pub outlookdotcom_remove_subaddress: bool,
    pub yahoo_lowercase: bool,
    pub yahoo_remove_subaddress: bool,
    pub yandex_lowercase: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            all_lowercase: true,
            gmail_lowercase: true,
            gmail_remove_dots: true,
            gmail_remove_subaddress: true,
            gmail_convert_googlemaildotcom: true,
            icloud_lowercase: true,
            icloud_remove_subaddress: true,
            outlookdotcom_lowercase: true,
            outlookdotcom_remove_subaddress: true,
            yahoo_lowercase: true,
            yahoo_remove_subaddress: true,
            yandex_lowercase: true,
        }
    }
}

impl Config {
    pub(crate) fn lowercase_for(&self, provider: Provider) -> bool {
        match provider {
            Provider::Gmail => self.gmail_lowercase,
            Provider::Icloud => self.icloud_lowercase,
            Provider::OutlookDotCom => self.outlookdotcom_lowercase,
            Provider::Yahoo => self.yahoo_lowercase,
            Provider::Yandex => self.yandex_lowercase,
        }
    }

    pub(crate) fn remove_subaddress_for(&self, provider: Provider) -> bool {
        match provider {
            Provider::Gmail => self.gmail_remove_subaddress,
            Provider::Icloud => self.icloud_remove_subaddress,
            Provider::OutlookDotCom => self.outlookdotcom_remove_subaddress,
            Provider::Yahoo => self.yahoo_remove_subaddress,
            // Yandex keeps local-parts intact.
            Provider::Yandex => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_enables_every_switch() {
        let cfg = Config::default();
        assert!(cfg.all_lowercase);
        assert!(cfg.gmail_remove_dots);
        assert!(cfg.gmail_convert_googlemaildotcom);
        assert!(cfg.yahoo_remove_subaddress);
        assert!(cfg.yandex_lowercase);
    }

    #[test]
    fn deserializes_empty_document_to_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn deserializes_partial_overrides() {
        let cfg: Config =
            serde_json::from_str(r#"{"all_lowercase": false, "gmail_remove_dots": false}"#)
                .unwrap();
        assert!(!cfg.all_lowercase);
        assert!(!cfg.gmail_remove_dots);
        assert!(cfg.gmail_lowercase);
        assert!(cfg.outlookdotcom_remove_subaddress);
    }
}
