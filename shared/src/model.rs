use serde_json::Value;
use std::borrow::Cow;

use crate::api::{ScienceArticle, SocialPost, User};
use crate::config::{ApiConfig, ClientConfig};
use crate::error::ConfigError;
use crate::event::Screen;
use crate::fetch::RemoteList;
use crate::wallet::{demo_accounts, Account};

#[derive(Debug)]
pub struct Model {
    pub api_config: ApiConfig,
    /// Validated form of `api_config`, set by `configure`.
    pub client: Option<ClientConfig>,
    pub config_error: Option<String>,

    pub active_screen: Option<Screen>,

    pub home: RemoteList<SocialPost>,
    pub posts: RemoteList<SocialPost>,
    pub science: RemoteList<ScienceArticle>,
    pub users: RemoteList<User>,
    pub gallery: RemoteList<String>,
    pub data: RemoteList<Value>,
    pub wallets: Vec<Account>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            api_config: ApiConfig::default(),
            client: None,
            config_error: None,
            active_screen: None,
            home: RemoteList::default(),
            posts: RemoteList::default(),
            science: RemoteList::default(),
            users: RemoteList::default(),
            gallery: RemoteList::default(),
            data: RemoteList::default(),
            wallets: demo_accounts(),
        }
    }
}

impl Model {
    /// The validated client config; falls back to validating `api_config`
    /// when nothing has been configured yet.
    pub fn client(&self) -> Result<Cow<'_, ClientConfig>, ConfigError> {
        match &self.client {
            Some(client) => Ok(Cow::Borrowed(client)),
            None => ClientConfig::new(&self.api_config).map(Cow::Owned),
        }
    }

    /// Validates `config` and swaps it in. On error the current config
    /// stays in place.
    pub fn configure(&mut self, config: ApiConfig) -> Result<(), ConfigError> {
        let client = ClientConfig::new(&config)?;
        self.api_config = config;
        self.client = Some(client);
        self.config_error = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_has_fixture_wallets() {
        let model = Model::default();
        assert_eq!(model.wallets.len(), 2);
        assert!(model.client.is_none());
    }

    #[test]
    fn test_rejected_config_keeps_previous() {
        let mut model = Model::default();
        let bad = ApiConfig {
            base_url: "not a url".into(),
            ..ApiConfig::default()
        };
        assert!(model.configure(bad).is_err());
        assert_eq!(model.api_config, ApiConfig::default());

        let good = ApiConfig {
            base_url: "https://staging.example.com".into(),
            ..ApiConfig::default()
        };
        model.configure(good).unwrap();
        assert_eq!(
            model.client().unwrap().endpoint("/api/users").unwrap().as_str(),
            "https://staging.example.com/api/users"
        );
    }
}
