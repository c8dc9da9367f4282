use crate::error::FixError;
use figment::{Figment, providers::Env};
use serde::Deserialize;
use url::Url;

/// Process-wide configuration, read once at startup.
///
/// `SUPABASE_URL` and `SUPABASE_KEY` are required; there are deliberately no
/// baked-in fallback values for either.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub url: Url,
    pub key: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, FixError> {
        let cfg = Figment::new()
            .merge(Env::prefixed("SUPABASE_"))
            .extract()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_prefixed_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://db.example.com");
            jail.set_env("SUPABASE_KEY", "service-key");
            let cfg = Config::from_env().expect("config should extract");
            assert_eq!(cfg.url.as_str(), "https://db.example.com/");
            assert_eq!(cfg.key, "service-key");
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }

    #[test]
    fn missing_key_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SUPABASE_URL", "https://db.example.com");
            assert!(Config::from_env().is_err());
            Ok(())
        });
    }
}
