// Central configuration loaded from environment variables.
//
// All secrets come from env vars (never hardcoded). The .env file is loaded
// automatically at startup via dotenvy.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::wordlist::WordListStore;

/// Default endpoint of the hosted moderation service used for validation.
pub const DEFAULT_MODERATION_API_URL: &str = "https://api.textmoderation.io/v1/screen";

pub struct Config {
    /// Directory of `<code>.txt` word lists overriding the embedded ones.
    pub wordlist_dir: Option<PathBuf>,
    /// Hosted moderation endpoint for the validation path.
    pub moderation_api_url: String,
    /// API key for the moderation endpoint — only `validate` needs it.
    pub moderation_api_key: String,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default except the moderation key, which stays empty until set.
    pub fn load() -> Result<Self> {
        Ok(Self {
            wordlist_dir: env::var("BOWDLER_WORDLIST_DIR").ok().map(PathBuf::from),
            moderation_api_url: env::var("MODERATION_API_URL")
                .unwrap_or_else(|_| DEFAULT_MODERATION_API_URL.to_string()),
            moderation_api_key: env::var("MODERATION_API_KEY").unwrap_or_default(),
        })
    }

    /// Check that the moderation API key is configured.
    /// Call this before the validate path; everything else runs offline.
    pub fn require_moderation(&self) -> Result<()> {
        if self.moderation_api_key.is_empty() {
            anyhow::bail!(
                "MODERATION_API_KEY not set. Add it to your .env file to use `bowdler validate`."
            );
        }
        Ok(())
    }

    /// The word list store this configuration selects.
    pub fn store(&self) -> WordListStore {
        match &self.wordlist_dir {
            Some(dir) => WordListStore::with_dir(dir),
            None => WordListStore::new(),
        }
    }
}
