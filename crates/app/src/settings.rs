use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize};
use snafu::{ResultExt, Snafu};
use sparc_api::SparcApiConfig;
use sparc_chat_store::{DEFAULT_MODEL, SessionState};

pub const SETTINGS_DIRECTORY_NAME: &str = "sparc-chat";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
/// Environment variables with this prefix override file values, e.g. `SPARC_CHAT_API_KEY`.
pub const ENV_PREFIX: &str = "SPARC_CHAT_";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub api_key: String,
    #[serde(default = "default_model", deserialize_with = "deserialize_text")]
    pub model: String,
    /// Blank selects the public SPARC endpoint.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub base_url: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub index: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: String::new(),
            index: String::new(),
            page_size: default_page_size(),
        }
    }
}

impl AppSettings {
    pub fn is_valid(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Search config using `api_key` with this endpoint and index.
    pub fn api_config_for(&self, api_key: &str) -> Option<SparcApiConfig> {
        if api_key.trim().is_empty() {
            return None;
        }

        let mut config = SparcApiConfig::new(api_key.trim());
        if !self.base_url.is_empty() {
            config = config.with_base_url(self.base_url.clone());
        }
        if !self.index.is_empty() {
            config = config.with_index(self.index.clone());
        }
        Some(config)
    }

    /// Session scalars a fresh chat store starts from.
    pub fn session_state(&self) -> SessionState {
        SessionState {
            is_typing: false,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
        }
    }

    pub fn normalized(mut self) -> Self {
        self.api_key = self.api_key.trim().to_string();
        self.model = if self.model.trim().is_empty() {
            default_model()
        } else {
            self.model.trim().to_string()
        };
        self.base_url = self.base_url.trim().to_string();
        self.index = self.index.trim().to_string();
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

pub struct SettingsStore {
    settings: Arc<ArcSwap<AppSettings>>,
    config_path: PathBuf,
}

impl SettingsStore {
    /// `<platform config dir>/sparc-chat`, or `./sparc-chat` when the platform has none.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SETTINGS_DIRECTORY_NAME)
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        Self::with_env_prefix(config_path, ENV_PREFIX)
    }

    /// Loads from `config_path`, letting variables named `{env_prefix}{FIELD}` override it.
    pub fn with_env_prefix(config_path: PathBuf, env_prefix: &str) -> Self {
        let settings = Self::load_from_disk(&config_path, env_prefix);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn settings(&self) -> Arc<AppSettings> {
        self.settings.load_full()
    }

    /// Writes `settings` to disk first; readers only see them once the file is committed.
    pub fn update(&self, settings: AppSettings) -> Result<(), SettingsError> {
        let next = Arc::new(settings.normalized());
        self.persist(&next)?;
        self.settings.store(next);
        Ok(())
    }

    fn load_from_disk(path: &Path, env_prefix: &str) -> AppSettings {
        if !path.exists() {
            tracing::info!(
                "no chat settings at {}; starting from defaults and environment",
                path.display()
            );
        }

        // A missing file is an empty layer, so env overrides still apply.
        let figment = Figment::from(Serialized::defaults(AppSettings::default()))
            .merge(Json::file(path))
            .merge(Env::prefixed(env_prefix));

        match figment.extract::<AppSettings>() {
            Ok(settings) => settings.normalized(),
            Err(error) => {
                tracing::warn!(
                    %error,
                    "ignoring unreadable chat settings at {}",
                    path.display()
                );
                AppSettings::default()
            }
        }
    }

    fn persist(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        if let Some(directory) = self.config_path.parent() {
            std::fs::create_dir_all(directory).context(PrepareDirectorySnafu {
                stage: "prepare-config-directory",
                directory: directory.to_path_buf(),
            })?;
        }

        let json = serde_json::to_string_pretty(settings).context(EncodeSettingsSnafu {
            stage: "encode-app-settings",
        })?;

        let staging_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&staging_path, json).context(StageSettingsSnafu {
            stage: "stage-app-settings",
            staging_path: staging_path.clone(),
        })?;

        std::fs::rename(&staging_path, &self.config_path).context(CommitSettingsSnafu {
            stage: "commit-app-settings",
            staging_path,
            config_path: self.config_path.clone(),
        })?;

        tracing::debug!(
            model = %settings.model,
            page_size = settings.page_size,
            "chat settings written to {}",
            self.config_path.display()
        );
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("cannot prepare config directory {} on `{stage}`: {source}", directory.display()))]
    PrepareDirectory {
        stage: &'static str,
        directory: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("cannot encode chat settings as JSON on `{stage}`: {source}"))]
    EncodeSettings {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("cannot stage chat settings at {} on `{stage}`: {source}", staging_path.display()))]
    StageSettings {
        stage: &'static str,
        staging_path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "cannot move staged settings {} over {} on `{stage}`: {source}",
        staging_path.display(),
        config_path.display()
    ))]
    CommitSettings {
        stage: &'static str,
        staging_path: PathBuf,
        config_path: PathBuf,
        source: std::io::Error,
    },
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Accepts a string, or a bare number/bool as environment values arrive
/// typed (`SPARC_CHAT_API_KEY=1234567890` is read as an integer).
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::String(value) => value,
        Text::Unsigned(value) => value.to_string(),
        Text::Signed(value) => value.to_string(),
        Text::Float(value) => value.to_string(),
        Text::Bool(value) => value.to_string(),
    })
}
