use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use monitor_logging::monitor_warn;
use restock_core::NotifyPolicy;
use restock_engine::{FetchSettings, TelegramSettings};
use serde::Deserialize;

const CONFIG_FILENAME: &str = "restock_watch.ron";
const DEFAULT_PRODUCT_URL: &str = "https://www.nike.com/w/air-force-1-aq0113";
const DEFAULT_STATE_PATH: &str = "./restock_state.ron";

/// Effective configuration for one run: built-in defaults, overridden by the
/// optional `restock_watch.ron` file, overridden by environment variables.
/// Credentials come from the environment only.
#[derive(Debug, Clone)]
pub struct Config {
    pub product_url: String,
    pub user_agent: String,
    pub state_path: PathBuf,
    pub notify_policy: NotifyPolicy,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub telegram_api_base: String,
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        let telegram = TelegramSettings::default();
        Self {
            product_url: DEFAULT_PRODUCT_URL.to_string(),
            user_agent: fetch.user_agent,
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            notify_policy: NotifyPolicy::default(),
            connect_timeout: fetch.connect_timeout,
            request_timeout: fetch.request_timeout,
            telegram_api_base: telegram.api_base,
            bot_token: None,
            chat_id: None,
        }
    }
}

/// Optional overrides read from `restock_watch.ron`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    product_url: Option<String>,
    user_agent: Option<String>,
    state_path: Option<PathBuf>,
    notify_policy: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Self {
        let mut config = Config::default();

        match fs::read_to_string(CONFIG_FILENAME) {
            Ok(text) => match ron::from_str::<FileConfig>(&text) {
                Ok(file) => config.apply_file(file),
                Err(err) => {
                    monitor_warn!("Ignoring malformed {}: {}", CONFIG_FILENAME, err);
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                monitor_warn!("Could not read {}: {}", CONFIG_FILENAME, err);
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(url) = file.product_url {
            self.product_url = url;
        }
        if let Some(agent) = file.user_agent {
            self.user_agent = agent;
        }
        if let Some(path) = file.state_path {
            self.state_path = path;
        }
        if let Some(policy) = file.notify_policy {
            self.set_policy(&policy, CONFIG_FILENAME);
        }
        if let Some(secs) = file.connect_timeout_secs {
            self.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
    }

    fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(url) = get("RESTOCK_PRODUCT_URL") {
            self.product_url = url;
        }
        if let Some(path) = get("RESTOCK_STATE_PATH") {
            self.state_path = PathBuf::from(path);
        }
        if let Some(policy) = get("RESTOCK_NOTIFY_POLICY") {
            self.set_policy(&policy, "RESTOCK_NOTIFY_POLICY");
        }
        if let Some(token) = get("TELEGRAM_BOT_TOKEN") {
            self.bot_token = Some(token);
        }
        if let Some(chat) = get("TELEGRAM_CHAT_ID") {
            self.chat_id = Some(chat);
        }
    }

    fn set_policy(&mut self, raw: &str, source: &str) {
        match parse_policy(raw) {
            Some(policy) => self.notify_policy = policy,
            None => {
                monitor_warn!(
                    "Unknown notify policy {:?} from {}; keeping {:?}",
                    raw,
                    source,
                    self.notify_policy
                );
            }
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent.clone(),
            ..FetchSettings::default()
        }
    }

    pub fn telegram_settings(&self) -> TelegramSettings {
        TelegramSettings {
            bot_token: self.bot_token.clone(),
            chat_id: self.chat_id.clone(),
            api_base: self.telegram_api_base.clone(),
            ..TelegramSettings::default()
        }
    }
}

fn parse_policy(raw: &str) -> Option<NotifyPolicy> {
    match raw.trim() {
        "restock-only" => Some(NotifyPolicy::RestockOnly),
        "any-change" => Some(NotifyPolicy::AnyChange),
        _ => None,
    }
}
