use crate::domain::{BookId, UserId};
use thiserror::Error;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid inventory entry (expected book_id=quantity): {0}")]
    InvalidInventoryEntry(String),
}

/// HTTPホストの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 待ち受けアドレス
    pub bind_addr: String,
    /// HTTPサーバーのポート
    pub port: u16,
    /// インメモリ利用者サービスで有効とみなす利用者
    pub active_users: Vec<UserId>,
    /// 起動時に`add_book`で登録する在庫
    pub initial_inventory: Vec<(BookId, i64)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            active_users: Vec::new(),
            initial_inventory: Vec::new(),
        }
    }
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// `BIND_ADDR`, `PORT`, `ACTIVE_USERS`, `INITIAL_INVENTORY`を参照する。
    /// 未設定の変数はデフォルト値を使う。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let active_users = lookup("ACTIVE_USERS")
            .map(|raw| parse_active_users(&raw))
            .unwrap_or_default();

        let initial_inventory = match lookup("INITIAL_INVENTORY") {
            Some(raw) => parse_inventory(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            bind_addr,
            port,
            active_users,
            initial_inventory,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_active_users(raw: &str) -> Vec<UserId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(UserId::from)
        .collect()
}

fn parse_inventory(raw: &str) -> Result<Vec<(BookId, i64)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let (book_id, quantity) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidInventoryEntry(entry.to_string()))?;
            let book_id = book_id.trim();
            if book_id.is_empty() {
                return Err(ConfigError::InvalidInventoryEntry(entry.to_string()));
            }
            let quantity = quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidInventoryEntry(entry.to_string()))?;
            Ok((BookId::from(book_id), quantity))
        })
        .collect()
}
