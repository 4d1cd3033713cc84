//! 配置管理模块
//!
//! 提供默认值、可选 TOML 配置文件和环境变量三层配置加载

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::TranslateResult;

/// 配置常量
pub mod constants {
    /// 候选翻译数量上限（含首选翻译）
    pub const MAX_CANDIDATES: usize = 4;

    /// 单次查询的同义词数量上限
    pub const MAX_SYNONYMS: usize = 3;

    /// 同义词并行翻译的工作线程数
    pub const SYNONYM_WORKERS: usize = 3;

    /// 词典查询超时（秒）
    pub const DICTIONARY_TIMEOUT_SECS: u64 = 2;

    /// 翻译请求超时（秒）
    pub const TRANSLATE_TIMEOUT_SECS: u64 = 8;

    pub const DEFAULT_TRANSLATE_ENDPOINT: &str =
        "https://translate.googleapis.com/translate_a/single";
    pub const DEFAULT_DICTIONARY_ENDPOINT: &str =
        "https://api.dictionaryapi.dev/api/v2/entries/en";

    /// 缓存文件名（位于用户主目录下）
    pub const CACHE_FILE_NAME: &str = ".translate_cache.json";

    /// 环境变量前缀，如 FANYI_TRANSLATE_ENDPOINT
    pub const ENV_PREFIX: &str = "FANYI";
}

/// 运行时配置
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 翻译服务地址
    pub translate_endpoint: String,

    /// 词典服务地址（按单词追加路径段）
    pub dictionary_endpoint: String,

    /// 翻译请求超时（秒）
    pub translate_timeout_secs: u64,

    /// 词典查询超时（秒）
    pub dictionary_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translate_endpoint: constants::DEFAULT_TRANSLATE_ENDPOINT.to_string(),
            dictionary_endpoint: constants::DEFAULT_DICTIONARY_ENDPOINT.to_string(),
            translate_timeout_secs: constants::TRANSLATE_TIMEOUT_SECS,
            dictionary_timeout_secs: constants::DICTIONARY_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// 加载配置：默认值 <- 配置文件（可选）<- 环境变量
    pub fn load() -> TranslateResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = Self::config_file_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix(constants::ENV_PREFIX))
            .build()?;

        // 未设置的字段回退到默认值
        let config: AppConfig = settings.try_deserialize().unwrap_or_default();
        Ok(config)
    }

    /// 配置文件路径：~/.config/fanyi/config.toml
    fn config_file_path() -> Option<PathBuf> {
        let base_dirs = BaseDirs::new()?;
        Some(base_dirs.home_dir().join(".config/fanyi/config.toml"))
    }

    pub fn translate_timeout(&self) -> Duration {
        Duration::from_secs(self.translate_timeout_secs)
    }

    pub fn dictionary_timeout(&self) -> Duration {
        Duration::from_secs(self.dictionary_timeout_secs)
    }
}
