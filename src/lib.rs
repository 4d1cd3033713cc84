//! # Fanyi Library
//!
//! 中英互译命令行工具的核心库：按行读取输入，自动判定翻译方向，
//! 调用外部翻译服务获得首选译文，并借助词典服务补充候选翻译，
//! 查询结果持久化到用户主目录下的 JSON 缓存。
//!
//! ## 模块组织
//!
//! - `aggregate` - 候选翻译聚合（核心算法）
//! - `cache` - 磁盘缓存存储
//! - `config` - 配置加载与常量
//! - `detect` - 语言检测与翻译方向
//! - `dict` - 同义词查询
//! - `error` - 统一错误类型
//! - `translator` - 翻译服务适配器

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod detect;
pub mod dict;
pub mod error;
pub mod translator;

// Re-export commonly used items for convenience
pub use aggregate::CandidateAggregator;
pub use cache::{CacheStats, CacheStore};
pub use config::AppConfig;
pub use detect::{contains_chinese, Direction};
pub use dict::{DictionaryApiClient, SynonymSource};
pub use error::{TranslateError, TranslateResult};
pub use translator::{GoogleWebTranslator, Translate};
