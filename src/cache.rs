//! 翻译结果缓存模块
//!
//! 将查询文本到结果字符串的映射持久化为用户主目录下的 JSON 文件。
//! 缓存读写失败只记录日志，不向调用方传播。

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::constants::CACHE_FILE_NAME;

/// 缓存统计信息
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// 缓存文件路径
    pub path: PathBuf,
    /// 条目数量
    pub entries: usize,
}

/// 磁盘缓存存储
///
/// 键为原始查询文本（区分大小写、精确匹配），值为最终渲染的候选字符串。
/// 每次插入后立即重写整个文件，不做批量合并。
pub struct CacheStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl CacheStore {
    /// 从默认位置（~/.translate_cache.json）加载缓存
    pub fn load_default() -> Self {
        let path = BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(CACHE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CACHE_FILE_NAME));
        Self::load(path)
    }

    /// 从指定路径加载缓存
    ///
    /// 文件缺失或解析失败时回退为空映射，失败原因只记录日志。
    pub fn load(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, String>>(&contents) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("缓存文件解析失败，使用空缓存: {}", e);
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::debug!("缓存文件不可读（{}），使用空缓存", e);
                HashMap::new()
            }
        };

        Self { path, entries }
    }

    /// 精确查找缓存条目
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 插入或覆盖条目，随后立即写回磁盘
    ///
    /// 写入失败被静默吞掉（尽力持久化，不保证崩溃安全）。
    pub fn put(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    /// 将整个映射序列化写回缓存文件
    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("缓存序列化失败: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!("缓存写入失败 ({}): {}", self.path.display(), e);
        }
    }

    /// 获取缓存统计信息（仅用于展示）
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            path: self.path.clone(),
            entries: self.entries.len(),
        }
    }

    /// 缓存文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
