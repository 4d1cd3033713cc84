//! 同义词查询模块
//!
//! 通过 dictionaryapi.dev 查询英文单词的同义词。查询失败一律返回空列表，
//! 不向调用方抛出错误，也不重试。

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::config::constants::MAX_SYNONYMS;
use crate::config::AppConfig;

/// 同义词来源抽象，便于在测试中替换为桩实现
pub trait SynonymSource {
    /// 返回给定小写英文单词的同义词，最多 [`MAX_SYNONYMS`] 个
    fn synonyms(&self, word: &str) -> Vec<String>;
}

/// 词典响应条目
#[derive(Debug, Deserialize)]
struct DictEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

/// 词条释义，每条释义可能带有同义词列表
#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    synonyms: Vec<String>,
}

/// dictionaryapi.dev 客户端
pub struct DictionaryApiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl DictionaryApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.dictionary_timeout())
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.dictionary_endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn fetch(&self, word: &str) -> Option<Vec<DictEntry>> {
        let encoded = utf8_percent_encode(word, NON_ALPHANUMERIC);
        let url = format!("{}/{}", self.endpoint, encoded);

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("词典请求失败 ({}): {}", word, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("词典返回非成功状态 ({}): {}", word, response.status());
            return None;
        }

        match response.json::<Vec<DictEntry>>() {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::debug!("词典响应解析失败 ({}): {}", word, e);
                None
            }
        }
    }
}

impl SynonymSource for DictionaryApiClient {
    fn synonyms(&self, word: &str) -> Vec<String> {
        match self.fetch(word) {
            Some(entries) => collect_synonyms(entries),
            None => Vec::new(),
        }
    }
}

/// 展平 条目 -> 释义 -> 同义词 的嵌套结构
///
/// 保持文档顺序，按精确匹配去重，最多保留 [`MAX_SYNONYMS`] 个。
fn collect_synonyms(entries: Vec<DictEntry>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();

    for entry in entries {
        for meaning in entry.meanings {
            for synonym in meaning.synonyms {
                if result.len() >= MAX_SYNONYMS {
                    return result;
                }
                if !result.contains(&synonym) {
                    result.push(synonym);
                }
            }
        }
    }

    result
}
