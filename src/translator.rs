//! 翻译服务适配器
//!
//! 将外部翻译服务包装为固定 源语言 -> 目标语言 的同步调用。
//! 请求失败以错误形式向上传播，由聚合器负责捕获。

use url::Url;

use crate::config::AppConfig;
use crate::error::{TranslateError, TranslateResult};

/// 翻译服务抽象，便于在测试中替换为桩实现
pub trait Translate {
    /// 将文本从 `source_lang` 翻译到 `target_lang`
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
        -> TranslateResult<String>;
}

/// 谷歌网页翻译端点客户端（translate_a/single, client=gtx）
pub struct GoogleWebTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl GoogleWebTranslator {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.translate_timeout())
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.translate_endpoint.clone(),
        }
    }

    fn build_url(&self, text: &str, source_lang: &str, target_lang: &str) -> TranslateResult<Url> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| TranslateError::Config(format!("invalid translate endpoint: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", source_lang)
            .append_pair("tl", target_lang)
            .append_pair("dt", "t")
            .append_pair("q", text);

        Ok(url)
    }
}

impl Translate for GoogleWebTranslator {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslateResult<String> {
        let url = self.build_url(text, source_lang, target_lang)?;
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::ServiceStatus(status.as_u16()));
        }

        let body: serde_json::Value = response.json()?;
        extract_translation(&body)
    }
}

/// 从嵌套数组响应中提取译文
///
/// 响应形如 `[[["译文","原文",...], ...], ...]`；第一层数组的每个元素是
/// 一个分段，分段的首个元素为该段译文，将所有分段拼接为完整译文。
fn extract_translation(body: &serde_json::Value) -> TranslateResult<String> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::Parse("missing translation segments".to_string()))?;

    let mut result = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            result.push_str(text);
        }
    }

    if result.is_empty() {
        return Err(TranslateError::Parse("empty translation result".to_string()));
    }

    Ok(result)
}
