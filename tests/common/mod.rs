// 集成测试公共模块
//
// 提供翻译服务与同义词来源的桩实现，以及临时缓存辅助工具。
// 桩实现带有调用计数器，用于断言缓存命中时完全绕过网络层。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fanyi::cache::CacheStore;
use fanyi::dict::SynonymSource;
use fanyi::error::{TranslateError, TranslateResult};
use fanyi::translator::Translate;

/// 按脚本应答的翻译服务桩
pub struct StubTranslator {
    responses: HashMap<String, String>,
    failures: HashMap<String, String>,
    calls: Arc<AtomicUsize>,
}

impl StubTranslator {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failures: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// 预设某段文本的译文
    pub fn with_response(mut self, text: &str, translated: &str) -> Self {
        self.responses.insert(text.to_string(), translated.to_string());
        self
    }

    /// 预设某段文本触发失败
    pub fn with_failure(mut self, text: &str, message: &str) -> Self {
        self.failures.insert(text.to_string(), message.to_string());
        self
    }

    /// 共享的调用计数器
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Translate for StubTranslator {
    fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.failures.get(text) {
            return Err(TranslateError::Network(message.clone()));
        }

        self.responses.get(text).cloned().ok_or_else(|| {
            TranslateError::Parse(format!("no scripted response for '{}'", text))
        })
    }
}

/// 按脚本应答的同义词来源桩
pub struct StubSynonyms {
    entries: HashMap<String, Vec<String>>,
    calls: Arc<AtomicUsize>,
}

impl StubSynonyms {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_synonyms(mut self, word: &str, synonyms: &[&str]) -> Self {
        self.entries.insert(
            word.to_string(),
            synonyms.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SynonymSource for StubSynonyms {
    fn synonyms(&self, word: &str) -> Vec<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.get(word).cloned().unwrap_or_default()
    }
}

/// 在临时目录中创建缓存存储，避免触碰真实主目录
pub fn temp_cache() -> (tempfile::TempDir, CacheStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CacheStore::load(dir.path().join(".translate_cache.json"));
    (dir, store)
}
