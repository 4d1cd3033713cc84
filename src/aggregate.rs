//! 候选翻译聚合模块
//!
//! 协调语言检测、翻译服务和同义词查询，为单次查询构建一条
//! 去重、保序、最多四项的候选翻译列表。聚合器持有注入的缓存存储，
//! 命中缓存时完全跳过网络调用。

use std::sync::mpsc;

use crate::cache::CacheStore;
use crate::config::constants::{MAX_CANDIDATES, SYNONYM_WORKERS};
use crate::detect::Direction;
use crate::dict::SynonymSource;
use crate::error::TranslateResult;
use crate::translator::Translate;

/// 候选翻译聚合器
pub struct CandidateAggregator<T, S> {
    translator: T,
    synonyms: S,
    cache: CacheStore,
}

impl<T, S> CandidateAggregator<T, S>
where
    T: Translate + Sync,
    S: SynonymSource,
{
    pub fn new(translator: T, synonyms: S, cache: CacheStore) -> Self {
        Self {
            translator,
            synonyms,
            cache,
        }
    }

    /// 缓存存储的只读访问（用于展示统计信息）
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// 处理一次查询，返回渲染好的结果字符串
    ///
    /// 调用方保证 `text` 已去除首尾空白且非空。首选翻译失败时整次调用
    /// 中止，渲染为 `Translation error: ...` 字符串；错误结果不写入缓存，
    /// 避免把一次瞬时网络故障持久化到后续运行。
    pub fn lookup(&mut self, text: &str) -> String {
        if let Some(hit) = self.cache.get(text) {
            tracing::debug!("缓存命中: {}", text);
            return hit.to_string();
        }

        match self.gather(text) {
            Ok(result) => {
                self.cache.put(text, &result);
                result
            }
            Err(e) => format!("Translation error: {}", e),
        }
    }

    fn gather(&self, text: &str) -> TranslateResult<String> {
        let candidates = match Direction::detect(text) {
            Direction::ZhToEn => self.gather_zh_to_en(text)?,
            Direction::EnToZh => self.gather_en_to_zh(text)?,
        };

        Ok(candidates.join(", "))
    }

    /// 中文 -> 英文：首选翻译 + 其同义词
    fn gather_zh_to_en(&self, text: &str) -> TranslateResult<Vec<String>> {
        let direction = Direction::ZhToEn;
        let primary = self
            .translator
            .translate(text, direction.source_lang(), direction.target_lang())?;
        let primary_lower = primary.to_lowercase();

        let mut candidates = vec![primary];
        for synonym in self.synonyms.synonyms(&primary_lower) {
            if synonym.to_lowercase() != primary_lower {
                candidates.push(synonym);
            }
        }

        let mut candidates = dedup_case_insensitive(candidates);
        candidates.truncate(MAX_CANDIDATES);
        Ok(candidates)
    }

    /// 英文 -> 中文：首选翻译 + 输入词同义词的并行翻译
    fn gather_en_to_zh(&self, text: &str) -> TranslateResult<Vec<String>> {
        let direction = Direction::EnToZh;
        let primary = self
            .translator
            .translate(text, direction.source_lang(), direction.target_lang())?;

        // 对输入本身（而非译文）查询英文同义词，再逐个翻译成中文
        let synonyms = self.synonyms.synonyms(&text.to_lowercase());

        let mut candidates = vec![primary.clone()];
        for translated in self.translate_synonyms(&synonyms) {
            if translated != primary {
                candidates.push(translated);
            }
        }

        // 候选不足两条时，借助上下文词再取一条备选
        if candidates.len() < 2 {
            if let Some(bonus) = self.context_word_fallback(text) {
                if !candidates.contains(&bonus) {
                    candidates.push(bonus);
                }
            }
        }

        let mut candidates = dedup_exact(candidates);
        candidates.truncate(MAX_CANDIDATES);
        Ok(candidates)
    }

    /// 在固定大小的线程池上并行翻译同义词
    ///
    /// 结果按完成顺序收集，单个同义词翻译失败直接跳过，不重试。
    /// 线程池在返回前汇合，不跨调用保留任何并发状态。
    fn translate_synonyms(&self, words: &[String]) -> Vec<String> {
        if words.is_empty() {
            return Vec::new();
        }

        let direction = Direction::EnToZh;
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(SYNONYM_WORKERS)
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                // 线程池创建失败时退化为顺序翻译
                tracing::warn!("工作线程池创建失败，改为顺序翻译: {}", e);
                return words
                    .iter()
                    .filter_map(|word| {
                        self.translator
                            .translate(word, direction.source_lang(), direction.target_lang())
                            .ok()
                    })
                    .collect();
            }
        };

        let (tx, rx) = mpsc::channel();
        let translator = &self.translator;

        // 闭包持有发送端，池内任务各持有克隆；scope 汇合后所有发送端
        // 均已释放，接收端迭代随之终止
        pool.scope(move |scope| {
            for word in words {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    match translator.translate(
                        word,
                        direction.source_lang(),
                        direction.target_lang(),
                    ) {
                        Ok(translated) => {
                            let _ = tx.send(translated);
                        }
                        Err(e) => {
                            tracing::debug!("同义词翻译失败 ({}): {}", word, e);
                        }
                    }
                });
            }
        });

        rx.into_iter().collect()
    }

    /// 上下文词回退：翻译 "system <text>"，从结果中剥掉「系统」
    ///
    /// 这是针对单一提供商措辞的字符串手术，属于尽力而为的启发式，
    /// 不构成任何契约。剥离后不足两个字符的残余被丢弃。
    fn context_word_fallback(&self, text: &str) -> Option<String> {
        let direction = Direction::EnToZh;
        let prefixed = format!("system {}", text);
        let translated = self
            .translator
            .translate(&prefixed, direction.source_lang(), direction.target_lang())
            .ok()?;

        let stripped = strip_context_word(&translated);
        if stripped.chars().count() >= 2 {
            Some(stripped)
        } else {
            None
        }
    }
}

/// 大小写不敏感去重，保留首次出现及其原始大小写
fn dedup_case_insensitive(candidates: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();

    for candidate in candidates {
        let lower = candidate.to_lowercase();
        if !seen.contains(&lower) {
            seen.push(lower);
            result.push(candidate);
        }
    }

    result
}

/// 精确匹配去重，保留首次出现
fn dedup_exact(candidates: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();

    for candidate in candidates {
        if !result.contains(&candidate) {
            result.push(candidate);
        }
    }

    result
}

/// 从译文中剥掉字面的「系统」以及两侧的标点和空白
fn strip_context_word(translated: &str) -> String {
    translated
        .replace("系统", "")
        .trim_matches(|c: char| {
            c.is_whitespace()
                || c.is_ascii_punctuation()
                || matches!(c, '，' | '。' | '、' | '：' | '；' | '！' | '？' | '（' | '）')
        })
        .to_string()
}
