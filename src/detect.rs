//! 语言检测模块
//!
//! 通过 CJK 统一表意文字区间判断文本的翻译方向

/// 检查文本是否包含中文字符（U+4E00..=U+9FFF）
pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// 翻译方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 中文 -> 英文
    ZhToEn,
    /// 英文 -> 中文
    EnToZh,
}

impl Direction {
    /// 根据输入文本选择翻译方向。不含 CJK 字符的文本一律视为英文。
    pub fn detect(text: &str) -> Self {
        if contains_chinese(text) {
            Direction::ZhToEn
        } else {
            Direction::EnToZh
        }
    }

    /// 源语言代码
    pub fn source_lang(&self) -> &'static str {
        match self {
            Direction::ZhToEn => "zh-CN",
            Direction::EnToZh => "en",
        }
    }

    /// 目标语言代码
    pub fn target_lang(&self) -> &'static str {
        match self {
            Direction::ZhToEn => "en",
            Direction::EnToZh => "zh-CN",
        }
    }
}
