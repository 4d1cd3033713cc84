// 缓存存储的持久化集成测试
//
// 验证磁盘往返、重载、覆盖写入、损坏文件回退以及文件格式约定。

mod common;

use std::fs;

use common::temp_cache;
use fanyi::cache::CacheStore;

#[test]
fn round_trip_survives_reload_from_disk() {
    let (dir, mut store) = temp_cache();
    store.put("你好", "hello, hi");
    store.put("world", "世界");
    let path = store.path().to_path_buf();
    drop(store);

    let reloaded = CacheStore::load(path);
    assert_eq!(reloaded.get("你好"), Some("hello, hi"));
    assert_eq!(reloaded.get("world"), Some("世界"));
    assert_eq!(reloaded.len(), 2);
    drop(dir);
}

#[test]
fn overwrite_persists_latest_value() {
    let (_dir, mut store) = temp_cache();
    store.put("hello", "你好");
    store.put("hello", "您好");
    let path = store.path().to_path_buf();

    let reloaded = CacheStore::load(path);
    assert_eq!(reloaded.get("hello"), Some("您好"));
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn cache_file_is_pretty_printed_utf8() {
    let (_dir, mut store) = temp_cache();
    store.put("你好", "hello");

    let contents = fs::read_to_string(store.path()).unwrap();
    // 两空格缩进的 JSON 对象，非 ASCII 字符原样保留
    assert!(contents.starts_with("{\n  "));
    assert!(contents.contains("你好"));
    assert!(!contents.contains("\\u"));
}

#[test]
fn corrupt_file_falls_back_to_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".translate_cache.json");
    fs::write(&path, "not valid json {{{").unwrap();

    let store = CacheStore::load(path);
    assert!(store.is_empty());
}

#[test]
fn corrupt_file_is_recovered_on_next_put() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".translate_cache.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let mut store = CacheStore::load(path.clone());
    store.put("hello", "你好");

    let reloaded = CacheStore::load(path);
    assert_eq!(reloaded.get("hello"), Some("你好"));
}

#[test]
fn unwritable_path_degrades_silently() {
    // 目录不存在时写入失败，但 put 不应恐慌，内存中的条目仍可读
    let missing = std::env::temp_dir().join("fanyi-no-such-dir").join("cache.json");
    let mut store = CacheStore::load(missing);
    store.put("hello", "你好");
    assert_eq!(store.get("hello"), Some("你好"));
}

#[test]
fn stats_reflect_entry_count_and_path() {
    let (_dir, mut store) = temp_cache();
    assert_eq!(store.stats().entries, 0);

    store.put("a", "甲");
    store.put("b", "乙");

    let stats = store.stats();
    assert_eq!(stats.entries, 2);
    assert!(stats.path.ends_with(".translate_cache.json"));
}
