//! # Record Value Object
//!
//! 挿入順を保持するキー・値のペア列

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 順序付きの文字列レコード
///
/// マニフェストの行、レポートのデータ行、合計ブロックに使用する。
/// JSONへはキーの挿入順を保ったオブジェクトとしてシリアライズされる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// ヘッダと値を位置で対応付ける。短い方に揃えて切り詰める。
    ///
    /// キーが重複する場合は最初の位置に後の値が入る（[`Record::insert`] と同じ）。
    pub fn zip<K, V>(keys: &[K], values: &[V]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::new();
        for (k, v) in keys.iter().zip(values.iter()) {
            record.insert(k.as_ref(), v.as_ref());
        }
        record
    }

    /// 値を設定する。既存のキーなら位置はそのままで値だけ置き換える。
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// ヘッダ内で最初に重複している列名を返す
pub fn first_duplicate<K: AsRef<str>>(keys: &[K]) -> Option<&str> {
    let names: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
    names
        .iter()
        .enumerate()
        .find(|(i, name)| names[..*i].contains(*name))
        .map(|(_, name)| *name)
}

/// マニフェストの1行（全レコードが同じヘッダ由来のキー集合を持つ）
pub type ManifestRecord = Record;

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
