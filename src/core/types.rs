// データファイルに保存される列車レコードの型定義

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// 列車1件分のレコード
///
/// 欠けているフィールドは空文字列・0・`None` として読み込む。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    /// 行き先
    #[serde(default)]
    pub dist: String,
    /// 出発時刻
    #[serde(default)]
    pub time: i64,
    /// 列車の種別
    #[serde(default)]
    pub typ: Option<String>,
}

impl Train {
    pub fn new(dist: impl Into<String>, time: i64, typ: Option<String>) -> Self {
        Self {
            dist: dist.into(),
            time,
            typ,
        }
    }

    /// 種別が完全一致するか（大文字小文字を区別）
    pub fn has_type(&self, typ: &str) -> bool {
        self.typ.as_deref() == Some(typ)
    }
}

/// データファイル配列の1要素
///
/// オブジェクトとして解釈できない要素は `Malformed` として元の値のまま保持し、
/// 保存時にもそのまま書き戻す。
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEntry {
    Record(Train),
    Malformed(Value),
}

impl StoreEntry {
    pub fn as_train(&self) -> Option<&Train> {
        match self {
            Self::Record(train) => Some(train),
            Self::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<Train> for StoreEntry {
    fn from(train: Train) -> Self {
        Self::Record(train)
    }
}

impl From<Value> for StoreEntry {
    fn from(value: Value) -> Self {
        // 配列からの構造体デシリアライズを避けるため、オブジェクトのみ変換を試みる
        if !value.is_object() {
            return Self::Malformed(value);
        }
        match Train::deserialize(&value) {
            Ok(train) => Self::Record(train),
            Err(_) => Self::Malformed(value),
        }
    }
}

impl Serialize for StoreEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Record(train) => train.serialize(serializer),
            Self::Malformed(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StoreEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}
