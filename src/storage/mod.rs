use crate::core::{StaffResult, StoreEntry};
use mockall::automock;

pub mod local;

/// レコード永続化バックエンドのトレイト
#[automock]
pub trait RecordStore {
    /// 保存先にデータが存在するかチェック
    fn exists(&self) -> bool;

    /// 全レコードを読み込む。保存先が存在しなければ空を返す
    fn load(&self) -> StaffResult<Vec<StoreEntry>>;

    /// 全レコードを書き込む（上書き）
    fn save(&self, records: &[StoreEntry]) -> StaffResult<()>;
}
