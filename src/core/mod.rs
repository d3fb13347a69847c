// コアレイヤー - レコード型とエラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{StaffError, StaffResult};
pub use types::{StoreEntry, Train};
