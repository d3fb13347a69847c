// 列車レコード管理のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// ライブラリ全体で使用するエラー型
#[derive(Error, Debug)]
pub enum StaffError {
    #[error("The data file name is absent")]
    MissingDataPath,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON array", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("failed to serialize records: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl StaffError {
    /// I/Oエラーの作成
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// パースエラーの作成
    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn not_an_array(path: impl AsRef<Path>) -> Self {
        Self::NotAnArray {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }
}

/// ライブラリの結果型
pub type StaffResult<T> = std::result::Result<T, StaffError>;
