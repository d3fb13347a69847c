// データファイルパスの解決と .env の読み込み

use log::{debug, warn};
use std::path::{Path, PathBuf};

/// `--data` 未指定時に参照する環境変数
pub const DATA_ENV_VAR: &str = "SHOPS_DATA";

/// 実行ファイルと同じディレクトリに置く環境ファイル名
pub const ENV_FILE_NAME: &str = ".env";

/// データファイルのパスを決定する
///
/// フラグ値を優先し、なければ `lookup` で環境変数を参照する。
/// 空文字列は未指定として扱う。
pub fn resolve_data_path<F>(flag: Option<PathBuf>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    flag.filter(|path| !path.as_os_str().is_empty())
        .or_else(|| {
            lookup(DATA_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
}

/// プロセス環境変数を参照する `lookup`
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// 実行ファイルの隣にある `.env` のパス
pub fn default_env_file() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(ENV_FILE_NAME))
}

/// 環境ファイルが存在すれば読み込む。起動時に一度だけ呼ぶ
///
/// 既に設定済みの環境変数は上書きしない。読み込んだ場合は `true`。
pub fn load_env_file(path: &Path) -> bool {
    if !path.exists() {
        debug!("no environment file at {}", path.display());
        return false;
    }

    match dotenv::from_path(path) {
        Ok(()) => {
            debug!("loaded environment file {}", path.display());
            true
        }
        Err(e) => {
            warn!("environment file {} could not be loaded: {e}", path.display());
            false
        }
    }
}
