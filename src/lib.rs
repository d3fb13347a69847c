pub mod cli;
pub mod config;
pub mod core;
pub mod storage;
pub mod trains;

use crate::cli::{execute_add, execute_display, execute_select, AddConfig, Cli, Commands};
use crate::core::StaffError;
use crate::storage::{local::JsonFileStore, RecordStore};
use crate::trains::SAVED_MESSAGE;
use anyhow::Context;
use log::debug;
use std::io::Write;

// ストアを直接所有するジェネリックなApp構造体
pub struct App<S>
where
    S: RecordStore,
{
    pub store: S,
}

impl<S> App<S>
where
    S: RecordStore,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// レコードを読み込んでサブコマンドを実行する
    ///
    /// サブコマンドがなくても読み込みは行う。保存は変更系コマンドの後のみ。
    pub fn run<W: Write>(&self, command: Option<Commands>, out: &mut W) -> anyhow::Result<()> {
        let records = self.store.load().context("Failed to load trains")?;

        let Some(command) = command else {
            debug!("no subcommand given, nothing to do");
            return Ok(());
        };

        let is_dirty = command.is_mutating();
        let records = match command {
            Commands::Add { name, time, typ, .. } => {
                execute_add(records, AddConfig { name, time, typ })
            }
            Commands::Display { .. } => {
                execute_display(&records, out)?;
                records
            }
            Commands::Select {
                selected_trains, ..
            } => {
                execute_select(&records, &selected_trains, out)?;
                records
            }
        };

        if is_dirty {
            self.store.save(&records).context("Failed to save trains")?;
            writeln!(out, "{SAVED_MESSAGE}")?;
        }

        Ok(())
    }
}

/// パース済みの引数からデータファイルを解決してコマンドを実行する
///
/// パスが解決できなければ `StaffError::MissingDataPath` を返す。
pub fn run<F, W>(cli: Cli, lookup: F, out: &mut W) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let path =
        config::resolve_data_path(cli.data_flag(), lookup).ok_or(StaffError::MissingDataPath)?;
    debug!("using data file {}", path.display());

    App::new(JsonFileStore::new(path)).run(cli.command, out)
}
