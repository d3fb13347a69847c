// 列車リストに対するコマンドハンドラ
// 出力先は io::Write で受け取り、テストからは Vec<u8> に書き出す

use crate::core::{StoreEntry, Train};
use std::io::{self, Write};

pub const EMPTY_LIST_MESSAGE: &str = "Список поездов пуст";
pub const NO_SUCH_TYPE_MESSAGE: &str = "Такого типа нет!";
pub const SAVED_MESSAGE: &str = "Данные сохранены";
pub const INVALID_RECORD_MESSAGE: &str = "Error: Invalid train format.";

const HEADER_LABELS: [&str; 4] = ["No", "Пункт назначения", "время поезда", "Тип поезда"];

/// レコードを末尾に追加して返す
pub fn add(
    mut records: Vec<StoreEntry>,
    dist: impl Into<String>,
    time: i64,
    typ: Option<String>,
) -> Vec<StoreEntry> {
    records.push(StoreEntry::from(Train::new(dist, time, typ)));
    records
}

fn separator() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(4),
        "-".repeat(30),
        "-".repeat(20),
        "-".repeat(15)
    )
}

/// 全レコードを表形式で出力する
///
/// 空の場合はメッセージのみ。不正な要素はその行にエラー行を出して続行する。
pub fn display<W: Write>(records: &[StoreEntry], out: &mut W) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "{EMPTY_LIST_MESSAGE}")?;
        return Ok(());
    }

    let line = separator();
    let [no, dist, time, typ] = HEADER_LABELS;
    writeln!(out, "{line}")?;
    writeln!(out, "| {no:^4} | {dist:^30} | {time:^20} | {typ:^15} |")?;
    writeln!(out, "{line}")?;

    for (idx, entry) in records.iter().enumerate() {
        match entry {
            StoreEntry::Record(train) => writeln!(
                out,
                "| {:>4} | {:<30} | {:<20} | {:>15} |",
                idx + 1,
                train.dist,
                train.time,
                train.typ.as_deref().unwrap_or(""),
            )?,
            StoreEntry::Malformed(_) => writeln!(out, "{INVALID_RECORD_MESSAGE}")?,
        }
    }

    writeln!(out, "{line}")
}

/// 種別が完全一致するレコードを抽出する
pub fn select<'a>(records: &'a [StoreEntry], typ: &str) -> Vec<&'a Train> {
    records
        .iter()
        .filter_map(StoreEntry::as_train)
        .filter(|train| train.has_type(typ))
        .collect()
}

/// `select` の結果を簡易形式で出力する
pub fn print_selection<W: Write>(matches: &[&Train], out: &mut W) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "{NO_SUCH_TYPE_MESSAGE}");
    }

    for train in matches {
        writeln!(out, " | {:<5} | {:<5} ", train.dist, train.time)?;
    }
    Ok(())
}
