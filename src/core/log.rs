use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid regex"));

const OP_TARGET_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "settings" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" | "import" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;
        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let colored_op = color_for_operation(&e.operation)
                    .paint(e.operation.as_str())
                    .to_string();
                let op_target = if e.target.is_empty() {
                    colored_op
                } else {
                    format!("{colored_op} ({})", e.target)
                };
                (e.id, date, op_target, e.message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| strip_ansi(&r.2).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            let visible_len = strip_ansi(&op_target).chars().count();
            let shown = if visible_len > OP_TARGET_MAX {
                // Truncating would cut through the escape codes: re-paint plain text.
                let plain: String = strip_ansi(&op_target)
                    .chars()
                    .take(OP_TARGET_MAX - 3)
                    .collect();
                format!("{plain}...")
            } else {
                op_target
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                shown,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
