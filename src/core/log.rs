use crate::db::log::{LogEntry, list_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

/// Width limit of the "operation (target)" column.
const OP_COLUMN_MAX: usize = 60;

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap_or_else(|e| panic!("invalid ANSI pattern: {e}"))
});

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "extract" => Colour::Green,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

/// "extract (/tmp/itinerary.txt)", cut to [`OP_COLUMN_MAX`] visible characters.
fn op_target_cell(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let truncated = if visible.chars().count() > OP_COLUMN_MAX {
        let mut s: String = visible.chars().take(OP_COLUMN_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    // only the operation word is colored
    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = list_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let cells: Vec<String> = entries.iter().map(op_target_cell).collect();
        let op_w = cells
            .iter()
            .map(|c| strip_ansi(c).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_COLUMN_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, cell) in entries.iter().zip(&cells) {
            // padding calcolato senza ANSI
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(cell).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                cell,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
