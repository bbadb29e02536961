use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::utils::table::visible_len;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 48;

/// ANSI colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "break_start" | "break_end" => Colour::Yellow,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                // op and target share one column, only the op is coloured
                let plain = if target.is_empty() {
                    operation.clone()
                } else {
                    format!("{operation} ({target})")
                };
                let plain = truncate_visible(&plain, MAX_OP_WIDTH);
                let colored = match plain.split_once(' ') {
                    Some((op, rest)) => format!("{} {rest}", color_for_operation(&operation).paint(op)),
                    None => color_for_operation(&operation).paint(plain.as_str()).to_string(),
                };

                (id, date, operation, colored, message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| visible_len(&r.3))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, _operation, colored, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(visible_len(&colored)));
            println!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
