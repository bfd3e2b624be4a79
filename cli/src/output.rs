//! CLI output helpers for consistent formatting.

use colored::Colorize;
use sqlsteps_core::QueryResult;

pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

pub fn label(text: &str) -> String {
    format!("{}", text.bright_blue())
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

pub fn warning(text: &str) -> String {
    format!("{}", text.yellow())
}

pub fn err_line(text: &str) -> String {
    format!("{} {}", "Error".red().bold(), text)
}

pub fn status_ok() -> String {
    format!("{}", "OK".green())
}

pub fn status_error() -> String {
    format!("{}", "ERROR".red())
}

fn pad_row(values: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(v, &w)| format!("{v:<w$}"))
        .collect();
    format!("  {}", padded.join(" | ").trim_end())
}

/// Render rows as an aligned text table, indented by two spaces
pub fn table(result: &QueryResult) -> String {
    let cells: Vec<Vec<String>> = result
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = result.columns().iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = Vec::with_capacity(cells.len() + 2);
    out.push(label(&pad_row(result.columns(), &widths)));
    out.push(muted(&format!(
        "  {}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    )));
    for row in &cells {
        out.push(pad_row(row, &widths));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlsteps_core::Value;

    #[test]
    fn table_aligns_columns() {
        colored::control::set_override(false);
        let result = QueryResult::new(
            vec!["id".into(), "name".into()],
            vec![
                vec![Value::Integer(1), Value::from("alice")],
                vec![Value::Integer(22), Value::Null],
            ],
        );

        assert_eq!(
            table(&result),
            "  id | name\n  ---+------\n  1  | alice\n  22 | NULL"
        );
    }
}
