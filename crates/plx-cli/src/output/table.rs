/// Minimum column width, so short headers like `id` do not produce slivers.
const MIN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(cell, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_status(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Right-align numbers, left-align everything else.
fn pad(value: &str, width: usize, numeric: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if numeric {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap an already padded cell in an ANSI color chosen from its plain text.
fn colorize_status(padded: &str, text: &str) -> String {
    let code = match text.trim().to_ascii_lowercase().as_str() {
        "success" | "completed" | "approved" | "deployed" | "true" | "authenticated" => "32",
        "queued" | "running" | "pending" => "33",
        "failed" | "rejected" | "cancelled" | "false" => "31",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, colorize_status, looks_numeric, render_entity_table, truncate_text};

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_text("payments-api", 8), "payment…");
        assert_eq!(truncate_text("api", 8), "api");
        assert_eq!(truncate_text("api", 1), "…");
    }

    #[test]
    fn numbers_are_right_aligned() {
        let table = render_entity_table(
            &["service", "cost"],
            &[vec!["EC2".into(), "1200.5".into()], vec!["S3".into(), "3".into()]],
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let last = table.lines().last().expect("row");
        assert!(last.ends_with("     3"));
        assert!(looks_numeric("1,200.50"));
        assert!(!looks_numeric("-"));
    }

    #[test]
    fn narrow_terminal_shrinks_widest_column() {
        let table = render_entity_table(
            &["id", "message"],
            &[vec!["b-1".into(), "x".repeat(80)]],
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn statuses_are_colored_by_outcome() {
        assert_eq!(colorize_status("failed ", "failed"), "\u{1b}[31mfailed \u{1b}[0m");
        assert!(colorize_status("success", "success").starts_with("\u{1b}[32m"));
        assert_eq!(colorize_status("payments", "payments"), "payments");
    }
}
