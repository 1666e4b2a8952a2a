#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned text table: header line, dashed divider, one line per row.
///
/// When `max_width` is set, the widest columns are shrunk (never below the
/// header width) and long cells end in `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = pad(&truncate(cell, *width), *width);
                if options.color {
                    colorize_state(cell, &text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

/// Color completion-state cells; padding stays outside the escape codes.
fn colorize_state(raw: &str, padded: &str) -> String {
    let code = match raw {
        "complete" => "32",
        "in_progress" => "33",
        "abandoned_but_useful" => "36",
        _ => return padded.to_string(),
    };
    let Some(trailing) = padded.strip_prefix(raw) else {
        return padded.to_string();
    };
    format!("\u{1b}[{code}m{raw}\u{1b}[0m{trailing}")
}
