//! Docstring header extraction.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;

static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(author|date)\s*:\s*(.*?)\s*$").expect("field pattern is valid")
});

static PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[#\s]*Part\s+\d+\s*:\s*(.+?)[\s#]*$").expect("part pattern is valid")
});

const DELIMITERS: [&str; 2] = ["\"\"\"", "'''"];

/// Metadata found at the top of a lesson script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptHeader {
    pub title: String,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// `Part N:` banner headings, in file order.
    pub sections: Vec<String>,
}

/// Parse the header docstring and the lesson outline of `source`.
///
/// Leading blank lines and `#` comment lines (shebang, coding cookie) are
/// skipped; the first other line must open a `"""` or `'''` docstring.
///
/// # Errors
///
/// Returns `ParseError::MissingHeader`, `UnterminatedHeader`, `MissingTitle`,
/// or `InvalidDate` when the header does not follow that layout.
pub fn parse_header(source: &str) -> Result<ScriptHeader, ParseError> {
    let lines: Vec<&str> = source.lines().collect();

    let start = lines
        .iter()
        .position(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .ok_or(ParseError::MissingHeader)?;

    let opening = lines[start].trim_start();
    let delim = DELIMITERS
        .into_iter()
        .find(|d| opening.starts_with(d))
        .ok_or(ParseError::MissingHeader)?;

    let (body, end) = docstring_body(&lines, start, &opening[delim.len()..], delim)
        .ok_or(ParseError::UnterminatedHeader { line: start + 1 })?;

    let mut header = parse_docstring(&body)?;
    header.sections = lines[end + 1..]
        .iter()
        .filter_map(|line| PART_RE.captures(line.trim()))
        .map(|caps| caps[1].to_string())
        .collect();
    Ok(header)
}

/// Collect docstring lines up to the closing delimiter. Returns the lines
/// and the index of the closing line.
fn docstring_body<'a>(
    lines: &[&'a str],
    start: usize,
    first_rest: &'a str,
    delim: &str,
) -> Option<(Vec<&'a str>, usize)> {
    if let Some(pos) = first_rest.find(delim) {
        return Some((vec![&first_rest[..pos]], start));
    }

    let mut body = vec![first_rest];
    for (idx, line) in lines.iter().copied().enumerate().skip(start + 1) {
        if let Some(pos) = line.find(delim) {
            body.push(&line[..pos]);
            return Some((body, idx));
        }
        body.push(line);
    }
    None
}

fn parse_docstring(body: &[&str]) -> Result<ScriptHeader, ParseError> {
    let mut lines = body.iter().map(|line| line.trim()).filter(|line| !line.is_empty());
    let title = lines.next().ok_or(ParseError::MissingTitle)?.to_string();

    let mut prose = Vec::new();
    let mut author = None;
    let mut date = None;
    let mut in_trailer = false;

    for line in lines {
        if let Some(caps) = FIELD_RE.captures(line) {
            in_trailer = true;
            let value = caps[2].to_string();
            if caps[1].eq_ignore_ascii_case("author") {
                author = Some(value).filter(|v| !v.is_empty());
            } else {
                date = Some(parse_date(&value)?);
            }
        } else if !in_trailer {
            prose.push(line);
        }
    }

    Ok(ScriptHeader {
        title,
        summary: (!prose.is_empty()).then(|| prose.join(" ")),
        author,
        date,
        sections: Vec::new(),
    })
}

fn parse_date(value: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| ParseError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
