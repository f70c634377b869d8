//! Parser for diagram job lines.
//!
//! A job line names the output file followed by `key=value` pairs:
//!
//! ```text
//! RingBuffer.svg read=4 write=10 contents="ABCDEFGHIJK"
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{DiagramJob, RingDiagram};

lazy_static! {
    static ref RE_JOB: Regex = Regex::new(r"^\s*(\S+\.svg)(?:\s+(.*))?$").unwrap();
    static ref RE_PAIR: Regex = Regex::new(r#"(\w+)=("(?:[^"\\]|\\.)*"|[^\s"]+)"#).unwrap();
}

/// Parse one job line
pub fn parse_job(line: &str) -> Result<DiagramJob, String> {
    let caps = RE_JOB
        .captures(line)
        .ok_or_else(|| format!("Expected an output file ending in .svg: {:?}", line.trim()))?;
    let output = caps[1].to_string();
    let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    let leftover = RE_PAIR.replace_all(rest, "");
    if !leftover.trim().is_empty() {
        return Err(format!("Unexpected text in job: {:?}", leftover.trim()));
    }

    let mut read = None;
    let mut write = None;
    let mut contents = None;

    for pair in RE_PAIR.captures_iter(rest) {
        let key = &pair[1];
        let value = &pair[2];
        match key {
            "read" => set_once(&mut read, key, parse_index(key, value)?)?,
            "write" => set_once(&mut write, key, parse_index(key, value)?)?,
            "contents" => set_once(&mut contents, key, unquote(value))?,
            _ => return Err(format!("Unknown key '{}'", key)),
        }
    }

    let read_index = read.ok_or_else(|| format!("Missing read= in job for {}", output))?;
    let write_index = write.ok_or_else(|| format!("Missing write= in job for {}", output))?;

    Ok(DiagramJob {
        output,
        diagram: RingDiagram {
            read_index,
            write_index,
            contents,
        },
    })
}

/// Parse several lines, skipping blanks and `#` comments
pub fn parse_jobs(text: &str) -> Result<Vec<DiagramJob>, String> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(parse_job)
        .collect()
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("Duplicate key '{}'", key));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_index(key: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{} must be a non-negative integer, got '{}'", key, value))
}

/// Strip surrounding quotes and resolve `\"` and `\\`
fn unquote(value: &str) -> String {
    let inner = match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(inner) => inner,
        None => return value.to_string(),
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
