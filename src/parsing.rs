use memmap2::Mmap;
use std::fs::File;
use std::io::BufRead;
use tracing::debug;

use crate::error::{AnalyzeError, Result};
use crate::sample::{Sample, SampleBuilder};

/// Reads `<x> <density>` rows until EOF and validates them into a [`Sample`].
pub fn read_sample<R: BufRead>(mut reader: R) -> Result<Sample> {
    let mut builder = SampleBuilder::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        push_line(&mut builder, line_no, decode_line(line_no, raw)?)?;
    }

    debug!(rows = builder.len(), "read sample");
    builder.finish()
}

/// Parses a file using mmap, applying the same validation as [`read_sample`].
pub fn read_file_mmap(file: &File) -> Result<Sample> {
    if file.metadata()?.len() == 0 {
        return Err(AnalyzeError::EmptyInput);
    }

    // SAFETY: the mapping is read-only and dropped before returning; a
    // concurrent truncation of the file is outside what we guard against.
    let mmap = unsafe { Mmap::map(file)? };
    let mut builder = SampleBuilder::new();

    let mut lines = mmap.split(|&b| b == b'\n').enumerate().peekable();
    while let Some((idx, raw)) = lines.next() {
        // The piece after a final newline is not a line.
        if raw.is_empty() && lines.peek().is_none() {
            break;
        }
        push_line(&mut builder, idx + 1, decode_line(idx + 1, raw)?)?;
    }

    debug!(rows = builder.len(), "read mapped file");
    builder.finish()
}

/// Splits a line into exactly two numeric tokens.
pub fn parse_line(line_no: usize, line: &str) -> Result<(f64, f64)> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(density), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(AnalyzeError::Columns {
            line: line_no,
            found: line.split_whitespace().count(),
        });
    };

    Ok((parse_number(line_no, x)?, parse_number(line_no, density)?))
}

/// Parses a finite decimal number; trailing garbage, `inf` and `nan` are rejected.
fn parse_number(line_no: usize, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnalyzeError::Conversion {
            line: line_no,
            token: token.to_string(),
        }),
    }
}

/// Bytes that are not UTF-8 cannot hold a number, so they fail conversion.
fn decode_line(line_no: usize, raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|_| AnalyzeError::Conversion {
        line: line_no,
        token: String::from_utf8_lossy(raw).into_owned(),
    })
}

fn push_line(builder: &mut SampleBuilder, line_no: usize, line: &str) -> Result<()> {
    let (x, density) = parse_line(line_no, line)?;
    builder.push(line_no, x, density)
}
