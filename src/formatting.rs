use std::io::{self, Write};

use crate::stats::StatisticsReport;

/// Width of every column in the report tables.
pub const FIELD_WIDTH: usize = 12;
/// Significant digits printed for each statistic.
pub const PRECISION: usize = 8;

/// Formats like C's `%.<precision>g`: fixed or scientific notation depending on
/// the exponent, with trailing zeros removed.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits can bump the exponent (9.99.. -> 1.0e1),
    // so take it from the rounded scientific form.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Header row: `#` followed by right-aligned labels.
pub fn header_row(labels: &[&str]) -> String {
    let cells: Vec<String> = labels
        .iter()
        .map(|label| format!("{:>width$}", label, width = FIELD_WIDTH))
        .collect();
    format!("#{}", cells.join(" "))
}

/// Data row: a leading space followed by right-aligned values.
pub fn value_row(values: &[f64]) -> String {
    let cells: Vec<String> = values
        .iter()
        .map(|&v| format!("{:>width$}", format_general(v, PRECISION), width = FIELD_WIDTH))
        .collect();
    format!(" {}", cells.join(" "))
}

/// Header and value rows of the moments, quartiles and mode/normalization tables.
pub fn report_lines(report: &StatisticsReport) -> Vec<String> {
    let tables: [(&[&str], &[f64]); 3] = [
        (
            &["ave_x", "stddev", "variance", "skew", "kurtosis"],
            &[
                report.mean(),
                report.std_dev(),
                report.variance(),
                report.skewness(),
                report.kurtosis(),
            ],
        ),
        (
            &["1Q", "2Q(median)", "3Q"],
            &[report.q1(), report.median(), report.q3()],
        ),
        (
            &["mode", "normalization"],
            &[report.mode(), report.normalization()],
        ),
    ];

    tables
        .iter()
        .flat_map(|(labels, values)| [header_row(labels), value_row(values)])
        .collect()
}

/// Writes the report tables to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &StatisticsReport) -> io::Result<()> {
    for line in report_lines(report) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Renders the whole report into a string.
pub fn render_report(report: &StatisticsReport) -> String {
    let mut rendered = String::new();
    for line in report_lines(report) {
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered
}
