//! Comma-delimited numeric text, read and written the way numpy's
//! `genfromtxt` / `savetxt` lay it out.
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};

/// Reads every row of a numeric CSV file. Blank lines and `#` comments are
/// skipped; all rows must have the same number of fields.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<f64>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row = record
            .iter()
            .map(|field| parse_field(path, line, field))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads all values of a numeric CSV file in row-major order, whether the
/// file holds a single column or a single row.
pub fn read_values(path: &Path) -> Result<Vec<f64>> {
    Ok(read_rows(path)?.into_iter().flatten().collect())
}

/// Writes rows with `%.18e` formatting, matching `numpy.savetxt(..., delimiter=',')`.
pub fn write_rows<R: AsRef<[f64]>>(path: &Path, rows: &[R]) -> Result<()> {
    let mut text = String::new();
    for row in rows {
        let line: Vec<String> = row.as_ref().iter().map(|&v| format_savetxt(v)).collect();
        text.push_str(&line.join(","));
        text.push('\n');
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// `%.18e`: 18 fractional digits, signed exponent of at least two digits.
pub fn format_savetxt(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "nan".to_string()
        } else if v > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    let s = format!("{v:.18e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

fn parse_field(path: &Path, line: u64, field: &str) -> Result<f64> {
    field.parse::<f64>().map_err(|_| Error::Parse {
        path: path.to_path_buf(),
        line,
        field: field.to_string(),
    })
}

fn csv_error(path: &Path, source: csv::Error) -> Error {
    if !source.is_io_error() {
        return Error::Csv {
            path: path.to_path_buf(),
            source,
        };
    }
    match source.into_kind() {
        csv::ErrorKind::Io(e) => Error::io(path, e),
        kind => Error::Csv {
            path: path.to_path_buf(),
            source: std::io::Error::other(format!("{kind:?}")).into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "hpo_gain_matrix_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn format_savetxt_matches_numpy() {
        assert_eq!(format_savetxt(95.0), "9.500000000000000000e+01");
        assert_eq!(format_savetxt(0.0), "0.000000000000000000e+00");
        assert_eq!(format_savetxt(1500.0), "1.500000000000000000e+03");
        assert_eq!(format_savetxt(-0.25), "-2.500000000000000000e-01");
        assert_eq!(format_savetxt(1e-120), "1.000000000000000000e-120");
    }

    #[test]
    fn savetxt_text_parses_back_exactly() {
        for v in [1.0 / 3.0, 505.0 / 3.0, 751.5, 2.5, 1e-300, 123456.789] {
            let back: f64 = format_savetxt(v).parse().unwrap();
            assert_eq!(back.to_bits(), v.to_bits(), "{v}");
        }
    }

    #[test]
    fn read_rows_skips_blank_and_comment_lines() {
        let path = unique_path("rows.csv");
        fs::write(&path, "# header\n1.0, 2.0\n\n3e0,4\n").unwrap();
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn read_values_flattens_single_row_or_column() {
        let col = unique_path("col.csv");
        let row = unique_path("row.csv");
        fs::write(&col, "1\n2\n3\n").unwrap();
        fs::write(&row, "1,2,3\n").unwrap();
        assert_eq!(read_values(&col).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(read_values(&row).unwrap(), vec![1.0, 2.0, 3.0]);
        let _ = fs::remove_file(&col);
        let _ = fs::remove_file(&row);
    }

    #[test]
    fn read_rows_reports_bad_field() {
        let path = unique_path("bad.csv");
        fs::write(&path, "1,2\n3,oops\n").unwrap();
        match read_rows(&path) {
            Err(Error::Parse { line, field, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(field, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = unique_path("missing.csv");
        assert!(matches!(read_rows(&path), Err(Error::Io { .. })));
    }
}
