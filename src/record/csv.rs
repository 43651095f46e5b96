//! Delimited-text record parsing

use crate::error::{Error, Result};
use crate::record::types::{FlatRecord, Scalar};
use crate::sample::SampledObject;

/// Parsed contents of one delimited-text file
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    /// Column paths from the header row, in header order. Present even
    /// when no data rows follow, so a header-only file still contributes
    /// its columns to the schema.
    pub columns: Vec<String>,
    /// Flat records, one per non-empty data line.
    pub records: Vec<FlatRecord>,
}

/// Delimited-text parser with a required header row
#[derive(Debug, Clone)]
pub struct CsvParser {
    /// Field delimiter
    delimiter: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvParser {
    /// Create a parser with the default comma delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom delimiter.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse one sampled object into header columns plus flat records,
    /// one record per data line.
    ///
    /// The first line is the header and supplies the column paths. Cells
    /// stay raw text; only the empty cell is special-cased to null. Whether
    /// a cell holds a number or boolean is decided during classification.
    pub fn parse(&self, object: &SampledObject) -> Result<CsvDocument> {
        let text = std::str::from_utf8(&object.data)
            .map_err(|e| Error::csv_parse(object.identifier(), format!("invalid UTF-8: {e}")))?;

        let mut lines = text.lines();
        let header = match lines.next() {
            Some(line) => split_line(line, self.delimiter),
            None => {
                return Err(Error::csv_parse(object.identifier(), "missing header row"));
            }
        };

        let mut records = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_line(line, self.delimiter);
            let mut record = FlatRecord::new();
            for (idx, column) in header.iter().enumerate() {
                let value = match fields.get(idx) {
                    Some(field) if !field.is_empty() => Scalar::Text(field.clone()),
                    _ => Scalar::Null,
                };
                record.push(column.clone(), value);
            }
            records.push(record);
        }

        Ok(CsvDocument {
            columns: header,
            records,
        })
    }
}

/// Split a delimited line into fields, honoring quoted fields with `""`
/// escapes.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                in_quotes = true;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }

    fields.push(current.trim().to_string());
    fields
}
