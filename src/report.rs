// Result aggregation: rows, summaries and delimited export
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::config::{
    ReportOptions, FILENAME_COLUMN, PERCENT_SUFFIX, TOTAL_WORDS_COLUMN, UTF8_BOM,
};
use crate::counter::CountResult;

/// One processed document
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub filename: String,
    pub total_words: usize,
    pub counts: IndexMap<String, usize>,
    pub percents: IndexMap<String, f64>,
}

impl Row {
    pub fn new(filename: impl Into<String>, result: CountResult) -> Self {
        Self {
            filename: filename.into(),
            total_words: result.total_words,
            counts: result.counts,
            percents: result.percents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell<'a> {
    Text(&'a str),
    Count(usize),
    Percent(f64),
}

impl Cell<'_> {
    pub fn numeric(&self) -> Option<f64> {
        match *self {
            Cell::Text(_) => None,
            Cell::Count(n) => Some(n as f64),
            Cell::Percent(p) => Some(p),
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Count(n) => write!(f, "{n}"),
            // already rounded, so shortest form prints at most four decimals
            Cell::Percent(p) => write!(f, "{p}"),
        }
    }
}

pub type Record<'a> = IndexMap<String, Cell<'a>>;

/// Rows in processing order plus the options deciding which columns show.
#[derive(Debug, Clone)]
pub struct Table {
    options: ReportOptions,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            options,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of `total_words` over every row
    pub fn total_words(&self) -> usize {
        self.rows.iter().map(|row| row.total_words).sum()
    }

    /// Named cells for one row. Later keys overwrite earlier ones in place,
    /// so a keyword spelled like a fixed column takes over that column.
    pub fn record<'a>(&self, row: &'a Row) -> Record<'a> {
        let mut record = IndexMap::new();
        record.insert(FILENAME_COLUMN.to_string(), Cell::Text(&row.filename));
        if self.options.show_total_words {
            record.insert(TOTAL_WORDS_COLUMN.to_string(), Cell::Count(row.total_words));
        }
        for (keyword, &count) in &row.counts {
            record.insert(keyword.clone(), Cell::Count(count));
        }
        if self.options.show_percent {
            for (keyword, &percent) in &row.percents {
                record.insert(format!("{keyword}{PERCENT_SUFFIX}"), Cell::Percent(percent));
            }
        }
        record
    }

    pub fn records(&self) -> Vec<Record<'_>> {
        self.rows.iter().map(|row| self.record(row)).collect()
    }

    /// Column names in first-seen order across all rows
    pub fn columns(&self) -> Vec<String> {
        let mut columns = IndexSet::new();
        for record in self.records() {
            columns.extend(record.into_keys());
        }
        columns.into_iter().collect()
    }

    /// Indices of the rows holding the largest value in a numeric column.
    /// Ties all count. Empty for text columns and unknown names.
    pub fn column_max(&self, column: &str) -> Vec<usize> {
        let values: Vec<Option<f64>> = self
            .records()
            .iter()
            .map(|record| record.get(column).and_then(Cell::numeric))
            .collect();

        let Some(max) = values.iter().flatten().copied().reduce(f64::max) else {
            return Vec::new();
        };
        values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == Some(max))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn write_csv<W: Write>(&self, out: &mut W, bom: bool) -> io::Result<()> {
        if bom {
            out.write_all(UTF8_BOM)?;
        }

        let columns = self.columns();
        let header: Vec<Cow<'_, str>> = columns.iter().map(|c| csv_field(c)).collect();
        writeln!(out, "{}", header.join(","))?;

        for record in self.records() {
            let fields: Vec<String> = columns
                .iter()
                .map(|column| match record.get(column) {
                    Some(cell) => csv_field(&cell.to_string()).into_owned(),
                    None => String::new(),
                })
                .collect();
            writeln!(out, "{}", fields.join(","))?;
        }
        Ok(())
    }

    /// CSV text without a byte-order marker
    pub fn to_csv(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf, false)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_csv(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_csv(&mut out, self.options.csv_bom)?;
        out.flush()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records())
    }
}

/// Quote a field when it holds a delimiter, quote or line break
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
