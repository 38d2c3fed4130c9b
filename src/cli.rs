// Command line shell: builds the request, runs the batch, renders results
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};

use kwdensity::config::{DEFAULT_KEYWORDS, DEFAULT_OUTPUT_FILE, KEYWORDS_ENV, OUTPUT_ENV};
use kwdensity::document::{expand_paths, read_documents};
use kwdensity::{process_loaded, table_view, ReportOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "kwdensity",
    author,
    version,
    about = "Count keyword occurrences and densities in PDF documents"
)]
pub struct Cli {
    /// PDF files, or directories of PDF files, processed in the order given
    pub paths: Vec<PathBuf>,

    /// Comma separated keywords or phrases to count
    #[arg(short, long, env = KEYWORDS_ENV, default_value = DEFAULT_KEYWORDS)]
    pub keywords: String,

    /// Hide the percentage columns
    #[arg(long)]
    pub no_percent: bool,

    /// Hide the total_words column
    #[arg(long)]
    pub no_total: bool,

    /// Write a CSV export; name the file with `-o=FILE`, a bare `-o` writes
    /// ket_qua_phan_tich.csv
    #[arg(
        short,
        long,
        env = OUTPUT_ENV,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_OUTPUT_FILE
    )]
    pub output: Option<PathBuf>,

    /// Write the CSV export without a UTF-8 byte-order marker
    #[arg(long)]
    pub no_bom: bool,

    /// How results are printed to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            show_percent: !self.no_percent,
            show_total_words: !self.no_total,
            csv_bom: !self.no_bom,
        }
    }

    pub fn run(self) -> Result<()> {
        let paths = expand_paths(&self.paths).context("failed to list input paths")?;
        let documents = read_documents(&paths);

        let report = match process_loaded(&documents, &self.keywords, self.report_options()) {
            Ok(report) => report,
            Err(err) => {
                // validation problems are warnings, not crashes
                eprintln!("warning: {err}");
                return Ok(());
            }
        };

        for failure in &report.failures {
            eprintln!("error: file {}: {}", failure.filename, failure.message);
        }

        if report.table.is_empty() {
            eprintln!("warning: no document produced results");
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Table => {
                write!(out, "{}", table_view::render(&report.table))?;
                writeln!(out)?;
                write!(out, "{}", table_view::render_summary(&report.table))?;
            }
            OutputFormat::Csv => report.table.write_csv(&mut out, false)?,
            OutputFormat::Json => writeln!(out, "{}", report.table.to_json()?)?,
        }
        out.flush()?;

        if let Some(path) = &self.output {
            report
                .table
                .save_csv(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("CSV written to {}", path.display());
            eprintln!("CSV written to {}", path.display());
        }

        Ok(())
    }
}
