// Configuration constants and per-invocation options for kwdensity
//
// There is no config file: everything comes from flags or the environment.

pub const DEFAULT_KEYWORDS: &str = "doanh thu, lợi nhuận, tăng trưởng";
pub const DEFAULT_OUTPUT_FILE: &str = "ket_qua_phan_tich.csv";

// Environment overrides picked up by the CLI
pub const KEYWORDS_ENV: &str = "KWDENSITY_KEYWORDS";
pub const OUTPUT_ENV: &str = "KWDENSITY_OUTPUT";

// Column naming
pub const FILENAME_COLUMN: &str = "filename";
pub const TOTAL_WORDS_COLUMN: &str = "total_words";
pub const PERCENT_SUFFIX: &str = " (%)";

// Percentages are rounded to this many decimal places
pub const PERCENT_DECIMALS: i32 = 4;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Which columns a report carries and how it is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub show_percent: bool,
    pub show_total_words: bool,
    /// Prefix CSV exports with a UTF-8 byte-order marker so spreadsheet
    /// tools pick the right encoding for accented keywords.
    pub csv_bom: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_percent: true,
            show_total_words: true,
            csv_bom: true,
        }
    }
}
