use rust_decimal::Decimal;

/// A bill export after preamble stripping, all cells kept as strings so
/// downstream parsing stays explicit.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// One transaction after filtering and normalization, ready for projection
/// into the 12-column output.
#[derive(Debug, Clone)]
pub struct CleanRow {
    /// YYYY/MM/DD HH:MM
    pub date: String,
    pub category: String,
    pub counterparty: String,
    pub description: String,
    /// Signed amount; None when the source amount did not parse.
    pub amount: Option<Decimal>,
    pub account: String,
    pub reference: String,
}

/// Per-run counters, printed after a conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanStats {
    pub rows_in: usize,
    pub dropped_status: usize,
    pub dropped_direction: usize,
    pub dropped_bad_timestamp: usize,
    pub bad_amounts: usize,
    pub unknown_directions: usize,
    pub rows_out: usize,
}
