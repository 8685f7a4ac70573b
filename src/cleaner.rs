use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{ConvertError, Result};
use crate::formats::{CategorySource, FormatProfile, StatusMatch};
use crate::models::{CleanRow, CleanStats, RawTable};

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Strip currency decoration (¥ glyphs, thousands commas) and parse as a
/// fixed-point decimal. None for anything unparsable; the row is kept with
/// an empty amount and the run summary reports the count.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim().trim_start_matches(['¥', '￥']).replace(',', "");
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(&s).ok()
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Reformat a source timestamp to the YYYY/MM/DD HH:MM the import layout
/// expects. None drops the row.
pub fn parse_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.format("%Y/%m/%d %H:%M").to_string());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Account mapping
// ---------------------------------------------------------------------------

/// Instrument-label → account-name lookup: user overrides first, then the
/// built-in table, then the format's default account. Both the empty label
/// and any unknown label collapse to the default.
pub struct AccountBook {
    overrides: HashMap<String, String>,
    builtin: &'static [(&'static str, &'static str)],
    default_account: &'static str,
}

impl AccountBook {
    pub fn new(profile: &FormatProfile, overrides: HashMap<String, String>) -> Self {
        Self {
            overrides,
            builtin: profile.account_map,
            default_account: profile.default_account,
        }
    }

    pub fn resolve(&self, label: &str) -> &str {
        let label = label.trim();
        if let Some(name) = self.overrides.get(label) {
            return name;
        }
        self.builtin
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, name)| *name)
            .unwrap_or(self.default_account)
    }
}

// ---------------------------------------------------------------------------
// The pipeline: filter, normalize, map, project
// ---------------------------------------------------------------------------

struct ColumnIndexes {
    time: usize,
    direction: usize,
    amount: usize,
    instrument: usize,
    status: usize,
    counterparty: usize,
    description: usize,
    reference: usize,
    category: Option<usize>,
}

fn resolve_columns(table: &RawTable, profile: &FormatProfile) -> Result<ColumnIndexes> {
    let find = |name: &str| {
        table
            .column(name)
            .ok_or_else(|| ConvertError::MissingColumn(name.to_string()))
    };
    let cols = &profile.columns;
    Ok(ColumnIndexes {
        time: find(cols.time)?,
        direction: find(cols.direction)?,
        amount: find(cols.amount)?,
        instrument: find(cols.instrument)?,
        status: find(cols.status)?,
        counterparty: find(cols.counterparty)?,
        description: find(cols.description)?,
        reference: find(cols.reference)?,
        category: match profile.category {
            CategorySource::Column(name) => Some(find(name)?),
            CategorySource::Direction => None,
        },
    })
}

fn status_dropped(status: &str, profile: &FormatProfile) -> bool {
    // An absent status never drops a row.
    if status.is_empty() {
        return false;
    }
    match profile.status_match {
        StatusMatch::Exact => profile.drop_status.iter().any(|s| *s == status),
        StatusMatch::Substring => profile.drop_status.iter().any(|s| status.contains(s)),
    }
}

pub fn clean(
    table: &RawTable,
    profile: &FormatProfile,
    accounts: &AccountBook,
) -> Result<(Vec<CleanRow>, CleanStats)> {
    let idx = resolve_columns(table, profile)?;
    let mut out = Vec::new();
    let mut stats = CleanStats::default();

    for row in &table.rows {
        stats.rows_in += 1;
        let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

        if status_dropped(field(idx.status).trim(), profile) {
            stats.dropped_status += 1;
            continue;
        }
        let direction = field(idx.direction).trim();
        if profile.drop_direction.iter().any(|d| *d == direction) {
            stats.dropped_direction += 1;
            continue;
        }
        let Some(date) = parse_timestamp(field(idx.time)) else {
            stats.dropped_bad_timestamp += 1;
            continue;
        };

        let sign = match profile.direction_sign(direction) {
            Some(sign) => sign,
            None => {
                // Unknown direction label: keep the row at zero, but count
                // it so the run summary can flag it.
                stats.unknown_directions += 1;
                0
            }
        };
        let amount = match parse_amount(field(idx.amount)) {
            Some(magnitude) => Some(magnitude * Decimal::from(sign)),
            None => {
                stats.bad_amounts += 1;
                None
            }
        };

        let category = match idx.category {
            Some(i) => field(i).to_string(),
            None => direction.to_string(),
        };

        out.push(CleanRow {
            date,
            category,
            counterparty: field(idx.counterparty).to_string(),
            description: field(idx.description).to_string(),
            amount,
            account: accounts.resolve(field(idx.instrument)).to_string(),
            reference: field(idx.reference).trim().to_string(),
        });
    }

    stats.rows_out = out.len();
    Ok((out, stats))
}
