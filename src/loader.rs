use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::formats::{FormatKind, FormatProfile};
use crate::models::RawTable;

/// Strip the parenthesis characters the exports mix into header text, so
/// 金额(元) and 金额（元） both resolve as 金额元.
fn normalize_header(raw: &str) -> String {
    raw.replace(['（', '(', ')', '）'], "").trim().to_string()
}

pub fn load(file_path: &Path, kind: FormatKind) -> Result<RawTable> {
    match kind {
        #[cfg(feature = "wechat")]
        FormatKind::WechatPay => load_xlsx(file_path, kind.profile()),
        FormatKind::Alipay => load_delimited(file_path, kind.profile()),
    }
}

// ---------------------------------------------------------------------------
// Delimited text (Alipay)
// ---------------------------------------------------------------------------

/// Skip the fixed preamble by raw line, before any CSV parsing, the same way
/// the export is documented: N lines of boilerplate, then the header.
fn skip_preamble(content: &str, skip: usize) -> Result<&str> {
    let mut rest = content;
    for _ in 0..skip {
        match rest.find('\n') {
            Some(i) => rest = &rest[i + 1..],
            None => return Err(ConvertError::TruncatedPreamble(skip)),
        }
    }
    Ok(rest)
}

fn load_delimited(file_path: &Path, profile: &FormatProfile) -> Result<RawTable> {
    let content = std::fs::read_to_string(file_path)?;
    let rest = skip_preamble(&content, profile.skip_rows)?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rest.as_bytes());

    let mut records = rdr.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Err(ConvertError::TruncatedPreamble(profile.skip_rows)),
    };
    let headers: Vec<String> = header.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    Ok(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// XLSX (WeChat Pay)
// ---------------------------------------------------------------------------

#[cfg(feature = "wechat")]
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(feature = "wechat")]
fn load_xlsx(file_path: &Path, profile: &FormatProfile) -> Result<RawTable> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto(file_path)
        .map_err(|e| ConvertError::Xlsx(format!("Failed to open XLSX: {e}")))?;
    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::Xlsx("Workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| ConvertError::Xlsx(format!("Failed to read sheet: {e}")))?;

    let mut data_rows = range.rows().skip(profile.skip_rows);
    let header = data_rows
        .next()
        .ok_or(ConvertError::TruncatedPreamble(profile.skip_rows))?;
    let headers: Vec<String> = header
        .iter()
        .map(|c| normalize_header(&cell_to_string(c)))
        .collect();

    let mut rows = Vec::new();
    for row in data_rows {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        rows.push(cells);
    }
    Ok(RawTable { headers, rows })
}
