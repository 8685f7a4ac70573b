use std::path::Path;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::CleanRow;

/// The 12-column layout Firefly III's CSV importer is configured for. Column
/// order and count are a hard contract; the `_ignore` slots stay empty.
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "date_transaction",
    "category-name",
    "opposing-name",
    "_ignore1",
    "description",
    "_ignore2",
    "amount_negated",
    "account-name",
    "_ignore3",
    "internal_reference",
    "_ignore4",
    "_ignore5",
];

/// Render a signed amount the way the original exports did: at least one
/// decimal place, trailing zeros dropped (15.00 -> 15.0, 15.55 -> 15.55).
pub fn format_amount(amount: Decimal) -> String {
    let n = amount.normalize();
    if n.scale() == 0 {
        format!("{n}.0")
    } else {
        n.to_string()
    }
}

pub fn write_csv(path: &Path, rows: &[CleanRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        let amount = row.amount.map(format_amount).unwrap_or_default();
        wtr.write_record([
            row.date.as_str(),
            row.category.as_str(),
            row.counterparty.as_str(),
            "",
            row.description.as_str(),
            "",
            amount.as_str(),
            row.account.as_str(),
            "",
            row.reference.as_str(),
            "",
            "",
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_row() -> CleanRow {
        CleanRow {
            date: "2024/01/02 10:00".to_string(),
            category: "餐饮".to_string(),
            counterparty: "某餐厅".to_string(),
            description: "午餐".to_string(),
            amount: Some(dec("15.00")),
            account: "余额宝".to_string(),
            reference: "ABC123".to_string(),
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("15.00")), "15.0");
        assert_eq!(format_amount(dec("15.55")), "15.55");
        assert_eq!(format_amount(dec("-5.10")), "-5.1");
        assert_eq!(format_amount(dec("0")), "0.0");
        assert_eq!(format_amount(dec("100")), "100.0");
    }

    #[test]
    fn test_write_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &[sample_row()]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date_transaction,category-name,opposing-name,_ignore1,description,_ignore2,\
             amount_negated,account-name,_ignore3,internal_reference,_ignore4,_ignore5"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024/01/02 10:00,餐饮,某餐厅,,午餐,,15.0,余额宝,,ABC123,,"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_unparsable_amount_writes_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let row = CleanRow {
            amount: None,
            ..sample_row()
        };
        write_csv(&path, &[row]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content
            .lines()
            .any(|l| l == "2024/01/02 10:00,餐饮,某餐厅,,午餐,,,余额宝,,ABC123,,"));
    }

    #[test]
    fn test_every_row_has_twelve_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &[sample_row()]).unwrap();
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), 12);
        for record in rdr.records() {
            assert_eq!(record.unwrap().len(), 12);
        }
    }
}
