use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cleaner::{clean, AccountBook};
use crate::error::{ConvertError, Result};
use crate::formats::{get_by_key, get_for_file};
use crate::loader;
use crate::models::CleanStats;
use crate::settings::load_overrides;
use crate::writer::write_csv;

pub fn run(file: &str, output: Option<&str>, format: Option<&str>) -> Result<()> {
    let input = PathBuf::from(file);
    let kind = match format {
        Some(key) => get_by_key(key).ok_or_else(|| ConvertError::UnknownFormat(key.to_string()))?,
        None => get_for_file(&input).ok_or_else(|| ConvertError::NoFormatDetected(file.to_string()))?,
    };
    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&input));

    let table = loader::load(&input, kind)?;
    let book = AccountBook::new(kind.profile(), load_overrides().for_format(kind.key()));
    let (rows, stats) = clean(&table, kind.profile(), &book)?;
    write_csv(&out_path, &rows)?;

    println!(
        "{}: {} rows read, {} written -> {}",
        kind.name(),
        stats.rows_in,
        stats.rows_out,
        out_path.display()
    );
    print_stats(&stats);
    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("bill");
    input.with_file_name(format!("{stem}_clean.csv"))
}

fn print_stats(stats: &CleanStats) {
    if stats.dropped_status > 0 {
        println!("  {} refunded/closed rows dropped", stats.dropped_status);
    }
    if stats.dropped_direction > 0 {
        println!("  {} non-cash rows dropped", stats.dropped_direction);
    }
    if stats.dropped_bad_timestamp > 0 {
        println!(
            "{}",
            format!(
                "  {} rows with unreadable timestamps dropped",
                stats.dropped_bad_timestamp
            )
            .yellow()
        );
    }
    if stats.bad_amounts > 0 {
        println!(
            "{}",
            format!(
                "  {} rows kept with an empty amount (unparsable source amount)",
                stats.bad_amounts
            )
            .yellow()
        );
    }
    if stats.unknown_directions > 0 {
        println!(
            "{}",
            format!(
                "  {} rows kept at zero (unrecognized direction label)",
                stats.unknown_directions
            )
            .yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_beside_input() {
        assert_eq!(
            default_output(Path::new("/tmp/bills/支付宝交易明细.csv")),
            PathBuf::from("/tmp/bills/支付宝交易明细_clean.csv")
        );
        assert_eq!(
            default_output(Path::new("账单.xlsx")),
            PathBuf::from("账单_clean.csv")
        );
    }
}
