use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Could not detect the bill format of {0} (pass --format)")]
    NoFormatDetected(String),

    #[error("Expected column not found: {0}")]
    MissingColumn(String),

    #[error("File ends inside the {0}-row preamble")]
    TruncatedPreamble(usize),

    #[cfg(feature = "wechat")]
    #[error("XLSX error: {0}")]
    Xlsx(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert_via_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/账单.csv")?)
        }
        assert!(matches!(read_missing().unwrap_err(), ConvertError::Io(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConvertError::UnknownFormat("venmo".to_string()).to_string(),
            "Unknown format: venmo"
        );
        assert_eq!(
            ConvertError::MissingColumn("金额".to_string()).to_string(),
            "Expected column not found: 金额"
        );
        assert_eq!(
            ConvertError::TruncatedPreamble(24).to_string(),
            "File ends inside the 24-row preamble"
        );
    }
}
