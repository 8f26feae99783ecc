use std::fmt;

/// Failure taxonomy for spreadsheet reads.
///
/// Transport failures pass through unchanged as `Backend`; everything else
/// is detected locally and fails fast with its specific kind rather than
/// degrading into a partially-filled matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetsError {
    /// Column-label codec given empty or non-letter input.
    InvalidLabel { label: String },
    /// A fully bound range was required but the expression has no bound shape.
    InvalidRangeExpression { expression: String },
    /// Metadata lookup found no sheet with the requested id.
    SheetNotFound { sheet_id: u64 },
    /// Opaque failure reported by the transport collaborator.
    Backend { message: String },
}

impl fmt::Display for SheetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLabel { label } => write!(f, "invalid column label '{label}'"),
            Self::InvalidRangeExpression { expression } => {
                write!(f, "'{expression}' does not describe a bound range")
            }
            Self::SheetNotFound { sheet_id } => write!(f, "no sheet with id {sheet_id}"),
            Self::Backend { message } => write!(f, "backend request failed: {message}"),
        }
    }
}

impl std::error::Error for SheetsError {}

#[cfg(test)]
mod tests {
    use super::SheetsError;

    #[test]
    fn display_names_the_offending_input() {
        let error = SheetsError::InvalidLabel {
            label: "A1".to_owned(),
        };
        assert_eq!(error.to_string(), "invalid column label 'A1'");

        let error = SheetsError::InvalidRangeExpression {
            expression: "A3:".to_owned(),
        };
        assert_eq!(error.to_string(), "'A3:' does not describe a bound range");

        let error = SheetsError::SheetNotFound { sheet_id: 42 };
        assert_eq!(error.to_string(), "no sheet with id 42");
    }
}
