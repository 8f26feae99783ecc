use crate::error::SheetsError;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(\d+):(?:([A-Za-z]+)(\d+))?$").expect("range grammar compiles")
});

/// One corner of a range. `None` fields mean "unbounded, infer from data".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RangeEndpoint {
    pub col: Option<String>,
    pub row: Option<usize>,
}

/// Parsed range expression.
///
/// Corners keep the order they were written in ("C5:A1" stays reversed
/// here); the normalizer sorts them exactly once when it resolves the
/// matrix origin and dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RangeDescriptor {
    pub from: RangeEndpoint,
    pub to: RangeEndpoint,
}

impl RangeDescriptor {
    /// Fully unbounded descriptor: dimensions come entirely from the data.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.from == RangeEndpoint::default() && self.to == RangeEndpoint::default()
    }

    /// Both corners fully populated.
    pub fn is_bounded(&self) -> bool {
        self.from.col.is_some()
            && self.from.row.is_some()
            && self.to.col.is_some()
            && self.to.row.is_some()
    }
}

/// Classify a range expression into a descriptor.
///
/// Recognizes two shapes: "A1:B2" populates both corners, "A3:" populates
/// only `from`. Anything else (empty string, bare sheet title, malformed
/// text, row number 0) yields a fully unbounded descriptor rather than an
/// error, signalling "infer entirely from data".
pub fn parse_range_info(expression: &str) -> RangeDescriptor {
    classify(expression).unwrap_or_default()
}

/// Parse an expression that must name both corners.
///
/// Open-ended and unmatched expressions are an error here; callers that can
/// fall back to inference use [`parse_range_info`] instead.
pub fn parse_bounded_range(expression: &str) -> Result<RangeDescriptor, SheetsError> {
    let descriptor = parse_range_info(expression);
    if descriptor.is_bounded() {
        Ok(descriptor)
    } else {
        Err(SheetsError::InvalidRangeExpression {
            expression: expression.to_owned(),
        })
    }
}

fn classify(expression: &str) -> Option<RangeDescriptor> {
    let captures = RANGE_PATTERN.captures(expression)?;

    let from = RangeEndpoint {
        col: Some(captures[1].to_owned()),
        row: Some(parse_row(&captures[2])?),
    };
    let to = match (captures.get(3), captures.get(4)) {
        (Some(col), Some(row)) => RangeEndpoint {
            col: Some(col.as_str().to_owned()),
            row: Some(parse_row(row.as_str())?),
        },
        _ => RangeEndpoint::default(),
    };

    Some(RangeDescriptor { from, to })
}

fn parse_row(digits: &str) -> Option<usize> {
    digits.parse().ok().filter(|row| *row >= 1)
}
