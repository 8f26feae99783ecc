pub mod memory;

pub use memory::{InMemoryBackend, SpreadsheetFixture};

use crate::auth::AccessToken;
use crate::error::SheetsError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sparse row values as the API returns them: rows may be ragged, and
/// trailing empty cells or whole trailing empty rows may be missing.
pub type RawRows = Vec<Vec<String>>;

/// Metadata for one sheet of a spreadsheet document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetInfo {
    pub id: u64,
    pub title: String,
    pub row_count: usize,
    pub col_count: usize,
}

/// Map a spreadsheet-metadata response body to the fields the client needs.
///
/// The API nests them as `sheets[].properties` with the grid dimensions one
/// level further down in `gridProperties`; transports hand the whole body
/// here instead of each repeating the traversal.
pub fn sheet_infos_from_response(body: &Value) -> Result<Vec<SheetInfo>, SheetsError> {
    let sheets = body
        .get("sheets")
        .and_then(Value::as_array)
        .ok_or_else(|| SheetsError::Backend {
            message: "metadata response has no sheets list".to_owned(),
        })?;
    sheets.iter().map(sheet_info_from_entry).collect()
}

fn sheet_info_from_entry(entry: &Value) -> Result<SheetInfo, SheetsError> {
    let missing = |field: &str| SheetsError::Backend {
        message: format!("sheet entry is missing '{field}'"),
    };

    let properties = entry.get("properties").ok_or_else(|| missing("properties"))?;
    let grid = properties
        .get("gridProperties")
        .ok_or_else(|| missing("gridProperties"))?;

    Ok(SheetInfo {
        id: properties
            .get("sheetId")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing("sheetId"))?,
        title: properties
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| missing("title"))?
            .to_owned(),
        row_count: grid
            .get("rowCount")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing("rowCount"))? as usize,
        col_count: grid
            .get("columnCount")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing("columnCount"))? as usize,
    })
}

/// Transport collaborator for the spreadsheet API.
///
/// `values` responses are anchored at A1: `rows[0][0]` is the sheet's first
/// cell even when the request range names a smaller window. A transport may
/// use the window to bound how much it fetches, but must not re-anchor the
/// rows it returns. Failures are reported as [`SheetsError::Backend`] and
/// pass through to callers unchanged.
#[allow(async_fn_in_trait)]
pub trait SheetsBackend {
    /// Sheet metadata for every sheet in a document.
    async fn spreadsheet(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
    ) -> Result<Vec<SheetInfo>, SheetsError>;

    /// Raw values for a request range ("Title" or "Title!A1:B2").
    /// `None` reads the document's first sheet.
    async fn values(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
        range: Option<&str>,
    ) -> Result<RawRows, SheetsError>;
}

#[cfg(test)]
mod tests {
    use super::{SheetInfo, sheet_infos_from_response};
    use crate::error::SheetsError;
    use serde_json::json;

    #[test]
    fn maps_nested_metadata_to_sheet_infos() {
        let body = json!({
            "sheets": [
                {
                    "properties": {
                        "sheetId": 807_593_019u64,
                        "title": "Sheet1",
                        "gridProperties": { "rowCount": 10, "columnCount": 3 }
                    }
                },
                {
                    "properties": {
                        "sheetId": 5u64,
                        "title": "Totals",
                        "gridProperties": { "rowCount": 1000, "columnCount": 26 }
                    }
                }
            ]
        });

        let infos = sheet_infos_from_response(&body).expect("map metadata");
        assert_eq!(
            infos[0],
            SheetInfo {
                id: 807_593_019,
                title: "Sheet1".to_owned(),
                row_count: 10,
                col_count: 3,
            }
        );
        assert_eq!(infos[1].title, "Totals");
        assert_eq!(infos[1].col_count, 26);
    }

    #[test]
    fn missing_fields_are_backend_errors() {
        let no_sheets = json!({ "spreadsheetId": "abc" });
        assert_eq!(
            sheet_infos_from_response(&no_sheets),
            Err(SheetsError::Backend {
                message: "metadata response has no sheets list".to_owned()
            })
        );

        let no_grid = json!({
            "sheets": [ { "properties": { "sheetId": 1u64, "title": "Sheet1" } } ]
        });
        assert_eq!(
            sheet_infos_from_response(&no_grid),
            Err(SheetsError::Backend {
                message: "sheet entry is missing 'gridProperties'".to_owned()
            })
        );
    }
}
