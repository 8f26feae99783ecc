use crate::auth::AccessToken;
use crate::backend::{RawRows, SheetInfo, SheetsBackend};
use crate::error::SheetsError;
use chrono::Utc;
use std::collections::HashMap;

/// Fixture document: sheet metadata plus raw values keyed by sheet title.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetFixture {
    sheets: Vec<SheetInfo>,
    values: HashMap<String, RawRows>,
}

impl SpreadsheetFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, info: SheetInfo, rows: RawRows) -> Self {
        self.values.insert(info.title.clone(), rows);
        self.sheets.push(info);
        self
    }
}

/// Transport backed by in-process fixtures.
///
/// Stands in for the HTTP transport in tests and offline use while
/// enforcing the same conventions: tokens must be unexpired, request
/// ranges are "Title" or "Title!A1:B2", and returned rows are anchored at
/// A1 no matter what window the range names.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    documents: HashMap<String, SpreadsheetFixture>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, id: &str, fixture: SpreadsheetFixture) -> Self {
        self.documents.insert(id.to_owned(), fixture);
        self
    }

    fn document(&self, spreadsheet_id: &str) -> Result<&SpreadsheetFixture, SheetsError> {
        self.documents
            .get(spreadsheet_id)
            .ok_or_else(|| SheetsError::Backend {
                message: format!("spreadsheet '{spreadsheet_id}' not found"),
            })
    }
}

fn check_token(token: &AccessToken) -> Result<(), SheetsError> {
    if token.is_expired_at(Utc::now()) {
        return Err(SheetsError::Backend {
            message: "access token expired".to_owned(),
        });
    }
    Ok(())
}

impl SheetsBackend for InMemoryBackend {
    async fn spreadsheet(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
    ) -> Result<Vec<SheetInfo>, SheetsError> {
        check_token(token)?;
        Ok(self.document(spreadsheet_id)?.sheets.clone())
    }

    async fn values(
        &self,
        token: &AccessToken,
        spreadsheet_id: &str,
        range: Option<&str>,
    ) -> Result<RawRows, SheetsError> {
        check_token(token)?;
        let document = self.document(spreadsheet_id)?;

        let title = match range {
            Some(request) => request.split_once('!').map_or(request, |(title, _)| title),
            None => document
                .sheets
                .first()
                .map(|sheet| sheet.title.as_str())
                .ok_or_else(|| SheetsError::Backend {
                    message: format!("spreadsheet '{spreadsheet_id}' has no sheets"),
                })?,
        };

        document
            .values
            .get(title)
            .cloned()
            .ok_or_else(|| SheetsError::Backend {
                message: format!("no values for sheet '{title}'"),
            })
    }
}
