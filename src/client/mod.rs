use crate::auth::{AccessToken, READONLY_SCOPE, TokenCache, TokenProvider};
use crate::backend::{RawRows, SheetInfo, SheetsBackend};
use crate::error::SheetsError;
use crate::grid::{Cell, Matrix};
use crate::range::{normalize, parse_range_info};
use futures::executor::block_on;
use tracing::debug;

/// Read-only client over a spreadsheet API transport.
///
/// The transport and token provider are collaborators supplied at
/// construction; range interpretation and padding happen here, after the
/// fetches complete. Methods take `&mut self` because each fetch consults
/// the token cache and may refresh it.
#[derive(Debug)]
pub struct Sheets<B, P> {
    backend: B,
    tokens: TokenCache<P>,
    scope: String,
}

impl<B: SheetsBackend, P: TokenProvider> Sheets<B, P> {
    pub fn new(backend: B, provider: P) -> Self {
        Self {
            backend,
            tokens: TokenCache::new(provider),
            scope: READONLY_SCOPE.to_owned(),
        }
    }

    /// Override the OAuth scope requested from the token provider.
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_owned();
        self
    }

    /// Metadata for every sheet in a document.
    pub fn read_sheets(&mut self, spreadsheet_id: &str) -> Result<Vec<SheetInfo>, SheetsError> {
        let token = self.authorize()?;
        debug!(spreadsheet_id, "fetching sheet metadata");
        block_on(self.backend.spreadsheet(&token, spreadsheet_id))
    }

    /// Metadata for one sheet, looked up by its numeric id.
    pub fn read_sheet(
        &mut self,
        spreadsheet_id: &str,
        sheet_id: u64,
    ) -> Result<SheetInfo, SheetsError> {
        self.read_sheets(spreadsheet_id)?
            .into_iter()
            .find(|sheet| sheet.id == sheet_id)
            .ok_or(SheetsError::SheetNotFound { sheet_id })
    }

    /// Raw sparse rows for a whole sheet, exactly as the backend returned
    /// them: ragged, trailing empties omitted, no padding.
    pub fn read_values(
        &mut self,
        spreadsheet_id: &str,
        sheet_id: u64,
    ) -> Result<RawRows, SheetsError> {
        let sheet = self.read_sheet(spreadsheet_id, sheet_id)?;
        let token = self.authorize()?;
        debug!(title = %sheet.title, "fetching raw values");
        block_on(
            self.backend
                .values(&token, spreadsheet_id, Some(&sheet.title)),
        )
    }

    /// Fully padded cell matrix for a range of a sheet.
    ///
    /// `range` uses A1 notation: "B1:C2" bounds both corners, "A3:" extends
    /// from a start cell to the data's observed extent, and `None` (or any
    /// expression matching neither shape) covers the whole observed sheet.
    /// Every cell of the resolved rectangle is present in the result,
    /// whether or not the backend returned it.
    pub fn read_range(
        &mut self,
        spreadsheet_id: &str,
        sheet_id: u64,
        range: Option<&str>,
    ) -> Result<Matrix, SheetsError> {
        let sheet = self.read_sheet(spreadsheet_id, sheet_id)?;
        let request = match range {
            Some(expression) => format!("{}!{expression}", sheet.title),
            None => sheet.title.clone(),
        };

        let token = self.authorize()?;
        debug!(request = %request, "fetching range values");
        let raw = block_on(self.backend.values(&token, spreadsheet_id, Some(&request)))?;

        let descriptor = range.map(parse_range_info);
        normalize(&raw, descriptor.as_ref())
    }

    /// Non-empty cells of a range, in row-major order.
    pub fn read_cells(
        &mut self,
        spreadsheet_id: &str,
        sheet_id: u64,
        range: Option<&str>,
    ) -> Result<Vec<Cell>, SheetsError> {
        Ok(self
            .read_range(spreadsheet_id, sheet_id, range)?
            .into_cells())
    }

    fn authorize(&mut self) -> Result<AccessToken, SheetsError> {
        block_on(self.tokens.authorize(&self.scope))
    }
}
