use crate::error::SheetsError;
use chrono::{DateTime, Utc};
use tracing::debug;

/// OAuth scope for read-only spreadsheet access.
pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Bearer token plus the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub secret: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            secret: secret.into(),
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Issues access tokens for a scope.
///
/// Implementations own the actual credential exchange (service-account JWT,
/// OAuth, a fixture); the library only decides when to ask again.
#[allow(async_fn_in_trait)]
pub trait TokenProvider {
    async fn issue(&self, scope: &str) -> Result<AccessToken, SheetsError>;
}

/// Explicit token cache.
///
/// Keeps the last issued token and goes back to the provider once it has
/// expired. Scoped per client instance; there is no global state.
#[derive(Debug)]
pub struct TokenCache<P> {
    provider: P,
    cached: Option<AccessToken>,
}

impl<P: TokenProvider> TokenCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cached: None,
        }
    }

    /// Current token, re-issued through the provider if absent or expired.
    pub async fn authorize(&mut self, scope: &str) -> Result<AccessToken, SheetsError> {
        let now = Utc::now();
        if let Some(token) = &self.cached {
            if !token.is_expired_at(now) {
                return Ok(token.clone());
            }
            debug!(scope, "cached access token expired");
        }

        let token = self.provider.issue(scope).await?;
        self.cached = Some(token.clone());
        Ok(token)
    }
}

/// Provider that hands out a preconfigured token.
///
/// Stands in for a real credential exchange in tests and offline fixtures.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

impl TokenProvider for StaticTokenProvider {
    async fn issue(&self, _scope: &str) -> Result<AccessToken, SheetsError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessToken, StaticTokenProvider, TokenCache, TokenProvider};
    use crate::error::SheetsError;
    use chrono::{Duration, Utc};
    use futures::executor::block_on;
    use std::cell::Cell;

    struct CountingProvider {
        issued: Cell<usize>,
        lifetime: Duration,
    }

    impl TokenProvider for CountingProvider {
        async fn issue(&self, scope: &str) -> Result<AccessToken, SheetsError> {
            let count = self.issued.get() + 1;
            self.issued.set(count);
            Ok(AccessToken::new(
                format!("{scope}#{count}"),
                Utc::now() + self.lifetime,
            ))
        }
    }

    #[test]
    fn unexpired_token_is_reused() {
        let provider = CountingProvider {
            issued: Cell::new(0),
            lifetime: Duration::hours(1),
        };
        let mut cache = TokenCache::new(provider);

        let first = block_on(cache.authorize("scope")).expect("authorize");
        let second = block_on(cache.authorize("scope")).expect("authorize");
        assert_eq!(first, second);
        assert_eq!(cache.provider.issued.get(), 1);
    }

    #[test]
    fn expired_token_is_reissued() {
        let provider = CountingProvider {
            issued: Cell::new(0),
            lifetime: Duration::hours(-1),
        };
        let mut cache = TokenCache::new(provider);

        let first = block_on(cache.authorize("scope")).expect("authorize");
        let second = block_on(cache.authorize("scope")).expect("authorize");
        assert_ne!(first.secret, second.secret);
        assert_eq!(cache.provider.issued.get(), 2);
    }

    #[test]
    fn static_provider_repeats_its_token() {
        let token = AccessToken::new("fixed", Utc::now() + Duration::hours(1));
        let provider = StaticTokenProvider::new(token.clone());
        assert_eq!(block_on(provider.issue("any")), Ok(token));
    }
}
