/// Authentication module
///
/// One interface over two identity backends: a locally stored demo user,
/// or an external identity service. The backend is chosen once at startup.

pub mod external;
pub mod local;

pub use external::{ExternalIdentityProvider, SessionSource};
pub use local::LocalMockProvider;

use crate::config::Config;
use crate::db::{Database, User};
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Who is signed in, and how to change that
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    fn current_user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    async fn sign_in(&mut self) -> Result<User>;

    async fn sign_out(&mut self) -> Result<()>;
}

/// The identity backend picked for this run
pub enum AuthProvider {
    External(ExternalIdentityProvider),
    LocalMock(LocalMockProvider),
}

impl AuthProvider {
    /// Use the external service when a key is configured and a session
    /// source is available, otherwise fall back to local sign-in.
    pub async fn select(
        config: &Config,
        db: Arc<Database>,
        source: Option<Arc<dyn SessionSource>>,
    ) -> Result<Self> {
        match (&config.identity_key, source) {
            (Some(key), Some(source)) => {
                debug!("Using external identity provider");
                Ok(AuthProvider::External(ExternalIdentityProvider::new(
                    key, source,
                )?))
            }
            _ => {
                debug!("Using local mock identity provider");
                Ok(AuthProvider::LocalMock(LocalMockProvider::load(db).await?))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AuthProvider::External(_) => "external",
            AuthProvider::LocalMock(_) => "local",
        }
    }
}

impl IdentityProvider for AuthProvider {
    fn current_user(&self) -> Option<&User> {
        match self {
            AuthProvider::External(p) => p.current_user(),
            AuthProvider::LocalMock(p) => p.current_user(),
        }
    }

    async fn sign_in(&mut self) -> Result<User> {
        match self {
            AuthProvider::External(p) => p.sign_in().await,
            AuthProvider::LocalMock(p) => p.sign_in().await,
        }
    }

    async fn sign_out(&mut self) -> Result<()> {
        match self {
            AuthProvider::External(p) => p.sign_out().await,
            AuthProvider::LocalMock(p) => p.sign_out().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::external::tests::FakeSessionSource;
    use super::*;
    use std::path::PathBuf;

    fn config(identity_key: Option<&str>) -> Config {
        Config {
            db_path: PathBuf::from(":memory:"),
            identity_key: identity_key.map(|k| k.to_string()),
        }
    }

    #[tokio::test]
    async fn test_select_local_without_key() {
        let db = Arc::new(Database::new_test().await.unwrap());
        let source: Arc<dyn SessionSource> = Arc::new(FakeSessionSource::default());

        let provider = AuthProvider::select(&config(None), db, Some(source))
            .await
            .unwrap();
        assert_eq!(provider.kind(), "local");
    }

    #[tokio::test]
    async fn test_select_local_without_source() {
        let db = Arc::new(Database::new_test().await.unwrap());

        let provider = AuthProvider::select(&config(Some("pk_test")), db, None)
            .await
            .unwrap();
        assert_eq!(provider.kind(), "local");
    }

    #[tokio::test]
    async fn test_select_external() {
        let db = Arc::new(Database::new_test().await.unwrap());
        let source: Arc<dyn SessionSource> = Arc::new(FakeSessionSource::default());

        let mut provider = AuthProvider::select(&config(Some("pk_test")), db, Some(source))
            .await
            .unwrap();
        assert_eq!(provider.kind(), "external");

        let user = provider.sign_in().await.unwrap();
        assert_eq!(provider.current_user(), Some(&user));
    }

    #[tokio::test]
    async fn test_local_round_trip_through_enum() {
        let db = Arc::new(Database::new_test().await.unwrap());
        let mut provider = AuthProvider::select(&config(None), db, None).await.unwrap();

        provider.sign_in().await.unwrap();
        assert!(provider.is_authenticated());
        provider.sign_out().await.unwrap();
        assert!(!provider.is_authenticated());
    }
}
