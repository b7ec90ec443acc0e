// Sign-in delegated to a third-party identity service
//
// The service itself is a black box behind SessionSource. This side only
// keeps the current user and the publishable key it was configured with.

use crate::auth::IdentityProvider;
use crate::db::User;
use crate::error::{PantryError, Result};
use std::sync::Arc;
use tracing::info;

/// Access to an external identity service
pub trait SessionSource: Send + Sync {
    /// User of an already active session, if any
    fn current_session(&self, publishable_key: &str) -> Option<User>;

    /// Run the service's sign-in flow
    fn begin_sign_in(&self, publishable_key: &str) -> Result<User>;

    /// End the active session
    fn end_session(&self, publishable_key: &str) -> Result<()>;
}

pub struct ExternalIdentityProvider {
    publishable_key: String,
    source: Arc<dyn SessionSource>,
    user: Option<User>,
}

impl ExternalIdentityProvider {
    pub fn new(publishable_key: &str, source: Arc<dyn SessionSource>) -> Result<Self> {
        if publishable_key.trim().is_empty() {
            return Err(PantryError::Auth(
                "external sign-in needs a publishable key".to_string(),
            ));
        }

        let user = source.current_session(publishable_key);
        Ok(Self {
            publishable_key: publishable_key.to_string(),
            source,
            user,
        })
    }

    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }
}

impl IdentityProvider for ExternalIdentityProvider {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    async fn sign_in(&mut self) -> Result<User> {
        let user = self.source.begin_sign_in(&self.publishable_key)?;
        info!("Signed in via identity provider as {}", user.id);
        self.user = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&mut self) -> Result<()> {
        self.source.end_session(&self.publishable_key)?;
        self.user = None;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory identity service for tests
    #[derive(Default)]
    pub(crate) struct FakeSessionSource {
        pub session: Mutex<Option<User>>,
        pub fail_sign_in: bool,
    }

    impl FakeSessionSource {
        pub(crate) fn user() -> User {
            User {
                id: "ext-42".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                photo_url: None,
            }
        }
    }

    impl SessionSource for FakeSessionSource {
        fn current_session(&self, _publishable_key: &str) -> Option<User> {
            self.session.lock().unwrap().clone()
        }

        fn begin_sign_in(&self, _publishable_key: &str) -> Result<User> {
            if self.fail_sign_in {
                return Err(PantryError::Auth("popup closed".to_string()));
            }
            let user = Self::user();
            *self.session.lock().unwrap() = Some(user.clone());
            Ok(user)
        }

        fn end_session(&self, _publishable_key: &str) -> Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    #[test]
    fn test_requires_key() {
        let source = Arc::new(FakeSessionSource::default());
        assert!(matches!(
            ExternalIdentityProvider::new(" ", source),
            Err(PantryError::Auth(_))
        ));
    }

    #[test]
    fn test_picks_up_existing_session() {
        let source = Arc::new(FakeSessionSource::default());
        *source.session.lock().unwrap() = Some(FakeSessionSource::user());

        let provider = ExternalIdentityProvider::new("pk_test", source).unwrap();
        assert_eq!(provider.current_user().map(|u| u.id.as_str()), Some("ext-42"));
        assert_eq!(provider.publishable_key(), "pk_test");
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let source = Arc::new(FakeSessionSource::default());
        let mut provider = ExternalIdentityProvider::new("pk_test", source.clone()).unwrap();
        assert!(!provider.is_authenticated());

        let user = provider.sign_in().await.unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(provider.is_authenticated());

        provider.sign_out().await.unwrap();
        assert!(provider.current_user().is_none());
        assert!(source.session.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_signed_out() {
        let source = Arc::new(FakeSessionSource {
            fail_sign_in: true,
            ..Default::default()
        });
        let mut provider = ExternalIdentityProvider::new("pk_test", source).unwrap();

        assert!(provider.sign_in().await.is_err());
        assert!(provider.current_user().is_none());
    }
}
