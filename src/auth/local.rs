// Local sign-in without a real identity service
//
// Signing in creates a demo user and keeps it in the key-value store, so
// the next start picks it up again. Signing out deletes it.

use crate::auth::IdentityProvider;
use crate::core::ids::random_id;
use crate::db::{Database, User, USER_KEY};
use crate::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

const MOCK_NAME: &str = "Demo User";
const MOCK_EMAIL: &str = "user@example.com";
const MOCK_PHOTO_URL: &str = "https://i.pravatar.cc/150?img=60";

pub struct LocalMockProvider {
    db: Arc<Database>,
    user: Option<User>,
}

impl LocalMockProvider {
    /// Restore whatever user was stored last time
    pub async fn load(db: Arc<Database>) -> Result<Self> {
        let user = match db.get_item(USER_KEY).await? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Stored user is unreadable, signing out: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self { db, user })
    }

    fn mock_user() -> User {
        User {
            id: format!("user-{}", random_id(7)),
            name: MOCK_NAME.to_string(),
            email: MOCK_EMAIL.to_string(),
            photo_url: Some(MOCK_PHOTO_URL.to_string()),
        }
    }
}

impl IdentityProvider for LocalMockProvider {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    async fn sign_in(&mut self) -> Result<User> {
        let user = Self::mock_user();
        self.db
            .set_item(USER_KEY, &serde_json::to_string(&user)?)
            .await?;
        info!("Signed in locally as {}", user.id);

        self.user = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&mut self) -> Result<()> {
        self.db.remove_item(USER_KEY).await?;
        self.user = None;
        Ok(())
    }
}
