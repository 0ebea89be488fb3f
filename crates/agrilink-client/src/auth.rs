//! Auth lifecycle: login, registration, logout, and the account lookup.
//!
//! Login and registration are the only places a session comes into
//! existence. Both persist the record through the session store before
//! returning, so the next dispatch is already authenticated.

use crate::api::{ApiClient, ApiRequest};
use agrilink_core::Result;
use agrilink_core::auth::{Credentials, Registration};
use agrilink_core::session::{Session, UserAccount};
use serde::Deserialize;

#[derive(Deserialize)]
struct UserEnvelope {
    user: UserAccount,
}

impl ApiClient {
    /// Exchanges credentials for a session and persists it.
    ///
    /// Public endpoint: no bearer header goes out even when a stale
    /// session is still stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let request = ApiRequest::post("/auth/login").json(credentials)?.public();
        let session = self.request_json(request).await?;

        self.adopt_session(session)
    }

    /// Creates an account and persists the session it returns.
    pub async fn register(&self, registration: &Registration) -> Result<Session> {
        let request = ApiRequest::post("/auth/register")
            .json(registration)?
            .public();
        let session = self.request_json(request).await?;

        self.adopt_session(session)
    }

    /// Ends the local session.
    ///
    /// Purely client-side. The platform has no logout endpoint; the
    /// issued token simply ages out on the server.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        Ok(())
    }

    /// Returns the account behind the current token.
    pub async fn me(&self) -> Result<UserAccount> {
        let envelope: UserEnvelope = self.request_json(ApiRequest::get("/me")).await?;
        Ok(envelope.user)
    }

    /// Returns the locally stored session, if any.
    pub fn session(&self) -> Option<Session> {
        self.store.read()
    }

    fn adopt_session(&self, session: Session) -> Result<Session> {
        self.store.write(&session)?;
        Ok(session)
    }
}
