use expertdb_core::envelope::Envelope;
use expertdb_core::models::auth::{LoginRequest, LoginResponse, TokenRefresh};

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

/// Message returned when a refresh succeeds without yielding a token.
pub const MSG_REFRESH_FAILED: &str = "Failed to refresh token";

impl ApiClient {
    /// `POST /auth/login`. On success the token and user are stored in the
    /// session.
    pub async fn login(&self, email: &str, password: &str) -> Envelope<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: Envelope<LoginResponse> = self
            .request(RequestDescriptor::post("/auth/login").json(&body))
            .await;

        if let Some(login) = envelope.data() {
            match serde_json::to_string(&login.user) {
                Ok(user_json) => {
                    self.session().begin(&login.token, &user_json);
                    tracing::info!(user_id = login.user.id, "Logged in");
                }
                Err(e) => tracing::error!(error = %e, "Failed to serialize user profile"),
            }
        }
        envelope
    }

    /// Forget the stored credentials. Local only; the backend is not called.
    pub fn logout(&self) {
        self.session().end();
        tracing::info!("Logged out");
    }

    /// `POST /auth/refresh`. On success the stored token is replaced.
    pub async fn refresh_token(&self) -> Envelope<TokenRefresh> {
        let envelope: Envelope<TokenRefresh> =
            self.request(RequestDescriptor::post("/auth/refresh")).await;

        let token = envelope
            .data()
            .map(|refresh| refresh.token.clone())
            .filter(|token| !token.trim().is_empty());

        match token {
            Some(token) => {
                self.session().set_token(&token);
                envelope
            }
            None => Envelope::failure(MSG_REFRESH_FAILED),
        }
    }
}
