//! Auth endpoints and serverless function calls.

use monolite_shared::{
    ApiError, AuthUser, OtpType, PasswordResetRequest, PasswordUpdateRequest, RefreshTokenRequest,
    Session, SignInRequest, VerifyOtpRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::BackendClient;

impl BackendClient {
    /// Sign in with an email/password pair.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        self.post_json(
            "/auth/v1/token?grant_type=password",
            &SignInRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Register a new account. Depending on backend configuration the
    /// response either carries a live session or a stub the user finishes
    /// through the confirmation email.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.post_json(
            "/auth/v1/signup",
            &SignInRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Exchange a refresh token for a new session.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, ApiError> {
        self.post_json(
            "/auth/v1/token?grant_type=refresh_token",
            &RefreshTokenRequest {
                refresh_token: refresh_token.to_string(),
            },
        )
        .await
    }

    /// Revoke the current session on the backend.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.post_json("/auth/v1/logout", &serde_json::json!({})).await
    }

    /// Fetch the user identified by the configured access token.
    pub async fn get_user(&self) -> Result<AuthUser, ApiError> {
        self.get_json("/auth/v1/user").await
    }

    /// Validate an access/refresh token pair delivered by a callback and
    /// turn it into a full session. The pair is only trusted after the
    /// backend confirms the access token by returning its user.
    pub async fn set_session(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<Session, ApiError> {
        let user = self
            .clone()
            .with_access_token(Some(access_token.to_string()))
            .get_user()
            .await?;
        Ok(Session {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
            token_type: "bearer".to_string(),
            expires_in: None,
            user,
        })
    }

    /// Exchange a one-time token hash (email confirmation, recovery,
    /// magic link) for a session.
    pub async fn verify_otp(
        &self,
        token_hash: &str,
        otp_type: OtpType,
    ) -> Result<Session, ApiError> {
        self.post_json(
            "/auth/v1/verify",
            &VerifyOtpRequest {
                otp_type: otp_type.as_str().to_string(),
                token_hash: token_hash.to_string(),
            },
        )
        .await
    }

    /// Change the signed-in user's password.
    pub async fn update_password(&self, new_password: &str) -> Result<AuthUser, ApiError> {
        self.put_json(
            "/auth/v1/user",
            &PasswordUpdateRequest {
                password: new_password.to_string(),
            },
        )
        .await
    }

    // --- Serverless functions ---

    /// Invoke a serverless function by name with a JSON body.
    pub async fn invoke_function<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        name: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        self.post_json(&format!("/functions/v1/{name}"), body).await
    }

    /// Ask the backend to send a password-reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.invoke_function(
            "send-password-reset-email",
            &PasswordResetRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    /// Verify an Apple identity token and sign the user in.
    pub async fn verify_apple_signin(&self, identity_token: &str) -> Result<Session, ApiError> {
        self.invoke_function(
            "verify-apple-signin",
            &serde_json::json!({ "identity_token": identity_token }),
        )
        .await
    }

    /// Permanently delete the signed-in user's account.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.invoke_function("delete-user-account", &serde_json::json!({}))
            .await
    }
}
