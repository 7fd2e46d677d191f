//! Data models for the Monolite HR backend tables and auth endpoints.
//!
//! Field names follow the backend's column names directly (snake_case), so
//! the default serde representation matches the wire format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Auth ---

/// The authenticated user as reported by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// A backend-issued session: the access/refresh token pair plus the user it
/// identifies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// The `type` parameter accepted by the one-time-code verification endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OtpType {
    Signup,
    Recovery,
    Magiclink,
    EmailChange,
}

impl OtpType {
    /// Strict parse of the raw `type` string from a callback payload.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "signup" => Some(Self::Signup),
            "recovery" => Some(Self::Recovery),
            "magiclink" => Some(Self::Magiclink),
            "email_change" => Some(Self::EmailChange),
            _ => None,
        }
    }

    /// Lenient parse: unrecognized strings fall back to `Signup`.
    pub fn parse(raw: &str) -> Self {
        Self::from_raw(raw).unwrap_or(Self::Signup)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Recovery => "recovery",
            Self::Magiclink => "magiclink",
            Self::EmailChange => "email_change",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(rename = "type")]
    pub otp_type: String,
    pub token_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordUpdateRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

// --- Notifications ---

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    System,
    WorkHours,
    Request,
    Document,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub kind: NotificationKind,
    /// Set when the user has read the notification; unread while `None`.
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}

// --- Work hours ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkHourLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub work_date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkHourLog {
    pub user_id: Uuid,
    pub work_date: NaiveDate,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// --- Material and leave requests ---

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item: String,
    pub quantity: i32,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMaterialRequest {
    pub user_id: Uuid,
    pub item: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    #[default]
    Vacation,
    Sick,
    Personal,
    Unpaid,
}

impl LeaveKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::Sick => "Sick leave",
            Self::Personal => "Personal",
            Self::Unpaid => "Unpaid",
        }
    }

    pub const ALL: [LeaveKind; 4] = [
        LeaveKind::Vacation,
        LeaveKind::Sick,
        LeaveKind::Personal,
        LeaveKind::Unpaid,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    pub user_id: Uuid,
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// --- Profile and documents ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeProfile {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeProfile {
    /// Full name when known, falling back to the account email.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub mime: Option<String>,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

// --- Invitations ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInvitationRequest {
    pub invitation_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcceptInvitationResponse {
    pub accepted: bool,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_type_round_trips_known_values() {
        for otp in [
            OtpType::Signup,
            OtpType::Recovery,
            OtpType::Magiclink,
            OtpType::EmailChange,
        ] {
            assert_eq!(OtpType::from_raw(otp.as_str()), Some(otp));
        }
    }

    #[test]
    fn otp_type_defaults_to_signup_for_unknown() {
        assert_eq!(OtpType::from_raw("invite"), None);
        assert_eq!(OtpType::parse("invite"), OtpType::Signup);
        assert_eq!(OtpType::parse(""), OtpType::Signup);
    }

    #[test]
    fn notification_decodes_without_optional_columns() {
        let row = serde_json::json!({
            "id": "8a2f2f4e-3f31-4b6f-9a6a-52a4ab6a7e01",
            "user_id": "a0e6b7b2-3c1d-4f5e-8a9b-0c1d2e3f4a5b",
            "title": "Leave approved",
            "body": "Your vacation request was approved.",
            "created_at": "2026-08-01T08:30:00Z"
        });
        let n: Notification = serde_json::from_value(row).unwrap();
        assert!(n.is_unread());
        assert_eq!(n.kind, NotificationKind::System);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut profile: EmployeeProfile = serde_json::from_value(serde_json::json!({
            "id": "a0e6b7b2-3c1d-4f5e-8a9b-0c1d2e3f4a5b",
            "email": "pat@example.com",
            "updated_at": "2026-08-01T08:30:00Z"
        }))
        .unwrap();
        assert_eq!(profile.display_name(), "pat@example.com");
        profile.first_name = Some("Pat".to_string());
        assert_eq!(profile.display_name(), "Pat");
    }
}
