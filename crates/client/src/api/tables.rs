//! Per-table REST operations, all scoped to the signed-in user.
//!
//! The backend exposes tables through PostgREST-style query strings
//! (`?user_id=eq.<uuid>&order=created_at.desc`). Row-level security on the
//! backend enforces the scoping; the filters here just keep responses small.

use chrono::Utc;
use monolite_shared::{
    AcceptInvitationRequest, AcceptInvitationResponse, ApiError, Document, EmployeeProfile,
    LeaveRequest, MaterialRequest, NewLeaveRequest, NewMaterialRequest, NewWorkHourLog,
    Notification, UpdateProfileRequest, WorkHourLog,
};
use uuid::Uuid;

use super::client::BackendClient;

/// Maximum notifications fetched per list call.
pub const NOTIFICATION_PAGE_SIZE: u32 = 50;

fn single_row<T>(rows: Vec<T>) -> Result<T, ApiError> {
    rows.into_iter().next().ok_or(ApiError::NotFound)
}

impl BackendClient {
    // --- Notifications ---

    /// List the newest notifications for a user.
    pub async fn list_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>, ApiError> {
        self.get_json(&format!(
            "/rest/v1/notifications?user_id=eq.{user_id}&order=created_at.desc&limit={NOTIFICATION_PAGE_SIZE}"
        ))
        .await
    }

    pub async fn mark_notification_read(&self, id: Uuid) -> Result<(), ApiError> {
        self.patch_json(
            &format!("/rest/v1/notifications?id=eq.{id}"),
            &serde_json::json!({ "read_at": Utc::now() }),
        )
        .await
    }

    /// Stamp every unread notification for a user in one call.
    pub async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<(), ApiError> {
        self.patch_json(
            &format!("/rest/v1/notifications?user_id=eq.{user_id}&read_at=is.null"),
            &serde_json::json!({ "read_at": Utc::now() }),
        )
        .await
    }

    pub async fn delete_notification(&self, id: Uuid) -> Result<(), ApiError> {
        self.delete(&format!("/rest/v1/notifications?id=eq.{id}")).await
    }

    // --- Work hours ---

    pub async fn list_work_hour_logs(&self, user_id: Uuid) -> Result<Vec<WorkHourLog>, ApiError> {
        self.get_json(&format!(
            "/rest/v1/work_hour_logs?user_id=eq.{user_id}&order=work_date.desc&limit=100"
        ))
        .await
    }

    pub async fn create_work_hour_log(&self, log: &NewWorkHourLog) -> Result<WorkHourLog, ApiError> {
        let rows: Vec<WorkHourLog> = self.post_returning("/rest/v1/work_hour_logs", log).await?;
        single_row(rows)
    }

    // --- Material and leave requests ---

    pub async fn list_material_requests(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MaterialRequest>, ApiError> {
        self.get_json(&format!(
            "/rest/v1/material_requests?user_id=eq.{user_id}&order=created_at.desc"
        ))
        .await
    }

    pub async fn create_material_request(
        &self,
        request: &NewMaterialRequest,
    ) -> Result<MaterialRequest, ApiError> {
        let rows: Vec<MaterialRequest> =
            self.post_returning("/rest/v1/material_requests", request).await?;
        single_row(rows)
    }

    pub async fn list_leave_requests(&self, user_id: Uuid) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json(&format!(
            "/rest/v1/leave_requests?user_id=eq.{user_id}&order=created_at.desc"
        ))
        .await
    }

    pub async fn create_leave_request(
        &self,
        request: &NewLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        let rows: Vec<LeaveRequest> =
            self.post_returning("/rest/v1/leave_requests", request).await?;
        single_row(rows)
    }

    // --- Profile and documents ---

    pub async fn get_employee_profile(&self, user_id: Uuid) -> Result<EmployeeProfile, ApiError> {
        let rows: Vec<EmployeeProfile> = self
            .get_json(&format!("/rest/v1/employee_profiles?id=eq.{user_id}&limit=1"))
            .await?;
        single_row(rows)
    }

    pub async fn update_employee_profile(
        &self,
        user_id: Uuid,
        update: &UpdateProfileRequest,
    ) -> Result<EmployeeProfile, ApiError> {
        let rows: Vec<EmployeeProfile> = self
            .patch_returning(&format!("/rest/v1/employee_profiles?id=eq.{user_id}"), update)
            .await?;
        single_row(rows)
    }

    pub async fn list_documents(&self, user_id: Uuid) -> Result<Vec<Document>, ApiError> {
        self.get_json(&format!(
            "/rest/v1/documents?user_id=eq.{user_id}&order=uploaded_at.desc"
        ))
        .await
    }

    // --- Invitations ---

    /// Redeem an invitation token. Callable anonymously; the backend RPC
    /// validates the token and provisions the employee account.
    pub async fn accept_invitation(
        &self,
        token: &str,
    ) -> Result<AcceptInvitationResponse, ApiError> {
        self.post_json(
            "/rest/v1/rpc/accept_invitation",
            &AcceptInvitationRequest {
                invitation_token: token.to_string(),
            },
        )
        .await
    }
}
