use crate::models::{ApiResult, LoginRequest, Role};
use super::AttendanceApi;

impl AttendanceApi {
    /// Log in as `role`; students use their name as `identifier`
    pub async fn login(&self, role: Role, identifier: &str, password: &str) -> ApiResult {
        let body = LoginRequest {
            email: identifier,
            password,
        };
        self.http.post(&format!("/login/{}", role), &body).await
    }
}
