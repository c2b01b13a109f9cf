use crate::models::{ApiResult, NameRequest};
use super::AttendanceApi;

impl AttendanceApi {
    pub async fn get_subjects(&self) -> ApiResult {
        self.http.get("/subjects").await
    }

    pub async fn create_subject(&self, name: &str) -> ApiResult {
        self.http.post("/subjects", &NameRequest { name }).await
    }

    pub async fn delete_subject(&self, subject_id: i64) -> ApiResult {
        self.http.delete(&format!("/subjects/{}", subject_id)).await
    }
}
