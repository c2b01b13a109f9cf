use crate::models::{ApiResult, AssignClassRequest, NameRequest};
use super::AttendanceApi;

impl AttendanceApi {
    pub async fn get_students(&self) -> ApiResult {
        self.http.get("/students").await
    }

    pub async fn create_student(&self, name: &str) -> ApiResult {
        self.http.post("/students", &NameRequest { name }).await
    }

    pub async fn delete_student(&self, student_id: i64) -> ApiResult {
        self.http.delete(&format!("/students/{}", student_id)).await
    }

    pub async fn assign_student_to_class(&self, student_id: i64, class_id: i64) -> ApiResult {
        self.http
            .post(
                &format!("/students/{}/assign-class", student_id),
                &AssignClassRequest { class_id },
            )
            .await
    }

    pub async fn update_student_profile(&self, student_id: i64, name: &str) -> ApiResult {
        self.http
            .put(&format!("/students/{}/profile", student_id), &NameRequest { name })
            .await
    }
}
