use crate::models::{AddSubjectRequest, ApiResult, NameRequest};
use super::AttendanceApi;

impl AttendanceApi {
    pub async fn get_classes(&self) -> ApiResult {
        self.http.get("/classes").await
    }

    pub async fn create_class(&self, name: &str) -> ApiResult {
        self.http.post("/classes", &NameRequest { name }).await
    }

    pub async fn delete_class(&self, class_id: i64) -> ApiResult {
        self.http.delete(&format!("/classes/{}", class_id)).await
    }

    pub async fn get_class_subjects(&self, class_id: i64) -> ApiResult {
        self.http.get(&format!("/classes/{}/subjects", class_id)).await
    }

    pub async fn add_subject_to_class(&self, class_id: i64, subject_id: i64) -> ApiResult {
        self.http
            .post(
                &format!("/classes/{}/subjects", class_id),
                &AddSubjectRequest { subject_id },
            )
            .await
    }

    pub async fn get_class_students(&self, class_id: i64) -> ApiResult {
        self.http.get(&format!("/classes/{}/students", class_id)).await
    }

    /// Register of a class for one day and subject
    pub async fn get_class_attendance(&self, class_id: i64, date: &str, subject_id: i64) -> ApiResult {
        self.http
            .get(&format!(
                "/classes/{}/attendance?date={}&subjectId={}",
                class_id,
                urlencoding::encode(date),
                subject_id
            ))
            .await
    }
}
