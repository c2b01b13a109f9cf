use crate::models::{ApiResult, AssignClassRequest, AssignSubjectRequest, CreateTeacherRequest};
use super::AttendanceApi;

impl AttendanceApi {
    pub async fn get_teachers(&self) -> ApiResult {
        self.http.get("/teachers").await
    }

    pub async fn create_teacher(
        &self,
        name: &str,
        email: &str,
        password: &str,
        teacher_type: &str,
    ) -> ApiResult {
        let body = CreateTeacherRequest {
            name,
            email,
            password,
            teacher_type,
        };
        self.http.post("/teachers", &body).await
    }

    pub async fn delete_teacher(&self, teacher_id: i64) -> ApiResult {
        self.http.delete(&format!("/teachers/{}", teacher_id)).await
    }

    /// Make the teacher the class teacher of `class_id`
    pub async fn assign_class_teacher(&self, teacher_id: i64, class_id: i64) -> ApiResult {
        self.http
            .post(
                &format!("/teachers/{}/assign-class", teacher_id),
                &AssignClassRequest { class_id },
            )
            .await
    }

    /// Let the teacher teach `subject_id` in `class_id`
    pub async fn assign_subject_teacher(
        &self,
        teacher_id: i64,
        subject_id: i64,
        class_id: i64,
    ) -> ApiResult {
        self.http
            .post(
                &format!("/teachers/{}/assign-subject", teacher_id),
                &AssignSubjectRequest {
                    subject_id,
                    class_id,
                },
            )
            .await
    }

    pub async fn get_teacher_subjects(&self, teacher_id: i64) -> ApiResult {
        self.http.get(&format!("/teachers/{}/subjects", teacher_id)).await
    }
}
