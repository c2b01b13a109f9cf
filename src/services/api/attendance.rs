use crate::models::{ApiResult, AttendanceStatus, MarkAttendanceRequest};
use super::AttendanceApi;

impl AttendanceApi {
    /// Record a mark for one student, subject and `YYYY-MM-DD` date
    pub async fn mark_attendance(
        &self,
        student_id: i64,
        subject_id: i64,
        date: &str,
        status: AttendanceStatus,
    ) -> ApiResult {
        let body = MarkAttendanceRequest {
            student_id,
            subject_id,
            date,
            status,
        };
        self.http.post("/attendance", &body).await
    }

    pub async fn get_student_attendance(&self, student_id: i64, subject_id: i64) -> ApiResult {
        self.http
            .get(&format!(
                "/students/{}/attendance/subject/{}",
                student_id, subject_id
            ))
            .await
    }

    /// Overall percentage across all subjects, as `{"percentage": f64}`
    pub async fn get_attendance_percentage(&self, student_id: i64) -> ApiResult {
        self.http
            .get(&format!("/students/{}/attendance-percentage", student_id))
            .await
    }

    pub async fn get_subject_attendance_percentage(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> ApiResult {
        self.http
            .get(&format!(
                "/students/{}/attendance-percentage/subject/{}",
                student_id, subject_id
            ))
            .await
    }

    /// Whether a mark already exists, as `{"isMarked": bool}`
    pub async fn check_attendance_marked(
        &self,
        student_id: i64,
        subject_id: i64,
        date: &str,
    ) -> ApiResult {
        self.http
            .get(&format!(
                "/attendance/check?studentId={}&subjectId={}&date={}",
                student_id,
                subject_id,
                urlencoding::encode(date)
            ))
            .await
    }
}
