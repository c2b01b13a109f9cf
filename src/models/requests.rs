//! Request bodies sent to the attendance server
//!
//! Field names follow the server's camelCase JSON keys.

use serde::Serialize;

use super::AttendanceStatus;

/// Credentials for `POST /login/{role}`
///
/// Students log in by name, so `email` carries whatever identifier the role
/// uses.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for the endpoints that only take a name
#[derive(Debug, Clone, Serialize)]
pub struct NameRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTeacherRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(rename = "type")]
    pub teacher_type: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSubjectRequest {
    pub subject_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignClassRequest {
    pub class_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSubjectRequest {
    pub subject_id: i64,
    pub class_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest<'a> {
    pub student_id: i64,
    pub subject_id: i64,
    pub date: &'a str,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_teacher_type_key() {
        let body = CreateTeacherRequest {
            name: "Ms. Park",
            email: "park@school.test",
            password: "secret",
            teacher_type: "Class Teacher",
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "name": "Ms. Park",
                "email": "park@school.test",
                "password": "secret",
                "type": "Class Teacher"
            })
        );
    }

    #[test]
    fn test_mark_attendance_keys() {
        let body = MarkAttendanceRequest {
            student_id: 1,
            subject_id: 2,
            date: "2024-01-05",
            status: AttendanceStatus::Absent,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"studentId": 1, "subjectId": 2, "date": "2024-01-05", "status": "Absent"})
        );
    }
}
