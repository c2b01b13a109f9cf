//! Session user model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::errors::AttendanceError;

/// Login role, used as the last segment of `/login/{role}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            _ => Err(AttendanceError::InvalidInput(format!("Unknown role: {}", s))),
        }
    }
}

/// Identity stored after a successful login
///
/// The record is whatever the login endpoint returned as `data`. Its shape is
/// not validated; the accessors below read the fields the server is known to
/// send and return `None` when they are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(Value);

impl SessionUser {
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn role(&self) -> Option<Role> {
        self.str_field("role").and_then(|role| role.parse().ok())
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    pub fn teacher_id(&self) -> Option<i64> {
        self.id_field("teacherId")
    }

    pub fn student_id(&self) -> Option<i64> {
        self.id_field("studentId")
    }

    /// Assigned class; the server sends `0` for "none"
    pub fn class_id(&self) -> Option<i64> {
        self.id_field("classId").filter(|id| *id != 0)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn id_field(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl From<Value> for SessionUser {
    fn from(record: Value) -> Self {
        Self(record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_teacher_login_record() {
        let user = SessionUser::new(json!({
            "role": "teacher",
            "teacherId": 3,
            "name": "Ms. Park",
            "email": "park@school.test",
            "type": "Class Teacher",
            "classId": 2
        }));
        assert_eq!(user.role(), Some(Role::Teacher));
        assert_eq!(user.teacher_id(), Some(3));
        assert_eq!(user.class_id(), Some(2));
        assert_eq!(user.student_id(), None);
    }

    #[test]
    fn test_unassigned_class_reads_as_none() {
        let user = SessionUser::new(json!({"role": "student", "studentId": "9", "classId": 0}));
        assert_eq!(user.student_id(), Some(9));
        assert_eq!(user.class_id(), None);
    }

    #[test]
    fn test_opaque_record_round_trips_unchanged() {
        let record = json!({"anything": [1, 2], "role": "janitor"});
        let user: SessionUser = serde_json::from_value(record.clone()).unwrap();
        assert_eq!(user.role(), None);
        assert_eq!(serde_json::to_value(&user).unwrap(), record);
    }

    #[test]
    fn test_role_path_segment() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert!("principal".parse::<Role>().is_err());
    }
}
