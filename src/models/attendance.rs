//! Attendance models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::AttendanceError;

/// Attendance mark, serialized the way the server stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }

    /// Stylesheet class used when rendering this status
    pub fn css_class(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "status-present",
            AttendanceStatus::Absent => "status-absent",
            AttendanceStatus::Late => "status-late",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            _ => Err(AttendanceError::InvalidInput(format!(
                "Unknown attendance status: {}",
                s
            ))),
        }
    }
}

/// `data` of the attendance-percentage endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendancePercentage {
    pub percentage: f64,
}

/// `data` of the attendance check endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCheck {
    pub is_marked: bool,
}

/// One row of a class register for a given date and subject
///
/// `status` is free text: students without a mark come back as `Not Marked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAttendanceEntry {
    pub student_id: i64,
    pub student_name: String,
    pub status: String,
}

impl ClassAttendanceEntry {
    pub fn status_class(&self) -> &'static str {
        crate::utils::helpers::attendance_status_class(&self.status)
    }
}
