//! Data models module
//!
//! This module contains the result envelope, request bodies and the few
//! typed payload views used by the client. Domain entities themselves are
//! passed through as opaque JSON.

pub mod api_result;
pub mod attendance;
pub mod requests;
pub mod session;

// Re-export commonly used models
pub use api_result::ApiResult;
pub use attendance::{AttendanceStatus, AttendancePercentage, AttendanceCheck, ClassAttendanceEntry};
pub use requests::{LoginRequest, NameRequest, CreateTeacherRequest, AddSubjectRequest, AssignClassRequest, AssignSubjectRequest, MarkAttendanceRequest};
pub use session::{Role, SessionUser};
