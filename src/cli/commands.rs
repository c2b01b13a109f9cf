use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use crate::config::Settings;
use crate::models::ApiResult;
use crate::services::AttendanceApi;
use crate::state::{FileSessionStorage, SessionManager};
use crate::ui::LogNavigator;
use crate::utils::helpers::get_current_date;
use super::{ApiCommand, AttendanceCommand, ClassCommand, Command, StudentCommand, SubjectCommand, TeacherCommand};

const NOT_LOGGED_IN: &str = "Not logged in";

/// Execute one command against the configured server
///
/// Everything except `login` and `logout` needs a stored session. Errors are
/// only returned when the client itself cannot be built; API failures come
/// back inside the result.
pub async fn run(command: Command, settings: &Settings) -> anyhow::Result<ApiResult> {
    let api = AttendanceApi::new(settings).context("failed to build API client")?;
    let session = SessionManager::new(
        Arc::new(FileSessionStorage::new(&settings.session.storage_path)),
        Arc::new(LogNavigator),
        settings.session.clone(),
    );

    let result = match command {
        Command::Login {
            role,
            identifier,
            password,
        } => session.sign_in(&api, role, &identifier, &password).await,
        Command::Logout => match session.logout() {
            Ok(()) => ApiResult::success(None),
            Err(e) => ApiResult::failure(e.to_string()),
        },
        Command::Whoami => match session.check_auth() {
            Some(user) => ApiResult::success(Some(user.into_value())),
            None => ApiResult::failure(NOT_LOGGED_IN),
        },
        Command::Api(command) => {
            let Some(user) = session.check_auth() else {
                return Ok(ApiResult::failure(NOT_LOGGED_IN));
            };
            debug!(role = ?user.role(), "Running command for session user");
            dispatch(&api, command).await
        }
    };

    Ok(result)
}

async fn dispatch(api: &AttendanceApi, command: ApiCommand) -> ApiResult {
    match command {
        ApiCommand::Subjects(command) => match command {
            SubjectCommand::List => api.get_subjects().await,
            SubjectCommand::Create { name } => api.create_subject(&name).await,
            SubjectCommand::Delete { id } => api.delete_subject(id).await,
        },
        ApiCommand::Classes(command) => match command {
            ClassCommand::List => api.get_classes().await,
            ClassCommand::Create { name } => api.create_class(&name).await,
            ClassCommand::Delete { id } => api.delete_class(id).await,
            ClassCommand::Subjects { id } => api.get_class_subjects(id).await,
            ClassCommand::AddSubject {
                class_id,
                subject_id,
            } => api.add_subject_to_class(class_id, subject_id).await,
            ClassCommand::Students { id } => api.get_class_students(id).await,
            ClassCommand::Register {
                class_id,
                subject,
                date,
            } => {
                let date = date.unwrap_or_else(get_current_date);
                api.get_class_attendance(class_id, &date, subject).await
            }
        },
        ApiCommand::Teachers(command) => match command {
            TeacherCommand::List => api.get_teachers().await,
            TeacherCommand::Create {
                name,
                email,
                password,
                teacher_type,
            } => api.create_teacher(&name, &email, &password, &teacher_type).await,
            TeacherCommand::Delete { id } => api.delete_teacher(id).await,
            TeacherCommand::AssignClass {
                teacher_id,
                class_id,
            } => api.assign_class_teacher(teacher_id, class_id).await,
            TeacherCommand::AssignSubject {
                teacher_id,
                subject_id,
                class_id,
            } => api.assign_subject_teacher(teacher_id, subject_id, class_id).await,
            TeacherCommand::Subjects { id } => api.get_teacher_subjects(id).await,
        },
        ApiCommand::Students(command) => match command {
            StudentCommand::List => api.get_students().await,
            StudentCommand::Create { name } => api.create_student(&name).await,
            StudentCommand::Delete { id } => api.delete_student(id).await,
            StudentCommand::AssignClass {
                student_id,
                class_id,
            } => api.assign_student_to_class(student_id, class_id).await,
            StudentCommand::Rename { student_id, name } => {
                api.update_student_profile(student_id, &name).await
            }
        },
        ApiCommand::Attendance(command) => match command {
            AttendanceCommand::Mark {
                student_id,
                subject_id,
                status,
                date,
            } => {
                let date = date.unwrap_or_else(get_current_date);
                api.mark_attendance(student_id, subject_id, &date, status).await
            }
            AttendanceCommand::History {
                student_id,
                subject_id,
            } => api.get_student_attendance(student_id, subject_id).await,
            AttendanceCommand::Percentage {
                student_id,
                subject: Some(subject_id),
            } => api.get_subject_attendance_percentage(student_id, subject_id).await,
            AttendanceCommand::Percentage {
                student_id,
                subject: None,
            } => api.get_attendance_percentage(student_id).await,
            AttendanceCommand::Check {
                student_id,
                subject_id,
                date,
            } => {
                let date = date.unwrap_or_else(get_current_date);
                api.check_attendance_marked(student_id, subject_id, &date).await
            }
        },
    }
}
