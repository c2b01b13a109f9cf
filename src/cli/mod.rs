//! Command line interface
//!
//! Every endpoint of the attendance server as a subcommand. Results are
//! printed as the server's JSON envelope on stdout.

mod commands;

use clap::{Parser, Subcommand};

use crate::models::{AttendanceStatus, Role};

pub use commands::run;

#[derive(Debug, Parser)]
#[command(name = "attendance-client")]
#[command(about = "Command line client for the school attendance management API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./config.* when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and keep the returned identity as the session
    Login {
        /// admin, teacher or student
        role: Role,
        /// Email for staff, name for students
        identifier: String,
        #[arg(default_value = "")]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session user
    Whoami,
    #[command(flatten)]
    Api(ApiCommand),
}

/// Commands that map onto server endpoints and need a stored session
#[derive(Debug, Subcommand)]
pub enum ApiCommand {
    /// Manage subjects
    #[command(subcommand)]
    Subjects(SubjectCommand),
    /// Manage classes
    #[command(subcommand)]
    Classes(ClassCommand),
    /// Manage teachers
    #[command(subcommand)]
    Teachers(TeacherCommand),
    /// Manage students
    #[command(subcommand)]
    Students(StudentCommand),
    /// Mark and query attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),
}

#[derive(Debug, Subcommand)]
pub enum SubjectCommand {
    List,
    Create { name: String },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ClassCommand {
    List,
    Create { name: String },
    Delete { id: i64 },
    /// Subjects taught in a class
    Subjects { id: i64 },
    AddSubject { class_id: i64, subject_id: i64 },
    /// Students enrolled in a class
    Students { id: i64 },
    /// Class register for a date and subject
    Register {
        class_id: i64,
        #[arg(short, long)]
        subject: i64,
        /// YYYY-MM-DD, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeacherCommand {
    List,
    Create {
        name: String,
        email: String,
        password: String,
        #[arg(short = 't', long = "type", default_value = "Teacher")]
        teacher_type: String,
    },
    Delete { id: i64 },
    AssignClass { teacher_id: i64, class_id: i64 },
    AssignSubject { teacher_id: i64, subject_id: i64, class_id: i64 },
    /// Subjects assigned to a teacher
    Subjects { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    List,
    Create { name: String },
    Delete { id: i64 },
    AssignClass { student_id: i64, class_id: i64 },
    /// Change a student's display name
    Rename { student_id: i64, name: String },
}

#[derive(Debug, Subcommand)]
pub enum AttendanceCommand {
    /// Record a mark (present, absent or late)
    Mark {
        student_id: i64,
        subject_id: i64,
        status: AttendanceStatus,
        /// YYYY-MM-DD, defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Marks of a student in one subject
    History { student_id: i64, subject_id: i64 },
    /// Attendance percentage, overall or for one subject
    Percentage {
        student_id: i64,
        #[arg(short, long)]
        subject: Option<i64>,
    },
    /// Whether a mark exists already
    Check {
        student_id: i64,
        subject_id: i64,
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_typed_arguments() {
        let cli = Cli::try_parse_from([
            "attendance-client",
            "attendance",
            "mark",
            "4",
            "2",
            "LATE",
            "--date",
            "2024-01-05",
        ])
        .unwrap();

        match cli.command {
            Command::Api(ApiCommand::Attendance(AttendanceCommand::Mark {
                student_id,
                subject_id,
                status,
                date,
            })) => {
                assert_eq!((student_id, subject_id), (4, 2));
                assert_eq!(status, AttendanceStatus::Late);
                assert_eq!(date.as_deref(), Some("2024-01-05"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_role() {
        assert!(Cli::try_parse_from(["attendance-client", "login", "janitor", "x"]).is_err());
    }
}
