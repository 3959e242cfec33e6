//! Pages
//!
//! One component per sidebar destination, plus the login screen.

mod alumni;
mod applicant_modal;
mod dashboard;
mod drive_creator;
mod drive_list;
mod login;
mod scheduler;
mod student_list;
mod templates;

pub use alumni::AlumniPage;
pub use dashboard::DashboardPage;
pub use drive_creator::DriveCreatorPage;
pub use drive_list::DriveListPage;
pub use login::LoginPage;
pub use scheduler::SchedulerPage;
pub use student_list::StudentListPage;
pub use templates::TemplatesPage;
