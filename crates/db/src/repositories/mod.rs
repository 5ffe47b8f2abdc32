mod board_member_repo;
mod board_repo;
mod card_repo;
mod company_repo;
mod daily_task_repo;
mod department_repo;
mod label_repo;
mod list_repo;
mod member_repo;
mod time_entry_repo;
mod widget_repo;

pub use board_member_repo::BoardMemberRepo;
pub use board_repo::BoardRepo;
pub use card_repo::CardRepo;
pub use company_repo::CompanyRepo;
pub use daily_task_repo::DailyTaskRepo;
pub use department_repo::DepartmentRepo;
pub use label_repo::LabelRepo;
pub use list_repo::ListRepo;
pub use member_repo::MemberRepo;
pub use time_entry_repo::TimeEntryRepo;
pub use widget_repo::WidgetRepo;
