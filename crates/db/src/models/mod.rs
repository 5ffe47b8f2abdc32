pub mod board;
pub mod card;
pub mod company;
pub mod daily_task;
pub mod department;
pub mod label;
pub mod list;
pub mod member;
pub mod widget;
