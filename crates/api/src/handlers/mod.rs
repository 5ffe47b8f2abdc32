//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod board_members;
pub mod boards;
pub mod cards;
pub mod companies;
pub mod daily_tasks;
pub mod departments;
pub mod labels;
pub mod lists;
pub mod members;
pub mod time_tracking;
pub mod widgets;
