//! Domain types and pure logic shared by the Tasklane database and API
//! crates. No I/O lives here.

pub mod checklist;
pub mod daily;
pub mod error;
pub mod ordering;
pub mod roles;
pub mod timelog;
pub mod types;
