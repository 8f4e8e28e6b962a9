pub mod comments;
pub mod connection;
pub mod preferences;
pub mod room_changes;
pub mod room_details;

pub use connection::{init_db, Database};
