pub mod add;
pub mod dispatch;
pub mod find;
pub mod get;
pub mod import;
pub mod init;
pub mod list;
pub mod render;
pub mod schema;
pub mod shared;
pub mod topics;
pub mod update;
