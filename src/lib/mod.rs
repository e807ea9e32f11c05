pub mod cli;
pub mod data;
pub mod init;
pub mod runtime;
pub mod ui;
pub mod util;
