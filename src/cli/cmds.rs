pub mod add;
pub mod cats;
pub mod chart;
pub mod filter;
pub mod init;
pub mod list;
pub mod rm;
pub mod root;
pub mod summary;
pub mod total;
