pub mod feed;
pub mod proto;
pub mod reader;
pub mod receiver;
