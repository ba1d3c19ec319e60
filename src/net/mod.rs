pub mod packet;
pub mod query;
