pub mod collect;
pub mod list;
pub mod version;
