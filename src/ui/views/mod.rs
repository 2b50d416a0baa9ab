pub mod show;
pub mod sweep;
