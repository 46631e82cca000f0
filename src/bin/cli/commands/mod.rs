pub mod add;
pub mod groups;
pub mod remove;
pub mod show;
pub mod study;
