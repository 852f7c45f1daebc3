pub mod command;
pub mod readmodel;
