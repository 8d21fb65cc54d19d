pub mod cli;
pub mod command;
pub mod error;
pub mod exec;
pub mod layout;
pub mod manifest;
pub mod result;
pub mod svg;
pub mod version;
