//! Data models

pub mod book;
