// src/ui/mod.rs
pub mod alert;
pub mod footer;
pub mod form;
pub mod header;
pub mod table;
