//! Main module for the text object model

pub mod ast;
pub mod config;
pub mod editing;
pub mod formats;
pub mod reparser;
pub mod testing;
pub mod tokenizing;
