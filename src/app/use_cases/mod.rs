//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curves;
pub mod file_io;
pub mod tools;
