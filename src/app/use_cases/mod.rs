//! Use-Cases der Application-Layer-Orchestrierung.

pub mod panel;
pub mod pick;
pub mod report;
pub mod terraform;
