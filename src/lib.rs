//! Core library for the `alyvix-sensor` CLI.
//!
//! The binary is a PRTG custom sensor: it reads the latest test case
//! executions from an Alyvix Server and prints one PRTG result line per test
//! case. This crate exposes the building blocks it is made of: CLI argument
//! types, configuration parsing, the Alyvix Server client, measurement
//! records and the PRTG renderers.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod measure;
pub mod report;
pub mod sensor;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
