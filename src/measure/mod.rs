//! Measurement records returned by the Alyvix Server and the selection of
//! the execution batch that gets reported.
mod batch;
mod record;

#[cfg(test)]
mod tests;

pub use batch::ExecutionBatch;
pub use record::{ExitFlag, MeasurementRecord, MeasuresResponse};
