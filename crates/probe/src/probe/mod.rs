pub mod client;
pub mod hash;
pub mod report;

pub use client::{LoginProbe, ProbeError, ProbeOutcome};
pub use hash::{sha256_hex, HashCheck, REFERENCE_DIGEST};
