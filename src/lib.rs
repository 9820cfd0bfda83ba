//! Reader for scenario fixture files: flat text files holding scenarios of
//! comma-space-separated records, separated by `#` comment lines. A test
//! harness pairs one such file as the input feed with a second one holding
//! the expected per-scenario output.

pub mod fixture;
pub mod scenario;

pub use scenario::{read_scenarios, RawScenario};
