//! Analysis provider implementations

mod simulated;

pub use simulated::SimulatedAnalysisProvider;

#[cfg(test)]
pub(crate) use simulated::{base_return, outlook_volatility};
