mod errors;
mod lending_ledger;

pub use errors::{LendingError, Result};
pub use lending_ledger::{LendingLedger, ServiceDependencies};
