mod executor;

pub use executor::{ActionExecutor, ActionStatus};
