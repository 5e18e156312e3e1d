mod executor;
mod status;

pub use executor::TaskExecutor;
pub use status::ExecStatus;
