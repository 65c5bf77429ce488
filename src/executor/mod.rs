mod executor;
mod fork_executor;

pub use executor::{
    EXEC_FAILED, ExecError, ExecStatus, Executor, FORK_FAILED, REDIRECT_FAILED,
};
pub use fork_executor::ForkExecutor;
