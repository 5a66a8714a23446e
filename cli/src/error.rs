use ltesim_core::ChannelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Simulation error: {0}")]
    Simulation(#[from] ChannelError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
