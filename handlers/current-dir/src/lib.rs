//! Cloud function that reports the name of its working directory.

pub mod error;
pub mod handler;
pub mod workdir;

pub use error::WorkdirError;
pub use handler::{handle, CurrentDirHandler};
pub use workdir::{base_name, ProcessWorkingDirectory, WorkingDirectory};
