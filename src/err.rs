use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error; {0}")]
  IO(String),

  #[error("Disk folder {} does not exist", .0.display())]
  MissingFolder(PathBuf),

  #[error("Missing expected data error; {0}")]
  MissingData(String),

  #[error("Unable to execute {0}")]
  FailedToExecute(String),

  #[error("Command failed; {cmd}; {}; {stderr}", exit_status(.code))]
  CommandFailed {
    cmd: String,
    code: Option<i32>,
    stderr: String
  }
}

fn exit_status(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("exit status={}", code),
    None => "terminated by signal".to_string()
  }
}

impl From<io::Error> for Error {
  fn from(err: io::Error) -> Self {
    Error::IO(err.to_string())
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
