//! Launching `VBoxManage`.
//!
//! Everything which touches VirtualBox goes through the [`Runner`] trait so
//! that the sequencing logic can be exercised without VirtualBox installed.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::err::Error;
use crate::platform;


/// Something that can execute a `VBoxManage` subcommand.
pub trait Runner {
  /// Run `VBoxManage` with `args` and return its standard output.
  fn run(&mut self, args: &[OsString]) -> Result<String, Error>;
}


fn cmdline(args: &[OsString]) -> String {
  let mut s = String::from(platform::VBOXMANAGE);
  for arg in args {
    s.push(' ');
    s.push_str(&arg.to_string_lossy());
  }
  s
}


/// Runs the real `VBoxManage` executable.
#[derive(Debug)]
pub struct VBoxManage {
  exe: PathBuf
}

impl VBoxManage {
  /// Use the platform's default location of `VBoxManage`.
  pub fn new() -> Self {
    VBoxManage {
      exe: platform::get_cmd(platform::VBOXMANAGE)
    }
  }

  /// Use an explicit `VBoxManage` executable.
  pub fn with_exe<P: Into<PathBuf>>(exe: P) -> Self {
    VBoxManage { exe: exe.into() }
  }
}

impl Default for VBoxManage {
  fn default() -> Self {
    Self::new()
  }
}

impl Runner for VBoxManage {
  fn run(&mut self, args: &[OsString]) -> Result<String, Error> {
    let mut cmd = Command::new(&self.exe);
    cmd.args(args);

    tracing::debug!(cmd = %cmdline(args), "executing");

    let out = match cmd.output() {
      Ok(out) => out,
      Err(e) => {
        return Err(Error::FailedToExecute(format!(
          "{}: {}",
          self.exe.display(),
          e
        )));
      }
    };

    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    if out.status.success() {
      tracing::debug!(output = %stdout.trim_end(), "command succeeded");
      Ok(stdout)
    } else {
      Err(Error::CommandFailed {
        cmd: cmdline(args),
        code: out.status.code(),
        stderr: String::from_utf8_lossy(&out.stderr).trim_end().to_string()
      })
    }
  }
}


/// Prints commands instead of running them.
#[derive(Debug, Default)]
pub struct DryRun {
  pub history: Vec<String>
}

impl Runner for DryRun {
  fn run(&mut self, args: &[OsString]) -> Result<String, Error> {
    let line = cmdline(args);
    tracing::info!("would run: {}", line);
    self.history.push(line);
    Ok(String::new())
  }
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
