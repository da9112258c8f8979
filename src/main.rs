use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use vboxrename::rename::{DEFAULT_CAPACITY_MB, DEFAULT_CONTROLLER, DEFAULT_PREFIX};
use vboxrename::runner::{DryRun, Runner, VBoxManage};
use vboxrename::{DiskFolder, Renamer, Settings, VmId};


/// Clone a VirtualBox cloud image's disks to VM-specific names, grow the
/// system disk and attach the clones to the VM.
///
/// The disks are expected in the folder `<BASE_DIR>/<NAME>/`.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
  /// Name (or UUID) of the virtual machine
  name: String,

  /// Directory holding the per-VM disk folders
  #[arg(long, env = "VBOXRENAME_BASE_DIR", default_value = ".")]
  base_dir: PathBuf,

  /// Path of the VBoxManage executable
  #[arg(long, env = "VBOXMANAGE")]
  vboxmanage: Option<PathBuf>,

  /// Storage controller the disks are attached to
  #[arg(long, default_value = DEFAULT_CONTROLLER)]
  storagectl: String,

  /// New capacity of the system disk, in megabytes
  #[arg(long, default_value_t = DEFAULT_CAPACITY_MB)]
  resize: u64,

  /// File name prefix of the cloud image's disks
  #[arg(long, default_value = DEFAULT_PREFIX)]
  image_prefix: String,

  /// Print the VBoxManage commands instead of running them
  #[arg(long)]
  dry_run: bool
}


/// Log to stderr, filtered by `RUST_LOG` and defaulting to `info`.
fn install_tracing() {
  use tracing_subscriber::fmt;
  use tracing_subscriber::prelude::*;
  use tracing_subscriber::EnvFilter;

  let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
  let filter_layer = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(filter_layer)
    .with(fmt_layer)
    .init();
}


fn process<R: Runner>(cli: &Cli, runner: R) -> Result<()> {
  let dir = cli.base_dir.join(&cli.name);
  let folder = DiskFolder::load(&dir)
    .with_context(|| format!("Unable to list disks of '{}'", cli.name))?;
  tracing::debug!(files = ?folder.files(), "loaded {}", dir.display());

  let vm = cli.name.parse::<VmId>()?;

  let mut settings = Settings::with_prefix(&cli.image_prefix);
  settings.controller = cli.storagectl.clone();
  settings.capacity_mb = cli.resize;

  let mut renamer = Renamer::new(cli.name.as_str(), vm, folder, settings, runner);
  renamer
    .run()
    .with_context(|| format!("Unable to process disks of '{}'", cli.name))?;

  tracing::debug!(files = ?renamer.folder().files(), "done");
  Ok(())
}


fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) if e.use_stderr() => {
      // Usage errors, such as a missing name, exit with 1 rather than
      // clap's 2.
      let _ = e.print();
      return ExitCode::FAILURE;
    }
    Err(e) => e.exit()
  };

  install_tracing();

  let res = if cli.dry_run {
    process(&cli, DryRun::default())
  } else {
    let vbm = match &cli.vboxmanage {
      Some(exe) => VBoxManage::with_exe(exe),
      None => VBoxManage::new()
    };
    process(&cli, vbm)
  };

  match res {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{:#}", e);
      ExitCode::FAILURE
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }

  #[test]
  fn defaults() {
    let cli = Cli::try_parse_from(["vboxrename", "web01"]).unwrap();
    assert_eq!(cli.name, "web01");
    assert_eq!(cli.storagectl, "SCSI");
    assert_eq!(cli.resize, 101200);
    assert!(!cli.dry_run);
  }

  #[test]
  fn name_is_required() {
    let e = Cli::try_parse_from(["vboxrename"]).unwrap_err();
    assert!(e.use_stderr());
  }

  #[test]
  fn missing_folder_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from([
      "vboxrename",
      "--base-dir",
      dir.path().to_str().unwrap(),
      "ghost"
    ])
    .unwrap();
    let err = process(&cli, DryRun::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("does not exist"));
  }

  #[test]
  fn dry_run_over_real_folder() {
    let dir = tempfile::tempdir().unwrap();
    let vmdir = dir.path().join("web01");
    std::fs::create_dir(&vmdir).unwrap();
    std::fs::write(vmdir.join("ubuntu-xenial-16.04-cloudimg.vmdk"), b"")
      .unwrap();

    let cli = Cli::try_parse_from([
      "vboxrename",
      "--dry-run",
      "--base-dir",
      dir.path().to_str().unwrap(),
      "web01"
    ])
    .unwrap();
    process(&cli, DryRun::default()).unwrap();
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
