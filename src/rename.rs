//! Replace a VM's stock cloud image disks with VM-specific copies.
//!
//! Cloud images ship with a system disk and a config drive named after the
//! image rather than the virtual machine.  [`Renamer`] clones both to names
//! derived from the virtual machine, grows the system disk, attaches the
//! clones to the virtual machine's storage controller and finally deletes
//! the originals.
//!
//! ```no_run
//! use vboxrename::{DiskFolder, Renamer, Settings, VmId};
//! use vboxrename::runner::VBoxManage;
//!
//! let folder = DiskFolder::load("./web01").unwrap();
//! let mut renamer = Renamer::new(
//!   "web01",
//!   VmId::from("web01"),
//!   folder,
//!   Settings::default(),
//!   VBoxManage::new()
//! );
//! renamer.run().unwrap();
//! ```

use crate::err::Error;
use crate::folder::DiskFolder;
use crate::medium::{self, Format};
use crate::runner::Runner;
use crate::storage::{self, Slot, Type};
use crate::VmId;


/// Name prefix of the disks found in Ubuntu's VirtualBox cloud image.
pub const DEFAULT_PREFIX: &str = "ubuntu-xenial-16.04-cloudimg";

/// Capacity, in megabytes, the system disk is grown to.
pub const DEFAULT_CAPACITY_MB: u64 = 101200;

/// Storage controller the clones are attached to.
pub const DEFAULT_CONTROLLER: &str = "SCSI";

/// Intermediate medium used while resizing.  `modifymedium --resize` is not
/// supported for VMDK, so the system disk makes a round-trip through VDI.
pub const RESIZE_CLONE: &str = "clone.vdi";


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  /// File name of the base system disk image.
  pub base_image: String,

  /// File name of the config drive image.
  pub config_drive: String,

  pub controller: String,

  pub capacity_mb: u64
}

impl Settings {
  /// Derive the image file names from an image name prefix.
  pub fn with_prefix(prefix: &str) -> Self {
    Settings {
      base_image: format!("{}.vmdk", prefix),
      config_drive: format!("{}-configdrive.vmdk", prefix),
      controller: DEFAULT_CONTROLLER.to_string(),
      capacity_mb: DEFAULT_CAPACITY_MB
    }
  }
}

impl Default for Settings {
  fn default() -> Self {
    Settings::with_prefix(DEFAULT_PREFIX)
  }
}


/// Result of [`Renamer::clone_medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOutcome {
  /// The medium was cloned.  Carries the new medium's UUID if `VBoxManage`
  /// reported one.
  Cloned(Option<uuid::Uuid>),

  /// The target already existed, nothing was done.
  Skipped
}


pub struct Renamer<R: Runner> {
  name: String,
  vm: VmId,
  folder: DiskFolder,
  settings: Settings,
  runner: R
}

impl<R: Runner> Renamer<R> {
  /// `name` is used to derive the target file names, `vm` identifies the
  /// virtual machine the disks are attached to.
  pub fn new<S: Into<String>>(
    name: S,
    vm: VmId,
    folder: DiskFolder,
    settings: Settings,
    runner: R
  ) -> Self {
    Renamer {
      name: name.into(),
      vm,
      folder,
      settings,
      runner
    }
  }

  pub fn folder(&self) -> &DiskFolder {
    &self.folder
  }

  pub fn into_parts(self) -> (R, DiskFolder) {
    (self.runner, self.folder)
  }

  /// File name of the VM's system disk.
  pub fn hdd_name(&self) -> String {
    format!("{}.vmdk", self.name)
  }

  /// File name of the VM's config drive.
  pub fn driver_name(&self) -> String {
    format!("{}-driver.vmdk", self.name)
  }

  /// Clone the medium `from` to `to` within the disk folder.
  ///
  /// Does nothing if `to` already exists.  Fails if `from` doesn't.
  pub fn clone_medium(
    &mut self,
    from: &str,
    to: &str,
    format: Format
  ) -> Result<CloneOutcome, Error> {
    if self.folder.contains(to) {
      tracing::info!(
        "\"{}\" already exists, skipping cloning",
        self.folder.path_of(to).display()
      );
      return Ok(CloneOutcome::Skipped);
    }

    if !self.folder.contains(from) {
      return Err(Error::MissingData(format!(
        "\"{}\" doesn't exist, unable to clone it",
        self.folder.path_of(from).display()
      )));
    }

    tracing::info!("Cloning {} to {} ({})", from, to, format);
    let args = medium::clone(
      self.folder.path_of(from),
      self.folder.path_of(to),
      format
    );
    let out = self.runner.run(&args)?;
    self.folder.add(to);

    let uuid = medium::parse_clone_uuid(&out);
    if let Some(u) = uuid {
      tracing::debug!(medium = to, uuid = %u, "medium registered");
    }
    Ok(CloneOutcome::Cloned(uuid))
  }

  /// Attach `file` as a hard disk at `port`/`device` of the configured
  /// storage controller.
  pub fn attach(
    &mut self,
    file: &str,
    port: u8,
    device: u8
  ) -> Result<(), Error> {
    tracing::info!(
      "Attaching {} to {} at {} port {} device {}",
      file,
      self.vm,
      self.settings.controller,
      port,
      device
    );
    let slot = Slot {
      controller: &self.settings.controller,
      port,
      device,
      stype: Type::Hdd
    };
    let args = storage::attach(&self.vm, &slot, self.folder.path_of(file));
    self.runner.run(&args)?;
    Ok(())
  }

  /// Unregister and delete `file`.
  ///
  /// Failures are logged and otherwise ignored; the listing is only
  /// updated if the medium was actually deleted.  Returns whether it was.
  pub fn remove_medium(&mut self, file: &str) -> bool {
    let path = self.folder.path_of(file);
    match self.runner.run(&medium::close_and_delete(&path)) {
      Ok(_) => {
        tracing::info!("Removed {}", path.display());
        self.folder.remove(file);
        true
      }
      Err(e) => {
        tracing::warn!("failed to remove {}: {}", path.display(), e);
        false
      }
    }
  }

  /// Replace the base image with a resized `<name>.vmdk`.
  pub fn clone_hdd(&mut self) -> Result<(), Error> {
    let hdd = self.hdd_name();
    if self.folder.contains(&hdd) {
      tracing::info!(
        "\"{}\" already exists, skipping cloning",
        self.folder.path_of(&hdd).display()
      );
      return Ok(());
    }

    let base = self.settings.base_image.clone();
    self.clone_medium(&base, RESIZE_CLONE, Format::Vdi)?;

    tracing::info!(
      "Resizing {} to {} MB",
      RESIZE_CLONE,
      self.settings.capacity_mb
    );
    let args = medium::resize(
      self.folder.path_of(RESIZE_CLONE),
      self.settings.capacity_mb
    );
    self.runner.run(&args)?;

    self.clone_medium(RESIZE_CLONE, &hdd, Format::Vmdk)?;
    self.attach(&hdd, 0, 0)?;

    self.remove_medium(RESIZE_CLONE);
    self.remove_medium(&base);

    Ok(())
  }

  /// Replace the config drive with `<name>-driver.vmdk`.
  pub fn clone_driver(&mut self) -> Result<(), Error> {
    let driver = self.driver_name();
    if self.folder.contains(&driver) {
      tracing::info!(
        "\"{}\" already exists, skipping cloning",
        self.folder.path_of(&driver).display()
      );
      return Ok(());
    }

    let orig = self.settings.config_drive.clone();
    self.clone_medium(&orig, &driver, Format::Vmdk)?;
    self.attach(&driver, 1, 0)?;

    self.remove_medium(&orig);

    Ok(())
  }

  /// Process whichever of the base image and config drive are present.
  pub fn run(&mut self) -> Result<(), Error> {
    if self.folder.contains(&self.settings.base_image) {
      self.clone_hdd()?;
    } else {
      tracing::debug!("no {} in folder", self.settings.base_image);
    }

    if self.folder.contains(&self.settings.config_drive) {
      self.clone_driver()?;
    } else {
      tracing::debug!("no {} in folder", self.settings.config_drive);
    }

    Ok(())
  }
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
