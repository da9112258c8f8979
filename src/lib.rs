//! Give a freshly imported cloud image VM disks of its own.
//!
//! VirtualBox cloud images come with their disks named after the image, and
//! with a system disk that is too small to be of much use.  This crate
//! clones the disks to names derived from the virtual machine, grows the
//! system disk and reattaches everything, by calling the `VBoxManage`
//! command line tool.
//!
//! All calls to `VBoxManage` go through the [`runner::Runner`] trait.
//!
//! # Examples
//!
//! Print what would be done to the virtual machine _web01_, whose disks live
//! in `./web01/`.
//!
//! ```no_run
//! use vboxrename::*;
//! use vboxrename::runner::DryRun;
//!
//! let folder = DiskFolder::load("./web01").unwrap();
//! let vm = "web01".parse::<VmId>().unwrap();
//! let mut renamer =
//!   Renamer::new("web01", vm, folder, Settings::default(), DryRun::default());
//! renamer.run().unwrap();
//!
//! let (dry, _) = renamer.into_parts();
//! for cmd in dry.history {
//!   println!("{}", cmd);
//! }
//! ```

mod platform;

pub mod err;
pub mod folder;
pub mod medium;
pub mod rename;
pub mod runner;
pub mod storage;
pub mod vmid;

pub use err::Error;
pub use folder::DiskFolder;
pub use platform::{get_cmd, VBOXMANAGE};
pub use rename::{CloneOutcome, Renamer, Settings};
pub use vmid::VmId;

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
