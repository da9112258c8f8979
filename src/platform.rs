use std::path::{Path, PathBuf};

/// Name of VirtualBox's command line management tool.
pub const VBOXMANAGE: &str = "VBoxManage";

/// Resolve the path used to launch one of VirtualBox's command line tools.
#[cfg(not(windows))]
pub fn get_cmd<P: AsRef<Path>>(nm: P) -> PathBuf {
  PathBuf::from(nm.as_ref())
}

/// Resolve the path used to launch one of VirtualBox's command line tools.
///
/// The installer records its install location in `VBOX_MSI_INSTALL_PATH`,
/// which is usually not in `PATH`.
#[cfg(windows)]
pub fn get_cmd<P: AsRef<Path>>(nm: P) -> PathBuf {
  let mut nm = PathBuf::from(nm.as_ref());
  nm.set_extension("exe");

  match std::env::var_os("VBOX_MSI_INSTALL_PATH") {
    Some(dir) => Path::new(&dir).join(&nm),
    None => nm
  }
}


// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
