//! In-memory listing of a virtual machine's disk folder.
//!
//! The folder is read once.  Afterwards the listing is kept in sync by hand
//! as media are cloned or deleted, so existence checks never go back to the
//! filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::err::Error;


#[derive(Debug, Clone)]
pub struct DiskFolder {
  path: PathBuf,
  files: Vec<String>
}

impl DiskFolder {
  /// Read the names of all entries in `path`, sorted.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let path = path.as_ref();
    let rd = match fs::read_dir(path) {
      Ok(rd) => rd,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Err(Error::MissingFolder(path.to_path_buf()));
      }
      Err(e) => {
        return Err(Error::IO(format!("{}: {}", path.display(), e)));
      }
    };

    let mut files = Vec::new();
    for entry in rd {
      let entry = entry?;
      files.push(entry.file_name().to_string_lossy().into_owned());
    }
    files.sort();

    Ok(DiskFolder {
      path: path.to_path_buf(),
      files
    })
  }

  /// Construct a listing without touching the filesystem.
  pub fn with_files<P, I, S>(path: P, files: I) -> Self
  where
    P: Into<PathBuf>,
    I: IntoIterator<Item = S>,
    S: Into<String>
  {
    DiskFolder {
      path: path.into(),
      files: files.into_iter().map(Into::into).collect()
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn files(&self) -> &[String] {
    &self.files
  }

  pub fn contains(&self, name: &str) -> bool {
    self.files.iter().any(|f| f == name)
  }

  /// Full path of `name` within the folder.
  pub fn path_of(&self, name: &str) -> PathBuf {
    self.path.join(name)
  }

  /// Record that `name` now exists.
  pub fn add(&mut self, name: &str) {
    if !self.contains(name) {
      self.files.push(name.to_string());
    }
  }

  /// Record that `name` no longer exists.  Returns `false` if it was not
  /// listed.
  pub fn remove(&mut self, name: &str) -> bool {
    match self.files.iter().position(|f| f == name) {
      Some(idx) => {
        self.files.remove(idx);
        true
      }
      None => false
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn load_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.vmdk"), b"").unwrap();
    fs::write(dir.path().join("a.vmdk"), b"").unwrap();

    let folder = DiskFolder::load(dir.path()).unwrap();
    assert_eq!(folder.files(), ["a.vmdk", "b.vmdk"]);
    assert_eq!(folder.path_of("a.vmdk"), dir.path().join("a.vmdk"));
  }

  #[test]
  fn load_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    match DiskFolder::load(&missing) {
      Err(Error::MissingFolder(p)) => assert_eq!(p, missing),
      other => panic!("unexpected result {:?}", other)
    }
  }

  #[test]
  fn load_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain");
    fs::write(&file, b"").unwrap();
    assert!(matches!(DiskFolder::load(&file), Err(Error::IO(_))));
  }

  #[test]
  fn add_and_remove() {
    let mut folder = DiskFolder::with_files("vm", ["a.vmdk"]);
    folder.add("clone.vdi");
    folder.add("clone.vdi");
    assert_eq!(folder.files(), ["a.vmdk", "clone.vdi"]);

    assert!(folder.remove("a.vmdk"));
    assert!(!folder.remove("a.vmdk"));
    assert_eq!(folder.files(), ["clone.vdi"]);
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
