//! Build `VBoxManage` invocations which operate on disk media.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use regex::Regex;


/// Disk image formats understood by `clonemedium --format`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
  /// VirtualBox's native format.  Required for `--resize` to be reliable.
  Vdi,

  Vmdk
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Format::Vdi => write!(f, "VDI"),
      Format::Vmdk => write!(f, "VMDK")
    }
  }
}


/// `VBoxManage clonemedium <from> <to> --format <fmt>`
pub fn clone<P, Q>(from: P, to: Q, format: Format) -> Vec<OsString>
where
  P: AsRef<Path>,
  Q: AsRef<Path>
{
  vec![
    "clonemedium".into(),
    from.as_ref().into(),
    to.as_ref().into(),
    "--format".into(),
    format.to_string().into()
  ]
}


/// `VBoxManage modifymedium <medium> --resize <megabytes>`
pub fn resize<P: AsRef<Path>>(medium: P, megabytes: u64) -> Vec<OsString> {
  vec![
    "modifymedium".into(),
    medium.as_ref().into(),
    "--resize".into(),
    megabytes.to_string().into()
  ]
}


/// `VBoxManage closemedium disk <medium> --delete`
///
/// Unregisters the medium and deletes the backing file.
pub fn close_and_delete<P: AsRef<Path>>(medium: P) -> Vec<OsString> {
  vec![
    "closemedium".into(),
    "disk".into(),
    medium.as_ref().into(),
    "--delete".into()
  ]
}


/// Pick out the UUID `clonemedium` assigned to the new medium.
///
/// The tool reports it on the last line, for instance
/// `Clone medium created in format 'VMDK'. UUID: 7ac3...`.
pub fn parse_clone_uuid(output: &str) -> Option<uuid::Uuid> {
  let re = Regex::new(r"UUID:\s*(?P<uuid>[0-9a-fA-F-]{36})").ok()?;
  let cap = re.captures(output)?;
  uuid::Uuid::parse_str(&cap["uuid"]).ok()
}


#[cfg(test)]
mod tests {
  use super::*;

  fn strs(v: Vec<OsString>) -> Vec<String> {
    v.into_iter()
      .map(|s| s.to_string_lossy().into_owned())
      .collect()
  }

  #[test]
  fn clone_args() {
    let args = clone("./vm/a.vmdk", "./vm/clone.vdi", Format::Vdi);
    assert_eq!(
      strs(args),
      ["clonemedium", "./vm/a.vmdk", "./vm/clone.vdi", "--format", "VDI"]
    );
  }

  #[test]
  fn resize_and_close_args() {
    assert_eq!(
      strs(resize("./vm/clone.vdi", 101200)),
      ["modifymedium", "./vm/clone.vdi", "--resize", "101200"]
    );
    assert_eq!(
      strs(close_and_delete("./vm/clone.vdi")),
      ["closemedium", "disk", "./vm/clone.vdi", "--delete"]
    );
  }

  #[test]
  fn uuid_from_clone_output() {
    let out = "0%...10%...20%...30%...40%...50%...60%...70%...80%...90%...100%\n\
               Clone medium created in format 'VMDK'. \
               UUID: 5c3b2b54-8d8e-4e5b-9b1f-0c7a3e1f2d4a\n";
    let u = parse_clone_uuid(out).unwrap();
    assert_eq!(u.to_string(), "5c3b2b54-8d8e-4e5b-9b1f-0c7a3e1f2d4a");
  }

  #[test]
  fn no_uuid_in_output() {
    assert_eq!(parse_clone_uuid(""), None);
    assert_eq!(parse_clone_uuid("UUID: not-a-uuid"), None);
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
