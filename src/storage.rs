use std::ffi::OsString;
use std::path::Path;

use crate::VmId;

/// Kind of device a medium is attached as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Type {
  Hdd
}

impl Type {
  fn as_arg(&self) -> &'static str {
    match self {
      Type::Hdd => "hdd"
    }
  }
}

/// Where on a storage controller a medium goes.
#[derive(Clone, Debug)]
pub struct Slot<'a> {
  /// Name of the storage controller, as given to `storagectl --name`.
  pub controller: &'a str,
  pub port: u8,
  pub device: u8,
  pub stype: Type
}


/// `VBoxManage storageattach` invocation attaching `medium` to `slot` of
/// the virtual machine `vid`.
pub fn attach<P: AsRef<Path>>(
  vid: &VmId,
  slot: &Slot<'_>,
  medium: P
) -> Vec<OsString> {
  //VBoxManage storageattach $VM --storagectl "SCSI" --port 0 --device 0 \
  //  --type hdd --medium ./$VM/$VM.vmdk
  vec![
    "storageattach".into(),
    vid.to_string().into(),
    "--storagectl".into(),
    slot.controller.into(),
    "--port".into(),
    slot.port.to_string().into(),
    "--device".into(),
    slot.device.to_string().into(),
    "--type".into(),
    slot.stype.as_arg().into(),
    "--medium".into(),
    medium.as_ref().into()
  ]
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn attach_hdd() {
    let slot = Slot {
      controller: "SCSI",
      port: 1,
      device: 0,
      stype: Type::Hdd
    };
    let args = attach(&VmId::from("web"), &slot, "./web/web-driver.vmdk");
    let args: Vec<_> = args.iter().map(|a| a.to_str().unwrap()).collect();
    assert_eq!(
      args,
      [
        "storageattach",
        "web",
        "--storagectl",
        "SCSI",
        "--port",
        "1",
        "--device",
        "0",
        "--type",
        "hdd",
        "--medium",
        "./web/web-driver.vmdk"
      ]
    );
  }
}

// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
