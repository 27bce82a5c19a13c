use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

pub const DISTRO_CONFIG_FILE: &str = "nixtrobed.distros";
pub const VAGRANTFILE_TEMPLATE_PATH: &str = "Vagrantfile.jinja";
pub const VAGRANTFILE_PATH: &str = "Vagrantfile";
pub const PROVISIONING_DIRECTORY: &str = "provisioning";
pub const PLAYBOOK_DIRECTORY: &str = "provisioning/playbooks";
pub const ROLES_DIRECTORY: &str = "provisioning/roles";
pub const ANSIBLE_CONFIG_PATH: &str = "provisioning/ansible.cfg";

/// Paths of an existing (or about to be created) testbed directory.
#[derive(Debug, Clone)]
pub struct Testbed {
    root: PathBuf,
}

impl Testbed {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Testbed { root: root.into() }
    }

    /// Open a testbed, failing if any of its required entries is missing.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let testbed = Testbed::new(root);
        for required in [
            VAGRANTFILE_TEMPLATE_PATH,
            DISTRO_CONFIG_FILE,
            PROVISIONING_DIRECTORY,
        ] {
            let path = testbed.root.join(required);
            if !path.exists() {
                return Err(Error::NotFound { path });
            }
        }
        Ok(testbed)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn distro_config(&self) -> PathBuf {
        self.root.join(DISTRO_CONFIG_FILE)
    }

    pub fn template(&self) -> PathBuf {
        self.root.join(VAGRANTFILE_TEMPLATE_PATH)
    }

    pub fn vagrantfile(&self) -> PathBuf {
        self.root.join(VAGRANTFILE_PATH)
    }
}
