use crate::error::{Error, Result};
use crate::testbed::layout::{
    Testbed, ANSIBLE_CONFIG_PATH, PLAYBOOK_DIRECTORY, ROLES_DIRECTORY,
};
use crate::testbed::template::VAGRANTFILE_TEMPLATE;
use crate::testbed::types::{DEFAULT_DISTRIBUTIONS, DEFAULT_PLAYBOOK_NAME};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

const ANSIBLE_CONFIG: &str = "[defaults]\nroles_path = roles";

const DEFAULT_PLAYBOOK: &str = "---\n\n- hosts: all\n  tasks:\n  roles:\n";

/// Create a new testbed directory at `path` with the default files.
///
/// `path` itself must not exist; its parent must.
pub fn create_testbed(path: &Path) -> Result<Testbed> {
    if path.exists() {
        return Err(Error::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    fs::create_dir(path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => Error::AlreadyExists {
            path: path.to_path_buf(),
        },
        _ => Error::io(path, e),
    })?;

    let testbed = Testbed::new(path);
    create_directory_structure(&testbed)?;
    write_file(&testbed.distro_config(), &default_distro_config())?;
    write_file(&testbed.template(), VAGRANTFILE_TEMPLATE)?;
    write_file(&path.join(ANSIBLE_CONFIG_PATH), ANSIBLE_CONFIG)?;
    write_file(
        &path.join(PLAYBOOK_DIRECTORY).join(DEFAULT_PLAYBOOK_NAME),
        DEFAULT_PLAYBOOK,
    )?;

    debug!(path = %path.display(), "testbed scaffolded");
    Ok(testbed)
}

fn create_directory_structure(testbed: &Testbed) -> Result<()> {
    for dir in [PLAYBOOK_DIRECTORY, ROLES_DIRECTORY] {
        let dir = testbed.root().join(dir);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Header plus the built-in catalog, commented out so a fresh testbed
/// starts with no machines.
fn default_distro_config() -> String {
    let mut config = String::from("#name,box,playbook\n");
    for (name, box_name) in DEFAULT_DISTRIBUTIONS {
        config.push_str(&format!("#{},{},{}\n", name, box_name, DEFAULT_PLAYBOOK_NAME));
    }
    config
}
