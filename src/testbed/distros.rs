use crate::error::{Error, Result};
use crate::testbed::types::Distro;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Ordered list of distros read from `nixtrobed.distros`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistroRegistry {
    distros: Vec<Distro>,
}

impl DistroRegistry {
    pub fn new(distros: Vec<Distro>) -> Self {
        DistroRegistry { distros }
    }

    /// Read and parse a distro file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let registry = Self::parse(&contents, path)?;
        debug!(path = %path.display(), count = registry.len(), "loaded distro registry");
        Ok(registry)
    }

    /// Parse distro file contents. `path` is only used in error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let mut distros = Vec::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = |reason: &str| Error::Malformed {
                path: path.to_path_buf(),
                line: index + 1,
                reason: reason.to_string(),
            };

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() > 3 {
                return Err(malformed("has more than three fields (name,box,playbook)"));
            }
            let name = fields[0];
            if name.is_empty() {
                return Err(malformed("contains no distro name"));
            }

            let mut distro = Distro::from_name(name);
            if let Some(box_name) = fields.get(1).filter(|s| !s.is_empty()) {
                distro.box_name = box_name.to_string();
            }
            if let Some(playbook) = fields.get(2).filter(|s| !s.is_empty()) {
                distro.playbook = playbook.to_string();
            }
            distros.push(distro);
        }

        Ok(DistroRegistry::new(distros))
    }

    pub fn distros(&self) -> &[Distro] {
        &self.distros
    }

    /// Distro identifiers in file order.
    pub fn names(&self) -> Vec<String> {
        self.distros.iter().map(|d| d.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.distros.iter().any(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.distros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distros.is_empty()
    }
}
