use serde::Serialize;

pub const DEFAULT_PLAYBOOK_NAME: &str = "default.yml";

/// One machine of the testbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distro {
    pub name: String,
    #[serde(rename = "box")]
    pub box_name: String,
    pub playbook: String,
}

impl Distro {
    /// Build a distro from a bare name, taking the box from the catalog.
    pub fn from_name(name: &str) -> Self {
        let box_name = catalog_box(name).unwrap_or(name);
        Distro {
            name: name.to_string(),
            box_name: box_name.to_string(),
            playbook: DEFAULT_PLAYBOOK_NAME.to_string(),
        }
    }
}

/// Distributions offered as examples in a fresh testbed, as (name, box).
pub const DEFAULT_DISTRIBUTIONS: &[(&str, &str)] = &[
    ("alma8", "almalinux/8"),
    ("fedora33", "generic/fedora33"),
    ("debian11", "debian/bullseye64"),
    ("debian10", "debian/buster64"),
    ("ubuntu2204", "ubuntu/jammy64"),
    ("ubuntu2004", "ubuntu/focal64"),
];

pub fn catalog_box(name: &str) -> Option<&'static str> {
    DEFAULT_DISTRIBUTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, box_name)| *box_name)
}
