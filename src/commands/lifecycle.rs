use crate::config::Settings;
use crate::error::{Error, Result};
use crate::output::{print_info, print_success, print_warning};
use crate::testbed::{render_vagrantfile, DistroRegistry, Testbed};
use crate::vagrant::{Invocation, VagrantCommand};

/// Run `vagrant up|halt|provision` for the requested distros of the testbed.
pub fn handle_lifecycle_command(
    settings: &Settings,
    command: VagrantCommand,
    requested: &[String],
) -> Result<()> {
    let testbed = Testbed::open(&settings.testbed)?;
    let registry = DistroRegistry::load(&testbed.distro_config())?;

    // halt works off the Vagrantfile the machines were started with, which may
    // still define distros since removed from the registry
    let checked = command != VagrantCommand::Halt;
    let selected = select_distros(&registry, requested, checked)?;

    if selected.is_empty() {
        print_warning("No distributions configured in nixtrobed.distros, nothing to do");
        return Ok(());
    }

    if command != VagrantCommand::Halt {
        render_vagrantfile(&testbed, &registry)?;
    }

    let invocation = Invocation::new(&settings.vagrant, command, &selected, testbed.root());
    print_info(&format!("Running '{}'...", invocation));
    invocation.run()?;

    print_success(&format!("vagrant {} finished", command.as_str()));
    Ok(())
}

/// Resolve command-line distro names against the registry.
///
/// No names, or the keyword `all`, selects the whole registry in file order.
/// Otherwise names keep their order with duplicates dropped; when `checked`
/// is set, names missing from the registry are rejected.
pub fn select_distros(
    registry: &DistroRegistry,
    requested: &[String],
    checked: bool,
) -> Result<Vec<String>> {
    if requested.is_empty() || requested.iter().any(|name| name == "all") {
        return Ok(registry.names());
    }

    let mut selected: Vec<String> = Vec::with_capacity(requested.len());
    for name in requested {
        if checked && !registry.contains(name) {
            return Err(Error::UnknownDistro {
                name: name.clone(),
                known: registry.names(),
            });
        }
        if !selected.contains(name) {
            selected.push(name.clone());
        }
    }
    Ok(selected)
}
