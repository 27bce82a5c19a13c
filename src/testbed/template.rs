//! Renders `Vagrantfile.jinja` into `Vagrantfile` with minijinja.

use crate::error::{Error, Result};
use crate::testbed::distros::DistroRegistry;
use crate::testbed::layout::Testbed;
use crate::testbed::types::Distro;
use minijinja::{context, Environment, UndefinedBehavior};
use std::fs;
use tracing::debug;

pub const VAGRANTFILE_TEMPLATE: &str = r#"# -*- mode: ruby -*-
# vi: set ft=ruby :
{{ autogenerated_warning_message }}

Vagrant.configure("2") do |config|
  {% for distro in distros %}
  config.vm.define "{{ distro.name }}" do |{{ distro.name }}|
    {{ distro.name }}.vm.box = "{{ distro.box }}"

    {{ distro.name }}.vm.provision "ansible" do |ansible|
      ansible.config_file = "provisioning/ansible.cfg"
      ansible.playbook = "provisioning/playbooks/{{ distro.playbook }}"
    end
  end
  {% endfor %}
end
"#;

pub const AUTOGENERATED_WARNING_MESSAGE: &str = "#
# WARNING: This file will be overwritten on each invocation of nixtrobed!
#          Make any changes in the Vagrantfile.jinja file.
#
";

/// Render `template` for the given distros.
///
/// Variables: `distros` (each with `name`, `box` and `playbook`) and
/// `autogenerated_warning_message`. Undefined variables are errors.
pub fn render(template: &str, distros: &[Distro]) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.render_str(
        template,
        context! {
            distros => distros,
            autogenerated_warning_message => AUTOGENERATED_WARNING_MESSAGE,
        },
    )
    .map_err(|e| Error::Template(e.to_string()))
}

/// Regenerate the testbed's `Vagrantfile` from its template.
pub fn render_vagrantfile(testbed: &Testbed, registry: &DistroRegistry) -> Result<()> {
    let template_path = testbed.template();
    let template =
        fs::read_to_string(&template_path).map_err(|e| Error::io(&template_path, e))?;

    let rendered = render(&template, registry.distros())?;

    let vagrantfile = testbed.vagrantfile();
    fs::write(&vagrantfile, rendered).map_err(|e| Error::io(&vagrantfile, e))?;
    debug!(path = %vagrantfile.display(), distros = registry.len(), "rendered Vagrantfile");
    Ok(())
}
