use crate::config::Settings;
use crate::error::Result;
use crate::output::{output_data, print_warning};
use crate::testbed::{Distro, DistroRegistry, Testbed};

pub fn handle_list_command(settings: &Settings, format: &str) -> Result<()> {
    let testbed = Testbed::open(&settings.testbed)?;
    let registry = DistroRegistry::load(&testbed.distro_config())?;

    match format {
        "json" | "yaml" => output_data(&registry.distros(), format)?,
        _ => {
            if registry.is_empty() {
                print_warning("No distributions configured in nixtrobed.distros");
            } else {
                print!("{}", format_table(registry.distros()));
            }
        }
    }
    Ok(())
}

fn format_table(distros: &[Distro]) -> String {
    let name_width = distros
        .iter()
        .map(|d| d.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();
    let box_width = distros
        .iter()
        .map(|d| d.box_name.len())
        .chain(std::iter::once("BOX".len()))
        .max()
        .unwrap_or_default();

    let mut table = format!(
        "{:<name_width$}  {:<box_width$}  {}\n",
        "NAME", "BOX", "PLAYBOOK"
    );
    for distro in distros {
        table.push_str(&format!(
            "{:<name_width$}  {:<box_width$}  {}\n",
            distro.name, distro.box_name, distro.playbook
        ));
    }
    table
}
