use crate::error::Result;
use crate::output::{print_info, print_success};
use crate::testbed::create_testbed;
use std::path::Path;

pub fn handle_init_command(directory: &Path) -> Result<()> {
    let testbed = create_testbed(directory)?;

    print_success(&format!("Testbed created in {}", testbed.root().display()));
    print_info(&format!(
        "Enable distributions in {} and run 'nixtrobed start' inside the directory",
        testbed.distro_config().display()
    ));
    Ok(())
}
