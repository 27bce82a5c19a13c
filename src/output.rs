use crate::error::{Error, Result};
use serde::Serialize;

pub fn output_data<T: Serialize>(data: &T, format: &str) -> Result<()> {
    match format {
        "yaml" => {
            let yaml = serde_yaml::to_string(data).map_err(|e| Error::Output(e.to_string()))?;
            print!("{}", yaml);
        }
        _ => {
            let json =
                serde_json::to_string_pretty(data).map_err(|e| Error::Output(e.to_string()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("\x1b[31m❌ Error: {}\x1b[0m", message);
}

pub fn print_warning(message: &str) {
    println!("\x1b[33m⚠️  Warning: {}\x1b[0m", message);
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", message);
}
