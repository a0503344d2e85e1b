use anyhow::Result;

use crate::config::ENV_VARS;

pub(crate) fn run() -> Result<()> {
    for var in ENV_VARS {
        let requirement = if var.required { "required" } else { "optional" };
        match var.default {
            Some(default) => println!(
                "{:<18} {:<9} (default {}) {}",
                var.name, requirement, default, var.description
            ),
            None => println!("{:<18} {:<9} {}", var.name, requirement, var.description),
        }
    }
    Ok(())
}
