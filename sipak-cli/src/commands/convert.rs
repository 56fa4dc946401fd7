//! CLI command for package conversion

use std::path::Path;

use sipak::converter::convert_siq;

pub fn execute(source: &Path) -> anyhow::Result<()> {
    let outcome = convert_siq(source)?;

    if !outcome.warnings.is_empty() {
        println!("Finished with {} warning(s)", outcome.warnings.len());
    }
    println!("Scenario written to {}", outcome.output_dir.display());
    Ok(())
}
