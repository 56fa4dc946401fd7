//! CLI command for listing package entries

use std::path::Path;

use sipak::archive::SiqOperations;
use sipak::utils::resolve_package_path;

pub fn execute(source: &Path) -> anyhow::Result<()> {
    let source = resolve_package_path(source)?;

    let entries = SiqOperations::list(&source)?;
    for entry in &entries {
        println!("{entry}");
    }
    println!("{} entries", entries.len());
    Ok(())
}
