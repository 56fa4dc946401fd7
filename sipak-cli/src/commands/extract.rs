//! CLI command for package extraction

use std::path::Path;

use sipak::archive::SiqOperations;
use sipak::utils::resolve_package_path;

pub fn execute(source: &Path, destination: &Path) -> anyhow::Result<()> {
    let source = resolve_package_path(source)?;

    println!(
        "Extracting {} to {}",
        source.display(),
        destination.display()
    );
    SiqOperations::extract(&source, destination)?;
    println!("Extraction complete");
    Ok(())
}
