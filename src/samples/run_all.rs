use std::fs;
use std::path::Path;

use crate::error::Result;

/// Runs every sample against `output_dir`, creating it when missing.
///
/// The QR and barcode documents are written before the read-back samples
/// that depend on them.
pub fn run(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    super::qr_code::run(output_dir)?;
    super::ean_barcode::run(output_dir)?;
    super::paragraphs::run(output_dir)?;
    super::readback::run(output_dir)?;
    super::encrypted::run(output_dir)?;

    println!("All samples completed successfully.");
    Ok(())
}
