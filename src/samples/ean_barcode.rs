use std::path::Path;

use crate::barcode::{BarcodeRenderer, LinearBarcodeOptions};
use crate::builder::DocumentBuilder;
use crate::error::Result;

/// Eight digits: seven data digits plus a valid check digit.
const SAMPLE_CODE: &str = "96385074";

/// Writes `barcode.pdf` containing a single EAN-8 barcode image.
pub fn run(output_dir: &Path) -> Result<()> {
    let path = output_dir.join("barcode.pdf");
    let image = BarcodeRenderer::render_linear(SAMPLE_CODE, &LinearBarcodeOptions::new())?;

    let mut writer = DocumentBuilder::new(&path).open()?;
    writer.add_image(image)?;
    writer.close()?;

    println!("Generated {}", path.display());
    Ok(())
}
