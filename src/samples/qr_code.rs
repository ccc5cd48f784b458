use std::path::Path;

use crate::barcode::BarcodeRenderer;
use crate::builder::DocumentBuilder;
use crate::error::Result;

const SAMPLE_CODE: &str = "123456789";
const QR_SIZE_PX: u32 = 100;

/// Writes `qrcode.pdf` containing a single 100x100 QR code image.
pub fn run(output_dir: &Path) -> Result<()> {
    let path = output_dir.join("qrcode.pdf");
    let image = BarcodeRenderer::render_matrix(SAMPLE_CODE, QR_SIZE_PX, QR_SIZE_PX)?;

    let mut writer = DocumentBuilder::new(&path).open()?;
    writer.add_image(image)?;
    writer.close()?;

    println!("Generated {}", path.display());
    Ok(())
}
