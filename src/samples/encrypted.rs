use std::path::Path;

use crate::barcode::BarcodeRenderer;
use crate::builder::DocumentBuilder;
use crate::encryption::{EncryptionOptions, Permissions};
use crate::error::Result;
use crate::reader::DocumentReader;

const SAMPLE_CODE: &str = "123456789";
const QR_SIZE_PX: u32 = 100;
const USER_PASSWORD: &str = "user";
const OWNER_PASSWORD: &str = "owner";

/// Writes `qrcode-encrypted.pdf` protected with AES-256 and print-only
/// permissions, then reopens it with the owner password and prints the
/// MediaBox entries of the first page.
pub fn run(output_dir: &Path) -> Result<()> {
    let path = output_dir.join("qrcode-encrypted.pdf");

    let options = EncryptionOptions::new(USER_PASSWORD, OWNER_PASSWORD)
        .with_permissions(Permissions::PRINTABLE);
    let image = BarcodeRenderer::render_matrix(SAMPLE_CODE, QR_SIZE_PX, QR_SIZE_PX)?;

    let mut writer = DocumentBuilder::new(&path).with_encryption(options).open()?;
    writer.add_image(image)?;
    writer.close()?;
    println!("Generated {}", path.display());

    let reader = DocumentReader::open_with_password(&path, OWNER_PASSWORD)?;
    let page = reader.page(1)?;
    println!("-------");
    for value in page.media_box() {
        println!("{value}");
    }
    Ok(())
}
