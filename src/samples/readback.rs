use std::path::Path;

use crate::error::Result;
use crate::reader::DocumentReader;

/// Reopens `qrcode.pdf` and prints the MediaBox entries of the first page.
///
/// Expects [`qr_code::run`](crate::samples::qr_code::run) to have written the
/// file already.
pub fn run(output_dir: &Path) -> Result<()> {
    let path = output_dir.join("qrcode.pdf");
    let reader = DocumentReader::open(&path)?;
    let page = reader.page(1)?;

    println!("-------");
    for value in page.media_box() {
        println!("{value}");
    }
    Ok(())
}
