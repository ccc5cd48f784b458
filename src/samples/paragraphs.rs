use std::path::Path;

use crate::builder::DocumentBuilder;
use crate::error::Result;
use crate::model::{Alignment, FontStyle, Paragraph};

/// Writes `paragraphs.pdf`: a centered paragraph, an unaligned one, and a
/// bold 8pt one.
pub fn run(output_dir: &Path) -> Result<()> {
    let path = output_dir.join("paragraphs.pdf");
    let mut writer = DocumentBuilder::new(&path).open()?;

    writer.add_paragraph(
        Paragraph::new("This is my paragraph 1").with_alignment(Alignment::Center),
    )?;
    writer.add_paragraph(Paragraph::new("This is my paragraph 2"))?;
    writer.add_paragraph(
        Paragraph::new("This is my paragraph 3").with_style(FontStyle::new().bold().with_size(8)),
    )?;
    writer.close()?;

    println!("Generated {}", path.display());
    Ok(())
}
