//! Conversion glue between the content model and `genpdf` elements.
//!
//! Image blocks store encoded PNG bytes; this module decodes them with the
//! [`image`] crate, estimates their natural size on paper, and configures the
//! resulting [`genpdf::elements::Image`] with the alignment and width
//! recorded on the block.

use image::GenericImageView;

use genpdf::elements::Image;
use genpdf::error::Context as _;
use genpdf::{Mm, Scale, Size};

use crate::error::Result;
use crate::model::ImageBlock;

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

fn estimated_image_size(image: &image::DynamicImage, dpi: f64) -> Size {
    let (px_width, px_height) = image.dimensions();
    let width_mm = MM_PER_INCH * (px_width as f64) / dpi;
    let height_mm = MM_PER_INCH * (px_height as f64) / dpi;
    Size::new(mm_from_f64(width_mm), mm_from_f64(height_mm))
}

/// Decodes the PNG bytes of an image block into a positioned `genpdf` image.
pub(crate) fn image_element(block: &ImageBlock) -> Result<Image> {
    let dynamic = image::load_from_memory(block.png_bytes())
        .context("failed to decode image block bytes")?;
    let natural_size = estimated_image_size(&dynamic, DEFAULT_IMAGE_DPI);

    let mut element = Image::from_dynamic_image(dynamic)?;
    element.set_alignment(block.alignment().to_genpdf());

    if let Some(width_mm) = block.width_mm() {
        let natural = mm_to_f64(natural_size.width);
        if natural > f64::EPSILON {
            let scale = width_mm / natural;
            element.set_scale(Scale::new(scale, scale));
        }
    }

    Ok(element)
}
