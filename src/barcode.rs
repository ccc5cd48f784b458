//! Barcode and QR code rendering for generated documents.
//!
//! Symbol encoding is delegated to the `barcoders` crate for linear codes and
//! the `qrcode` crate for matrix codes; this module only rasterizes the
//! encoded modules into PNG-backed images that can be placed into a document
//! like any other [`ImageBlock`](crate::model::ImageBlock).

use std::io::Cursor;

use barcoders::sym::ean8::EAN8;
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use qrcode::QrCode;

use crate::error::{Error, Result};
use crate::model::ImageBlock;

const QUIET_ZONE_MODULES: u32 = 4;

/// Linear symbologies supported by [`BarcodeRenderer::render_linear`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinearSymbology {
    /// EAN-8: seven data digits plus a check digit.
    #[default]
    Ean8,
}

impl LinearSymbology {
    fn name(self) -> &'static str {
        match self {
            LinearSymbology::Ean8 => "EAN-8",
        }
    }
}

/// Options for linear barcode rasterization.
#[derive(Clone, Debug)]
pub struct LinearBarcodeOptions {
    /// Symbology the code is encoded with.
    pub symbology: LinearSymbology,
    /// Bar height in pixels.
    pub height_px: u32,
    /// Width of a single module in pixels.
    pub module_width_px: u32,
    /// Foreground (bar) color as RGBA.
    pub foreground: [u8; 4],
    /// Background color as RGBA.
    pub background: [u8; 4],
}

impl Default for LinearBarcodeOptions {
    fn default() -> Self {
        Self {
            symbology: LinearSymbology::Ean8,
            height_px: 80,
            module_width_px: 2,
            foreground: [0, 0, 0, 255],
            background: [255, 255, 255, 255],
        }
    }
}

impl LinearBarcodeOptions {
    /// Creates options with the default black-on-white EAN-8 settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bar height in pixels.
    pub fn height_px(mut self, height_px: u32) -> Self {
        self.height_px = height_px.max(1);
        self
    }

    /// Sets the module width in pixels.
    pub fn module_width_px(mut self, module_width_px: u32) -> Self {
        self.module_width_px = module_width_px.max(1);
        self
    }

    /// Sets the foreground (bar) color.
    pub fn foreground(mut self, r: u8, g: u8, b: u8) -> Self {
        self.foreground = [r, g, b, 255];
        self
    }

    /// Sets the background color.
    pub fn background(mut self, r: u8, g: u8, b: u8) -> Self {
        self.background = [r, g, b, 255];
        self
    }
}

/// A rendered barcode, independent of any document until added.
#[derive(Clone, Debug, PartialEq)]
pub struct BarcodeImage {
    png: Vec<u8>,
    width_px: u32,
    height_px: u32,
}

impl BarcodeImage {
    /// Returns the encoded PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Returns the image width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Returns the image height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Converts the barcode into a document image block.
    pub fn into_block(self) -> ImageBlock {
        ImageBlock::new(self.png)
    }
}

impl From<BarcodeImage> for ImageBlock {
    fn from(image: BarcodeImage) -> Self {
        image.into_block()
    }
}

/// Renders barcode symbols into PNG-backed images.
pub struct BarcodeRenderer;

impl BarcodeRenderer {
    /// Renders a linear barcode for `code`.
    ///
    /// EAN-8 input is validated strictly: seven data digits are accepted
    /// as-is (the symbology appends the computed check digit), eight digits
    /// must end in the matching check digit, and any other length is
    /// rejected.  Codes are never truncated to fit.
    pub fn render_linear(code: &str, options: &LinearBarcodeOptions) -> Result<BarcodeImage> {
        let encoded: Vec<u8> = match options.symbology {
            LinearSymbology::Ean8 => {
                validate_ean8(code).map_err(|reason| Error::Validation {
                    symbology: options.symbology.name(),
                    code: code.to_owned(),
                    reason,
                })?;
                EAN8::new(code)
                    .map_err(|err| Error::Validation {
                        symbology: options.symbology.name(),
                        code: code.to_owned(),
                        reason: err.to_string(),
                    })?
                    .encode()
            }
        };

        log::debug!(
            "encoded {} code {:?} into {} modules",
            options.symbology.name(),
            code,
            encoded.len()
        );

        let xdim = options.module_width_px.max(1);
        let quiet_px = QUIET_ZONE_MODULES * xdim;
        let width_px = encoded.len() as u32 * xdim + 2 * quiet_px;
        let height_px = options.height_px.max(1);

        let mut img = RgbaImage::from_pixel(width_px, height_px, Rgba(options.background));
        for (index, module) in encoded.iter().enumerate() {
            if *module == 0 {
                continue;
            }
            let start_x = quiet_px + index as u32 * xdim;
            for x in start_x..start_x + xdim {
                for y in 0..height_px {
                    img.put_pixel(x, y, Rgba(options.foreground));
                }
            }
        }

        encode_png(DynamicImage::ImageRgba8(img), width_px, height_px)
    }

    /// Renders a QR code scaled to the requested pixel dimensions.
    pub fn render_matrix(code: &str, width_px: u32, height_px: u32) -> Result<BarcodeImage> {
        if width_px == 0 || height_px == 0 {
            return Err(Error::Validation {
                symbology: "QR",
                code: code.to_owned(),
                reason: "requested dimensions must be non-zero".to_owned(),
            });
        }

        let qr = QrCode::new(code.as_bytes()).map_err(|err| Error::Validation {
            symbology: "QR",
            code: code.to_owned(),
            reason: err.to_string(),
        })?;

        let qr_width = qr.width();
        let module_count = qr_width as u32 + 2 * QUIET_ZONE_MODULES;
        let module_size = (width_px.min(height_px) / module_count).max(1);
        let drawn_size = module_count * module_size;

        let mut img = RgbaImage::from_pixel(drawn_size, drawn_size, Rgba([255, 255, 255, 255]));
        let quiet_px = QUIET_ZONE_MODULES * module_size;
        for (y, row) in qr.to_colors().chunks(qr_width).enumerate() {
            for (x, module) in row.iter().enumerate() {
                if *module != qrcode::Color::Dark {
                    continue;
                }
                let start_x = quiet_px + x as u32 * module_size;
                let start_y = quiet_px + y as u32 * module_size;
                for dy in 0..module_size {
                    for dx in 0..module_size {
                        img.put_pixel(start_x + dx, start_y + dy, Rgba([0, 0, 0, 255]));
                    }
                }
            }
        }

        let final_img = if drawn_size != width_px || drawn_size != height_px {
            DynamicImage::ImageRgba8(img).resize_exact(
                width_px,
                height_px,
                image::imageops::FilterType::Nearest,
            )
        } else {
            DynamicImage::ImageRgba8(img)
        };

        encode_png(final_img, width_px, height_px)
    }
}

// GS1 modulo-10 weighting over the seven data digits.
fn ean8_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, digit)| u32::from(*digit) * if index % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Checks the EAN-8 length and check-digit rules before the code reaches the
/// encoder.  The encoder derives the check digit itself, so a supplied eighth
/// digit has to be compared here instead of being silently replaced.
fn validate_ean8(code: &str) -> std::result::Result<(), String> {
    let digits = code
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| "code must contain only decimal digits".to_owned())?;

    match digits.len() {
        7 => Ok(()),
        8 => {
            let expected = ean8_check_digit(&digits[..7]);
            if digits[7] == expected {
                Ok(())
            } else {
                Err(format!(
                    "check digit mismatch: expected {expected}, found {}",
                    digits[7]
                ))
            }
        }
        other => Err(format!("expected 7 or 8 digits, found {other}")),
    }
}

fn encode_png(image: DynamicImage, width_px: u32, height_px: u32) -> Result<BarcodeImage> {
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .map_err(|err| Error::Pdf(format!("PNG encoding failed: {err}")))?;
    Ok(BarcodeImage {
        png,
        width_px,
        height_px,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn seven_digit_ean8_gets_a_check_digit() {
        let image = BarcodeRenderer::render_linear("9638507", &LinearBarcodeOptions::new())
            .expect("seven digits are valid EAN-8 input");
        assert_eq!(&image.png_bytes()[..8], &PNG_MAGIC);
        assert!(image.width_px() > 0);
    }

    #[test]
    fn eight_digit_ean8_with_valid_check_digit_renders() {
        BarcodeRenderer::render_linear("96385074", &LinearBarcodeOptions::new())
            .expect("eight digits with a valid check digit are accepted");
    }

    #[test]
    fn nine_digit_code_is_rejected_not_truncated() {
        let err = BarcodeRenderer::render_linear("123456789", &LinearBarcodeOptions::new())
            .unwrap_err();
        match err {
            Error::Validation { symbology, code, .. } => {
                assert_eq!(symbology, "EAN-8");
                assert_eq!(code, "123456789");
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn eight_digit_ean8_with_wrong_check_digit_is_rejected() {
        let err = BarcodeRenderer::render_linear("96385073", &LinearBarcodeOptions::new())
            .unwrap_err();
        match err {
            Error::Validation { reason, .. } => assert!(reason.contains("check digit")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn check_digit_follows_the_gs1_weighting() {
        assert_eq!(ean8_check_digit(&[9, 6, 3, 8, 5, 0, 7]), 4);
        assert_eq!(ean8_check_digit(&[5, 5, 1, 2, 3, 4, 5]), 7);
    }

    #[test]
    fn non_digit_input_is_rejected() {
        assert!(matches!(
            BarcodeRenderer::render_linear("12345A7", &LinearBarcodeOptions::new()),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn qr_output_matches_requested_dimensions() {
        let image = BarcodeRenderer::render_matrix("123456789", 100, 100)
            .expect("render QR code");
        assert_eq!(&image.png_bytes()[..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(image.png_bytes()).expect("decode PNG");
        use image::GenericImageView;
        assert_eq!(decoded.dimensions(), (100, 100));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            BarcodeRenderer::render_matrix("123456789", 0, 100),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn custom_colors_reach_the_bitmap() {
        let options = LinearBarcodeOptions::new()
            .foreground(200, 0, 0)
            .background(0, 0, 200);
        let image = BarcodeRenderer::render_linear("9638507", &options).expect("render barcode");

        let decoded = image::load_from_memory(image.png_bytes())
            .expect("decode PNG")
            .to_rgba();
        let has_foreground = decoded.pixels().any(|px| px.0 == [200, 0, 0, 255]);
        let has_background = decoded.pixels().any(|px| px.0 == [0, 0, 200, 255]);
        assert!(has_foreground && has_background);
    }
}
