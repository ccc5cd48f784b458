//! Core entry point for the pdf_sampler crate.
//!
//! The crate is a thin facade over `genpdf` (document assembly), `barcoders`
//! and `qrcode` (symbol encoding) and `lopdf` (encryption and read-back).
//! Documents follow a write-once lifecycle: open a writer, append paragraphs
//! and barcode images, close to flush; reopen the file separately through
//! [`reader::DocumentReader`].

pub mod barcode;
pub mod builder;
mod elements;
pub mod encryption;
pub mod error;
pub mod fonts;
pub mod model;
pub mod reader;
pub mod samples;

pub use barcode::{BarcodeImage, BarcodeRenderer, LinearBarcodeOptions, LinearSymbology};
pub use builder::{DocumentBuilder, DocumentWriter};
pub use encryption::{CipherStrength, EncryptionOptions, Permissions};
pub use error::{Error, Result};
pub use model::{Alignment, Block, FontStyle, ImageBlock, Paragraph};
pub use reader::{DocumentReader, PageRef};
