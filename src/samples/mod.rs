//! Sample document runners exercised by the command line interface.
//!
//! Each runner writes into an explicit output directory supplied by the
//! caller; there is no process-wide output root.

pub mod ean_barcode;
pub mod encrypted;
pub mod paragraphs;
pub mod qr_code;
pub mod readback;
pub mod run_all;
