//! Document construction: the write side of the facade.
//!
//! A [`DocumentBuilder`] captures everything known before content exists
//! (output path, paper size, margins, fonts, encryption) and opens a
//! [`DocumentWriter`].  The writer records content blocks in order and turns
//! them into a rendered file when [`DocumentWriter::close`] runs.  Documents
//! are write-once: a closed writer rejects further content, and reopening a
//! file for append is not supported.

use std::fs;
use std::path::{Path, PathBuf};

use genpdf::fonts::{FontData, FontFamily};
use genpdf::{elements, Margins, SimplePageDecorator, Size};

use crate::elements::image_element;
use crate::encryption::{self, EncryptionOptions};
use crate::error::{Error, Result};
use crate::fonts;
use crate::model::{Alignment, Block, ImageBlock, Paragraph};

/// Builder for [`DocumentWriter`] instances targeting a single output file.
pub struct DocumentBuilder {
    path: PathBuf,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    font_dir: Option<PathBuf>,
    encryption: Option<EncryptionOptions>,
}

impl DocumentBuilder {
    /// Creates a builder that will write the document to `path`.
    ///
    /// The output location is always an explicit argument; the crate keeps no
    /// process-wide output root.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            paper_size: None,
            margins: None,
            font_dir: None,
            encryption: None,
        }
    }

    /// Sets the paper size used for the document.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Overrides the font search with an explicit directory.
    pub fn with_font_dir(mut self, font_dir: impl Into<PathBuf>) -> Self {
        self.font_dir = Some(font_dir.into());
        self
    }

    /// Encrypts the document with the given options when it is closed.
    pub fn with_encryption(mut self, options: EncryptionOptions) -> Self {
        self.encryption = Some(options);
        self
    }

    /// Opens the writer, creating the parent directory when it is missing.
    ///
    /// Fonts are resolved here so that configuration problems surface before
    /// any content is added.
    pub fn open(self) -> Result<DocumentWriter> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                log::debug!("created output directory {}", parent.display());
            }
        }

        let font_family = match &self.font_dir {
            Some(dir) => fonts::font_family_from_dir(dir)?,
            None => fonts::default_font_family()?,
        };

        Ok(DocumentWriter {
            path: self.path,
            paper_size: self.paper_size,
            margins: self.margins,
            font_family: Some(font_family),
            encryption: self.encryption,
            blocks: Vec::new(),
            closed: false,
        })
    }
}

/// An open, append-only document accepting content blocks until closed.
pub struct DocumentWriter {
    path: PathBuf,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    font_family: Option<FontFamily<FontData>>,
    encryption: Option<EncryptionOptions>,
    blocks: Vec<Block>,
    closed: bool,
}

impl DocumentWriter {
    /// Returns the path the document will be written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of content blocks recorded so far.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::State(
                "the document is closed; no further content can be added",
            ))
        } else {
            Ok(())
        }
    }

    /// Appends a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> Result<()> {
        self.ensure_open()?;
        self.blocks.push(Block::Paragraph(paragraph));
        Ok(())
    }

    /// Appends an image, typically a rendered barcode, to the document.
    pub fn add_image(&mut self, image: impl Into<ImageBlock>) -> Result<()> {
        self.ensure_open()?;
        self.blocks.push(Block::Image(image.into()));
        Ok(())
    }

    /// Applies encryption options to a still-empty document.
    ///
    /// Encryption is open-time configuration: once any content block has been
    /// recorded (or the document is closed) the call fails with a state
    /// error.
    pub fn encrypt_with(&mut self, options: EncryptionOptions) -> Result<()> {
        self.ensure_open()?;
        if !self.blocks.is_empty() {
            return Err(Error::State(
                "encryption must be configured before any content is added",
            ));
        }
        self.encryption = Some(options);
        Ok(())
    }

    /// Renders the recorded blocks and flushes the document to disk.
    ///
    /// Closing an already-closed writer is a no-op; the file flushed by the
    /// first close is left untouched.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        let font_family = self
            .font_family
            .take()
            .ok_or(Error::State("document fonts were already consumed"))?;

        let mut document = genpdf::Document::new(font_family);
        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }
        if let Some(margins) = self.margins {
            let mut decorator = SimplePageDecorator::new();
            decorator.set_margins(margins);
            document.set_page_decorator(decorator);
        }

        for block in &self.blocks {
            match block {
                Block::Paragraph(paragraph) => {
                    let mut element = elements::Paragraph::default();
                    element.push_styled(paragraph.text(), paragraph.style().to_genpdf());
                    if paragraph.alignment() != Alignment::Unset {
                        element.set_alignment(paragraph.alignment().to_genpdf());
                    }
                    document.push(element);
                }
                Block::Image(image) => {
                    document.push(image_element(image)?);
                }
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes)?;

        if let Some(options) = &self.encryption {
            bytes = encryption::encrypt_document(&bytes, options)?;
        }

        fs::write(&self.path, &bytes)?;
        self.closed = true;

        log::info!(
            "wrote {} ({} bytes, {} blocks)",
            self.path.display(),
            bytes.len(),
            self.blocks.len()
        );

        Ok(())
    }
}
