//! Data structures describing the logical content of a generated document.
//!
//! The types in this module form a small, serialization-friendly model that
//! mirrors the building blocks expected by `genpdf`.  Values are immutable
//! once handed to a [`DocumentWriter`](crate::builder::DocumentWriter): the
//! writer records them in order and converts them into `genpdf` elements when
//! the document is closed.

/// Horizontal placement of a paragraph or image on the page.
///
/// The `Unset` variant leaves the renderer's default in place, matching
/// callers that add a paragraph without choosing an alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// No explicit alignment; the renderer default applies.
    #[default]
    Unset,
    /// Aligned to the start (left) edge.
    Start,
    /// Centered between the margins.
    Center,
    /// Aligned to the end (right) edge.
    End,
}

impl Alignment {
    pub(crate) fn to_genpdf(self) -> genpdf::Alignment {
        match self {
            Alignment::Unset | Alignment::Start => genpdf::Alignment::Left,
            Alignment::Center => genpdf::Alignment::Center,
            Alignment::End => genpdf::Alignment::Right,
        }
    }
}

/// Inline font attributes applied to a whole paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontStyle {
    bold: bool,
    italic: bool,
    size: Option<u8>,
}

impl FontStyle {
    /// Creates a style with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the text as bold and returns the updated style.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the text as italic and returns the updated style.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets the font size in points and returns the updated style.
    pub fn with_size(mut self, size: u8) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns whether the style requests bold text.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the style requests italic text.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns the configured font size in points, if any.
    pub fn size(&self) -> Option<u8> {
        self.size
    }

    pub(crate) fn to_genpdf(self) -> genpdf::style::Style {
        let mut style = genpdf::style::Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        if let Some(size) = self.size {
            style.set_font_size(size);
        }
        style
    }
}

/// A block of text together with its alignment and font style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    alignment: Alignment,
    style: FontStyle,
}

impl Paragraph {
    /// Creates a paragraph with default alignment and style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Returns the configured font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Sets the alignment and returns the updated paragraph.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the font style and returns the updated paragraph.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }
}

/// An image ready to be placed into a document.
///
/// The block stores encoded PNG bytes rather than a decoded pixel buffer so
/// that values stay cheap to clone and independent of the rendering crate.
/// The width is expressed in millimetres to map directly onto the
/// [`genpdf::elements::Image`] scaling API.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBlock {
    png: Vec<u8>,
    alignment: Alignment,
    width_mm: Option<f64>,
}

impl ImageBlock {
    /// Creates an image block from encoded PNG bytes.
    pub fn new(png: impl Into<Vec<u8>>) -> Self {
        Self {
            png: png.into(),
            alignment: Alignment::Unset,
            width_mm: None,
        }
    }

    /// Returns the encoded PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Returns the requested rendered width in millimetres, if any.
    pub fn width_mm(&self) -> Option<f64> {
        self.width_mm
    }

    /// Sets the alignment and returns the updated block.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Constrains the rendered width (in millimetres) and returns the updated block.
    pub fn with_width_mm(mut self, width_mm: impl Into<Option<f64>>) -> Self {
        self.width_mm = width_mm.into();
        self
    }
}

/// Individual content blocks recorded by a document writer, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(Paragraph),
    /// Image content, typically a rendered barcode.
    Image(ImageBlock),
}
