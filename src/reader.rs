//! Read-back support for previously written documents.
//!
//! The reader is a thin view over `lopdf`: it opens a closed file (decrypting
//! it when a password is supplied), exposes 1-indexed page lookup, and
//! resolves named page attributes such as the MediaBox.  Attribute lookup
//! returns an empty vector when the attribute is absent; callers check the
//! length instead of a null sentinel.

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Page-tree attributes are inherited; bound the walk to guard against
/// cyclic `Parent` references in malformed files.
const PAGE_TREE_DEPTH_LIMIT: usize = 32;

/// Read-only handle over a closed document on disk.
pub struct DocumentReader {
    document: Document,
    path: PathBuf,
}

impl DocumentReader {
    /// Opens an unencrypted document.
    ///
    /// Fails with [`Error::Encrypted`] when the file requires a password.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path.as_ref(), None)
    }

    /// Opens a document, decrypting it with the given owner or user password.
    pub fn open_with_password(path: impl AsRef<Path>, password: &str) -> Result<Self> {
        Self::load(path.as_ref(), Some(password))
    }

    fn load(path: &Path, password: Option<&str>) -> Result<Self> {
        let mut document = match Document::load(path) {
            Ok(document) => document,
            // Some encrypted files already fail while parsing when no
            // password is available.
            Err(lopdf::Error::Decryption(_)) if password.is_none() => {
                return Err(Error::Encrypted {
                    path: path.to_path_buf(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        if document.is_encrypted() {
            match password {
                Some(password) => document.decrypt(password)?,
                None => {
                    return Err(Error::Encrypted {
                        path: path.to_path_buf(),
                    })
                }
            }
            log::debug!("decrypted {}", path.display());
        }

        Ok(Self {
            document,
            path: path.to_path_buf(),
        })
    }

    /// Returns the path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// Returns a handle for the 1-indexed page `number`.
    pub fn page(&self, number: u32) -> Result<PageRef<'_>> {
        let pages = self.document.get_pages();
        let available = pages.len() as u32;
        let id = pages
            .get(&number)
            .copied()
            .ok_or(Error::PageOutOfRange {
                requested: number,
                available,
            })?;

        Ok(PageRef {
            document: &self.document,
            id,
            number,
        })
    }
}

/// A single page of an open document.
pub struct PageRef<'a> {
    document: &'a Document,
    id: ObjectId,
    number: u32,
}

impl<'a> PageRef<'a> {
    /// Returns the 1-indexed page number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Resolves the named page attribute as an array of PDF objects.
    ///
    /// Inheritable attributes (MediaBox among them) often live on an ancestor
    /// `Pages` node, so the lookup follows the `Parent` chain upwards.
    /// Indirect values are dereferenced.  An absent attribute yields an empty
    /// vector.
    pub fn attribute_array(&self, name: &str) -> Vec<Object> {
        let key = name.as_bytes();
        let mut current = self.id;

        for _ in 0..PAGE_TREE_DEPTH_LIMIT {
            let Ok(dict) = self
                .document
                .get_object(current)
                .and_then(Object::as_dict)
            else {
                break;
            };

            if let Ok(value) = dict.get(key) {
                let resolved = self.resolve(value);
                return match resolved.as_array() {
                    Ok(array) => array.clone(),
                    Err(_) => Vec::new(),
                };
            }

            match dict.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent) => current = parent,
                Err(_) => break,
            }
        }

        Vec::new()
    }

    /// Returns the numeric entries of the page's MediaBox, in order.
    pub fn media_box(&self) -> Vec<f64> {
        self.attribute_array("MediaBox")
            .iter()
            .filter_map(|object| match object {
                Object::Integer(value) => Some(*value as f64),
                Object::Real(value) => Some(f64::from(*value)),
                _ => None,
            })
            .collect()
    }

    fn resolve(&self, object: &'a Object) -> &'a Object {
        match object {
            Object::Reference(id) => self.document.get_object(*id).unwrap_or(object),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    // Minimal single-page document with the MediaBox on the page tree root,
    // exercising the inheritance walk.
    fn write_fixture(path: &Path) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal("fixture")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).expect("save fixture");
    }

    #[test]
    fn media_box_is_inherited_from_the_page_tree() {
        let scratch = tempfile::tempdir().expect("create scratch dir");
        let path = scratch.path().join("fixture.pdf");
        write_fixture(&path);

        let reader = DocumentReader::open(&path).expect("open fixture");
        assert_eq!(reader.page_count(), 1);

        let page = reader.page(1).expect("first page exists");
        assert_eq!(page.number(), 1);
        assert_eq!(page.media_box(), vec![0.0, 0.0, 595.0, 842.0]);
    }

    #[test]
    fn out_of_range_page_reports_both_numbers() {
        let scratch = tempfile::tempdir().expect("create scratch dir");
        let path = scratch.path().join("fixture.pdf");
        write_fixture(&path);

        let reader = DocumentReader::open(&path).expect("open fixture");
        match reader.page(2) {
            Err(Error::PageOutOfRange {
                requested,
                available,
            }) => {
                assert_eq!(requested, 2);
                assert_eq!(available, 1);
            }
            Err(other) => panic!("expected PageOutOfRange, got {other:?}"),
            Ok(_) => panic!("expected PageOutOfRange, got a page"),
        }
    }

    #[test]
    fn page_zero_is_out_of_range() {
        let scratch = tempfile::tempdir().expect("create scratch dir");
        let path = scratch.path().join("fixture.pdf");
        write_fixture(&path);

        let reader = DocumentReader::open(&path).expect("open fixture");
        assert!(matches!(
            reader.page(0),
            Err(Error::PageOutOfRange { requested: 0, .. })
        ));
    }

    #[test]
    fn absent_attribute_yields_an_empty_array() {
        let scratch = tempfile::tempdir().expect("create scratch dir");
        let path = scratch.path().join("fixture.pdf");
        write_fixture(&path);

        let reader = DocumentReader::open(&path).expect("open fixture");
        let page = reader.page(1).expect("first page exists");
        assert!(page.attribute_array("CropBox").is_empty());
    }
}
