//! Password protection applied to rendered documents.
//!
//! Encryption is an open-time option on the document writer: the options are
//! captured before any content exists and applied once, after `genpdf` has
//! rendered the document, by rewriting the bytes with `lopdf`'s standard
//! security handler.  The crate never touches cipher internals.

use std::collections::BTreeMap;
use std::sync::Arc;

use lopdf::encryption::crypt_filters::{Aes128CryptFilter, Aes256CryptFilter, CryptFilter};
use lopdf::encryption::{EncryptionState, EncryptionVersion};
use lopdf::Document;
use rand::RngCore;

use crate::error::{Error, Result};

pub use lopdf::encryption::Permissions;

/// Strength of the cipher protecting document streams and strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CipherStrength {
    /// AES with a 128-bit key.
    Aes128,
    /// AES with a 256-bit key.
    #[default]
    Aes256,
}

/// Password and permission settings applied when a document is opened.
///
/// The owner password unlocks the document fully; the user password opens it
/// subject to the permission bitmask.
#[derive(Clone, Debug)]
pub struct EncryptionOptions {
    user_password: String,
    owner_password: String,
    permissions: Permissions,
    cipher: CipherStrength,
}

impl EncryptionOptions {
    /// Creates options with the given passwords, all permissions granted and
    /// AES-256 as the cipher.
    pub fn new(user_password: impl Into<String>, owner_password: impl Into<String>) -> Self {
        Self {
            user_password: user_password.into(),
            owner_password: owner_password.into(),
            permissions: Permissions::all(),
            cipher: CipherStrength::default(),
        }
    }

    /// Restricts the operations available to readers opening the document
    /// with the user password.
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Selects the cipher strength.
    pub fn with_cipher(mut self, cipher: CipherStrength) -> Self {
        self.cipher = cipher;
        self
    }

    /// Returns the configured permission bitmask.
    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Returns the configured cipher strength.
    pub fn cipher(&self) -> CipherStrength {
        self.cipher
    }
}

/// Rewrites rendered PDF bytes with the standard security handler applied.
pub(crate) fn encrypt_document(bytes: &[u8], options: &EncryptionOptions) -> Result<Vec<u8>> {
    let mut document = Document::load_mem(bytes)?;

    let filter: Arc<dyn CryptFilter> = match options.cipher {
        CipherStrength::Aes128 => Arc::new(Aes128CryptFilter),
        CipherStrength::Aes256 => Arc::new(Aes256CryptFilter),
    };
    let mut crypt_filters: BTreeMap<Vec<u8>, Arc<dyn CryptFilter>> = BTreeMap::new();
    crypt_filters.insert(b"StdCF".to_vec(), filter);

    let mut file_encryption_key = [0u8; 32];
    let version = match options.cipher {
        CipherStrength::Aes128 => EncryptionVersion::V4 {
            document: &document,
            encrypt_metadata: true,
            crypt_filters,
            stream_filter: b"StdCF".to_vec(),
            string_filter: b"StdCF".to_vec(),
            owner_password: &options.owner_password,
            user_password: &options.user_password,
            permissions: options.permissions,
        },
        CipherStrength::Aes256 => {
            rand::rng().fill_bytes(&mut file_encryption_key);
            EncryptionVersion::V5 {
                encrypt_metadata: true,
                crypt_filters,
                file_encryption_key: &file_encryption_key,
                stream_filter: b"StdCF".to_vec(),
                string_filter: b"StdCF".to_vec(),
                owner_password: &options.owner_password,
                user_password: &options.user_password,
                permissions: options.permissions,
            }
        }
    };

    let state = EncryptionState::try_from(version)
        .map_err(|err| Error::Pdf(format!("building encryption state failed: {err}")))?;
    document.encrypt(&state)?;

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;

    log::debug!(
        "encrypted document ({} -> {} bytes, {:?})",
        bytes.len(),
        buffer.len(),
        options.cipher
    );

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_aes256_with_all_permissions() {
        let options = EncryptionOptions::new("user", "owner");
        assert_eq!(options.cipher(), CipherStrength::Aes256);
        assert_eq!(options.permissions(), Permissions::all());
    }

    #[test]
    fn permissions_can_be_restricted_to_printing() {
        let options = EncryptionOptions::new("user", "owner")
            .with_permissions(Permissions::PRINTABLE);
        assert!(options.permissions().contains(Permissions::PRINTABLE));
        assert!(!options.permissions().contains(Permissions::MODIFIABLE));
    }
}
