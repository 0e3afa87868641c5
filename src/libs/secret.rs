//! Key file management and symmetric encryption of the data file.
//!
//! ## Key file
//!
//! 64 random bytes from the OS random number generator, stored as URL-safe
//! base64 text: the first half signs tokens (HMAC-SHA256), the second half
//! encrypts them (AES-256). The key is not itself encrypted; it protects the
//! data file against casual reading, not against someone who can read both
//! files.
//!
//! ## Token format
//!
//! ```text
//! base64url( 0x80 | iv (16) | AES-256-CBC/PKCS7 ciphertext | HMAC-SHA256 (32) )
//! ```
//!
//! The tag covers everything before it and is verified before any
//! decryption, so a corrupted token or the wrong key is always rejected.
//! A fresh IV is drawn for every encryption, so encrypting the same
//! plaintext twice yields different tokens.

use super::error::TaskError;
use aes::Aes256;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

type Aes256Cbc = Cbc<Aes256, Pkcs7>;
type HmacSha256 = Hmac<Sha256>;

const SIGNING_KEY_LEN: usize = 32;
const ENCRYPTION_KEY_LEN: usize = 32;
pub const KEY_LEN: usize = SIGNING_KEY_LEN + ENCRYPTION_KEY_LEN;
pub const IV_LEN: usize = 16;
pub const TAG_LEN: usize = 32;
const BLOCK_LEN: usize = 16;
const TOKEN_VERSION: u8 = 0x80;

/// On-disk symmetric key.
pub struct KeyFile;

impl KeyFile {
    /// Generates and writes a key if `path` does not exist yet.
    ///
    /// Returns `true` when a new key was written.
    pub fn ensure(path: &Path) -> Result<bool, TaskError> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);

        // create_new: another writer may have won the race since the check above
        let mut file = match create_owner_only(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        file.write_all(BASE64_URL_SAFE.encode(key).as_bytes())?;
        file.sync_all()?;

        debug!(path = %path.display(), "generated new key file");
        Ok(true)
    }

    /// Reads and decodes the key stored at `path`.
    pub fn load(path: &Path) -> Result<Vec<u8>, TaskError> {
        let encoded = fs::read_to_string(path).map_err(|e| TaskError::Key(format!("{}: {}", path.display(), e)))?;
        let key = BASE64_URL_SAFE
            .decode(encoded.trim())
            .map_err(|e| TaskError::Key(format!("{}: {}", path.display(), e)))?;

        if key.len() != KEY_LEN {
            return Err(TaskError::Key(format!(
                "{}: expected {} key bytes, found {}",
                path.display(),
                KEY_LEN,
                key.len()
            )));
        }

        Ok(key)
    }
}

/// Creates `path`, failing if it exists, readable by the owner only.
#[cfg(unix)]
fn create_owner_only(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new().write(true).create_new(true).mode(0o600).open(path)
}

#[cfg(not(unix))]
fn create_owner_only(path: &Path) -> std::io::Result<fs::File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

#[derive(Clone)]
pub struct Cipher {
    signing_key: Vec<u8>,
    encryption_key: Vec<u8>,
}

impl Cipher {
    pub fn new(key: &[u8]) -> Result<Self, TaskError> {
        if key.len() != KEY_LEN {
            return Err(TaskError::Key(format!("expected {} key bytes, found {}", KEY_LEN, key.len())));
        }
        let (signing_key, encryption_key) = key.split_at(SIGNING_KEY_LEN);
        Ok(Self {
            signing_key: signing_key.to_vec(),
            encryption_key: encryption_key.to_vec(),
        })
    }

    /// Encrypts and signs `plaintext` into a base64 token.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, TaskError> {
        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let cipher =
            Aes256Cbc::new_from_slices(&self.encryption_key, &iv).map_err(|e| TaskError::Key(e.to_string()))?;
        let ciphertext = cipher.encrypt_vec(plaintext);

        let mut raw = Vec::with_capacity(1 + IV_LEN + ciphertext.len() + TAG_LEN);
        raw.push(TOKEN_VERSION);
        raw.extend_from_slice(&iv);
        raw.extend_from_slice(&ciphertext);

        let mut mac = self.mac()?;
        mac.update(&raw);
        raw.extend_from_slice(&mac.finalize().into_bytes());

        Ok(BASE64_URL_SAFE.encode(raw).into_bytes())
    }

    /// Verifies and decrypts a token produced by [`Cipher::encrypt`].
    pub fn decrypt(&self, token: &[u8]) -> Result<Vec<u8>, TaskError> {
        let token = std::str::from_utf8(token).map_err(|e| TaskError::Decrypt(e.to_string()))?;
        let raw = BASE64_URL_SAFE.decode(token.trim()).map_err(|e| TaskError::Decrypt(e.to_string()))?;

        if raw.len() < 1 + IV_LEN + BLOCK_LEN + TAG_LEN {
            return Err(TaskError::Decrypt("token too short".into()));
        }
        if raw[0] != TOKEN_VERSION {
            return Err(TaskError::Decrypt(format!("unsupported token version: {:#04x}", raw[0])));
        }

        let (signed, tag) = raw.split_at(raw.len() - TAG_LEN);
        let mut mac = self.mac()?;
        mac.update(signed);
        mac.verify_slice(tag)
            .map_err(|_| TaskError::Decrypt("signature mismatch: wrong key or corrupted data".into()))?;

        let (iv, ciphertext) = signed[1..].split_at(IV_LEN);
        let cipher =
            Aes256Cbc::new_from_slices(&self.encryption_key, iv).map_err(|e| TaskError::Key(e.to_string()))?;
        cipher.decrypt_vec(ciphertext).map_err(|e| TaskError::Decrypt(e.to_string()))
    }

    fn mac(&self) -> Result<HmacSha256, TaskError> {
        HmacSha256::new_from_slice(&self.signing_key).map_err(|e| TaskError::Key(e.to_string()))
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher").finish_non_exhaustive()
    }
}
