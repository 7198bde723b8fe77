use alloy_primitives::B256;

use crate::errors::{ConfigError, HexDecodeError};

const ROOT_LEN: usize = 32;

/// Decodes a `0x` prefixed hex string.
pub fn decode_hex_prefixed(value: &str) -> Result<Vec<u8>, HexDecodeError> {
    if value.is_empty() {
        return Err(HexDecodeError::Empty);
    }
    let stripped = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or(HexDecodeError::MissingPrefix)?;
    Ok(hex::decode(stripped)?)
}

fn decode_root_prefix(value: &str) -> Result<Vec<u8>, HexDecodeError> {
    let bytes = decode_hex_prefixed(value)?;
    if bytes.len() > ROOT_LEN {
        return Err(HexDecodeError::TooLong {
            len: bytes.len(),
            max: ROOT_LEN,
        });
    }
    Ok(bytes)
}

/// Decodes up to 32 bytes of hex into a root, left aligned and zero padded on the right.
pub fn decode_root_bytes(value: &str) -> Result<B256, HexDecodeError> {
    let mut root = B256::ZERO;
    copy_root_prefix(value, &mut root)?;
    Ok(root)
}

/// Decodes up to 32 bytes of hex over the leading bytes of `root`, keeping the rest of it.
pub fn copy_root_prefix(value: &str, root: &mut B256) -> Result<(), HexDecodeError> {
    let bytes = decode_root_prefix(value)?;
    root.0[..bytes.len()].copy_from_slice(&bytes);
    Ok(())
}

fn invalid_hex(field: &'static str, value: &str) -> impl FnOnce(HexDecodeError) -> ConfigError {
    let value = value.to_string();
    move |source| ConfigError::InvalidHexEncoding {
        field,
        value,
        source,
    }
}

/// Like [`decode_root_bytes`], attributing a failure to the flag the value came from.
pub fn decode_root(field: &'static str, value: &str) -> Result<B256, ConfigError> {
    decode_root_bytes(value).map_err(invalid_hex(field, value))
}

/// Like [`copy_root_prefix`], attributing a failure to the flag the value came from.
pub fn override_root(field: &'static str, value: &str, root: &mut B256) -> Result<(), ConfigError> {
    copy_root_prefix(value, root).map_err(invalid_hex(field, value))
}
