//! Conversion between UTF-8 byte strings and [`WideText`].
//!
//! Every public entry point that accepts or returns byte text goes through
//! these two functions. Malformed UTF-8 is rejected with an
//! [`EncodingError`]; no replacement characters are substituted.

use std::str;

use crate::error::EncodingError;
use crate::types::WideText;

/// Decode UTF-8 bytes into a wide-character buffer.
///
/// # Example
///
/// ```
/// use numbertext::codec;
///
/// let wide = codec::to_wide("ötven".as_bytes()).unwrap();
/// assert_eq!(wide.len(), 5);
///
/// assert!(codec::to_wide(&[0x34, 0xff, 0x32]).is_err());
/// ```
pub fn to_wide(bytes: &[u8]) -> Result<WideText, EncodingError> {
    let text = str::from_utf8(bytes)?;
    Ok(WideText::from(text))
}

/// Encode a wide-character buffer as a UTF-8 string.
pub fn to_bytes(text: &WideText) -> String {
    text.iter().collect()
}
