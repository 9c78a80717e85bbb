//!
//! # ende
//!
//! (en)Encode and (de)Decode
//!
//! Byte codecs for whole maps, on top of their serde implementations.
//! The codec is picked at compile time: JSON with `json_codec` (default),
//! MessagePack with `msgpack_codec` when JSON is not enabled.
//!

use ruc::*;

#[cfg(feature = "serde_ende")]
use serde::{de::DeserializeOwned, Serialize};

pub type RawBytes = Vec<u8>;

/// Methods used to encode and decode a value, a map in particular.
pub trait EnDe: Sized {
    /// Encode to bytes.
    fn try_encode(&self) -> Result<RawBytes>;

    fn encode(&self) -> RawBytes {
        pnk!(self.try_encode())
    }

    /// Decode from bytes, the whole input must be one value.
    fn decode(bytes: &[u8]) -> Result<Self>;
}

#[cfg(feature = "serde_ende")]
impl<T: Serialize + DeserializeOwned> EnDe for T {
    #[cfg(feature = "json_codec")]
    fn try_encode(&self) -> Result<RawBytes> {
        serde_json::to_vec(self).c(d!())
    }

    #[cfg(all(feature = "msgpack_codec", not(feature = "json_codec")))]
    fn try_encode(&self) -> Result<RawBytes> {
        msgpack::to_vec(self).c(d!())
    }

    #[cfg(feature = "json_codec")]
    fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).c(d!())
    }

    #[cfg(all(feature = "msgpack_codec", not(feature = "json_codec")))]
    fn decode(bytes: &[u8]) -> Result<Self> {
        msgpack::from_slice(bytes).c(d!())
    }
}

#[cfg(all(test, feature = "json_codec"))]
mod test {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn json_bytes() {
        let m: BTreeMap<u32, String> = [(1, "a".to_owned())].into_iter().collect();
        assert_eq!(m.encode(), br#"{"1":"a"}"#.to_vec());
        assert_eq!(pnk!(<BTreeMap<u32, String> as EnDe>::decode(&m.encode())), m);
        assert!(<BTreeMap<u32, String> as EnDe>::decode(b"{\"1\":").is_err());
    }
}
