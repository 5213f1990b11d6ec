/// Implements a container for a fixed amount of bytes which may or may not
/// represent a valid BLS point.
///
/// Validating the bytes is the signature-verification capability's business,
/// so only the length is ever checked here.
macro_rules! bytes_struct {
    ($name: ident, $byte_size: expr, $small_name: literal) => {
        #[doc = concat!(
            "Stores `",
            stringify!($byte_size),
            "` bytes which may or may not represent a valid BLS ",
            $small_name,
            " in compressed form."
        )]
        #[derive(Clone)]
        pub struct $name([u8; $byte_size]);

        impl $name {
            /// Instantiates `Self` with all-zeros.
            pub fn empty() -> Self {
                Self([0; $byte_size])
            }

            /// Clones the bytes in `self`.
            pub fn serialize(&self) -> [u8; $byte_size] {
                self.0
            }

            /// Returns a slice of the bytes contained in `self`.
            pub fn as_serialized(&self) -> &[u8] {
                &self.0[..]
            }

            /// Instantiates `Self` from bytes. Only the byte-length is checked.
            pub fn deserialize(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                if bytes.len() == $byte_size {
                    let mut out = [0; $byte_size];
                    out[..].copy_from_slice(bytes);
                    Ok(Self(out))
                } else {
                    Err(ssz::DecodeError::InvalidByteLength {
                        len: bytes.len(),
                        expected: $byte_size,
                    })
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0[..] == other.0[..]
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.0[..].hash(state);
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", eth2_serde_utils::hex::encode(&self.0[..]))
            }
        }

        impl ssz::Encode for $name {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $byte_size
            }

            fn ssz_bytes_len(&self) -> usize {
                $byte_size
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.0[..])
            }
        }

        impl ssz::Decode for $name {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                $byte_size
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                Self::deserialize(bytes)
            }
        }

        impl tree_hash::TreeHash for $name {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Vector
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Vector should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Vector should never be packed.")
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                let values_per_chunk = tree_hash::BYTES_PER_CHUNK;
                let minimum_chunk_count = ($byte_size + values_per_chunk - 1) / values_per_chunk;
                tree_hash::merkle_root(&self.0[..], minimum_chunk_count)
            }
        }

        impl serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.serialize_str(&eth2_serde_utils::hex::encode(&self.0[..]))
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                let bytes = deserializer.deserialize_str(eth2_serde_utils::hex::PrefixedHexVisitor)?;
                Self::deserialize(&bytes[..])
                    .map_err(|e| serde::de::Error::custom(format!("invalid byte length ({:?})", e)))
            }
        }
    };
}
