use crate::interpreter::value::core::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The key a hashable value is stored under in a hash map.
///
/// A key is the pair of the value's type tag and a 64-bit payload: the raw
/// bits for integers, `0`/`1` for booleans, and an FNV-1a digest for
/// strings. Two keys are equal iff both fields are equal, so equal values of
/// one type always collide and values of different types never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    /// The type tag of the hashed value.
    pub kind:  &'static str,
    /// The 64-bit payload derived from the value.
    pub value: u64,
}

/// Hashes a byte string with 64-bit FNV-1a.
///
/// Deterministic within and across runs, which keeps hash keys stable.
#[must_use]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
                    (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
                })
}

impl Value {
    /// Computes the value's [`HashKey`], or `None` for unhashable values.
    ///
    /// Only integers, booleans, and strings are hashable; using anything
    /// else as a hash key is a runtime error, which the evaluator reports
    /// when this returns `None`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// let hello = Value::from("Hello World");
    /// assert_eq!(hello.hash_key(), Value::from("Hello World").hash_key());
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        let value = match self {
            Self::Integer(value) => *value as u64,
            Self::Boolean(value) => u64::from(*value),
            Self::Str(value) => fnv1a(value.as_bytes()),
            _ => return None,
        };

        Some(HashKey { kind: self.type_name(),
                       value })
    }
}
