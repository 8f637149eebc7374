use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Stable key for a map region, shared by boundary features and metric rows.
/// Compared byte-for-byte: no case folding or whitespace trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(Arc<str>);

impl RegionId {
    pub fn new(id: impl AsRef<str>) -> Self { Self(Arc::from(id.as_ref())) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self { Self::new(id) }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str { &self.0 }
}

#[cfg(test)]
mod tests {
    use super::RegionId;

    #[test]
    fn equality_is_exact() {
        assert_eq!(RegionId::from("Texas"), RegionId::from(String::from("Texas")));
        assert_ne!(RegionId::from("Texas"), RegionId::from("texas"));
        assert_ne!(RegionId::from("Texas"), RegionId::from("Texas "));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RegionId::from("Ohio");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""Ohio""#);
        let back: RegionId = serde_json::from_str(r#""Ohio""#).unwrap();
        assert_eq!(back, id);
    }
}
