use ahash::AHashSet;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{region::RegionId, source::FetchError};

/// A single boundary feature: its id plus geometry passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub geometry: Value,
}

/// The set of regions drawn on the map, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySet {
    regions: Vec<Region>,
}

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Value,
}

impl BoundarySet {
    pub fn new(regions: Vec<Region>) -> Self { Self { regions } }

    /// Parse a GeoJSON FeatureCollection, keying each feature by its `name` property.
    /// Features without a string `name` are skipped; a repeated name keeps the first feature.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self, FetchError> {
        let raw: RawCollection = serde_json::from_slice(bytes)
            .map_err(|e| FetchError::Schema(format!("boundary document is not a FeatureCollection: {e}")))?;

        let mut seen = AHashSet::with_capacity(raw.features.len());
        let mut regions = Vec::with_capacity(raw.features.len());

        for (idx, feature) in raw.features.into_iter().enumerate() {
            let name = feature.properties.as_ref()
                .and_then(|props| props.get("name"))
                .and_then(Value::as_str);

            let Some(name) = name else {
                warn!(feature = idx, "boundary feature has no string `name` property; skipping");
                continue;
            };

            let id = RegionId::from(name);
            if !seen.insert(id.clone()) {
                warn!(region = %id, "duplicate boundary feature name; keeping the first");
                continue;
            }

            regions.push(Region { id, geometry: feature.geometry });
        }

        if regions.is_empty() {
            return Err(FetchError::Empty("boundary document has no named features".into()));
        }

        debug!(regions = regions.len(), "parsed boundary document");
        Ok(Self { regions })
    }

    #[inline] pub fn len(&self) -> usize { self.regions.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    #[inline] pub fn regions(&self) -> &[Region] { &self.regions }

    /// Region ids in dataset order.
    pub fn ids(&self) -> impl Iterator<Item = &RegionId> + '_ {
        self.regions.iter().map(|region| &region.id)
    }

    pub fn contains(&self, id: &RegionId) -> bool {
        self.regions.iter().any(|region| &region.id == id)
    }
}
