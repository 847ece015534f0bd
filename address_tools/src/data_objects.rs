use serde::{Deserialize, Serialize};

/// The GeoJSON `FeatureCollection` returned by the search endpoint. Features are ranked best match first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressSearchResult {
    #[serde(default)]
    pub features: Vec<AddressFeature>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl AddressSearchResult {
    pub fn best_match(&self) -> Option<&AddressProperties> {
        self.features.first().map(|f| &f.properties)
    }

    pub fn into_best_match(self) -> Option<AddressProperties> {
        self.features.into_iter().next().map(|f| f.properties)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressFeature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    pub properties: AddressProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressProperties {
    /// The normalized street address, e.g. "8 Boulevard du Port"
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub citycode: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}
