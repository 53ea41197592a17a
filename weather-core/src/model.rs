use serde::{Deserialize, Serialize};

/// Weather block returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location: Place,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    pub country: String,
}

impl Place {
    /// "Name, Region, Country", skipping an empty or missing region.
    pub fn display_name(&self) -> String {
        match self.region.as_deref().filter(|r| !r.is_empty()) {
            Some(region) => format!("{}, {}, {}", self.name, region, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u8>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Background photograph metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub url: String,
    pub photographer: Photographer,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photographer {
    pub name: String,
    pub link: String,
}

/// A successful lookup: both blocks are always present together.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupPayload {
    pub weather: WeatherResult,
    pub image: ImageInfo,
}

/// Raw endpoint body. The endpoint reports application failures with a
/// 200 status and an `error` object instead of `weather`/`image`.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupBody {
    #[serde(default)]
    pub error: Option<ApiError>,
    #[serde(default)]
    pub weather: Option<WeatherResult>,
    #[serde(default)]
    pub image: Option<ImageInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
}
