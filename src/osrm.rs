//! OSRM HTTP adapter for turn-by-turn directions.

use serde::Deserialize;

use crate::polyline::Polyline;
use crate::traits::{DirectionsError, DirectionsProvider, TransportMode};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl DirectionsProvider for OsrmClient {
    fn route_between(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        mode: TransportMode,
    ) -> Result<Polyline, DirectionsError> {
        // OSRM expects lng,lat order on the wire.
        let coords = format!("{:.6},{:.6};{:.6},{:.6}", from.1, from.0, to.1, to.0);
        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url,
            mode.profile(),
            coords
        );

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<OsrmRouteResponse>()?;

        if body.code != "Ok" {
            return Err(DirectionsError::NoRoute);
        }

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or(DirectionsError::NoRoute)?;

        let points = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| (lat, lng))
            .collect();

        Ok(Polyline::new(points))
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
