//! HTTP client for a running geoschools server

use crate::common::{Error, Result};
use crate::school::{RankedSchool, School};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

/// Response envelope shared by every API endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    data: Option<T>,
    errors: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct SchoolClient {
    base_url: String,
    http: reqwest::Client,
}

impl SchoolClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn add_school(
        &self,
        name: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<School> {
        let response = self
            .http
            .post(format!("{}/api/addSchool", self.base_url))
            .json(&json!({
                "name": name,
                "address": address,
                "latitude": latitude,
                "longitude": longitude,
            }))
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    pub async fn list_schools(&self, latitude: f64, longitude: f64) -> Result<Vec<RankedSchool>> {
        let response = self
            .http
            .get(format!("{}/api/listSchools", self.base_url))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
            ])
            .send()
            .await?;
        unwrap_envelope(response).await
    }
}

async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let envelope: Envelope<T> = response.json().await?;

    match envelope {
        Envelope {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        Envelope {
            errors: Some(errors),
            ..
        } if !errors.is_empty() => Err(Error::Validation(errors)),
        Envelope { message, .. } => Err(Error::Remote {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| status.to_string()),
        }),
    }
}
