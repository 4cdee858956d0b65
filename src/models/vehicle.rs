//! Vehicle model for the showcase section.

use serde::{Deserialize, Serialize};

/// One labelled specification line ("Motor Gücü" / "5 kW" etc.).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpec {
    pub label: String,
    pub value: String,
}

/// A vehicle built by the team, with its ordered spec sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specs: Vec<VehicleSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub name: String,
    #[serde(default)]
    pub specs: Vec<VehicleSpec>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request body for updating a vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specs: Option<Vec<VehicleSpec>>,
    #[serde(default)]
    pub image_url: Option<String>,
}
