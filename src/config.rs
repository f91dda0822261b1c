//! Startup configuration
//!
//! Read once from a JSON file (path from the command line or the
//! `PARCEL_MAP_CONFIG` environment variable). Every field has a default,
//! so an empty object and no file at all are both valid.

use crate::editor::ViewMode;
use crate::geometry::{validate_coordinate, Coordinate};
use crate::zones::{builtin_zones, report_from_json, PageReports, Report, Zone};
use anyhow::Context;
use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "PARCEL_MAP_CONFIG";

/// Initial camera placement, passed through to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            longitude: 72.8727,
            latitude: 19.36017,
            zoom: 15.0,
        }
    }
}

/// Zone entry as written in the config file. Ring points go through the
/// coordinate validator like any other input.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    pub name: String,
    #[serde(default = "default_zone_color")]
    pub color: String,
    pub ring: Vec<Value>,
    #[serde(default)]
    pub report: IndexMap<String, Value>,
}

fn default_zone_color() -> String {
    "#ff5733".to_string()
}

impl ZoneConfig {
    pub fn into_zone(self) -> Zone {
        let ring: Vec<Coordinate> = self.ring.iter().map(validate_coordinate).collect();
        Zone::new(self.id, self.name, self.color, &ring, report_from_json(self.report))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub initial_view_mode: ViewMode,
    pub default_building_height: f64,
    pub viewport: Viewport,
    /// Replaces the built-in zones when present
    pub zones: Option<Vec<ZoneConfig>>,
    pub zoning_report: Option<IndexMap<String, Value>>,
    pub property_details: Option<IndexMap<String, Value>>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_view_mode: ViewMode::default(),
            default_building_height: Self::DEFAULT_BUILDING_HEIGHT,
            viewport: Viewport::default(),
            zones: None,
            zoning_report: None,
            property_details: None,
        }
    }
}

impl MapConfig {
    pub const DEFAULT_BUILDING_HEIGHT: f64 = 10.0;

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Invalid map configuration JSON")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded map configuration from {}", path.display());
        Ok(config)
    }

    /// Config from an explicit path, else `PARCEL_MAP_CONFIG`, else defaults
    pub fn resolve(explicit_path: Option<&str>) -> anyhow::Result<Self> {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok();
        match explicit_path.or(from_env.as_deref()) {
            Some(path) => Self::load(path),
            None => {
                info!("No configuration given, using built-in zones");
                Ok(Self::default())
            }
        }
    }

    pub fn build_zones(&self) -> Vec<Zone> {
        match &self.zones {
            Some(zones) => zones.iter().cloned().map(ZoneConfig::into_zone).collect(),
            None => builtin_zones(),
        }
    }

    pub fn page_reports(&self) -> PageReports {
        let convert = |r: &Option<IndexMap<String, Value>>| -> Option<Report> {
            r.clone().map(report_from_json)
        };
        PageReports {
            zoning_report: convert(&self.zoning_report),
            property_details: convert(&self.property_details),
        }
    }
}
