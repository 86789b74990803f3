use crate::core::heating_systems::emitters::{DEFAULT_FLOW_TEMP, DEFAULT_RETURN_TEMP};
use crate::core::heating_systems::heat_pump::DEFAULT_OVERSIZING_FACTOR;
use crate::core::space_heat_demand::building_element::{
    DEFAULT_FLOOR_TEMPERATURE_FACTOR, DEFAULT_TEMPERATURE_FACTOR,
};
use crate::core::space_heat_demand::ground_floor::{
    FloorType, DEFAULT_INSULATION_CONDUCTIVITY, DEFAULT_INSULATION_THICKNESS,
    DEFAULT_WALL_THICKNESS,
};
use crate::core::space_heat_demand::room::DEFAULT_ROOM_HEIGHT;
use crate::core::space_heat_demand::room_defaults::BuildingCategory;
use crate::core::water_heat_demand::hot_water::{DEFAULT_COLD_WATER_TEMP, DEFAULT_HOT_WATER_TEMP};
use anyhow::anyhow;
use serde::Deserialize;
use serde_valid::Validate;
use std::io::{BufReader, Read};

/// Read and validate a project from JSON.
///
/// Fields not described here (such as the layout fields written by web front ends) are ignored.
pub fn ingest_input(json: impl Read) -> anyhow::Result<Input> {
    let input: Input = serde_json::from_reader(BufReader::new(json))?;
    input
        .validate()
        .map_err(|errors| anyhow!("Input failed validation: {errors}"))?;
    Ok(input)
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Input {
    pub building_name: String,
    /// e.g. "SW" or "EH"
    pub postcode_area: String,
    #[serde(default)]
    pub building_category: BuildingCategory,
    /// Overrides the design external temperature for the postcode area, in deg C
    pub external_temp: Option<f64>,
    /// Overrides the annual degree-days for the postcode area
    #[validate(minimum = 0.)]
    pub degree_days: Option<f64>,
    #[validate]
    pub rooms: Vec<RoomInput>,
    #[validate]
    pub hot_water: Option<HotWaterInput>,
    #[validate]
    pub heat_pump: Option<HeatPumpInput>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RoomInput {
    pub name: String,
    pub room_type: String,
    /// Defaults by room type when absent
    pub design_temp: Option<f64>,
    /// Air changes per hour, defaulted by room type and building category when absent
    #[validate(minimum = 0.)]
    pub air_change_rate: Option<f64>,
    #[validate(minimum = 0.)]
    pub volume: Option<f64>,
    /// Used with the height to give the volume when no volume is given
    #[validate(minimum = 0.)]
    pub floor_area: Option<f64>,
    #[serde(default = "default_room_height")]
    #[validate(exclusive_minimum = 0.)]
    pub height: f64,
    #[validate(minimum = 0.)]
    pub thermal_bridging_factor: Option<f64>,
    #[serde(default)]
    #[validate]
    pub walls: Vec<WallInput>,
    #[serde(default)]
    #[validate]
    pub windows: Vec<WindowInput>,
    #[serde(default)]
    #[validate]
    pub floors: Vec<FloorInput>,
}

fn default_room_height() -> f64 {
    DEFAULT_ROOM_HEIGHT
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WallInput {
    pub name: String,
    #[validate(minimum = 0.)]
    pub area: f64,
    #[validate(minimum = 0.)]
    pub u_value: f64,
    #[serde(default = "default_temperature_factor")]
    #[validate(minimum = 0.)]
    pub temperature_factor: f64,
    /// "external", "ground", "unheated" or the name of a neighbouring room
    #[serde(default = "default_boundary")]
    pub boundary: String,
    /// Temperature on the far side of a ground or unheated boundary, in deg C
    pub boundary_temp: Option<f64>,
}

fn default_temperature_factor() -> f64 {
    DEFAULT_TEMPERATURE_FACTOR
}

fn default_boundary() -> String {
    "external".to_string()
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WindowInput {
    pub name: String,
    #[validate(minimum = 0.)]
    pub area: f64,
    #[validate(minimum = 0.)]
    pub u_value: f64,
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FloorInput {
    pub name: String,
    #[validate(minimum = 0.)]
    pub area: f64,
    /// Takes precedence over `construction` when both are given
    #[validate(minimum = 0.)]
    pub u_value: Option<f64>,
    #[validate]
    pub construction: Option<FloorConstructionInput>,
    #[serde(default = "default_floor_temperature_factor")]
    #[validate(minimum = 0.)]
    pub temperature_factor: f64,
}

fn default_floor_temperature_factor() -> f64 {
    DEFAULT_FLOOR_TEMPERATURE_FACTOR
}

/// Ground floor construction from which a U-value is derived
#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FloorConstructionInput {
    pub floor_type: FloorType,
    /// Exposed perimeter, in m
    #[validate(minimum = 0.)]
    pub perimeter: f64,
    #[serde(default = "default_wall_thickness")]
    #[validate(minimum = 0.)]
    pub wall_thickness: f64,
    #[serde(default = "default_insulation_thickness")]
    #[validate(minimum = 0.)]
    pub insulation_thickness: f64,
    #[serde(default = "default_insulation_conductivity")]
    #[validate(exclusive_minimum = 0.)]
    pub insulation_conductivity: f64,
}

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS
}

fn default_insulation_thickness() -> f64 {
    DEFAULT_INSULATION_THICKNESS
}

fn default_insulation_conductivity() -> f64 {
    DEFAULT_INSULATION_CONDUCTIVITY
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct HotWaterInput {
    pub num_occupants: u32,
    /// Defaults to 50 litres per occupant
    #[validate(minimum = 0.)]
    pub daily_usage_litres: Option<f64>,
    #[serde(default = "default_cold_water_temp")]
    pub cold_water_temp: f64,
    #[serde(default = "default_hot_water_temp")]
    pub hot_water_temp: f64,
}

fn default_cold_water_temp() -> f64 {
    DEFAULT_COLD_WATER_TEMP
}

fn default_hot_water_temp() -> f64 {
    DEFAULT_HOT_WATER_TEMP
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct HeatPumpInput {
    pub model: Option<String>,
    /// Rated capacity at design conditions, in kW
    #[validate(minimum = 0.)]
    pub capacity_kw: Option<f64>,
    /// Seasonal coefficient of performance
    #[validate(exclusive_minimum = 0.)]
    pub cop: f64,
    #[serde(default = "default_flow_temp")]
    pub flow_temp: f64,
    #[serde(default = "default_return_temp")]
    pub return_temp: f64,
    #[serde(default = "default_oversizing_factor")]
    #[validate(exclusive_minimum = 0.)]
    pub oversizing_factor: f64,
    /// Peak hot water demand to be met alongside space heating, in kW
    #[serde(default)]
    #[validate(minimum = 0.)]
    pub hot_water_demand_kw: f64,
}

fn default_flow_temp() -> f64 {
    DEFAULT_FLOW_TEMP
}

fn default_return_temp() -> f64 {
    DEFAULT_RETURN_TEMP
}

fn default_oversizing_factor() -> f64 {
    DEFAULT_OVERSIZING_FACTOR
}
