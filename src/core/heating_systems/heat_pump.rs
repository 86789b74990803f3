// Heat pump capacity sizing and annual electricity use from a seasonal coefficient of performance.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_OVERSIZING_FACTOR: f64 = 1.0;

#[derive(Debug, Error)]
#[error("Heat pump coefficient of performance must be positive, but {0} was given")]
pub struct InvalidCopError(f64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatPumpSizing {
    pub design_heat_loss_kw: f64,
    pub hot_water_demand_kw: f64,
    pub oversizing_factor: f64,
    pub required_capacity_kw: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnnualEnergyConsumption {
    pub space_heating_demand_kwh: f64,
    pub hot_water_demand_kwh: f64,
    pub total_heat_demand_kwh: f64,
    pub cop: f64,
    pub electricity_consumption_kwh: f64,
}

/// Size a heat pump to meet the design heat loss plus any peak hot water demand.
///
/// Arguments:
/// * `design_heat_loss_kw` - building design heat loss, in kW
/// * `hot_water_demand_kw` - peak hot water demand, in kW
/// * `oversizing_factor` - multiplier applied to the combined demand (typically 1.0 to 1.1)
pub fn size_heat_pump(
    design_heat_loss_kw: f64,
    hot_water_demand_kw: f64,
    oversizing_factor: f64,
) -> HeatPumpSizing {
    HeatPumpSizing {
        design_heat_loss_kw,
        hot_water_demand_kw,
        oversizing_factor,
        required_capacity_kw: (design_heat_loss_kw + hot_water_demand_kw) * oversizing_factor,
    }
}

/// Annual electricity consumption of a heat pump meeting the given heat demands.
pub fn annual_energy_consumption(
    space_heating_kwh: f64,
    hot_water_kwh: f64,
    cop: f64,
) -> Result<AnnualEnergyConsumption, InvalidCopError> {
    if cop <= 0. || !cop.is_finite() {
        return Err(InvalidCopError(cop));
    }

    let total_heat_demand_kwh = space_heating_kwh + hot_water_kwh;

    Ok(AnnualEnergyConsumption {
        space_heating_demand_kwh: space_heating_kwh,
        hot_water_demand_kwh: hot_water_kwh,
        total_heat_demand_kwh,
        cop,
        electricity_consumption_kwh: total_heat_demand_kwh / cop,
    })
}
