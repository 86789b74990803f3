use crate::core::units::{DAYS_PER_YEAR, SPECIFIC_HEAT_CAPACITY_WATER, WATT_HOURS_PER_KILOWATT_HOUR};
use serde::Serialize;

/// Daily hot water usage per occupant, in litres
pub const DAILY_USAGE_PER_OCCUPANT: f64 = 50.;
pub const DEFAULT_COLD_WATER_TEMP: f64 = 10.;
pub const DEFAULT_HOT_WATER_TEMP: f64 = 60.;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HotWaterEnergy {
    pub daily_usage_litres: f64,
    pub daily_energy_kwh: f64,
    pub annual_energy_kwh: f64,
    pub cold_water_temp: f64,
    pub hot_water_temp: f64,
}

/// Calculates the kWh energy content of a volume of hot water.
///
/// Arguments:
/// * `litres` - volume of hot water drawn
/// * `hot_water_temp` - storage temperature, in deg C
/// * `cold_water_temp` - mains inlet temperature, in deg C
pub fn water_heating_kwh(litres: f64, hot_water_temp: f64, cold_water_temp: f64) -> f64 {
    litres * (hot_water_temp - cold_water_temp) * SPECIFIC_HEAT_CAPACITY_WATER
        / WATT_HOURS_PER_KILOWATT_HOUR as f64
}

/// Daily and annual energy needed to heat domestic hot water.
///
/// When `daily_usage_litres` is not given, usage is assumed to be 50 litres per occupant per day.
pub fn hot_water_energy(
    num_occupants: u32,
    daily_usage_litres: Option<f64>,
    cold_water_temp: f64,
    hot_water_temp: f64,
) -> HotWaterEnergy {
    let daily_usage_litres =
        daily_usage_litres.unwrap_or(num_occupants as f64 * DAILY_USAGE_PER_OCCUPANT);
    let daily_energy_kwh = water_heating_kwh(daily_usage_litres, hot_water_temp, cold_water_temp);

    HotWaterEnergy {
        daily_usage_litres,
        daily_energy_kwh,
        annual_energy_kwh: daily_energy_kwh * DAYS_PER_YEAR as f64,
        cold_water_temp,
        hot_water_temp,
    }
}
