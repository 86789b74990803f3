pub const WATTS_PER_KILOWATT: u32 = 1_000;
pub const WATT_HOURS_PER_KILOWATT_HOUR: u32 = 1_000;
pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_YEAR: u32 = 365;

/// Volumetric heat capacity of air at standard density, in Wh / (m3.K)
pub const VOLUMETRIC_HEAT_CAPACITY_AIR: f64 = 0.33;

/// Specific heat capacity of water, in Wh / (L.K) (4.186 kJ / (kg.K))
pub const SPECIFIC_HEAT_CAPACITY_WATER: f64 = 1.163;

/// Convert a heat transfer coefficient (in W / K) into an annual energy figure (in kWh)
/// using the annual degree-day total for a location.
///
/// Degree-days already integrate the temperature deficit over the heating season, so only the
/// hours per day factor is applied here.
pub fn annual_kwh_from_degree_days(heat_transfer_coefficient: f64, degree_days: f64) -> f64 {
    heat_transfer_coefficient * degree_days * HOURS_PER_DAY as f64
        / WATT_HOURS_PER_KILOWATT_HOUR as f64
}

pub fn watts_to_kilowatts(watts: f64) -> f64 {
    watts / WATTS_PER_KILOWATT as f64
}
