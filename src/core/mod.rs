pub mod heating_systems;
pub mod space_heat_demand;
pub mod units;
pub mod water_heat_demand;
