use crate::core::heating_systems::emitters::{
    radiator_sizing, InvalidEmitterTemperatureError, RadiatorSizing,
};
use crate::core::heating_systems::heat_pump::{
    annual_energy_consumption, size_heat_pump, AnnualEnergyConsumption, HeatPumpSizing,
    InvalidCopError,
};
use crate::core::space_heat_demand::building::{Building, BuildingHeatLossSummary};
use crate::core::space_heat_demand::building_element::{FabricElement, WallBoundary};
use crate::core::space_heat_demand::ground_floor::floor_u_value;
use crate::core::space_heat_demand::room::{Room, DEFAULT_THERMAL_BRIDGING_FACTOR};
use crate::core::space_heat_demand::room_defaults::{
    default_air_change_rate, default_design_temp, BuildingCategory,
};
use crate::core::units::watts_to_kilowatts;
use crate::core::water_heat_demand::hot_water::{hot_water_energy, HotWaterEnergy};
use crate::errors::{McsCoreError, McsError};
use crate::external_conditions::{try_climate_for_postcode_area, UnknownPostcodeAreaError};
use crate::input::{FloorInput, HeatPumpInput, HotWaterInput, Input, RoomInput, WallInput};
use crate::ProjectFlags;
use anyhow::anyhow;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
#[error("Floor '{0}' needs either a U-value or a construction to derive one from")]
pub struct MissingFloorUValueError(String);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationInfo {
    pub postcode_area: String,
    pub location: &'static str,
    pub design_external_temp: f64,
    pub degree_days: f64,
    pub building_category: BuildingCategory,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatPumpResults {
    pub model: Option<String>,
    pub sizing: HeatPumpSizing,
    pub rated_capacity_kw: Option<f64>,
    /// Whether the rated capacity covers the required capacity, when a rating is known
    pub capacity_sufficient: Option<bool>,
    pub annual_consumption: AnnualEnergyConsumption,
    /// Radiator sizing keyed by room name
    pub radiators: IndexMap<String, RadiatorSizing>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunResults {
    pub location: LocationInfo,
    pub building: BuildingHeatLossSummary,
    pub hot_water: Option<HotWaterEnergy>,
    pub heat_pump: Option<HeatPumpResults>,
}

/// A heat loss calculation for a single building at a single location.
#[derive(Clone, Debug)]
pub struct Corpus {
    postcode_area: String,
    building_category: BuildingCategory,
    location: &'static str,
    external_temp: f64,
    degree_days: f64,
    building: Option<Building>,
    hot_water: Option<HotWaterInput>,
    heat_pump: Option<HeatPumpInput>,
}

impl Corpus {
    /// Set up a calculation for a postcode area (e.g. "SW"), taking the design external
    /// temperature and degree-days for that area.
    pub fn new(
        postcode_area: &str,
        building_category: BuildingCategory,
    ) -> Result<Self, UnknownPostcodeAreaError> {
        let climate = try_climate_for_postcode_area(postcode_area)?;

        Ok(Self {
            postcode_area: climate.postcode_area.to_string(),
            building_category,
            location: climate.location,
            external_temp: climate.design_external_temp,
            degree_days: climate.degree_days,
            building: None,
            hot_water: None,
            heat_pump: None,
        })
    }

    pub fn from_inputs(input: &Input) -> anyhow::Result<Self> {
        let mut corpus = Self::new(&input.postcode_area, input.building_category)?;

        if let Some(external_temp) = input.external_temp {
            corpus.external_temp = external_temp;
        }
        if let Some(degree_days) = input.degree_days {
            corpus.degree_days = degree_days;
        }

        let rooms = input
            .rooms
            .iter()
            .map(|room| corpus.room_from_input(room))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let building = corpus.create_building(&input.building_name);
        for room in rooms {
            building.add_room(room);
        }

        corpus.hot_water = input.hot_water.clone();
        corpus.heat_pump = input.heat_pump.clone();

        Ok(corpus)
    }

    pub fn external_temp(&self) -> f64 {
        self.external_temp
    }

    pub fn degree_days(&self) -> f64 {
        self.degree_days
    }

    /// Start a new, empty building at this location, replacing any existing one.
    pub fn create_building(&mut self, name: &str) -> &mut Building {
        self.building
            .insert(Building::new(name, self.postcode_area.as_str()))
    }

    pub fn building(&self) -> Option<&Building> {
        self.building.as_ref()
    }

    /// Create a room without fabric elements, filling in the design temperature and air change
    /// rate for its room type where they are not given.
    ///
    /// The volume is `floor_area` x `height`.
    pub fn create_room(
        &self,
        name: &str,
        room_type: &str,
        floor_area: f64,
        height: f64,
        design_temp: Option<f64>,
        air_change_rate: Option<f64>,
    ) -> Room {
        Room::new(
            name,
            room_type,
            design_temp.unwrap_or_else(|| default_design_temp(room_type)),
            Some(floor_area * height),
            air_change_rate
                .unwrap_or_else(|| default_air_change_rate(room_type, self.building_category)),
            DEFAULT_THERMAL_BRIDGING_FACTOR,
            height,
            vec![],
        )
    }

    fn room_from_input(&self, input: &RoomInput) -> anyhow::Result<Room> {
        let design_temp = input
            .design_temp
            .unwrap_or_else(|| default_design_temp(&input.room_type));
        let air_change_rate = input.air_change_rate.unwrap_or_else(|| {
            default_air_change_rate(&input.room_type, self.building_category)
        });
        let volume = input
            .volume
            .or(input.floor_area.map(|floor_area| floor_area * input.height));

        let mut elements = input.walls.iter().map(wall_from_input).collect::<Vec<_>>();
        elements.extend(input.windows.iter().map(|window| {
            FabricElement::window(window.name.as_str(), window.area, window.u_value)
        }));
        for floor in &input.floors {
            elements.push(floor_from_input(floor)?);
        }

        Ok(Room::new(
            input.name.as_str(),
            input.room_type.as_str(),
            design_temp,
            volume,
            air_change_rate,
            input
                .thermal_bridging_factor
                .unwrap_or(DEFAULT_THERMAL_BRIDGING_FACTOR),
            input.height,
            elements,
        ))
    }

    pub fn location_info(&self) -> LocationInfo {
        LocationInfo {
            postcode_area: self.postcode_area.clone(),
            location: self.location,
            design_external_temp: self.external_temp,
            degree_days: self.degree_days,
            building_category: self.building_category,
        }
    }

    pub fn calculate_building_heat_loss(
        &self,
        include_inter_room: bool,
    ) -> anyhow::Result<BuildingHeatLossSummary> {
        let building = self
            .building
            .as_ref()
            .ok_or_else(|| anyhow!("No building has been created for this calculation"))?;

        Ok(building.get_summary(self.external_temp, self.degree_days, include_inter_room))
    }

    pub fn calculate_hot_water_energy(
        &self,
        num_occupants: u32,
        daily_usage_litres: Option<f64>,
        cold_water_temp: f64,
        hot_water_temp: f64,
    ) -> HotWaterEnergy {
        hot_water_energy(
            num_occupants,
            daily_usage_litres,
            cold_water_temp,
            hot_water_temp,
        )
    }

    pub fn size_heat_pump(
        &self,
        design_heat_loss_kw: f64,
        hot_water_demand_kw: f64,
        oversizing_factor: f64,
    ) -> HeatPumpSizing {
        size_heat_pump(design_heat_loss_kw, hot_water_demand_kw, oversizing_factor)
    }

    pub fn calculate_annual_energy_consumption(
        &self,
        space_heating_kwh: f64,
        hot_water_kwh: f64,
        cop: f64,
    ) -> Result<AnnualEnergyConsumption, InvalidCopError> {
        annual_energy_consumption(space_heating_kwh, hot_water_kwh, cop)
    }

    pub fn calculate_radiator_sizing(
        &self,
        room_heat_loss_w: f64,
        room_temp: f64,
        flow_temp: f64,
        return_temp: f64,
    ) -> Result<RadiatorSizing, InvalidEmitterTemperatureError> {
        radiator_sizing(room_heat_loss_w, room_temp, flow_temp, return_temp)
    }

    /// Run every calculation the project describes.
    pub fn run(&self, flags: ProjectFlags) -> Result<RunResults, McsError> {
        let location = self.location_info();
        info!(
            "calculating heat loss for {} ({}, {}ºC design, {} degree-days)",
            self.building
                .as_ref()
                .map(Building::name)
                .unwrap_or_default(),
            location.location,
            location.design_external_temp,
            location.degree_days
        );

        let building =
            self.calculate_building_heat_loss(flags.contains(ProjectFlags::INTER_ROOM_TRANSFER))?;

        let hot_water = self.hot_water.as_ref().map(|hot_water| {
            self.calculate_hot_water_energy(
                hot_water.num_occupants,
                hot_water.daily_usage_litres,
                hot_water.cold_water_temp,
                hot_water.hot_water_temp,
            )
        });

        let heat_pump = self
            .heat_pump
            .as_ref()
            .map(|heat_pump| self.heat_pump_results(heat_pump, &building, hot_water.as_ref()))
            .transpose()
            .map_err(McsCoreError::new)?;

        info!(
            "design heat loss {:.0} W, annual heat loss {:.0} kWh",
            building.total_heat_loss.watts, building.total_heat_loss.kwh
        );

        Ok(RunResults {
            location,
            building,
            hot_water,
            heat_pump,
        })
    }

    fn heat_pump_results(
        &self,
        heat_pump: &HeatPumpInput,
        building: &BuildingHeatLossSummary,
        hot_water: Option<&HotWaterEnergy>,
    ) -> anyhow::Result<HeatPumpResults> {
        let sizing = self.size_heat_pump(
            watts_to_kilowatts(building.total_heat_loss.watts),
            heat_pump.hot_water_demand_kw,
            heat_pump.oversizing_factor,
        );

        let annual_consumption = self.calculate_annual_energy_consumption(
            building.total_heat_loss.kwh,
            hot_water.map_or(0., |hot_water| hot_water.annual_energy_kwh),
            heat_pump.cop,
        )?;

        let mut radiators = IndexMap::new();
        for room in &building.rooms {
            let radiator = self.calculate_radiator_sizing(
                room.total_loss.watts,
                room.design_temp,
                heat_pump.flow_temp,
                heat_pump.return_temp,
            )?;
            debug!(
                "room '{}': radiator output of {:.0} W at dT50 required",
                room.room_name, radiator.required_output_at_delta_t_50
            );
            radiators.insert(room.room_name.clone(), radiator);
        }

        Ok(HeatPumpResults {
            model: heat_pump.model.clone(),
            sizing,
            rated_capacity_kw: heat_pump.capacity_kw,
            capacity_sufficient: heat_pump
                .capacity_kw
                .map(|capacity| capacity >= sizing.required_capacity_kw),
            annual_consumption,
            radiators,
        })
    }
}

fn wall_from_input(input: &WallInput) -> FabricElement {
    FabricElement::wall(input.name.as_str(), input.area, input.u_value)
        .with_temperature_factor(input.temperature_factor)
        .with_boundary(WallBoundary::from_tag(&input.boundary, input.boundary_temp))
}

fn floor_from_input(input: &FloorInput) -> Result<FabricElement, MissingFloorUValueError> {
    let u_value = match (input.u_value, &input.construction) {
        (Some(u_value), _) => u_value,
        (None, Some(construction)) => floor_u_value(
            construction.floor_type,
            construction.perimeter,
            input.area,
            construction.wall_thickness,
            construction.insulation_thickness,
            construction.insulation_conductivity,
        ),
        (None, None) => return Err(MissingFloorUValueError(input.name.clone())),
    };

    Ok(FabricElement::floor(input.name.as_str(), input.area, u_value)
        .with_temperature_factor(input.temperature_factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ingest_input;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    #[fixture]
    fn input() -> Input {
        let json = json!({
            "building_name": "Test House",
            "postcode_area": "SW",
            "building_category": "B",
            "rooms": [
                {
                    "name": "Living",
                    "room_type": "Lounge",
                    "design_temp": 20.0,
                    "volume": 48.0,
                    "air_change_rate": 1.0,
                    "walls": [
                        {"name": "External Wall", "area": 12.0, "u_value": 0.3},
                        {"name": "Party Wall", "area": 10.0, "u_value": 0.5, "boundary": "Kitchen"}
                    ],
                    "windows": [{"name": "Window", "area": 3.0, "u_value": 1.4}],
                    "floors": [{"name": "Floor", "area": 20.0, "u_value": 0.25}]
                },
                {
                    "name": "Kitchen",
                    "room_type": "Kitchen",
                    "floor_area": 15.0,
                    "walls": [
                        {"name": "External Wall", "area": 9.0, "u_value": 0.3},
                        {"name": "Party Wall", "area": 10.0, "u_value": 0.5, "boundary": "living"}
                    ],
                    "floors": [{
                        "name": "Floor",
                        "area": 15.0,
                        "construction": {"floor_type": "suspended", "perimeter": 8.0}
                    }]
                }
            ],
            "hot_water": {"num_occupants": 3},
            "heat_pump": {"model": "Test 8kW", "capacity_kw": 8.0, "cop": 3.0}
        });
        ingest_input(json.to_string().as_bytes()).unwrap()
    }

    #[rstest]
    fn test_new_resolves_climate() {
        let corpus = Corpus::new("eh", BuildingCategory::C).unwrap();
        let location = corpus.location_info();
        assert_eq!(location.postcode_area, "EH");
        assert_eq!(location.design_external_temp, -3.2);
        assert_eq!(location.degree_days, 2332.);
        assert_eq!(location.location, "East Scotland (Turnhouse)");
        assert_eq!(location.building_category, BuildingCategory::C);
    }

    #[rstest]
    fn test_new_rejects_unknown_postcode_area() {
        assert!(Corpus::new("XX", BuildingCategory::B).is_err());
    }

    #[rstest]
    fn test_create_room_fills_defaults() {
        let corpus = Corpus::new("M", BuildingCategory::A).unwrap();
        let room = corpus.create_room("Bathroom", "Bathroom", 5., 2.5, None, None);
        assert_eq!(room.design_temp(), 22.);
        assert_eq!(room.air_change_rate(), 3.0);
        assert_eq!(room.volume(), 12.5);
        assert_eq!(room.elements().len(), 0);

        let room = corpus.create_room("Lounge", "Lounge", 20., 2.4, Some(19.), Some(0.8));
        assert_eq!(room.design_temp(), 19.);
        assert_eq!(room.air_change_rate(), 0.8);
    }

    #[rstest]
    fn test_calculate_building_heat_loss_requires_building() {
        let corpus = Corpus::new("SW", BuildingCategory::B).unwrap();
        assert!(corpus.calculate_building_heat_loss(true).is_err());
    }

    #[rstest]
    fn test_building_assembled_by_hand() {
        let mut corpus = Corpus::new("SW", BuildingCategory::B).unwrap();
        let mut room = corpus.create_room("Lounge", "Lounge", 20., 2.5, None, None);
        room.add_element(FabricElement::wall("North Wall", 12., 0.3));
        corpus.create_building("Hand Built").add_room(room);

        let summary = corpus.calculate_building_heat_loss(true).unwrap();
        // 12 x 0.3 x 23 + 0.33 x 1.0 x 50 x 23
        assert_relative_eq!(summary.total_heat_loss.watts, 82.8 + 379.5, epsilon = 1e-9);
        assert_eq!(summary.building_name, "Hand Built");
    }

    #[rstest]
    fn test_from_inputs_builds_rooms(input: Input) {
        let corpus = Corpus::from_inputs(&input).unwrap();
        let building = corpus.building().unwrap();
        assert_eq!(building.name(), "Test House");
        assert_eq!(building.rooms().len(), 2);

        let kitchen = &building.rooms()[1];
        assert_eq!(kitchen.design_temp(), 18.);
        assert_eq!(kitchen.air_change_rate(), 1.5);
        assert_relative_eq!(kitchen.volume(), 36., epsilon = 1e-9);
        assert_eq!(
            kitchen.walls().nth(1).and_then(FabricElement::boundary),
            Some(&WallBoundary::AdjacentRoom("living".to_string()))
        );
        // suspended floor: 1 / (0.3 / 2 + 0.18)
        assert_relative_eq!(
            kitchen.floors().next().unwrap().u_value(),
            1. / 0.33,
            epsilon = 1e-9
        );
    }

    #[rstest]
    fn test_from_inputs_honours_climate_overrides(mut input: Input) {
        input.external_temp = Some(-5.);
        input.degree_days = Some(2500.);
        let corpus = Corpus::from_inputs(&input).unwrap();
        assert_eq!(corpus.external_temp(), -5.);
        assert_eq!(corpus.degree_days(), 2500.);
        assert_eq!(corpus.location_info().location, "Thames Valley (Heathrow)");
    }

    #[rstest]
    fn test_from_inputs_rejects_floor_without_u_value(mut input: Input) {
        input.rooms[0].floors[0].u_value = None;
        let err = Corpus::from_inputs(&input).unwrap_err();
        assert!(err.to_string().contains("Floor"));
    }

    #[rstest]
    fn test_run(input: Input) {
        let corpus = Corpus::from_inputs(&input).unwrap();
        let results = corpus.run(ProjectFlags::INTER_ROOM_TRANSFER).unwrap();

        assert!(results.building.inter_room_enabled);
        assert_relative_eq!(
            results.building.rooms[0].fabric_loss.watts.inter_room,
            10.,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            results.building.rooms[1].fabric_loss.watts.inter_room,
            -10.,
            epsilon = 1e-9
        );

        let hot_water = results.hot_water.unwrap();
        assert_eq!(hot_water.daily_usage_litres, 150.);

        let heat_pump = results.heat_pump.unwrap();
        assert_relative_eq!(
            heat_pump.sizing.design_heat_loss_kw,
            results.building.total_heat_loss.watts / 1000.,
            epsilon = 1e-12
        );
        assert_eq!(heat_pump.capacity_sufficient, Some(true));
        assert_relative_eq!(
            heat_pump.annual_consumption.electricity_consumption_kwh,
            (results.building.total_heat_loss.kwh + hot_water.annual_energy_kwh) / 3.,
            epsilon = 1e-9
        );
        assert_eq!(
            heat_pump.radiators.keys().collect::<Vec<_>>(),
            vec!["Living", "Kitchen"]
        );
    }

    #[rstest]
    fn test_run_without_inter_room_transfer(input: Input) {
        let corpus = Corpus::from_inputs(&input).unwrap();
        let results = corpus.run(ProjectFlags::empty()).unwrap();
        assert!(!results.building.inter_room_enabled);
        assert_eq!(results.building.fabric_loss.watts.inter_room, 0.);
    }

    #[rstest]
    fn test_run_reports_unreachable_emitter_temperatures(mut input: Input) {
        if let Some(heat_pump) = input.heat_pump.as_mut() {
            heat_pump.flow_temp = 20.;
            heat_pump.return_temp = 18.;
        }
        let corpus = Corpus::from_inputs(&input).unwrap();
        assert!(matches!(
            corpus.run(ProjectFlags::INTER_ROOM_TRANSFER),
            Err(McsError::FailureInCalculation(_))
        ));
    }
}
