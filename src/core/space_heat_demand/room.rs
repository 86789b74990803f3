use crate::core::space_heat_demand::building_element::{
    BoundaryTemperatureDifference, FabricElement,
};
use crate::core::space_heat_demand::ventilation::{
    ventilation_heat_loss_kwh, ventilation_heat_loss_watts,
};
use indexmap::IndexMap;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

pub const DEFAULT_AIR_CHANGE_RATE: f64 = 1.0;
pub const DEFAULT_ROOM_HEIGHT: f64 = 2.4;
pub const DEFAULT_THERMAL_BRIDGING_FACTOR: f64 = 0.0;

/// Design temperatures of the rooms in a building, keyed by trimmed, lowercased room name, used
/// to resolve walls that border another room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomTemperatures(IndexMap<String, f64>);

/// Rooms are matched on name ignoring case and surrounding whitespace.
pub(crate) fn room_key(room_name: &str) -> String {
    room_name.trim().to_lowercase()
}

impl RoomTemperatures {
    /// Record a room's design temperature, returning any temperature previously held under the
    /// same (case-insensitive) name.
    pub fn insert(&mut self, room_name: &str, design_temp: f64) -> Option<f64> {
        self.0.insert(room_key(room_name), design_temp)
    }

    pub fn get(&self, room_name: &str) -> Option<f64> {
        self.0.get(&room_key(room_name)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Breakdown of fabric heat loss for a room, in W (design) or kWh (annual)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FabricHeatLoss {
    pub walls: f64,
    pub windows: f64,
    pub floors: f64,
    /// net transfer through walls to other heated rooms; negative for a net gain
    pub inter_room: f64,
    pub thermal_bridging: f64,
    pub total: f64,
}

impl FabricHeatLoss {
    /// Combine element losses, applying thermal bridging as a uniform uplift on all of them
    /// (inter-room transfer included)
    fn with_thermal_bridging(
        walls: f64,
        windows: f64,
        floors: f64,
        inter_room: f64,
        thermal_bridging_factor: f64,
    ) -> Self {
        let base_fabric = walls + windows + floors + inter_room;
        let thermal_bridging = base_fabric * thermal_bridging_factor;

        Self {
            walls,
            windows,
            floors,
            inter_room,
            thermal_bridging,
            total: base_fabric + thermal_bridging,
        }
    }
}

impl Add for FabricHeatLoss {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            walls: self.walls + rhs.walls,
            windows: self.windows + rhs.windows,
            floors: self.floors + rhs.floors,
            inter_room: self.inter_room + rhs.inter_room,
            thermal_bridging: self.thermal_bridging + rhs.thermal_bridging,
            total: self.total + rhs.total,
        }
    }
}

impl Sum for FabricHeatLoss {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A pair of design (W) and annual (kWh) figures
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct HeatLoss {
    pub watts: f64,
    pub kwh: f64,
}

impl Add for HeatLoss {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            watts: self.watts + rhs.watts,
            kwh: self.kwh + rhs.kwh,
        }
    }
}

impl Sum for HeatLoss {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FabricHeatLossSummary {
    pub watts: FabricHeatLoss,
    pub kwh: FabricHeatLoss,
}

impl Add for FabricHeatLossSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            watts: self.watts + rhs.watts,
            kwh: self.kwh + rhs.kwh,
        }
    }
}

impl Sum for FabricHeatLossSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoomHeatLossSummary {
    pub room_name: String,
    pub room_type: String,
    pub design_temp: f64,
    pub external_temp: f64,
    pub volume: f64,
    pub fabric_loss: FabricHeatLossSummary,
    pub ventilation_loss: HeatLoss,
    pub total_loss: HeatLoss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    name: String,
    room_type: String,
    design_temp: f64,
    volume: f64,
    air_change_rate: f64,
    thermal_bridging_factor: f64,
    height: f64,
    elements: Vec<FabricElement>,
}

impl Room {
    /// Construct a Room
    ///
    /// ## Arguments
    ///
    /// * `name` - name of the room, unique within its building (case-insensitively)
    /// * `room_type` - room type, e.g. "Lounge" or "Bedroom"
    /// * `design_temp` - internal design temperature, in deg C
    /// * `volume` - room volume, in m3. When absent or zero, the volume is derived here from the
    ///              total area of the floors passed in and the room height. It is not re-derived
    ///              if floors are added later.
    /// * `air_change_rate` - ventilation rate, in air changes per hour
    /// * `thermal_bridging_factor` - uplift applied to total fabric heat loss
    /// * `height` - room height, in m
    /// * `elements` - walls, windows and floors of the room
    pub fn new(
        name: impl Into<String>,
        room_type: impl Into<String>,
        design_temp: f64,
        volume: Option<f64>,
        air_change_rate: f64,
        thermal_bridging_factor: f64,
        height: f64,
        elements: Vec<FabricElement>,
    ) -> Self {
        let volume = match volume {
            Some(volume) if volume != 0. => volume,
            _ => {
                let total_floor_area = elements
                    .iter()
                    .filter(|element| element.is_floor())
                    .map(FabricElement::area)
                    .sum::<f64>();
                total_floor_area * height
            }
        };

        Self {
            name: name.into(),
            room_type: room_type.into(),
            design_temp,
            volume,
            air_change_rate,
            thermal_bridging_factor,
            height,
            elements,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn design_temp(&self) -> f64 {
        self.design_temp
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn air_change_rate(&self) -> f64 {
        self.air_change_rate
    }

    pub fn thermal_bridging_factor(&self) -> f64 {
        self.thermal_bridging_factor
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn elements(&self) -> &[FabricElement] {
        &self.elements
    }

    pub fn walls(&self) -> impl Iterator<Item = &FabricElement> {
        self.elements.iter().filter(|element| element.is_wall())
    }

    pub fn windows(&self) -> impl Iterator<Item = &FabricElement> {
        self.elements.iter().filter(|element| element.is_window())
    }

    pub fn floors(&self) -> impl Iterator<Item = &FabricElement> {
        self.elements.iter().filter(|element| element.is_floor())
    }

    /// Append a fabric element. The room volume is left as it was set at construction.
    pub fn add_element(&mut self, element: FabricElement) {
        self.elements.push(element);
    }

    /// Design fabric heat loss, in W
    ///
    /// Windows and floors always lose heat to the external temperature. Walls resolve their
    /// boundary: transfer to another room found in `room_temps` is reported under `inter_room`
    /// rather than `walls`, and a wall bordering a room that cannot be found loses heat as an
    /// external wall.
    pub fn fabric_heat_loss_watts(
        &self,
        external_temp: f64,
        room_temps: Option<&RoomTemperatures>,
    ) -> FabricHeatLoss {
        let temp_diff = self.design_temp - external_temp;

        let mut walls = 0.;
        let mut windows = 0.;
        let mut floors = 0.;
        let mut inter_room = 0.;

        for element in &self.elements {
            match element {
                FabricElement::Wall { boundary, .. } => {
                    match boundary.temperature_difference(
                        self.design_temp,
                        external_temp,
                        room_temps,
                    ) {
                        BoundaryTemperatureDifference::Fabric(wall_temp_diff) => {
                            walls += element.heat_loss_watts(wall_temp_diff)
                        }
                        BoundaryTemperatureDifference::InterRoom(wall_temp_diff) => {
                            inter_room += element.heat_loss_watts(wall_temp_diff)
                        }
                    }
                }
                FabricElement::Window { .. } => windows += element.heat_loss_watts(temp_diff),
                FabricElement::Floor { .. } => floors += element.heat_loss_watts(temp_diff),
            }
        }

        FabricHeatLoss::with_thermal_bridging(
            walls,
            windows,
            floors,
            inter_room,
            self.thermal_bridging_factor,
        )
    }

    /// Annual fabric heat loss, in kWh
    ///
    /// Every element is driven by the location's degree-days alone. Wall boundaries are not
    /// resolved here, so `inter_room` is always zero and a wall to another room counts as a
    /// full external wall.
    // TODO decide whether annual figures should follow wall boundaries like the design figures do
    pub fn fabric_heat_loss_kwh(&self, degree_days: f64) -> FabricHeatLoss {
        let sum_for = |filter: fn(&FabricElement) -> bool| {
            self.elements
                .iter()
                .filter(|element| filter(element))
                .map(|element| element.heat_loss_kwh(degree_days))
                .sum::<f64>()
        };

        FabricHeatLoss::with_thermal_bridging(
            sum_for(FabricElement::is_wall),
            sum_for(FabricElement::is_window),
            sum_for(FabricElement::is_floor),
            0.,
            self.thermal_bridging_factor,
        )
    }

    /// Design ventilation heat loss, in W
    pub fn ventilation_heat_loss_watts(&self, external_temp: f64) -> f64 {
        ventilation_heat_loss_watts(
            self.air_change_rate,
            self.volume,
            self.design_temp - external_temp,
        )
    }

    /// Annual ventilation heat loss, in kWh
    pub fn ventilation_heat_loss_kwh(&self, degree_days: f64) -> f64 {
        ventilation_heat_loss_kwh(self.air_change_rate, self.volume, degree_days)
    }

    /// Total design heat loss (fabric plus ventilation), in W
    pub fn total_heat_loss_watts(
        &self,
        external_temp: f64,
        room_temps: Option<&RoomTemperatures>,
    ) -> f64 {
        self.fabric_heat_loss_watts(external_temp, room_temps).total
            + self.ventilation_heat_loss_watts(external_temp)
    }

    /// Total annual heat loss (fabric plus ventilation), in kWh
    pub fn total_heat_loss_kwh(&self, degree_days: f64) -> f64 {
        self.fabric_heat_loss_kwh(degree_days).total + self.ventilation_heat_loss_kwh(degree_days)
    }

    pub fn get_heat_loss_summary(
        &self,
        external_temp: f64,
        degree_days: f64,
        room_temps: Option<&RoomTemperatures>,
    ) -> RoomHeatLossSummary {
        let fabric_loss = FabricHeatLossSummary {
            watts: self.fabric_heat_loss_watts(external_temp, room_temps),
            kwh: self.fabric_heat_loss_kwh(degree_days),
        };
        let ventilation_loss = HeatLoss {
            watts: self.ventilation_heat_loss_watts(external_temp),
            kwh: self.ventilation_heat_loss_kwh(degree_days),
        };

        RoomHeatLossSummary {
            room_name: self.name.clone(),
            room_type: self.room_type.clone(),
            design_temp: self.design_temp,
            external_temp,
            volume: self.volume,
            fabric_loss,
            ventilation_loss,
            total_loss: HeatLoss {
                watts: fabric_loss.watts.total + ventilation_loss.watts,
                kwh: fabric_loss.kwh.total + ventilation_loss.kwh,
            },
        }
    }
}
