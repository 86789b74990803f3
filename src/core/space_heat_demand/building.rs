use crate::core::space_heat_demand::room::{
    room_key, FabricHeatLossSummary, HeatLoss, Room, RoomHeatLossSummary, RoomTemperatures,
};
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuildingHeatLossSummary {
    pub building_name: String,
    pub postcode_area: String,
    pub external_temp: f64,
    pub degree_days: f64,
    pub num_rooms: usize,
    pub inter_room_enabled: bool,
    pub rooms: Vec<RoomHeatLossSummary>,
    pub fabric_loss: FabricHeatLossSummary,
    pub ventilation_loss: HeatLoss,
    pub total_heat_loss: HeatLoss,
}

/// A building made up of rooms. It holds no calculation state, so summaries can be requested
/// any number of times.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    name: String,
    postcode_area: String,
    rooms: Vec<Room>,
}

impl Building {
    pub fn new(name: impl Into<String>, postcode_area: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            postcode_area: postcode_area.into(),
            rooms: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn postcode_area(&self) -> &str {
        &self.postcode_area
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Map of room name to design temperature, rebuilt on every call.
    ///
    /// Room names are expected to be unique regardless of case and surrounding whitespace. Where they are not, the room
    /// added last wins.
    pub fn room_temperature_map(&self) -> RoomTemperatures {
        for duplicate in self
            .rooms
            .iter()
            .map(|room| room_key(room.name()))
            .duplicates()
        {
            warn!(
                "building '{}' has more than one room named '{duplicate}'; walls bordering it use the last one",
                self.name
            );
        }

        let mut room_temps = RoomTemperatures::default();
        for room in &self.rooms {
            room_temps.insert(room.name(), room.design_temp());
        }

        room_temps
    }

    /// Total design heat loss across all rooms, in W
    pub fn total_heat_loss_watts(&self, external_temp: f64, include_inter_room: bool) -> f64 {
        let room_temps = include_inter_room.then(|| self.room_temperature_map());
        self.rooms
            .iter()
            .map(|room| room.total_heat_loss_watts(external_temp, room_temps.as_ref()))
            .sum()
    }

    /// Total annual heat loss across all rooms, in kWh
    pub fn total_heat_loss_kwh(&self, degree_days: f64) -> f64 {
        self.rooms
            .iter()
            .map(|room| room.total_heat_loss_kwh(degree_days))
            .sum()
    }

    /// Summarise heat loss room by room and for the whole building.
    ///
    /// With `include_inter_room`, walls bordering another room of this building use that room's
    /// design temperature; otherwise they are treated as external walls.
    ///
    /// Building totals are the plain sum of the room totals. A wall shared by two rooms is
    /// counted from each side, as each room models its own wall.
    pub fn get_summary(
        &self,
        external_temp: f64,
        degree_days: f64,
        include_inter_room: bool,
    ) -> BuildingHeatLossSummary {
        let room_temps = include_inter_room.then(|| self.room_temperature_map());

        let rooms = self
            .rooms
            .iter()
            .map(|room| {
                let summary =
                    room.get_heat_loss_summary(external_temp, degree_days, room_temps.as_ref());
                debug!(
                    "room '{}': {:.1} W design heat loss, {:.1} kWh annual",
                    summary.room_name, summary.total_loss.watts, summary.total_loss.kwh
                );
                summary
            })
            .collect::<Vec<_>>();

        let fabric_loss = rooms.iter().map(|room| room.fabric_loss).sum();
        let ventilation_loss = rooms.iter().map(|room| room.ventilation_loss).sum();
        let total_heat_loss = rooms.iter().map(|room| room.total_loss).sum();

        BuildingHeatLossSummary {
            building_name: self.name.clone(),
            postcode_area: self.postcode_area.clone(),
            external_temp,
            degree_days,
            num_rooms: self.rooms.len(),
            inter_room_enabled: include_inter_room,
            rooms,
            fabric_loss,
            ventilation_loss,
            total_heat_loss,
        }
    }
}
