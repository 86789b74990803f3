use crate::core::space_heat_demand::room::RoomTemperatures;
use crate::core::units::annual_kwh_from_degree_days;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Temperature factor applied to walls and windows unless stated otherwise
pub const DEFAULT_TEMPERATURE_FACTOR: f64 = 1.0;
/// Temperature factor for ground floors, representing the reduced driving force to the ground
pub const DEFAULT_FLOOR_TEMPERATURE_FACTOR: f64 = 0.5;
/// Assumed temperature of an unheated space where none is given, in deg C
pub const UNHEATED_SPACE_TEMP: f64 = 18.0;

/// A single heat-losing surface belonging to a room.
#[derive(Clone, Debug, PartialEq)]
pub enum FabricElement {
    Wall {
        name: String,
        area: f64,
        u_value: f64,
        temperature_factor: f64,
        boundary: WallBoundary,
    },
    Window {
        name: String,
        area: f64,
        u_value: f64,
        temperature_factor: f64,
    },
    Floor {
        name: String,
        area: f64,
        u_value: f64,
        temperature_factor: f64,
    },
}

impl FabricElement {
    /// An external wall with a temperature factor of 1.0
    pub fn wall(name: impl Into<String>, area: f64, u_value: f64) -> Self {
        FabricElement::Wall {
            name: name.into(),
            area,
            u_value,
            temperature_factor: DEFAULT_TEMPERATURE_FACTOR,
            boundary: WallBoundary::External,
        }
    }

    pub fn window(name: impl Into<String>, area: f64, u_value: f64) -> Self {
        FabricElement::Window {
            name: name.into(),
            area,
            u_value,
            temperature_factor: DEFAULT_TEMPERATURE_FACTOR,
        }
    }

    /// A ground floor with a temperature factor of 0.5
    pub fn floor(name: impl Into<String>, area: f64, u_value: f64) -> Self {
        FabricElement::Floor {
            name: name.into(),
            area,
            u_value,
            temperature_factor: DEFAULT_FLOOR_TEMPERATURE_FACTOR,
        }
    }

    pub fn with_temperature_factor(mut self, factor: f64) -> Self {
        match &mut self {
            FabricElement::Wall {
                temperature_factor, ..
            }
            | FabricElement::Window {
                temperature_factor, ..
            }
            | FabricElement::Floor {
                temperature_factor, ..
            } => *temperature_factor = factor,
        }
        self
    }

    /// Set what lies on the other side of a wall. Windows and floors have no boundary and are
    /// returned unchanged.
    pub fn with_boundary(mut self, new_boundary: WallBoundary) -> Self {
        if let FabricElement::Wall { boundary, .. } = &mut self {
            *boundary = new_boundary;
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            FabricElement::Wall { name, .. }
            | FabricElement::Window { name, .. }
            | FabricElement::Floor { name, .. } => name,
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            FabricElement::Wall { area, .. }
            | FabricElement::Window { area, .. }
            | FabricElement::Floor { area, .. } => area,
        }
    }

    pub fn u_value(&self) -> f64 {
        match *self {
            FabricElement::Wall { u_value, .. }
            | FabricElement::Window { u_value, .. }
            | FabricElement::Floor { u_value, .. } => u_value,
        }
    }

    pub fn temperature_factor(&self) -> f64 {
        match *self {
            FabricElement::Wall {
                temperature_factor, ..
            }
            | FabricElement::Window {
                temperature_factor, ..
            }
            | FabricElement::Floor {
                temperature_factor, ..
            } => temperature_factor,
        }
    }

    pub fn boundary(&self) -> Option<&WallBoundary> {
        match self {
            FabricElement::Wall { boundary, .. } => Some(boundary),
            _ => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, FabricElement::Wall { .. })
    }

    pub fn is_window(&self) -> bool {
        matches!(self, FabricElement::Window { .. })
    }

    pub fn is_floor(&self) -> bool {
        matches!(self, FabricElement::Floor { .. })
    }

    /// Heat loss through the element, in W, for the given temperature difference in K
    pub fn heat_loss_watts(&self, temp_diff: f64) -> f64 {
        self.area() * self.u_value() * temp_diff * self.temperature_factor()
    }

    /// Annual heat loss through the element, in kWh.
    ///
    /// This is driven by the location's degree-days alone and is independent of the design
    /// temperature difference used for the peak calculation.
    pub fn heat_loss_kwh(&self, degree_days: f64) -> f64 {
        annual_kwh_from_degree_days(self.area() * self.u_value(), degree_days)
            * self.temperature_factor()
    }
}

/// What lies on the far side of a wall.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WallBoundary {
    #[default]
    External,
    /// Ground contact, optionally with a known ground temperature (deg C). Falls back to the
    /// external temperature.
    Ground { temperature: Option<f64> },
    /// An unheated space such as a garage, optionally with a known temperature (deg C). Falls
    /// back to 18 deg C.
    Unheated { temperature: Option<f64> },
    /// Another room in the same building, referenced by name and resolved when calculating.
    AdjacentRoom(String),
}

impl WallBoundary {
    /// Interpret a boundary tag as given in building input: `external`, `ground`, `unheated` or
    /// the name of another room. The reserved tags are matched case-insensitively.
    /// `boundary_temp` only has meaning for ground and unheated boundaries.
    pub fn from_tag(tag: &str, boundary_temp: Option<f64>) -> Self {
        let tag = tag.trim();
        match tag.to_lowercase().as_str() {
            "external" => WallBoundary::External,
            "ground" => WallBoundary::Ground {
                temperature: boundary_temp,
            },
            "unheated" => WallBoundary::Unheated {
                temperature: boundary_temp,
            },
            _ => WallBoundary::AdjacentRoom(tag.to_string()),
        }
    }

    /// Work out the temperature difference driving heat loss through a wall with this boundary.
    ///
    /// Adjacent rooms are looked up in `room_temps`; a room that cannot be found (or no lookup at
    /// all) means the wall is treated as external.
    pub(crate) fn temperature_difference(
        &self,
        design_temp: f64,
        external_temp: f64,
        room_temps: Option<&RoomTemperatures>,
    ) -> BoundaryTemperatureDifference {
        match self {
            WallBoundary::External => {
                BoundaryTemperatureDifference::Fabric(design_temp - external_temp)
            }
            WallBoundary::Ground { temperature } => BoundaryTemperatureDifference::Fabric(
                design_temp - temperature.unwrap_or(external_temp),
            ),
            WallBoundary::Unheated { temperature } => BoundaryTemperatureDifference::Fabric(
                design_temp - temperature.unwrap_or(UNHEATED_SPACE_TEMP),
            ),
            WallBoundary::AdjacentRoom(room_name) => {
                match room_temps.and_then(|temps| temps.get(room_name)) {
                    Some(adjacent_temp) => {
                        BoundaryTemperatureDifference::InterRoom(design_temp - adjacent_temp)
                    }
                    None => {
                        debug!(
                            "no temperature known for adjacent room '{room_name}', treating wall as external"
                        );
                        BoundaryTemperatureDifference::Fabric(design_temp - external_temp)
                    }
                }
            }
        }
    }
}

impl Display for WallBoundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WallBoundary::External => write!(f, "external"),
            WallBoundary::Ground { .. } => write!(f, "ground"),
            WallBoundary::Unheated { .. } => write!(f, "unheated"),
            WallBoundary::AdjacentRoom(name) => write!(f, "{name}"),
        }
    }
}

/// A resolved wall temperature difference, in K, tagged with where the loss should be accounted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum BoundaryTemperatureDifference {
    /// Loss to outside, ground or an unheated space
    Fabric(f64),
    /// Transfer to or from another heated room. Negative when the neighbour is warmer.
    InterRoom(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn room_temps() -> RoomTemperatures {
        let mut temps = RoomTemperatures::default();
        temps.insert("Living", 20.);
        temps.insert("Kitchen", 18.);
        temps
    }

    #[rstest]
    fn test_heat_loss_watts_for_external_wall() {
        let wall = FabricElement::wall("External Wall", 10., 0.3);
        assert_relative_eq!(wall.heat_loss_watts(21. - -2.), 69.0, epsilon = 1e-3);
    }

    #[rstest]
    fn test_heat_loss_watts_for_window() {
        let window = FabricElement::window("Front Window", 4., 1.4);
        assert_relative_eq!(window.heat_loss_watts(23.), 128.8, epsilon = 1e-3);
    }

    #[rstest]
    fn test_heat_loss_watts_for_floor_uses_ground_temperature_factor() {
        let floor = FabricElement::floor("Ground Floor", 30., 0.25);
        assert_eq!(floor.temperature_factor(), 0.5);
        assert_relative_eq!(floor.heat_loss_watts(23.), 86.25, epsilon = 1e-3);
    }

    #[rstest]
    fn test_heat_loss_watts_is_linear_in_temperature_difference() {
        let wall = FabricElement::wall("Wall", 12., 0.3).with_temperature_factor(0.8);
        assert_relative_eq!(
            wall.heat_loss_watts(40.),
            2. * wall.heat_loss_watts(20.),
            epsilon = 1e-9
        );
        assert_eq!(wall.heat_loss_watts(0.), 0.);
    }

    #[rstest]
    fn test_heat_loss_kwh_uses_degree_days() {
        let wall = FabricElement::wall("Wall", 10., 0.3);
        // 10 x 0.3 x 2033 x 24 / 1000
        assert_relative_eq!(wall.heat_loss_kwh(2033.), 146.376, epsilon = 1e-6);

        let floor = FabricElement::floor("Floor", 10., 0.3);
        assert_relative_eq!(floor.heat_loss_kwh(2033.), 73.188, epsilon = 1e-6);
    }

    #[rstest]
    fn test_builders_only_set_boundary_on_walls() {
        let window =
            FabricElement::window("Window", 2., 1.4).with_boundary(WallBoundary::AdjacentRoom(
                "Hall".to_string(),
            ));
        assert_eq!(window.boundary(), None);

        let wall = FabricElement::wall("Wall", 2., 0.5)
            .with_boundary(WallBoundary::Unheated { temperature: None });
        assert_eq!(
            wall.boundary(),
            Some(&WallBoundary::Unheated { temperature: None })
        );
    }

    #[rstest]
    #[case("external", None, WallBoundary::External)]
    #[case("External", Some(5.), WallBoundary::External)]
    #[case("ground", None, WallBoundary::Ground { temperature: None })]
    #[case("GROUND", Some(10.), WallBoundary::Ground { temperature: Some(10.) })]
    #[case("unheated", Some(12.), WallBoundary::Unheated { temperature: Some(12.) })]
    #[case(" Kitchen ", Some(12.), WallBoundary::AdjacentRoom("Kitchen".to_string()))]
    fn test_boundary_from_tag(
        #[case] tag: &str,
        #[case] boundary_temp: Option<f64>,
        #[case] expected: WallBoundary,
    ) {
        assert_eq!(WallBoundary::from_tag(tag, boundary_temp), expected);
    }

    #[rstest]
    #[case("Ground", Some(10.), 11.)]
    #[case("UNHEATED", None, 3.)]
    #[case("External", Some(10.), 23.)]
    fn test_reserved_tags_resolve_regardless_of_case(
        room_temps: RoomTemperatures,
        #[case] tag: &str,
        #[case] boundary_temp: Option<f64>,
        #[case] expected: f64,
    ) {
        assert_eq!(
            WallBoundary::from_tag(tag, boundary_temp).temperature_difference(
                21.,
                -2.,
                Some(&room_temps)
            ),
            BoundaryTemperatureDifference::Fabric(expected)
        );
    }

    #[rstest]
    fn test_boundary_display_round_trips_through_tag() {
        for boundary in [
            WallBoundary::External,
            WallBoundary::Ground { temperature: None },
            WallBoundary::Unheated { temperature: None },
            WallBoundary::AdjacentRoom("Landing".to_string()),
        ] {
            assert_eq!(WallBoundary::from_tag(&boundary.to_string(), None), boundary);
        }
    }

    #[rstest]
    fn test_temperature_difference_for_external(room_temps: RoomTemperatures) {
        assert_eq!(
            WallBoundary::External.temperature_difference(21., -2., Some(&room_temps)),
            BoundaryTemperatureDifference::Fabric(23.)
        );
    }

    #[rstest]
    #[case(None, 23.)]
    #[case(Some(10.), 11.)]
    fn test_temperature_difference_for_ground(
        #[case] temperature: Option<f64>,
        #[case] expected: f64,
    ) {
        assert_eq!(
            WallBoundary::Ground { temperature }.temperature_difference(21., -2., None),
            BoundaryTemperatureDifference::Fabric(expected)
        );
    }

    #[rstest]
    #[case(None, 3.)]
    #[case(Some(5.), 16.)]
    fn test_temperature_difference_for_unheated(
        #[case] temperature: Option<f64>,
        #[case] expected: f64,
    ) {
        assert_eq!(
            WallBoundary::Unheated { temperature }.temperature_difference(21., -2., None),
            BoundaryTemperatureDifference::Fabric(expected)
        );
    }

    #[rstest]
    fn test_temperature_difference_for_adjacent_room_is_case_insensitive(
        room_temps: RoomTemperatures,
    ) {
        assert_eq!(
            WallBoundary::AdjacentRoom("KITCHEN".to_string()).temperature_difference(
                20.,
                -2.,
                Some(&room_temps)
            ),
            BoundaryTemperatureDifference::InterRoom(2.)
        );
    }

    #[rstest]
    fn test_temperature_difference_to_warmer_room_is_negative(room_temps: RoomTemperatures) {
        assert_eq!(
            WallBoundary::AdjacentRoom("living".to_string()).temperature_difference(
                18.,
                -2.,
                Some(&room_temps)
            ),
            BoundaryTemperatureDifference::InterRoom(-2.)
        );
    }

    #[rstest]
    fn test_unknown_adjacent_room_falls_back_to_external(room_temps: RoomTemperatures) {
        let boundary = WallBoundary::AdjacentRoom("nonexistent-room".to_string());
        assert_eq!(
            boundary.temperature_difference(21., -2., Some(&room_temps)),
            BoundaryTemperatureDifference::Fabric(23.)
        );
        assert_eq!(
            boundary.temperature_difference(21., -2., None),
            BoundaryTemperatureDifference::Fabric(23.)
        );
    }
}
