use serde::{Deserialize, Serialize};

/// Thermal conductivity of unfrozen ground, W / (m.K)
const THERMAL_CONDUCTIVITY_GROUND: f64 = 2.0;
/// Thermal resistance of the ventilated air space beneath a suspended floor, m2.K / W
const THERMAL_RESISTANCE_SUSPENDED_AIR_SPACE: f64 = 0.18;

pub const DEFAULT_WALL_THICKNESS: f64 = 0.3;
pub const DEFAULT_INSULATION_THICKNESS: f64 = 0.;
pub const DEFAULT_INSULATION_CONDUCTIVITY: f64 = 0.035;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FloorType {
    Solid,
    Suspended,
}

/// Calculate the U-value of a ground floor, in W / (m2.K)
///
/// Arguments:
/// * `floor_type` - solid ground-bearing or suspended timber floor
/// * `perimeter` - exposed perimeter of the floor, in m
/// * `area` - floor area, in m2
/// * `wall_thickness` - thickness of the external walls, in m
/// * `insulation_thickness` - thickness of floor insulation, in m
/// * `insulation_conductivity` - thermal conductivity of floor insulation, in W / (m.K)
pub fn floor_u_value(
    floor_type: FloorType,
    perimeter: f64,
    area: f64,
    wall_thickness: f64,
    insulation_thickness: f64,
    insulation_conductivity: f64,
) -> f64 {
    let characteristic_dimension = if perimeter > 0. {
        area / (0.5 * perimeter)
    } else {
        0.
    };

    // equivalent thickness of the floor construction
    let d_t = wall_thickness
        + insulation_thickness * (THERMAL_CONDUCTIVITY_GROUND / insulation_conductivity);

    if characteristic_dimension < 0.1 {
        return 0.;
    }

    match floor_type {
        FloorType::Solid if characteristic_dimension <= 0.5 => {
            THERMAL_CONDUCTIVITY_GROUND / (0.457 * characteristic_dimension + d_t)
        }
        FloorType::Solid => {
            (2. * THERMAL_CONDUCTIVITY_GROUND / (3.14 * characteristic_dimension + d_t))
                * (1. + 0.5 * (d_t / (d_t + THERMAL_CONDUCTIVITY_GROUND)))
        }
        FloorType::Suspended => {
            let r_total = d_t / THERMAL_CONDUCTIVITY_GROUND + THERMAL_RESISTANCE_SUSPENDED_AIR_SPACE;
            if r_total > 0. {
                1. / r_total
            } else {
                0.
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    #[rstest]
    fn test_floor_u_value_solid_large_floor() {
        // B = 50 / 15 = 3.333.., d_t = 0.3
        let b: f64 = 50. / 15.;
        let expected = (4. / (3.14 * b + 0.3)) * (1. + 0.5 * (0.3 / 2.3));
        assert_relative_eq!(
            floor_u_value(
                FloorType::Solid,
                30.,
                50.,
                DEFAULT_WALL_THICKNESS,
                DEFAULT_INSULATION_THICKNESS,
                DEFAULT_INSULATION_CONDUCTIVITY
            ),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(expected, 0.3957, epsilon = 1e-4);
    }

    #[rstest]
    fn test_floor_u_value_solid_narrow_floor() {
        // B = 4 / (0.5 x 20) = 0.4
        assert_relative_eq!(
            floor_u_value(FloorType::Solid, 20., 4., 0.3, 0., 0.035),
            2. / (0.457 * 0.4 + 0.3),
            max_relative = 1e-12
        );
    }

    #[rstest]
    fn test_insulation_reduces_solid_floor_u_value() {
        let uninsulated = floor_u_value(FloorType::Solid, 30., 50., 0.3, 0., 0.035);
        let insulated = floor_u_value(FloorType::Solid, 30., 50., 0.3, 0.1, 0.035);
        assert!(insulated < uninsulated);
    }

    #[rstest]
    fn test_floor_u_value_suspended() {
        // d_t = 0.3, R = 0.15 + 0.18
        assert_relative_eq!(
            floor_u_value(FloorType::Suspended, 30., 50., 0.3, 0., 0.035),
            1. / 0.33,
            max_relative = 1e-12
        );
    }

    #[rstest]
    #[case(0., 50.)]
    #[case(100., 4.)]
    fn test_floor_u_value_is_zero_for_tiny_characteristic_dimension(
        #[case] perimeter: f64,
        #[case] area: f64,
    ) {
        assert_eq!(
            floor_u_value(FloorType::Solid, perimeter, area, 0.3, 0., 0.035),
            0.
        );
        assert_eq!(
            floor_u_value(FloorType::Suspended, perimeter, area, 0.3, 0., 0.035),
            0.
        );
    }

    #[rstest]
    fn test_floor_type_deserializes_lowercase() {
        assert_eq!(
            serde_json::from_str::<FloorType>("\"suspended\"").unwrap(),
            FloorType::Suspended
        );
    }
}
