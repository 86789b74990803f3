// Radiator sizing for low temperature heating systems.
//
// Radiator catalogue outputs are rated at a mean water to room temperature difference of 50K
// (BS EN 442). At other temperature differences output scales as (dT / 50)^n.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_FLOW_TEMP: f64 = 45.;
pub const DEFAULT_RETURN_TEMP: f64 = 40.;

const RATED_TEMP_DIFF: f64 = 50.;
/// Radiator characteristic exponent
const RADIATOR_EXPONENT: f64 = 1.3;

#[derive(Debug, Error)]
#[error("Mean water temperature of {mean_water_temp}ºC does not exceed room temperature of {room_temp}ºC, so emitters cannot deliver heat")]
pub struct InvalidEmitterTemperatureError {
    mean_water_temp: f64,
    room_temp: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RadiatorSizing {
    pub room_heat_loss_w: f64,
    pub flow_temp: f64,
    pub return_temp: f64,
    pub mean_water_temp: f64,
    pub delta_t: f64,
    pub required_output_at_delta_t_50: f64,
    pub sizing_factor: f64,
}

/// Required radiator output at the rated 50K temperature difference to meet a room's heat loss.
///
/// Arguments:
/// * `room_heat_loss_w` - design heat loss of the room, in W
/// * `room_temp` - room design temperature, in deg C
/// * `flow_temp` - emitter flow temperature, in deg C
/// * `return_temp` - emitter return temperature, in deg C
pub fn radiator_sizing(
    room_heat_loss_w: f64,
    room_temp: f64,
    flow_temp: f64,
    return_temp: f64,
) -> Result<RadiatorSizing, InvalidEmitterTemperatureError> {
    let mean_water_temp = (flow_temp + return_temp) / 2.;
    let delta_t = mean_water_temp - room_temp;

    if delta_t <= 0. {
        return Err(InvalidEmitterTemperatureError {
            mean_water_temp,
            room_temp,
        });
    }

    let sizing_factor = 1. / (delta_t / RATED_TEMP_DIFF).powf(RADIATOR_EXPONENT);

    Ok(RadiatorSizing {
        room_heat_loss_w,
        flow_temp,
        return_temp,
        mean_water_temp,
        delta_t,
        required_output_at_delta_t_50: room_heat_loss_w * sizing_factor,
        sizing_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    #[rstest]
    fn test_radiator_sizing_at_default_temperatures() {
        let sizing = radiator_sizing(1000., 21., DEFAULT_FLOW_TEMP, DEFAULT_RETURN_TEMP).unwrap();

        assert_eq!(sizing.mean_water_temp, 42.5);
        assert_eq!(sizing.delta_t, 21.5);
        // 1 / (21.5 / 50)^1.3
        assert_relative_eq!(sizing.sizing_factor, 2.99565, epsilon = 1e-4);
        assert_relative_eq!(
            sizing.required_output_at_delta_t_50,
            1000. * sizing.sizing_factor,
            epsilon = 1e-9
        );
    }

    #[rstest]
    fn test_radiator_sizing_at_rated_temperature_difference() {
        let sizing = radiator_sizing(850., 20., 75., 65.).unwrap();
        assert_relative_eq!(sizing.sizing_factor, 1., epsilon = 1e-12);
        assert_relative_eq!(sizing.required_output_at_delta_t_50, 850., epsilon = 1e-9);
    }

    #[rstest]
    fn test_radiator_sizing_for_room_without_heat_loss() {
        let sizing = radiator_sizing(0., 18., 45., 40.).unwrap();
        assert_eq!(sizing.required_output_at_delta_t_50, 0.);
        assert!(sizing.sizing_factor.is_finite());
    }

    #[rstest]
    #[case(21., 21.)]
    #[case(35., 30.)]
    fn test_radiator_sizing_rejects_cool_water(#[case] flow_temp: f64, #[case] return_temp: f64) {
        assert!(radiator_sizing(1000., 22., flow_temp, return_temp).is_err());
    }
}
