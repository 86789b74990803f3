// Ventilation heat loss for a room, based on the simplified natural ventilation method of
// BS EN 12831 as used by the MCS heat pump calculator.

use crate::core::units::{annual_kwh_from_degree_days, VOLUMETRIC_HEAT_CAPACITY_AIR};

/// Ventilation heat transfer coefficient, in W / K
///
/// Arguments:
/// * `air_change_rate` - air changes per hour
/// * `volume` - room volume (m3)
pub fn ventilation_heat_transfer_coefficient(air_change_rate: f64, volume: f64) -> f64 {
    VOLUMETRIC_HEAT_CAPACITY_AIR * air_change_rate * volume
}

/// Design ventilation heat loss, in W
///
/// Arguments:
/// * `air_change_rate` - air changes per hour
/// * `volume` - room volume (m3)
/// * `temp_diff` - internal design temperature minus external design temperature (K)
pub fn ventilation_heat_loss_watts(air_change_rate: f64, volume: f64, temp_diff: f64) -> f64 {
    ventilation_heat_transfer_coefficient(air_change_rate, volume) * temp_diff
}

/// Annual ventilation heat loss, in kWh
///
/// Arguments:
/// * `air_change_rate` - air changes per hour
/// * `volume` - room volume (m3)
/// * `degree_days` - annual heating degree-days for the location
pub fn ventilation_heat_loss_kwh(air_change_rate: f64, volume: f64, degree_days: f64) -> f64 {
    annual_kwh_from_degree_days(
        ventilation_heat_transfer_coefficient(air_change_rate, volume),
        degree_days,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::*;

    #[rstest]
    fn test_ventilation_heat_loss_watts() {
        assert_relative_eq!(
            ventilation_heat_loss_watts(1.5, 60., 21. - -2.),
            683.1,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            ventilation_heat_loss_watts(1.5, 30., 23.),
            341.55,
            epsilon = 1e-3
        );
    }

    #[rstest]
    #[case(2., 1., 1.)]
    #[case(1., 2., 1.)]
    #[case(1., 1., 2.)]
    fn test_ventilation_heat_loss_watts_is_linear(
        #[case] ach_scale: f64,
        #[case] volume_scale: f64,
        #[case] temp_diff_scale: f64,
    ) {
        let base = ventilation_heat_loss_watts(1.5, 60., 23.);
        let scaled =
            ventilation_heat_loss_watts(1.5 * ach_scale, 60. * volume_scale, 23. * temp_diff_scale);
        assert_relative_eq!(scaled, 2. * base, epsilon = 1e-9);
    }

    #[rstest]
    fn test_ventilation_heat_loss_kwh() {
        // 0.33 x 1.0 x 60 x 2033 x 24 / 1000
        assert_relative_eq!(
            ventilation_heat_loss_kwh(1.0, 60., 2033.),
            966.0816,
            epsilon = 1e-6
        );
    }

    #[rstest]
    fn test_no_ventilation_loss_without_air_changes() {
        assert_eq!(ventilation_heat_loss_watts(0., 60., 23.), 0.);
        assert_eq!(ventilation_heat_loss_kwh(0., 60., 2033.), 0.);
    }
}
