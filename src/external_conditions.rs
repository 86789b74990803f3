// Design external temperatures and annual heating degree-days for UK postcode areas, from CIBSE
// Guide A as tabulated for the MCS heat pump calculator.

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PostcodeClimate {
    pub postcode_area: &'static str,
    /// design external air temperature, in deg C
    pub design_external_temp: f64,
    /// annual heating degree-days
    pub degree_days: f64,
    /// met station the figures are taken from
    pub location: &'static str,
}

impl PostcodeClimate {
    const fn new(
        postcode_area: &'static str,
        design_external_temp: f64,
        degree_days: f64,
        location: &'static str,
    ) -> Self {
        Self {
            postcode_area,
            design_external_temp,
            degree_days,
            location,
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown postcode area: {0}")]
pub struct UnknownPostcodeAreaError(pub String);

/// Look up the climate data for a postcode area (e.g. "SW", "m", " EH"), ignoring case and
/// surrounding whitespace.
pub fn climate_for_postcode_area(postcode_area: &str) -> Option<&'static PostcodeClimate> {
    let postcode_area = postcode_area.trim().to_uppercase();
    POSTCODE_CLIMATES
        .binary_search_by(|climate| climate.postcode_area.cmp(postcode_area.as_str()))
        .ok()
        .map(|index| &POSTCODE_CLIMATES[index])
}

pub fn try_climate_for_postcode_area(
    postcode_area: &str,
) -> Result<&'static PostcodeClimate, UnknownPostcodeAreaError> {
    climate_for_postcode_area(postcode_area)
        .ok_or_else(|| UnknownPostcodeAreaError(postcode_area.to_string()))
}

// sorted by postcode area
static POSTCODE_CLIMATES: [PostcodeClimate; 121] = [
    PostcodeClimate::new("AB", -4.2, 2668., "NE Scotland (Dyce)"),
    PostcodeClimate::new("AL", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("B", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("BA", -2.5, 2025., "South Western (Yeovilton)"),
    PostcodeClimate::new("BB", -3.1, 2317., "North Western (Squires Gate)"),
    PostcodeClimate::new("BD", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("BH", -1.7, 1908., "South Western (Hurn)"),
    PostcodeClimate::new("BL", -3.1, 2317., "North Western (Squires Gate)"),
    PostcodeClimate::new("BN", -2.0, 1830., "South Eastern (Gatwick)"),
    PostcodeClimate::new("BR", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("BS", -2.5, 2025., "South Western (Yeovilton)"),
    PostcodeClimate::new("BT", -3.5, 2414., "Northern Ireland (Aldergrove)"),
    PostcodeClimate::new("CA", -3.2, 2378., "Borders (Carlisle)"),
    PostcodeClimate::new("CB", -2.9, 2163., "East Anglia (Cambridge)"),
    PostcodeClimate::new("CF", -2.5, 2058., "South Wales (Rhoose)"),
    PostcodeClimate::new("CH", -2.6, 2176., "North Western (Hawarden)"),
    PostcodeClimate::new("CM", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("CO", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("CR", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("CT", -1.7, 1893., "South Eastern (Manston)"),
    PostcodeClimate::new("CV", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("CW", -2.6, 2176., "North Western (Hawarden)"),
    PostcodeClimate::new("DA", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("DD", -3.5, 2363., "East Scotland (Leuchars)"),
    PostcodeClimate::new("DE", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("DG", -3.3, 2401., "West Scotland (West Freugh)"),
    PostcodeClimate::new("DH", -3.3, 2273., "Borders (Durham)"),
    PostcodeClimate::new("DL", -3.3, 2273., "Borders (Durham)"),
    PostcodeClimate::new("DN", -2.9, 2325., "East Pennines (Finningley)"),
    PostcodeClimate::new("DT", -1.7, 1908., "South Western (Hurn)"),
    PostcodeClimate::new("DY", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("E", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("EC", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("EH", -3.2, 2332., "East Scotland (Turnhouse)"),
    PostcodeClimate::new("EN", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("EX", -2.3, 1870., "South Western (Exeter)"),
    PostcodeClimate::new("FK", -3.2, 2332., "East Scotland (Turnhouse)"),
    PostcodeClimate::new("FY", -3.1, 2317., "North Western (Squires Gate)"),
    PostcodeClimate::new("G", -3.3, 2401., "West Scotland (West Freugh)"),
    PostcodeClimate::new("GL", -2.8, 2123., "Severn Valley (Staverton)"),
    PostcodeClimate::new("GU", -2.0, 1830., "South Eastern (Gatwick)"),
    PostcodeClimate::new("HA", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("HD", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("HG", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("HP", -2.4, 2059., "Midlands (Cranfield)"),
    PostcodeClimate::new("HR", -2.9, 2168., "Wales (Shawbury)"),
    PostcodeClimate::new("HS", -1.9, 2668., "NW Scotland (Stornoway)"),
    PostcodeClimate::new("HU", -2.2, 2257., "East Pennines (Brough)"),
    PostcodeClimate::new("HX", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("IG", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("IP", -2.3, 2081., "East Anglia (Wattisham)"),
    PostcodeClimate::new("IV", -4.2, 2668., "NE Scotland (Dyce)"),
    PostcodeClimate::new("KA", -3.3, 2401., "West Scotland (West Freugh)"),
    PostcodeClimate::new("KT", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("KW", -3.6, 2588., "NE Scotland (Wick)"),
    PostcodeClimate::new("KY", -3.5, 2363., "East Scotland (Leuchars)"),
    PostcodeClimate::new("L", -2.6, 2176., "North Western (Hawarden)"),
    PostcodeClimate::new("LA", -3.1, 2317., "North Western (Squires Gate)"),
    PostcodeClimate::new("LD", -2.9, 2168., "Wales (Shawbury)"),
    PostcodeClimate::new("LE", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("LL", -2.6, 2271., "North Wales (Valley)"),
    PostcodeClimate::new("LN", -2.7, 2255., "East Pennines (Cranwell)"),
    PostcodeClimate::new("LS", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("LU", -2.4, 2059., "Midlands (Cranfield)"),
    PostcodeClimate::new("M", -3.1, 2275., "North Western (Ringway)"),
    PostcodeClimate::new("ME", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("MK", -2.4, 2059., "Midlands (Cranfield)"),
    PostcodeClimate::new("ML", -3.2, 2332., "East Scotland (Turnhouse)"),
    PostcodeClimate::new("N", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("NE", -3.3, 2273., "Borders (Durham)"),
    PostcodeClimate::new("NG", -2.9, 2217., "East Midlands (Watnall)"),
    PostcodeClimate::new("NN", -2.4, 2059., "Midlands (Cranfield)"),
    PostcodeClimate::new("NP", -2.5, 2058., "South Wales (Rhoose)"),
    PostcodeClimate::new("NR", -2.7, 2174., "East Anglia (Norwich)"),
    PostcodeClimate::new("NW", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("OL", -3.1, 2275., "North Western (Ringway)"),
    PostcodeClimate::new("OX", -2.8, 2022., "Thames Valley (Benson)"),
    PostcodeClimate::new("PA", -3.3, 2401., "West Scotland (West Freugh)"),
    PostcodeClimate::new("PE", -2.7, 2255., "East Pennines (Cranwell)"),
    PostcodeClimate::new("PH", -3.5, 2363., "East Scotland (Leuchars)"),
    PostcodeClimate::new("PL", -2.2, 1731., "South Western (Plymouth)"),
    PostcodeClimate::new("PO", -1.8, 1909., "South Coast (Thorney Island)"),
    PostcodeClimate::new("PR", -3.1, 2317., "North Western (Squires Gate)"),
    PostcodeClimate::new("RG", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("RH", -2.0, 1830., "South Eastern (Gatwick)"),
    PostcodeClimate::new("RM", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("S", -3.2, 2260., "Pennines (Sheffield)"),
    PostcodeClimate::new("SA", -2.3, 1969., "South Wales (Aberporth)"),
    PostcodeClimate::new("SE", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("SG", -2.4, 2059., "Midlands (Cranfield)"),
    PostcodeClimate::new("SK", -3.1, 2275., "North Western (Ringway)"),
    PostcodeClimate::new("SL", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("SM", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("SN", -2.8, 2123., "Severn Valley (Staverton)"),
    PostcodeClimate::new("SO", -1.8, 1909., "South Coast (Thorney Island)"),
    PostcodeClimate::new("SP", -2.8, 2022., "Thames Valley (Benson)"),
    PostcodeClimate::new("SR", -3.3, 2273., "Borders (Durham)"),
    PostcodeClimate::new("SS", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("ST", -3.1, 2275., "North Western (Ringway)"),
    PostcodeClimate::new("SW", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("SY", -2.9, 2168., "Wales (Shawbury)"),
    PostcodeClimate::new("TA", -2.5, 2025., "South Western (Yeovilton)"),
    PostcodeClimate::new("TD", -3.2, 2378., "Borders (Carlisle)"),
    PostcodeClimate::new("TF", -2.9, 2168., "Wales (Shawbury)"),
    PostcodeClimate::new("TN", -2.0, 1830., "South Eastern (Gatwick)"),
    PostcodeClimate::new("TQ", -2.3, 1870., "South Western (Exeter)"),
    PostcodeClimate::new("TR", -1.6, 1608., "South Western (Camborne)"),
    PostcodeClimate::new("TS", -3.3, 2273., "Borders (Durham)"),
    PostcodeClimate::new("TW", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("UB", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("W", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("WA", -2.6, 2176., "North Western (Hawarden)"),
    PostcodeClimate::new("WC", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("WD", -2.0, 2033., "Thames Valley (Heathrow)"),
    PostcodeClimate::new("WF", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("WN", -3.1, 2317., "North Western (Squires Gate)"),
    PostcodeClimate::new("WR", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("WS", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("WV", -3.3, 2265., "Severn Valley (Birmingham)"),
    PostcodeClimate::new("YO", -3.6, 2252., "Pennines (Leeds)"),
    PostcodeClimate::new("ZE", -1.2, 2584., "Shetland (Lerwick)"),
];
