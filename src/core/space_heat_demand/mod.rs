pub mod building;
pub mod building_element;
pub mod ground_floor;
pub mod room;
pub mod room_defaults;
pub mod ventilation;
