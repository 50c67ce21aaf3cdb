pub mod config;
pub mod model;
pub mod parser;

pub use model::{ShipBuildRecord, ShipPage, ShipTypeRecord, WeaponRecord};
pub use parser::{parse_page, parse_str, ParseError};
