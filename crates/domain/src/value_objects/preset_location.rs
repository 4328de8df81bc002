//! Fixed list of locations a parent can choose from

use serde::Serialize;

use crate::ids::LocationId;

/// A selectable city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetLocation {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl PresetLocation {
    pub fn location_id(&self) -> LocationId {
        LocationId::new(self.id)
    }
}

/// Location used until the parent picks one, or when the stored id is unknown.
pub const DEFAULT_LOCATION_ID: &str = "malmo";

const fn city(id: &'static str, name: &'static str, lat: f64, lon: f64) -> PresetLocation {
    PresetLocation { id, name, lat, lon }
}

pub const PRESET_LOCATIONS: &[PresetLocation] = &[
    // Skåne
    city("malmo", "Malmö", 55.6050, 13.0038),
    city("lund", "Lund", 55.7047, 13.1910),
    city("helsingborg", "Helsingborg", 56.0465, 12.6945),
    city("landskrona", "Landskrona", 55.8710, 12.8318),
    city("trelleborg", "Trelleborg", 55.3751, 13.1569),
    city("ystad", "Ystad", 55.4295, 13.8200),
    city("kristianstad", "Kristianstad", 56.0294, 14.1567),
    // Halland / Västra Götaland
    city("halmstad", "Halmstad", 56.6745, 12.8578),
    city("varberg", "Varberg", 57.1056, 12.2508),
    city("goteborg", "Göteborg", 57.7089, 11.9746),
    city("boras", "Borås", 57.7210, 12.9401),
    city("trollhattan", "Trollhättan", 58.2837, 12.2886),
    city("skovde", "Skövde", 58.3912, 13.8451),
    city("uddevalla", "Uddevalla", 58.3478, 11.9424),
    // Småland / Blekinge
    city("jonkoping", "Jönköping", 57.7826, 14.1618),
    city("vaxjo", "Växjö", 56.8777, 14.8091),
    city("kalmar", "Kalmar", 56.6634, 16.3568),
    city("karlskrona", "Karlskrona", 56.1612, 15.5869),
    // Östergötland / Södermanland
    city("linkoping", "Linköping", 58.4109, 15.6216),
    city("norrkoping", "Norrköping", 58.5877, 16.1924),
    city("eskilstuna", "Eskilstuna", 59.3710, 16.5098),
    // Stockholm / Uppsala
    city("stockholm", "Stockholm", 59.3293, 18.0686),
    city("solna", "Solna", 59.3600, 18.0000),
    city("sodertalje", "Södertälje", 59.1955, 17.6253),
    city("uppsala", "Uppsala", 59.8586, 17.6389),
    // Västmanland / Dalarna / Gävleborg
    city("vasteras", "Västerås", 59.6099, 16.5448),
    city("falun", "Falun", 60.6036, 15.6250),
    city("gavle", "Gävle", 60.6749, 17.1413),
    // Värmland / Örebro
    city("karlstad", "Karlstad", 59.3793, 13.5036),
    city("orebro", "Örebro", 59.2753, 15.2134),
    // Norrland
    city("sundsvall", "Sundsvall", 62.3908, 17.3069),
    city("ostersund", "Östersund", 63.1792, 14.6357),
    city("umea", "Umeå", 63.8258, 20.2630),
    city("skelleftea", "Skellefteå", 64.7507, 20.9528),
    city("lulea", "Luleå", 65.5848, 22.1547),
    city("kiruna", "Kiruna", 67.8557, 20.2251),
];

/// Look up a preset by id.
pub fn find_preset_location(id: &str) -> Option<&'static PresetLocation> {
    PRESET_LOCATIONS.iter().find(|c| c.id == id)
}

/// The default preset. Falls back to the first entry if the default id is
/// ever removed from the list.
pub fn default_location() -> &'static PresetLocation {
    find_preset_location(DEFAULT_LOCATION_ID).unwrap_or(&PRESET_LOCATIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_is_malmo() {
        assert_eq!(default_location().id, "malmo");
        assert_eq!(default_location().name, "Malmö");
    }

    #[test]
    fn preset_ids_are_unique() {
        let ids: HashSet<&str> = PRESET_LOCATIONS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), PRESET_LOCATIONS.len());
        assert_eq!(PRESET_LOCATIONS.len(), 36);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_preset_location("kiruna").map(|c| c.name), Some("Kiruna"));
        assert!(find_preset_location("oslo").is_none());
    }
}
