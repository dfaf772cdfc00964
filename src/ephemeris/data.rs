//! Orbital elements data for solar system bodies (J2000 epoch).
//! Elements simplified from NASA JPL values for an educational viewer.

use super::kepler::KeplerOrbit;

/// Identifier for celestial bodies in the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl CelestialBodyId {
    /// All planets (not including the Sun)
    pub const PLANETS: &'static [CelestialBodyId] = &[
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Sun => "Sun",
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
        }
    }
}

/// Static data for a celestial body.
#[derive(Clone, Debug)]
pub struct CelestialBodyData {
    pub id: CelestialBodyId,
    /// Heliocentric orbit; `None` for the Sun, which sits at the origin.
    pub orbit: Option<KeplerOrbit>,
}

/// Build one table entry. The table is fixed at compile time, so an invalid
/// element set here is a data-entry defect and fails initialization.
fn planet_orbit(
    a: f64,
    e: f64,
    inclination: f64,
    ascending_node: f64,
    arg_periapsis: f64,
    mean_anomaly: f64,
    period: f64,
) -> KeplerOrbit {
    KeplerOrbit::from_elements(
        a,
        e,
        inclination,
        ascending_node,
        arg_periapsis,
        mean_anomaly,
        period,
    )
    .expect("J2000 element table entry must describe a valid bound orbit")
}

/// Get orbital data for a celestial body.
///
/// Element order per entry: semi-major axis (AU), eccentricity, inclination,
/// ascending node, argument of periapsis, mean anomaly at epoch (degrees),
/// orbital period (days).
pub fn get_body_data(id: CelestialBodyId) -> CelestialBodyData {
    let orbit = match id {
        CelestialBodyId::Sun => None,
        CelestialBodyId::Mercury => Some(planet_orbit(
            0.387098, 0.205630, 7.0049, 48.331, 29.124, 174.796, 87.969,
        )),
        CelestialBodyId::Venus => Some(planet_orbit(
            0.723332, 0.006772, 3.3947, 76.680, 54.884, 50.115, 224.701,
        )),
        CelestialBodyId::Earth => Some(planet_orbit(
            1.000000, 0.016710, 0.0000, -11.260, 114.207, 357.517, 365.256,
        )),
        CelestialBodyId::Mars => Some(planet_orbit(
            1.523679, 0.093400, 1.8506, 49.558, 286.503, 19.373, 686.980,
        )),
        CelestialBodyId::Jupiter => Some(planet_orbit(
            5.20260, 0.048498, 1.3033, 100.464, 273.867, 20.020, 4332.589,
        )),
        CelestialBodyId::Saturn => Some(planet_orbit(
            9.55491, 0.055508, 2.4852, 113.665, 339.392, 317.020, 10759.22,
        )),
        CelestialBodyId::Uranus => Some(planet_orbit(
            19.2184, 0.046295, 0.7730, 74.006, 96.998, 142.238, 30688.5,
        )),
        CelestialBodyId::Neptune => Some(planet_orbit(
            30.1104, 0.008988, 1.7700, 131.784, 272.846, 256.228, 60182.0,
        )),
    };

    CelestialBodyData { id, orbit }
}

/// Get data for all celestial bodies, Sun first.
pub fn all_bodies() -> Vec<CelestialBodyData> {
    let mut bodies = vec![get_body_data(CelestialBodyId::Sun)];
    for &id in CelestialBodyId::PLANETS {
        bodies.push(get_body_data(id));
    }
    bodies
}

/// Physical facts for the info panel.
#[derive(Clone, Debug)]
pub struct CelestialBodyFacts {
    /// Mass in Earth masses
    pub mass_earths: f64,
    /// Surface gravity in m/s²
    pub surface_gravity: f64,
    /// Mean temperature in °C
    pub mean_temperature_c: f64,
    /// Rotation period in hours; negative for retrograde rotation
    pub day_length_hours: f64,
    /// Number of known moons
    pub known_moons: u32,
    /// A brief fun fact about the body
    pub fact: &'static str,
}

/// Get info-panel facts for a body. The Sun has no entry.
pub fn get_facts(id: CelestialBodyId) -> Option<CelestialBodyFacts> {
    let facts = match id {
        CelestialBodyId::Sun => return None,
        CelestialBodyId::Mercury => CelestialBodyFacts {
            mass_earths: 0.055,
            surface_gravity: 3.7,
            mean_temperature_c: 167.0,
            day_length_hours: 1407.6,
            known_moons: 0,
            fact: "One day on Mercury equals 176 Earth days",
        },
        CelestialBodyId::Venus => CelestialBodyFacts {
            mass_earths: 0.815,
            surface_gravity: 8.87,
            mean_temperature_c: 464.0,
            day_length_hours: -5832.5,
            known_moons: 0,
            fact: "Venus rotates backwards and its day is longer than its year",
        },
        CelestialBodyId::Earth => CelestialBodyFacts {
            mass_earths: 1.0,
            surface_gravity: 9.8,
            mean_temperature_c: 15.0,
            day_length_hours: 24.0,
            known_moons: 1,
            fact: "The only known planet with life",
        },
        CelestialBodyId::Mars => CelestialBodyFacts {
            mass_earths: 0.107,
            surface_gravity: 3.71,
            mean_temperature_c: -65.0,
            day_length_hours: 24.6,
            known_moons: 2,
            fact: "Home to Olympus Mons, the largest volcano in the solar system",
        },
        CelestialBodyId::Jupiter => CelestialBodyFacts {
            mass_earths: 317.8,
            surface_gravity: 24.79,
            mean_temperature_c: -110.0,
            day_length_hours: 9.9,
            known_moons: 95,
            fact: "The Great Red Spot is a storm larger than Earth",
        },
        CelestialBodyId::Saturn => CelestialBodyFacts {
            mass_earths: 95.2,
            surface_gravity: 10.44,
            mean_temperature_c: -140.0,
            day_length_hours: 10.7,
            known_moons: 146,
            fact: "Saturn's rings are made of ice and rock, some pieces as large as houses",
        },
        CelestialBodyId::Uranus => CelestialBodyFacts {
            mass_earths: 14.5,
            surface_gravity: 8.69,
            mean_temperature_c: -195.0,
            day_length_hours: -17.2,
            known_moons: 28,
            fact: "Tilted on its side with vertical rings",
        },
        CelestialBodyId::Neptune => CelestialBodyFacts {
            mass_earths: 17.1,
            surface_gravity: 11.15,
            mean_temperature_c: -200.0,
            day_length_hours: 16.1,
            known_moons: 16,
            fact: "Has the fastest winds in the solar system at 2100 km/h",
        },
    };
    Some(facts)
}
