//! Static body tables — names, orbit radii, sphere sizes, colors.
//!
//! Distances and sizes are stage units, not astronomy: the layout keeps all
//! eight orbits visible from the home camera at (0, 0, 20).

pub const PLANET_COUNT: usize = 8;

/// Sun sphere radius in world units.
pub const SUN_RADIUS: f32 = 1.5;
pub const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.3];

#[derive(Debug, Clone, Copy)]
pub struct PlanetDef {
    pub name: &'static str,
    /// Circular orbit radius in world units.
    pub orbit_radius: f32,
    /// Sphere radius in world units.
    pub size: f32,
    pub color: [f32; 3],
}

pub const PLANETS: [PlanetDef; PLANET_COUNT] = [
    PlanetDef { name: "Mercury", orbit_radius: 3.0,  size: 0.2, color: [0.6, 0.5, 0.4] },
    PlanetDef { name: "Venus",   orbit_radius: 4.5,  size: 0.4, color: [0.8, 0.7, 0.4] },
    PlanetDef { name: "Earth",   orbit_radius: 6.0,  size: 0.5, color: [0.3, 0.5, 0.8] },
    PlanetDef { name: "Mars",    orbit_radius: 7.5,  size: 0.4, color: [0.7, 0.3, 0.2] },
    PlanetDef { name: "Jupiter", orbit_radius: 10.0, size: 1.1, color: [0.7, 0.6, 0.4] },
    PlanetDef { name: "Saturn",  orbit_radius: 12.0, size: 0.9, color: [0.7, 0.65, 0.4] },
    PlanetDef { name: "Uranus",  orbit_radius: 13.5, size: 0.6, color: [0.4, 0.6, 0.7] },
    PlanetDef { name: "Neptune", orbit_radius: 15.0, size: 0.6, color: [0.3, 0.4, 0.7] },
];

/// Default angular speed in radians per frame: inner planets slowest,
/// each successive planet 0.002 faster.
pub fn default_speed(index: usize) -> f32 {
    0.01 + index as f32 * 0.002
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbits_are_strictly_increasing() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }

    #[test]
    fn default_speeds_fit_slider_range() {
        for i in 0..PLANET_COUNT {
            let s = default_speed(i);
            assert!(s >= 0.001 && s <= 0.05, "{}: {s}", PLANETS[i].name);
        }
    }
}
