/// Physics and math constants available in every session (name, value)
///
/// Values are CODATA 2018 in SI units. The table is listed in this order by
/// the `constants` command. Note that `e` is the elementary charge; Euler's
/// number is `e_math`.
///
/// Users can assign a variable with the same name as a constant. The
/// variable then shadows the constant for the rest of the session.
pub const PHYSICS_CONSTANTS: &[(&str, f64)] = &[
    // Fundamental constants
    ("c", 2.99792458e8),         // Speed of light (m/s)
    ("h", 6.62607015e-34),       // Planck constant (J·s)
    ("hbar", 1.054571817e-34),   // Reduced Planck constant (J·s)
    ("e", 1.602176634e-19),      // Elementary charge (C)
    ("me", 9.1093837015e-31),    // Electron mass (kg)
    ("mp", 1.67262192369e-27),   // Proton mass (kg)
    ("mn", 1.67492749804e-27),   // Neutron mass (kg)
    ("k", 1.380649e-23),         // Boltzmann constant (J/K)
    ("NA", 6.02214076e23),       // Avogadro constant (1/mol)
    ("R", 8.314462618),          // Gas constant (J/(mol·K))
    ("G", 6.67430e-11),          // Gravitational constant (m³/(kg·s²))
    ("epsilon0", 8.8541878128e-12), // Vacuum permittivity (F/m)
    ("mu0", 1.25663706212e-6),   // Vacuum permeability (H/m)
    ("sigma", 5.670374419e-8),   // Stefan-Boltzmann constant (W/(m²·K⁴))
    ("alpha", 7.2973525693e-3),  // Fine structure constant
    // Mathematical constants
    ("pi", core::f64::consts::PI),
    ("e_math", core::f64::consts::E),
    // Derived constants
    ("ke", 8.9875517923e9),      // Coulomb constant (N·m²/C²)
    ("a0", 5.29177210903e-11),   // Bohr radius (m)
    ("Ry", 1.0973731568160e7),   // Rydberg constant (1/m)
    ("g", 9.80665),              // Standard gravity (m/s²)
];

/// Look up a constant by exact (case-sensitive) name
pub fn lookup_constant(
    constants: &[(&str, f64)],
    name: &str,
) -> Option<f64> {
    constants
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|(_, value)| *value)
}
