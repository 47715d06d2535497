//! Per-element display data: sphere color and radius for the 3D view, and atomic mass.
//!
//! Symbols missing from the table are not an error; they get [`UNKNOWN_ELEMENT`].

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub name: &'static str,
    /// RGB in 0..1
    pub color: (f32, f32, f32),
    /// sphere radius in scene units
    pub radius: f64,
    pub atomic_mass: f64,
}

/// Style used for any symbol that is not in the table.
pub const UNKNOWN_ELEMENT: ElementStyle = ElementStyle {
    name: "?",
    color: (1.0, 0.078, 0.576),
    radius: 0.5,
    atomic_mass: 0.0,
};

// colors after the usual CPK/Jmol scheme
const ELEMENTS: &[ElementStyle] = &[
    ElementStyle {
        name: "H",
        color: (1.0, 1.0, 1.0),
        radius: 0.25,
        atomic_mass: 1.008,
    },
    ElementStyle {
        name: "B",
        color: (1.0, 0.71, 0.71),
        radius: 0.42,
        atomic_mass: 10.81,
    },
    ElementStyle {
        name: "C",
        color: (0.565, 0.565, 0.565),
        radius: 0.4,
        atomic_mass: 12.011,
    },
    ElementStyle {
        name: "N",
        color: (0.188, 0.314, 0.973),
        radius: 0.38,
        atomic_mass: 14.007,
    },
    ElementStyle {
        name: "O",
        color: (1.0, 0.051, 0.051),
        radius: 0.36,
        atomic_mass: 15.999,
    },
    ElementStyle {
        name: "F",
        color: (0.565, 0.878, 0.314),
        radius: 0.32,
        atomic_mass: 18.998,
    },
    ElementStyle {
        name: "Na",
        color: (0.671, 0.361, 0.949),
        radius: 0.6,
        atomic_mass: 22.99,
    },
    ElementStyle {
        name: "Mg",
        color: (0.541, 1.0, 0.0),
        radius: 0.55,
        atomic_mass: 24.305,
    },
    ElementStyle {
        name: "Al",
        color: (0.749, 0.651, 0.651),
        radius: 0.55,
        atomic_mass: 26.98,
    },
    ElementStyle {
        name: "Si",
        color: (0.941, 0.784, 0.627),
        radius: 0.5,
        atomic_mass: 28.085,
    },
    ElementStyle {
        name: "P",
        color: (1.0, 0.502, 0.0),
        radius: 0.48,
        atomic_mass: 30.974,
    },
    ElementStyle {
        name: "S",
        color: (1.0, 1.0, 0.188),
        radius: 0.48,
        atomic_mass: 32.065,
    },
    ElementStyle {
        name: "Cl",
        color: (0.122, 0.941, 0.122),
        radius: 0.45,
        atomic_mass: 35.45,
    },
    ElementStyle {
        name: "K",
        color: (0.561, 0.251, 0.831),
        radius: 0.7,
        atomic_mass: 39.102,
    },
    ElementStyle {
        name: "Ca",
        color: (0.239, 1.0, 0.0),
        radius: 0.65,
        atomic_mass: 40.08,
    },
    ElementStyle {
        name: "Fe",
        color: (0.878, 0.4, 0.2),
        radius: 0.55,
        atomic_mass: 55.845,
    },
    ElementStyle {
        name: "Cu",
        color: (0.784, 0.502, 0.2),
        radius: 0.55,
        atomic_mass: 63.546,
    },
    ElementStyle {
        name: "Zn",
        color: (0.49, 0.502, 0.69),
        radius: 0.55,
        atomic_mass: 65.38,
    },
    ElementStyle {
        name: "Br",
        color: (0.651, 0.161, 0.161),
        radius: 0.5,
        atomic_mass: 79.904,
    },
    ElementStyle {
        name: "I",
        color: (0.58, 0.0, 0.58),
        radius: 0.55,
        atomic_mass: 126.904,
    },
];

/// Looks up the display style of a symbol. Unknown symbols get [`UNKNOWN_ELEMENT`].
pub fn element_style(symbol: &str) -> ElementStyle {
    ELEMENTS
        .iter()
        .find(|e| e.name == symbol)
        .copied()
        .unwrap_or(UNKNOWN_ELEMENT)
}

pub fn is_known_element(symbol: &str) -> bool {
    ELEMENTS.iter().any(|e| e.name == symbol)
}

/// Molar mass of a token sequence in g/mol, no implicit hydrogens.
///
/// Also returns the symbols that had no mass in the table (they contribute zero).
pub fn molar_mass_of_tokens<S: AsRef<str>>(tokens: &[S]) -> (f64, Vec<String>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for t in tokens {
        *counts.entry(t.as_ref()).or_insert(0) += 1;
    }
    let mut molar_mass = 0.0;
    let mut unknown = Vec::new();
    for (symbol, count) in counts {
        match ELEMENTS.iter().find(|e| e.name == symbol) {
            Some(e) => molar_mass += e.atomic_mass * count as f64,
            None => unknown.push(symbol.to_string()),
        }
    }
    (molar_mass, unknown)
}
