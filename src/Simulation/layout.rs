//! Placement of atom spheres and bond cylinders for the 3D view.
//!
//! Atoms of one structure go on a zig-zag chain along x, with seeded jitter in y and z, so the
//! picture looks "organic" but is identical for identical input. The renderer gets
//! symbol + color + position triples and index pairs for the cylinders; everything about
//! drawing and interaction lives on its side.

use super::seeded_rng::SeededRng;
use crate::Structure::elements::element_style;
use crate::Structure::smiles_tokens::tokenize;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BOND_LENGTH: f64 = 1.5;
/// gap between the chains of two structures, in bond lengths
const STRUCTURE_SPACING: f64 = 3.0;
/// jitter amplitude, in bond lengths
const JITTER: f64 = 0.2;
const ZIGZAG: f64 = 0.35;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedAtom {
    pub symbol: String,
    pub color: (f32, f32, f32),
    pub radius: f64,
    pub position: Vector3<f64>,
}

/// Cylinder between two atoms of the same layout, by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutBond {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AtomLayout {
    pub atoms: Vec<PlacedAtom>,
    pub bonds: Vec<LayoutBond>,
}

impl AtomLayout {
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Geometric center of all atoms, origin for an empty layout.
    pub fn centroid(&self) -> Vector3<f64> {
        if self.atoms.is_empty() {
            return Vector3::zeros();
        }
        let sum = self
            .atoms
            .iter()
            .fold(Vector3::<f64>::zeros(), |acc, a| acc + a.position);
        sum / self.atoms.len() as f64
    }

    /// Largest distance of an atom from the centroid; the camera uses it to frame the scene.
    pub fn bounding_radius(&self) -> f64 {
        let c = self.centroid();
        self.atoms
            .iter()
            .map(|a| (a.position - c).norm() + a.radius)
            .fold(0.0, f64::max)
    }

    /// Moves every atom so that the centroid sits at the origin.
    pub fn center(&mut self) {
        let c = self.centroid();
        for atom in &mut self.atoms {
            atom.position -= c;
        }
    }

    fn push_chain(
        &mut self,
        tokens: &[String],
        rng: &mut SeededRng,
        offset_y: f64,
        bond_length: f64,
    ) {
        let first = self.atoms.len();
        let half = (tokens.len() as f64 - 1.0) / 2.0;
        for (i, symbol) in tokens.iter().enumerate() {
            let style = element_style(symbol);
            let zig = if i % 2 == 0 { ZIGZAG } else { -ZIGZAG };
            let position = Vector3::new(
                (i as f64 - half) * bond_length,
                offset_y + (zig + rng.next_range(-JITTER, JITTER)) * bond_length,
                rng.next_range(-JITTER, JITTER) * bond_length,
            );
            self.atoms.push(PlacedAtom {
                symbol: symbol.clone(),
                color: style.color,
                radius: style.radius,
                position,
            });
            if i > 0 {
                self.bonds.push(LayoutBond {
                    from: first + i - 1,
                    to: first + i,
                });
            }
        }
    }
}

/// Layout of a single structure, jitter seeded by `seed`.
pub fn layout_structure(structure: &str, seed: &str, bond_length: f64) -> AtomLayout {
    layout_structures(&[structure], seed, bond_length)
}

/// Layout of several structures with one generator: each structure gets its own chain, stacked
/// along y, and the whole scene is centered. Structures without tokens take no space.
pub fn layout_structures<S: AsRef<str>>(
    structures: &[S],
    seed: &str,
    bond_length: f64,
) -> AtomLayout {
    let mut rng = SeededRng::new(seed);
    let mut layout = AtomLayout::default();
    let mut row = 0usize;
    for structure in structures {
        let tokens = tokenize(structure.as_ref());
        if tokens.is_empty() {
            continue;
        }
        let offset_y = row as f64 * STRUCTURE_SPACING * bond_length;
        layout.push_chain(&tokens, &mut rng, offset_y, bond_length);
        row += 1;
    }
    layout.center();
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layout_sizes() {
        let layout = layout_structure("CCO", "CCO", DEFAULT_BOND_LENGTH);
        assert_eq!(layout.atoms.len(), 3);
        assert_eq!(
            layout.bonds,
            vec![LayoutBond { from: 0, to: 1 }, LayoutBond { from: 1, to: 2 }]
        );
        let symbols: Vec<&str> = layout.atoms.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "C", "O"]);
        assert_eq!(layout.atoms[2].color, element_style("O").color);
    }

    #[test]
    fn test_no_bonds_between_structures() {
        let layout = layout_structures(&["CC", "123", "ClCl"], "seed", DEFAULT_BOND_LENGTH);
        assert_eq!(layout.atoms.len(), 4);
        assert_eq!(
            layout.bonds,
            vec![LayoutBond { from: 0, to: 1 }, LayoutBond { from: 2, to: 3 }]
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = layout_structures(&["CCO", "O"], "CCO.O|water", DEFAULT_BOND_LENGTH);
        let b = layout_structures(&["CCO", "O"], "CCO.O|water", DEFAULT_BOND_LENGTH);
        assert_eq!(a, b);
        let c = layout_structures(&["CCO", "O"], "CCO.O|thf", DEFAULT_BOND_LENGTH);
        assert_ne!(a, c);
    }

    #[test]
    fn test_layout_centered() {
        let layout = layout_structures(&["CCCCCC", "OO"], "x", 2.0);
        let c = layout.centroid();
        assert_relative_eq!(c.norm(), 0.0, epsilon = 1e-9);
        assert!(layout.bounding_radius() > 0.0);
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout_structure("", "x", DEFAULT_BOND_LENGTH);
        assert!(layout.is_empty());
        assert!(layout.bonds.is_empty());
        assert_eq!(layout.centroid(), Vector3::<f64>::zeros());
        assert_eq!(layout.bounding_radius(), 0.0);
    }

    #[test]
    fn test_jitter_bounded() {
        let layout = layout_structure("CCCCCCCCCC", "bounded", 1.0);
        // centering shifts z by the mean jitter, itself within the amplitude
        for atom in &layout.atoms {
            assert!(atom.position.z.abs() <= 2.0 * JITTER + 1e-9);
        }
    }
}
