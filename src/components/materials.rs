//! Bulk material properties used by the geometry formulas.

use crate::error::{CircuitError, Result};

/// Electrical properties of a material. Absent values are not tabulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub name: &'static str,
    /// Resistivity ρ in Ω·m
    pub resistivity: Option<f64>,
    /// Permittivity ε in F/m
    pub permittivity: Option<f64>,
    /// Permeability μ in H/m
    pub permeability: Option<f64>,
}

impl Material {
    const fn new(
        name: &'static str,
        resistivity: Option<f64>,
        permittivity: Option<f64>,
        permeability: Option<f64>,
    ) -> Self {
        Self {
            name,
            resistivity,
            permittivity,
            permeability,
        }
    }

    pub fn require_resistivity(&self) -> Result<f64> {
        self.resistivity.ok_or(CircuitError::MissingMaterialProperty {
            material: self.name,
            property: "resistivity",
        })
    }

    pub fn require_permittivity(&self) -> Result<f64> {
        self.permittivity.ok_or(CircuitError::MissingMaterialProperty {
            material: self.name,
            property: "permittivity",
        })
    }

    pub fn require_permeability(&self) -> Result<f64> {
        self.permeability.ok_or(CircuitError::MissingMaterialProperty {
            material: self.name,
            property: "permeability",
        })
    }
}

/// Conductors, core materials and dielectrics.
pub const MATERIALS: [Material; 9] = [
    Material::new("Copper", Some(1.68e-8), None, Some(1.256629e-6)),
    Material::new("Aluminum", Some(2.65e-8), None, Some(1.256665e-6)),
    Material::new("Silver", Some(1.59e-8), None, Some(1.256629e-6)),
    Material::new("Gold", Some(2.44e-8), None, Some(1.256629e-6)),
    Material::new("Iron", Some(9.71e-8), None, Some(6.3e-3)),
    Material::new("Air", None, Some(8.854e-12), Some(1.257e-6)),
    Material::new("Paper", None, Some(3.7e-11), None),
    Material::new("Teflon", None, Some(2.1e-11), None),
    Material::new("Glass", None, Some(4.0e-11), None),
];

/// Look up a material by name, ignoring case.
pub fn find_material(name: &str) -> Result<&'static Material> {
    let name = name.trim();
    MATERIALS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CircuitError::UnknownMaterial {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(find_material("copper").unwrap().name, "Copper");
        assert_eq!(find_material(" TEFLON ").unwrap().name, "Teflon");
        assert!(matches!(
            find_material("unobtainium"),
            Err(CircuitError::UnknownMaterial { .. })
        ));
    }

    #[test]
    fn test_missing_property() {
        let paper = find_material("paper").unwrap();
        assert!(paper.require_permittivity().is_ok());
        assert!(matches!(
            paper.require_resistivity(),
            Err(CircuitError::MissingMaterialProperty {
                material: "Paper",
                property: "resistivity"
            })
        ));
    }
}
