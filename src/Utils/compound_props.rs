use crate::Structure::elements::molar_mass_of_tokens;
use crate::Structure::formula::formula_from_smiles;
use crate::Structure::smiles_tokens::tokenize;
use crate::error::ReactVizError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_COMPOUND_NAME: &str = "Unknown compound";

/// Compound record as it comes back from a PubChem-style property lookup.
///
/// Every field is optional; the `*_or` accessors supply what the display needs when a field is
/// absent. The weight is kept as raw JSON because services send it either as a number or as a
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompoundProperties {
    #[serde(rename = "CID")]
    pub cid: Option<u64>,
    pub molecular_formula: Option<String>,
    pub molecular_weight: Option<Value>,
    #[serde(rename = "IUPACName")]
    pub iupac_name: Option<String>,
    #[serde(rename = "CanonicalSMILES")]
    pub canonical_smiles: Option<String>,
    pub synonyms: Option<Vec<String>>,
    pub hazard_statements: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PropertyTable {
    properties: Vec<CompoundProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PropertyEnvelope {
    property_table: PropertyTable,
}

impl CompoundProperties {
    /// Parses a single property record.
    pub fn from_json(json: &str) -> Result<Self, ReactVizError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses the `{"PropertyTable": {"Properties": [...]}}` envelope.
    pub fn from_property_table_json(json: &str) -> Result<Vec<Self>, ReactVizError> {
        let envelope: PropertyEnvelope = serde_json::from_str(json)?;
        debug!(
            "property table with {} records",
            envelope.property_table.properties.len()
        );
        Ok(envelope.property_table.properties)
    }

    /// Weight in g/mol when present and numeric (numbers and numeric strings are accepted).
    pub fn weight(&self) -> Option<f64> {
        match self.molecular_weight.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(w) => Some(w),
                Err(_) => {
                    warn!("non-numeric molecular weight '{}'", s);
                    None
                }
            },
            _ => None,
        }
    }

    /// Reported formula, else the one derived from the canonical SMILES, else from `structure`.
    pub fn formula_or(&self, structure: &str) -> String {
        if let Some(formula) = self.molecular_formula.as_ref().filter(|f| !f.is_empty()) {
            return formula.clone();
        }
        let source = self.canonical_smiles.as_deref().unwrap_or(structure);
        formula_from_smiles(source)
    }

    /// Reported weight, else the heavy-atom mass of `structure` (no implicit hydrogens).
    pub fn weight_or(&self, structure: &str) -> f64 {
        self.weight()
            .unwrap_or_else(|| molar_mass_of_tokens(&tokenize(structure)).0)
    }

    /// IUPAC name, else the first synonym, else [`UNKNOWN_COMPOUND_NAME`].
    pub fn name_or_default(&self) -> String {
        self.iupac_name
            .clone()
            .or_else(|| self.synonyms.as_ref().and_then(|s| s.first().cloned()))
            .unwrap_or_else(|| UNKNOWN_COMPOUND_NAME.to_string())
    }

    pub fn hazard_count(&self) -> usize {
        self.hazard_statements.as_ref().map_or(0, |h| h.len())
    }
}
