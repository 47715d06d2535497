use super::simulation_task::{SimulationReport, StructureSummary};
use prettytable::{Cell, Row, Table, row};

impl SimulationReport {
    ////////////////////////INPUT/OUTPUT////////////////////////////////////////////////////////

    /// Table of structures: input, tokens, formula, heavy-atom mass.
    pub fn structures_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["role", "structure", "tokens", "formula", "mass, g/mol"]);
        let rows = self
            .reactants
            .iter()
            .map(|s| ("reactant", s))
            .chain(self.solutes.iter().map(|s| ("solute", s)));
        for (role, s) in rows {
            table.add_row(structure_row(role, s));
        }
        table
    }

    /// Conditions, estimated time and the placeholder safety panel.
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["parameter", "value"]);
        table.add_row(row!["combined formula", self.combined_formula]);
        table.add_row(row![
            "solvent",
            format!("{} (x{:.2})", self.solvent, self.solvent_factor)
        ]);
        table.add_row(row!["temperature, K", format!("{:.2}", self.temperature)]);
        table.add_row(row!["pressure, atm", format!("{:.2}", self.pressure)]);
        table.add_row(row!["estimated time", self.duration]);
        table.add_row(row!["toxicity, %", self.safety.toxicity]);
        table.add_row(row!["flammability, %", self.safety.flammability]);
        table.add_row(row![
            "environmental impact, %",
            self.safety.environmental_impact
        ]);
        table.add_row(row!["reactivity, %", self.safety.reactivity]);
        table.add_row(row!["hazard level", self.safety.hazard_level()]);
        table.add_row(row!["REACH compliant", yes_no(self.safety.reach_compliant)]);
        table.add_row(row!["GHS labelled", yes_no(self.safety.ghs_labelled)]);
        table
    }

    /// Prints both tables to stdout.
    pub fn pretty_print(&self) {
        println!("__________STRUCTURES__________");
        self.structures_table().printstd();
        println!("__________SIMULATION (illustrative values only)__________");
        self.summary_table().printstd();
        println!("_____________________________________________________________");
    }
}

fn structure_row(role: &str, s: &StructureSummary) -> Row {
    let mass = if s.unknown_symbols.is_empty() {
        format!("{:.3}", s.molar_mass)
    } else {
        format!("{:.3} (no data: {})", s.molar_mass, s.unknown_symbols.join(", "))
    };
    Row::new(vec![
        Cell::new(role),
        Cell::new(&s.input),
        Cell::new(&s.tokens.join(" ")),
        Cell::new(&s.formula),
        Cell::new(&mass),
    ])
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
