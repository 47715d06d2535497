/// eng
/// Deterministic pseudo random stream seeded by a string (FNV-1a fold + xorshift32).
/// Identical seeds give identical streams on every platform.
///
///  # Examples
/// ```
/// use ReactViz::Simulation::seeded_rng::SeededRng;
/// let mut a = SeededRng::new("CCO|water");
/// let mut b = SeededRng::new("CCO|water");
/// assert_eq!(a.next(), b.next());
/// ```
pub mod seeded_rng;
/// Stable percentage scores in [5, 95] derived from a seed and a salt, and the placeholder
/// safety panel built from them. The numbers are cosmetic, not toxicology.
pub mod scores;
/// Heuristic reaction time from the number of reactants and solutes, the solvent and the
/// conditions, plus its "1h 31m" / "45 min" rendering.
///
///  # Examples
/// ```
/// use ReactViz::Simulation::reaction_time::{estimate_reaction_time, format_duration};
/// let minutes = estimate_reaction_time(1, 0, "water", 298.0, 1.0);
/// assert_eq!(format_duration(minutes), "1h 31m");
/// ```
pub mod reaction_time;
/// Atom spheres and bond cylinders handed to the 3D renderer
pub mod layout;
/// The whole mocked simulation: task in, report out.
///
///  # Examples
/// ```
/// use ReactViz::Simulation::simulation_task::ReactionTask;
/// let report = ReactionTask::new()
///     .with_reactants(&["CCO", "O"])
///     .with_solvent("ethanol")
///     .with_conditions(320.0, 1.5)
///     .run();
/// assert_eq!(report.combined_formula, "C2O2");
/// report.pretty_print();
/// ```
pub mod simulation_task;
pub mod simulation_output;
