/// Runnable walkthroughs of the structure utilities and of the mocked simulation
pub mod simulation_examples;
