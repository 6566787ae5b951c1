use crate::ReactorsIVP::IsomReactorIVP::{IsomReactorTask, ReactorError, ReactorParameters};
use crate::ReactorsIVP::reactor_IVP_utils::{arange_grid, linspace_grid};
use crate::Utils::plots::plot_simulation_results;
use crate::Utils::show_this_pic::show_image;
use log::warn;

/// File the 2×2 trajectory figure is rendered to
pub const PLOT_FILE: &str = "butane_isomerization.png";

pub fn butane_examples(task: usize) {
    //
    match task {
        0 => {
            // THE FULL TWO-SCENARIO STUDY: volume-resolved and length-resolved runs,
            // console maxima and the 2x2 figure
            butane_isomerization().expect("butane isomerization study failed");
        }
        1 => {
            // SINGLE SCENARIO WITH TASK/RESULT TABLES
            let params = ReactorParameters::with_coolant_temp(300.0);
            let mut reactor = IsomReactorTask::new(params);
            reactor.set_problem_name("Reactor I");
            reactor.set_problem_description("volume-resolved run, coolant at 300 K");
            reactor.set_grid(arange_grid(0.0, 5.1, 0.1));
            reactor.pretty_print_task();
            reactor.solve().expect("Reactor I run failed");
            reactor.pretty_print_results();
        }
        _ => {
            println!("no such example: {}", task);
        }
    }
}

/// The butane isomerization study: two plug-flow reactor scenarios sharing the same
/// feed and initial state, differing in coolant temperature and in the independent
/// variable the solution is sampled over.
pub fn butane_isomerization() -> Result<(), ReactorError> {
    // Reactor I: trajectory over reactor volume, coolant at 300 K
    let volume = arange_grid(0.0, 5.1, 0.1);
    let mut reactor_i = IsomReactorTask::new(ReactorParameters::with_coolant_temp(300.0));
    reactor_i.set_problem_name("Reactor I");
    reactor_i.set_grid(volume);
    reactor_i.set_initial_state(0.0, 305.0);
    reactor_i.solve()?;

    // Reactor II: trajectory over reactor length, coolant at 315 K
    let length = linspace_grid(0.0, 1.5923, 10);
    let mut reactor_ii = IsomReactorTask::new(ReactorParameters::with_coolant_temp(315.0));
    reactor_ii.set_problem_name("Reactor II");
    reactor_ii.set_grid(length);
    reactor_ii.set_initial_state(0.0, 305.0);
    reactor_ii.solve()?;

    let sol_volume = reactor_i
        .get_solution()
        .ok_or_else(|| ReactorError::MissingData("Reactor I solution".to_string()))?;
    let sol_length = reactor_ii
        .get_solution()
        .ok_or_else(|| ReactorError::MissingData("Reactor II solution".to_string()))?;

    plot_simulation_results(sol_volume, sol_length, PLOT_FILE)?;
    if let Err(e) = show_image(PLOT_FILE) {
        warn!("could not open '{}' in an image viewer: {}", PLOT_FILE, e);
    }

    println!(
        "Maximum temperature achieved in Reactor I: {:.2} K",
        sol_volume.max_temperature()
    );
    println!(
        "Maximum conversion achieved in Reactor I: {:.3} mol/L",
        sol_volume.max_concentration()
    );
    println!(
        "Maximum temperature achieved in Reactor II: {:.3} K",
        sol_length.max_temperature()
    );
    println!(
        "Maximum conversion achieved in Reactor II: {:.3} mol/L",
        sol_length.max_concentration()
    );

    Ok(())
}
