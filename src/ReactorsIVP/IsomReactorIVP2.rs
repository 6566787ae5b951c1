//! # Pretty Printing Module for Reactor IVP Tasks
//!
//! Formatted output methods for displaying reactor task data: scenario parameters,
//! sample grid, solver settings and solution maxima.
//! All output is formatted using prettytable for clear tabular presentation.

use super::IsomReactorIVP::IsomReactorTask;

impl IsomReactorTask {
    /// Displays a summary of the reactor task: scenario parameters with units,
    /// sample grid span and solver tolerances.
    pub fn pretty_print_task(&self) {
        use prettytable::{Table, row};

        println!("\n=== REACTOR TASK SUMMARY ===");

        println!("Problem Name: {:?}", self.problem_name);
        println!("Problem Description: {:?}", self.problem_description);

        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value", "Units"]);
        table.add_row(row!["Flow Rate (v0)", format!("{:.2}", self.params.v0), "L/s"]);
        table.add_row(row![
            "Feed Concentration (C0)",
            format!("{:.3}", self.params.C0),
            "mol/L"
        ]);
        table.add_row(row![
            "Reaction Enthalpy (dH)",
            format!("{:.2e}", self.params.dH),
            "J/mol"
        ]);
        table.add_row(row![
            "Specific Heat (Cp)",
            format!("{:.2}", self.params.Cp),
            "J/(kg·K)"
        ]);
        table.add_row(row![
            "Heat Transfer Coeff (U)",
            format!("{:.2e}", self.params.U),
            "W/(m²·K)"
        ]);
        table.add_row(row![
            "Coolant Temperature (Tc)",
            format!("{:.2}", self.params.Tc),
            "K"
        ]);

        println!("\nScenario Parameters:");
        table.printstd();

        println!("\nInitial State:");
        println!("  C: {:.6} mol/L", self.initial_state.0);
        println!("  T: {:.3} K", self.initial_state.1);

        if let (Some(first), Some(last)) = (self.x_mesh.first(), self.x_mesh.last()) {
            println!(
                "\nSample Grid: {} points on [{}, {}]",
                self.x_mesh.len(),
                first,
                last
            );
        } else {
            println!("\nSample Grid: not set");
        }
        println!("Tolerances: rtol = {:.1e}, atol = {:.1e}", self.rtol, self.atol);

        println!("\n=== END TASK SUMMARY ===\n");
    }

    /// Displays the solution maxima and endpoint state in tabular format.
    ///
    /// Prints a reminder to call `solve` if no solution is present yet.
    pub fn pretty_print_results(&self) {
        use prettytable::{Table, row};

        let Some(trajectory) = self.get_solution() else {
            println!("No solution yet. Call solve() first.");
            return;
        };

        println!("____________________RESULTS_________________________");
        let n = trajectory.len();
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Value", "Units"]);
        table.add_row(row!["Sample points", n, "-"]);
        table.add_row(row![
            "Max conversion",
            format!("{:.6}", trajectory.max_concentration()),
            "mol/L"
        ]);
        table.add_row(row![
            "Max temperature",
            format!("{:.3}", trajectory.max_temperature()),
            "K"
        ]);
        table.add_row(row![
            "Outlet conversion",
            format!("{:.6}", trajectory.solution[(n - 1, 0)]),
            "mol/L"
        ]);
        table.add_row(row![
            "Outlet temperature",
            format!("{:.3}", trajectory.solution[(n - 1, 1)]),
            "K"
        ]);
        table.printstd();
    }
}
