//! # Isomerization Reactor IVP Module
//!
//! Core structures for the butane isomerization plug-flow reactor model.
//!
//! ## Main Structures
//!
//! - **`ReactorParameters`**: fixed-shape record of the physical constants plus the
//!   per-scenario coolant temperature
//! - **`IsomReactorTask`**: reactor modeling structure owning the scenario parameters,
//!   the requested sample grid, the initial state and the solver settings
//! - **`Trajectory`**: sampled solution (mesh + solution matrix)
//!
//! ## Workflow
//!
//! `new()` → `set_grid()`/`set_initial_state()`/`set_tolerances()` → `check_task()` →
//! `solve()` → `get_solution()`/`max_temperature()`/`max_conversion()`
//!
//! `check_task` rejects malformed sample grids before the solver is ever constructed,
//! and a rate-law failure during stepping aborts the run with a distinct error instead
//! of returning a partial trajectory.

use crate::ReactorsIVP::kinetics::reactor_rhs;
use crate::ReactorsIVP::reactor_IVP_utils::validate_grid;

use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use ode_solvers::dopri5::Dopri5;

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Two-component state of the reactor model: `[0]` = conversion/concentration C [mol/L],
/// `[1]` = temperature T [K].
pub type StateVector = ode_solvers::Vector2<f64>;

/// Default relative tolerance of the adaptive stepper
pub const RTOL_DEFAULT: f64 = 1e-6;
/// Default absolute tolerance of the adaptive stepper
pub const ATOL_DEFAULT: f64 = 1e-8;

#[derive(Debug, Error)]
pub enum ReactorError {
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Malformed sample grid: {0}")]
    MalformedGrid(String),
    #[error("rate law produced a non-finite value at C = {concentration}, T = {temperature}")]
    RateEvaluation { concentration: f64, temperature: f64 },
    #[error("Integration failure: {0}")]
    IntegrationFailure(String),
    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

/// Physical constants of the butane isomerization reactor.
///
/// One record is built per scenario (base constants + that scenario's coolant
/// temperature) and stays immutable for the whole integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactorParameters {
    /// Volumetric feed flow rate (L/s)
    pub v0: f64,
    /// Feed concentration (mol/L)
    pub C0: f64,
    /// Reaction enthalpy (J/mol), negative: the isomerization is exothermic
    pub dH: f64,
    /// Specific heat of the reacting stream (J/(kg·K))
    pub Cp: f64,
    /// Wall heat-transfer coefficient (W/(m²·K))
    pub U: f64,
    /// Coolant temperature (K), constant within a scenario
    pub Tc: f64,
}

impl ReactorParameters {
    /// Base reactor constants with the given scenario coolant temperature.
    pub fn with_coolant_temp(coolant_temp: f64) -> Self {
        Self {
            v0: 16.3,
            C0: 1.86,
            dH: -34500.0,
            Cp: 159.0,
            U: 5000.0,
            Tc: coolant_temp,
        }
    }

    /// Validate the parameter record
    ///
    /// Checks:
    /// - v0, C0, Cp, U, Tc are finite and strictly positive
    /// - dH is finite and strictly negative (exothermic reaction)
    pub fn validate(&self) -> Result<(), ReactorError> {
        if !self.v0.is_finite() || self.v0 <= 0.0 {
            return Err(ReactorError::MissingData("v0 must be positive".to_string()));
        }
        if !self.C0.is_finite() || self.C0 <= 0.0 {
            return Err(ReactorError::MissingData("C0 must be positive".to_string()));
        }
        if !self.Cp.is_finite() || self.Cp <= 0.0 {
            return Err(ReactorError::MissingData("Cp must be positive".to_string()));
        }
        if !self.U.is_finite() || self.U <= 0.0 {
            return Err(ReactorError::MissingData("U must be positive".to_string()));
        }
        if !self.Tc.is_finite() || self.Tc <= 0.0 {
            return Err(ReactorError::MissingData("Tc must be positive".to_string()));
        }
        if !self.dH.is_finite() || self.dH >= 0.0 {
            return Err(ReactorError::MissingData(
                "dH must be negative (exothermic reaction)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sampled solution of one integration run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Sample points of the independent variable, exactly the requested grid
    pub x_mesh: DVector<f64>,
    /// Solution matrix (sample points × [C, T])
    pub solution: DMatrix<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.x_mesh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_mesh.len() == 0
    }

    /// Conversion/concentration samples (first solution column)
    pub fn concentrations(&self) -> DVector<f64> {
        self.solution.column(0).clone_owned()
    }

    /// Temperature samples (second solution column)
    pub fn temperatures(&self) -> DVector<f64> {
        self.solution.column(1).clone_owned()
    }

    pub fn max_concentration(&self) -> f64 {
        self.solution
            .column(0)
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn max_temperature(&self) -> f64 {
        self.solution
            .column(1)
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// RHS adapter handed to the Dormand-Prince stepper.
///
/// Parameters travel as an explicit context value. The stepper callback cannot return
/// a Result, so a rate-law failure is parked in `failure` and `solout` aborts the
/// segment on the next control point; the caller turns the parked error into the
/// run's result.
struct IsomReactorSystem {
    params: ReactorParameters,
    failure: Rc<RefCell<Option<ReactorError>>>,
}

impl ode_solvers::System<StateVector> for IsomReactorSystem {
    fn system(&self, _x: f64, y: &StateVector, dy: &mut StateVector) {
        match reactor_rhs(&self.params, y[0], y[1]) {
            Ok((d_conc, d_temp)) => {
                dy[0] = d_conc;
                dy[1] = d_temp;
            }
            Err(err) => {
                let mut failure = self.failure.borrow_mut();
                if failure.is_none() {
                    *failure = Some(err);
                }
                dy[0] = 0.0;
                dy[1] = 0.0;
            }
        }
    }

    fn solout(&mut self, _x: f64, _y: &StateVector, _dy: &StateVector) -> bool {
        self.failure.borrow().is_some()
    }
}

/// Reactor IVP task: scenario parameters, sample grid, initial state, solver settings
/// and (after `solve`) the sampled trajectory.
#[derive(Debug, Clone)]
pub struct IsomReactorTask {
    /// Optional problem identifier
    pub problem_name: Option<String>,
    /// Optional problem description
    pub problem_description: Option<String>,
    /// Scenario parameter record
    pub params: ReactorParameters,
    /// Requested sample points of the independent variable (volume or length)
    pub x_mesh: Vec<f64>,
    /// Initial state (C, T) at the first sample point
    pub initial_state: (f64, f64),
    /// Relative tolerance of the adaptive stepper
    pub rtol: f64,
    /// Absolute tolerance of the adaptive stepper
    pub atol: f64,
    /// Sampled solution - filled by `solve`
    pub solution: Option<Trajectory>,
}

impl IsomReactorTask {
    /// Create a new task for one scenario with default initial state [C, T] = [0, 305]
    /// and default tolerances.
    pub fn new(params: ReactorParameters) -> Self {
        Self {
            problem_name: None,
            problem_description: None,
            params,
            x_mesh: Vec::new(),
            initial_state: (0.0, 305.0),
            rtol: RTOL_DEFAULT,
            atol: ATOL_DEFAULT,
            solution: None,
        }
    }

    /////////////////////////////////SETTERS////////////////////////////////////////////////

    /// Set problem name for identification
    pub fn set_problem_name(&mut self, name: &str) {
        self.problem_name = Some(name.to_string());
    }

    /// Set problem description
    pub fn set_problem_description(&mut self, description: &str) {
        self.problem_description = Some(description.to_string());
    }

    /// Set the requested sample points (volume or length)
    pub fn set_grid(&mut self, grid: Vec<f64>) {
        self.x_mesh = grid;
    }

    /// Set the initial state at the first sample point
    pub fn set_initial_state(&mut self, concentration: f64, temperature: f64) {
        self.initial_state = (concentration, temperature);
    }

    /// Set adaptive stepper tolerances
    pub fn set_tolerances(&mut self, rtol: f64, atol: f64) {
        self.rtol = rtol;
        self.atol = atol;
    }

    /////////////////////////////////VALIDATION//////////////////////////////////////////////

    /// Validate the task configuration
    ///
    /// Checks:
    /// - Parameter record is physically sensible
    /// - Sample grid has at least two finite, strictly increasing points
    /// - Initial state is finite with positive temperature
    /// - Tolerances are positive
    pub fn check_task(&self) -> Result<(), ReactorError> {
        self.params.validate()?;
        validate_grid(&self.x_mesh)?;

        let (c0, t0) = self.initial_state;
        if !c0.is_finite() || !t0.is_finite() {
            return Err(ReactorError::InvalidConfiguration(
                "initial state must be finite".to_string(),
            ));
        }
        if t0 <= 0.0 {
            return Err(ReactorError::InvalidConfiguration(
                "initial temperature must be positive".to_string(),
            ));
        }
        if !self.rtol.is_finite() || self.rtol <= 0.0 || !self.atol.is_finite() || self.atol <= 0.0
        {
            return Err(ReactorError::InvalidConfiguration(
                "solver tolerances must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /////////////////////////////////SOLVING/////////////////////////////////////////////////

    /// Integrate the reactor equations over the requested sample grid.
    ///
    /// The Dormand-Prince 4(5) stepper is advanced segment by segment between
    /// consecutive sample points, so the trajectory is reported at exactly the
    /// requested abscissas. A rate-law failure or a stepper failure aborts the whole
    /// run; `solution` is only filled on full success.
    pub fn solve(&mut self) -> Result<(), ReactorError> {
        self.check_task()?;
        info!(
            "task checked: {} sample points on [{}, {}]",
            self.x_mesh.len(),
            self.x_mesh[0],
            self.x_mesh[self.x_mesh.len() - 1]
        );

        let n = self.x_mesh.len();
        let mut state = StateVector::new(self.initial_state.0, self.initial_state.1);
        let mut rows: Vec<f64> = Vec::with_capacity(2 * n);
        rows.push(state[0]);
        rows.push(state[1]);

        for segment in self.x_mesh.windows(2) {
            let (x_start, x_end) = (segment[0], segment[1]);
            let failure = Rc::new(RefCell::new(None));
            let system = IsomReactorSystem {
                params: self.params.clone(),
                failure: Rc::clone(&failure),
            };
            // the dense-output point must stay strictly inside the segment, otherwise a
            // one-ulp round-up of x_start + dx past x_end would drop the endpoint sample
            let dx = (x_end - x_start) * (1.0 - 1e-12);
            let mut stepper = Dopri5::new(
                system,
                x_start,
                x_end,
                dx,
                state,
                self.rtol,
                self.atol,
            );
            let integration = stepper.integrate();

            if let Some(err) = failure.borrow_mut().take() {
                return Err(err);
            }
            integration.map_err(|e| {
                ReactorError::IntegrationFailure(format!(
                    "{} on segment [{}, {}]",
                    e, x_start, x_end
                ))
            })?;

            let x_last = stepper.x_out().last().copied().unwrap_or(x_start);
            if (x_last - x_end).abs() > 1e-6 * (x_end - x_start) {
                return Err(ReactorError::IntegrationFailure(format!(
                    "stepper stopped at x = {} before the end of segment [{}, {}]",
                    x_last, x_start, x_end
                )));
            }
            let segment_out = stepper.y_out();
            state = segment_out[segment_out.len() - 1];
            debug!(
                "segment [{}, {}] integrated: C = {:.6}, T = {:.6}",
                x_start, x_end, state[0], state[1]
            );
            rows.push(state[0]);
            rows.push(state[1]);
        }

        self.solution = Some(Trajectory {
            x_mesh: DVector::from_vec(self.x_mesh.clone()),
            solution: DMatrix::from_row_slice(n, 2, &rows),
        });
        info!("integration finished: {} sample points", n);
        Ok(())
    }

    /////////////////////////////////RESULTS/////////////////////////////////////////////////

    /// Get reference to the sampled trajectory
    ///
    /// Returns None if solve hasn't been called yet
    pub fn get_solution(&self) -> Option<&Trajectory> {
        self.solution.as_ref()
    }

    /// Maximum temperature over the sampled trajectory
    pub fn max_temperature(&self) -> Option<f64> {
        self.solution.as_ref().map(|traj| traj.max_temperature())
    }

    /// Maximum conversion over the sampled trajectory
    pub fn max_conversion(&self) -> Option<f64> {
        self.solution.as_ref().map(|traj| traj.max_concentration())
    }
}
