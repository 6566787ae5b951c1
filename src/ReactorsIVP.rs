//! # Reactor Initial Value Problem (IVP) Module
//!
//! This module models a cooled plug-flow reactor performing butane isomerization as an
//! initial value problem: the reactant concentration and the reacting-stream temperature
//! are integrated simultaneously along the reactor coordinate (volume or length).
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `x` | Reactor coordinate (volume or length) | m³ or m |
//! | `C` | Conversion/concentration state | mol/L |
//! | `T` | Reacting-stream temperature | K |
//! | `v0` | Volumetric feed flow rate | L/s |
//! | `C0` | Feed concentration | mol/L |
//! | `dH` | Reaction enthalpy | J/mol |
//! | `Cp` | Specific heat | J/(kg·K) |
//! | `U` | Heat-transfer coefficient | W/(m²·K) |
//! | `Tc` | Coolant temperature | K |
//!
//! ### Model Assumptions
//!
//! - Flow rate, feed concentration, enthalpy, specific heat and heat-transfer coefficient
//!   are constants over the whole reactor
//! - The coolant temperature is held constant per scenario (a fresh parameter record is
//!   built for each scenario, never mutated between runs)
//! - A single reversible first-order isomerization with an Arrhenius rate constant and a
//!   van't Hoff equilibrium constant
//!
//! ### Governing Equations
//!
//! ```text
//! k(T)    = 31.1 * exp(7906*(T - 360)/(360*T))
//! K_eq(T) = exp(-830.3*(T - 333)/(333*T))
//! rate    = -k * C0 * (1 - (1 + 1/K_eq)*C)
//!
//! dC/dx = -rate / v0
//! dT/dx = (rate*dH - U*(T - Tc)) / (v0*Cp)
//! ```
//!
//! ## Numerical Solution
//!
//! The system is advanced with the adaptive embedded Dormand-Prince 4(5) pair
//! (`Dopri5` from the [ode_solvers](https://crates.io/crates/ode_solvers) package),
//! segment by segment between the requested sample points, so the reported mesh is
//! exactly the requested grid regardless of the internal adaptive step sequence.

pub mod IsomReactorIVP;
pub mod IsomReactorIVP2;
pub mod kinetics;
pub mod reactor_IVP_utils;
