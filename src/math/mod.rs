//! Dual-number arithmetic
//!
//! The differentiation rules of every expression node are written in terms
//! of [`dual::Dual`]. Domain validation is the caller's job: the dual rules
//! themselves never fail.

pub mod dual;
