use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solar_core::{ErrorInfo, SolarError};

use crate::tableau::ButcherTableau;

/// Forward Euler, first order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplicitEuler;

/// Heun's method, second order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heun;

/// The classic four-stage, fourth-order method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Erk4;

/// Kutta's 3/8 rule, fourth order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeEighths;

impl ButcherTableau for ExplicitEuler {
    fn name(&self) -> &'static str {
        "euler"
    }

    fn a(&self) -> &[&[f64]] {
        const A: &[&[f64]] = &[&[0.0]];
        A
    }

    fn b(&self) -> &[f64] {
        &[1.0]
    }

    fn c(&self) -> &[f64] {
        &[0.0]
    }
}

impl ButcherTableau for Heun {
    fn name(&self) -> &'static str {
        "heun"
    }

    fn a(&self) -> &[&[f64]] {
        const A: &[&[f64]] = &[&[0.0, 0.0], &[1.0, 0.0]];
        A
    }

    fn b(&self) -> &[f64] {
        &[0.5, 0.5]
    }

    fn c(&self) -> &[f64] {
        &[0.0, 1.0]
    }
}

impl ButcherTableau for Erk4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn a(&self) -> &[&[f64]] {
        const A: &[&[f64]] = &[
            &[0.0, 0.0, 0.0, 0.0],
            &[0.5, 0.0, 0.0, 0.0],
            &[0.0, 0.5, 0.0, 0.0],
            &[0.0, 0.0, 1.0, 0.0],
        ];
        A
    }

    fn b(&self) -> &[f64] {
        &[1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0]
    }

    fn c(&self) -> &[f64] {
        &[0.0, 0.5, 0.5, 1.0]
    }
}

impl ButcherTableau for ThreeEighths {
    fn name(&self) -> &'static str {
        "three_eighths"
    }

    fn a(&self) -> &[&[f64]] {
        const A: &[&[f64]] = &[
            &[0.0, 0.0, 0.0, 0.0],
            &[1.0 / 3.0, 0.0, 0.0, 0.0],
            &[-1.0 / 3.0, 1.0, 0.0, 0.0],
            &[1.0, -1.0, 1.0, 0.0],
        ];
        A
    }

    fn b(&self) -> &[f64] {
        &[1.0 / 8.0, 3.0 / 8.0, 3.0 / 8.0, 1.0 / 8.0]
    }

    fn c(&self) -> &[f64] {
        &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]
    }
}

/// Runtime selector over the built-in tableaux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// [`ExplicitEuler`].
    Euler,
    /// [`Heun`].
    Heun,
    /// [`Erk4`].
    #[default]
    Rk4,
    /// [`ThreeEighths`].
    ThreeEighths,
}

impl Method {
    /// All selectable methods.
    pub const ALL: [Method; 4] = [
        Method::Euler,
        Method::Heun,
        Method::Rk4,
        Method::ThreeEighths,
    ];

    /// The tableau backing this method.
    pub fn tableau(&self) -> &'static dyn ButcherTableau {
        match self {
            Method::Euler => &ExplicitEuler,
            Method::Heun => &Heun,
            Method::Rk4 => &Erk4,
            Method::ThreeEighths => &ThreeEighths,
        }
    }
}

impl ButcherTableau for Method {
    fn name(&self) -> &'static str {
        self.tableau().name()
    }

    fn a(&self) -> &[&[f64]] {
        self.tableau().a()
    }

    fn b(&self) -> &[f64] {
        self.tableau().b()
    }

    fn c(&self) -> &[f64] {
        self.tableau().c()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                SolarError::Config(
                    ErrorInfo::new("unknown-method", "no integration method with this name")
                        .with_context("method", s)
                        .with_hint("expected one of: euler, heun, rk4, three_eighths"),
                )
            })
    }
}
