use solar_core::{ErrorInfo, SolarError};
use solar_linalg::{LinearSpace, Matrix, NumericContainer};

use crate::tableau::ButcherTableau;

/// One element of the solution sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    /// Position in the sequence; `0` is the initial state.
    pub index: usize,
    /// Time of this state, `t0 + index * h`.
    pub time: f64,
    /// The state itself.
    pub state: S,
}

/// Explicit Runge-Kutta integrator over `[t0, tn]` split into `steps`
/// equal intervals.
///
/// The derivative function is supplied to [`RungeKutta::run`], which
/// validates the tableau and returns a lazy [`Steps`] iterator. `P` holds
/// extra arguments forwarded untouched to every derivative evaluation.
#[derive(Debug, Clone)]
pub struct RungeKutta<M, S, P = ()> {
    method: M,
    y0: S,
    t0: f64,
    h: f64,
    steps: usize,
    params: P,
}

impl<M, S> RungeKutta<M, S, ()>
where
    M: ButcherTableau,
    S: LinearSpace<f64>,
{
    /// Validates the time domain and derives the step size `(tn - t0) / steps`.
    ///
    /// `tn < t0` integrates backwards.
    pub fn new(method: M, y0: S, t0: f64, tn: f64, steps: usize) -> Result<Self, SolarError> {
        if !t0.is_finite() || !tn.is_finite() {
            return Err(SolarError::Domain(
                ErrorInfo::new("non-finite-domain", "integration bounds must be finite")
                    .with_context("t0", t0)
                    .with_context("tn", tn),
            ));
        }
        if t0 == tn {
            return Err(SolarError::Domain(
                ErrorInfo::new("zero-length-domain", "start and end time must differ")
                    .with_context("t0", t0),
            ));
        }
        if steps == 0 {
            return Err(SolarError::domain(
                "zero-steps",
                "the number of steps must be strictly positive",
            ));
        }
        Ok(Self {
            method,
            y0,
            t0,
            h: (tn - t0) / steps as f64,
            steps,
            params: (),
        })
    }
}

impl<M, S, P> RungeKutta<M, S, P>
where
    M: ButcherTableau,
    S: LinearSpace<f64>,
{
    /// Replaces the extra arguments passed to the derivative function.
    pub fn with_params<Q>(self, params: Q) -> RungeKutta<M, S, Q> {
        RungeKutta {
            method: self.method,
            y0: self.y0,
            t0: self.t0,
            h: self.h,
            steps: self.steps,
            params,
        }
    }

    /// The tableau in use.
    pub fn method(&self) -> &M {
        &self.method
    }

    /// Step size `h`.
    pub fn step_size(&self) -> f64 {
        self.h
    }

    /// Number of advancing steps; the sequence holds one more state.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Validates the tableau and starts the integration.
    ///
    /// Nothing is evaluated until the returned iterator is advanced.
    pub fn run<F>(self, func: F) -> Result<Steps<M, S, F, P>, SolarError>
    where
        F: FnMut(f64, &S, &P) -> Result<S, SolarError>,
    {
        let a = self.method.validate()?;
        Ok(Steps {
            a,
            method: self.method,
            func,
            params: self.params,
            y: self.y0,
            t0: self.t0,
            h: self.h,
            steps: self.steps,
            next: 0,
            finished: false,
        })
    }
}

/// Lazy, finite sequence of integration states.
///
/// Yields the initial state first and then exactly `steps` advanced
/// states. After an error the iterator is exhausted.
pub struct Steps<M, S, F, P> {
    a: Matrix<f64>,
    method: M,
    func: F,
    params: P,
    y: S,
    t0: f64,
    h: f64,
    steps: usize,
    next: usize,
    finished: bool,
}

impl<M, S, F, P> Steps<M, S, F, P>
where
    M: ButcherTableau,
    S: LinearSpace<f64>,
    F: FnMut(f64, &S, &P) -> Result<S, SolarError>,
{
    /// The most recently emitted state.
    pub fn current(&self) -> &S {
        &self.y
    }

    /// Extra arguments forwarded to the derivative function.
    pub fn params(&self) -> &P {
        &self.params
    }

    fn advance(&mut self) -> Result<(), SolarError> {
        let h = self.h;
        let t = self.t0 + h * (self.next - 1) as f64;
        let stages = self.method.stages();
        let mut k: Vec<S> = Vec::with_capacity(stages);
        for i in 0..stages {
            let mut stage = self.y.clone();
            for (j, kj) in k.iter().enumerate() {
                let aij = self.a.get(i, j)?;
                if aij != 0.0 {
                    stage = stage.try_add(&kj.scaled(aij))?;
                }
            }
            let ci = self.method.c()[i];
            let derivative = (self.func)(t + ci * h, &stage, &self.params)?;
            if derivative.dim() != self.y.dim() {
                return Err(SolarError::Shape(
                    ErrorInfo::new(
                        "derivative-dimension-mismatch",
                        "the derivative must match the state dimension",
                    )
                    .with_context("expected", self.y.dim())
                    .with_context("found", derivative.dim())
                    .with_context("stage", i),
                ));
            }
            k.push(derivative.scaled(h));
        }
        let mut increment = S::zeros(self.y.dim());
        for (bi, ki) in self.method.b().iter().zip(&k) {
            increment = increment.try_add(&ki.scaled(*bi))?;
        }
        self.y = self.y.try_add(&increment)?;
        Ok(())
    }
}

impl<M, S, F, P> Iterator for Steps<M, S, F, P>
where
    M: ButcherTableau,
    S: LinearSpace<f64>,
    F: FnMut(f64, &S, &P) -> Result<S, SolarError>,
{
    type Item = Result<Step<S>, SolarError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.next > self.steps {
            self.finished = true;
            return None;
        }
        if self.next > 0 {
            if let Err(err) = self.advance() {
                self.finished = true;
                return Some(Err(err));
            }
        }
        let step = Step {
            index: self.next,
            time: self.t0 + self.h * self.next as f64,
            state: self.y.clone(),
        };
        self.next += 1;
        Some(Ok(step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.steps + 1 - self.next;
        (0, Some(remaining))
    }
}
