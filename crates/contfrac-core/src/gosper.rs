//! Gosper's bihomographic engine.
//!
//! The engine holds the eight coefficients of
//!
//! ```text
//!       a·xy + b·x + c·y + d
//! z = ------------------------
//!       e·xy + f·x + g·y + h
//! ```
//!
//! where `x` and `y` are the not-yet-consumed tails of the two input
//! streams. Absorbing an input term substitutes `x → p + 1/x'` (or the same
//! for `y`); emitting an output term substitutes `z → k + 1/z'`. Both are
//! exact, so the engine never rounds.
//!
//! A term is emitted only when every corner ratio still reachable by the
//! live inputs has the same integer quotient.
//!
//! By default the engine reads `x` until it ends and only then reads `y`
//! ([`PullOrder::LeftFirst`]). That order never emits a term when `x` is
//! infinite and the form is linear in `y`; [`PullOrder::Alternating`]
//! handles two infinite inputs at the cost of different (still exact)
//! expansions for some finite ones.

use std::fmt;
use std::mem;

use contfrac_matter::Matter;
use tracing::{debug, trace};

use crate::probe::{entropy, Probe, Transition};
use crate::{Error, Mass, Result, Stream};

/// The eight coefficients of a bihomographic form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GosperState<M> {
    /// Numerator `xy` coefficient.
    pub a: M,
    /// Numerator `x` coefficient.
    pub b: M,
    /// Numerator `y` coefficient.
    pub c: M,
    /// Numerator constant.
    pub d: M,
    /// Denominator `xy` coefficient.
    pub e: M,
    /// Denominator `x` coefficient.
    pub f: M,
    /// Denominator `y` coefficient.
    pub g: M,
    /// Denominator constant.
    pub h: M,
}

impl<M: Matter> GosperState<M> {
    /// Builds a state from numerator `[a, b, c, d]` and denominator
    /// `[e, f, g, h]`.
    #[must_use]
    pub fn new(numerator: [M; 4], denominator: [M; 4]) -> Self {
        let [a, b, c, d] = numerator;
        let [e, f, g, h] = denominator;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    /// Absorbs the term `p` of the left input: `x → p + 1/x`.
    pub fn ingest_x(&mut self, p: &M) {
        let a = self.a.clone() * p.clone() + self.c.clone();
        let b = self.b.clone() * p.clone() + self.d.clone();
        self.c = mem::replace(&mut self.a, a);
        self.d = mem::replace(&mut self.b, b);

        let e = self.e.clone() * p.clone() + self.g.clone();
        let f = self.f.clone() * p.clone() + self.h.clone();
        self.g = mem::replace(&mut self.e, e);
        self.h = mem::replace(&mut self.f, f);
    }

    /// Absorbs the term `q` of the right input: `y → q + 1/y`.
    pub fn ingest_y(&mut self, q: &M) {
        let a = self.a.clone() * q.clone() + self.b.clone();
        let c = self.c.clone() * q.clone() + self.d.clone();
        self.b = mem::replace(&mut self.a, a);
        self.d = mem::replace(&mut self.c, c);

        let e = self.e.clone() * q.clone() + self.f.clone();
        let g = self.g.clone() * q.clone() + self.h.clone();
        self.f = mem::replace(&mut self.e, e);
        self.h = mem::replace(&mut self.g, g);
    }

    /// Removes the output term `k`: `z → 1/(z − k)`.
    pub fn emit(&mut self, k: &M) {
        let e = self.a.clone() - self.e.clone() * k.clone();
        let f = self.b.clone() - self.f.clone() * k.clone();
        let g = self.c.clone() - self.g.clone() * k.clone();
        let h = self.d.clone() - self.h.clone() * k.clone();
        self.a = mem::replace(&mut self.e, e);
        self.b = mem::replace(&mut self.f, f);
        self.c = mem::replace(&mut self.g, g);
        self.d = mem::replace(&mut self.h, h);
    }

    /// Sum of the masses of all eight coefficients.
    #[must_use]
    pub fn mass(&self) -> Mass {
        [
            &self.a, &self.b, &self.c, &self.d, &self.e, &self.f, &self.g, &self.h,
        ]
        .into_iter()
        .fold(Mass::ZERO, |acc, m| acc + m.mass())
    }

    /// Natural logarithm of [`GosperState::mass`].
    #[must_use]
    pub fn entropy(&self) -> f64 {
        entropy(&self.mass())
    }

    /// The integer part every reachable corner agrees on, if any.
    fn consensus(&self, x_live: bool, y_live: bool) -> Result<Option<M>> {
        let mut ratios = vec![(self.a.clone(), self.e.clone())];
        if x_live && y_live {
            ratios.push((
                self.a.clone() + self.b.clone() + self.c.clone() + self.d.clone(),
                self.e.clone() + self.f.clone() + self.g.clone() + self.h.clone(),
            ));
        }
        if y_live {
            ratios.push((
                self.a.clone() + self.b.clone(),
                self.e.clone() + self.f.clone(),
            ));
        }
        if x_live {
            ratios.push((
                self.a.clone() + self.c.clone(),
                self.e.clone() + self.g.clone(),
            ));
        }

        if ratios.iter().any(|(_, den)| den.is_vacuum()) {
            return Ok(None);
        }

        let mut agreed: Option<M> = None;
        for (num, den) in &ratios {
            let (quotient, _) = num.div_rem(den)?;
            match &agreed {
                Some(first) if *first != quotient => return Ok(None),
                Some(_) => {}
                None => agreed = Some(quotient),
            }
        }

        Ok(agreed)
    }
}

impl<M: Matter + fmt::Display> fmt::Display for GosperState<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {} / {} {} {} {}]",
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h
        )
    }
}

/// The four arithmetic operators as initial engine states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `x + y`
    Add,
    /// `x − y`
    Sub,
    /// `x · y`
    Mul,
    /// `x / y`
    Div,
}

impl Operation {
    /// The seed coefficients realizing this operation.
    #[must_use]
    pub fn state<M: Matter>(self) -> GosperState<M> {
        let o = M::vacuum;
        let i = M::unit;
        match self {
            Self::Add => GosperState::new([o(), i(), i(), o()], [o(), o(), o(), i()]),
            Self::Sub => GosperState::new([o(), i(), i().negate(), o()], [o(), o(), o(), i()]),
            Self::Mul => GosperState::new([i(), o(), o(), o()], [o(), o(), o(), i()]),
            Self::Div => GosperState::new([o(), i(), o(), o()], [o(), o(), i(), o()]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Draining,
    Halted,
}

/// Which input the engine reads when no term can be emitted yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PullOrder {
    /// Read `x` until it is exhausted, then `y`.
    #[default]
    LeftFirst,
    /// Take turns while both inputs are live, starting with `x`.
    Alternating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    X,
    Y,
}

/// A lazy producer of the terms of `state(x, y)`.
pub struct GosperEngine<M> {
    x: Stream<M>,
    y: Stream<M>,
    state: GosperState<M>,
    x_live: bool,
    y_live: bool,
    order: PullOrder,
    next_side: Side,
    phase: Phase,
    probe: Option<Box<dyn Probe<GosperState<M>>>>,
}

impl<M: Matter + 'static> GosperEngine<M> {
    /// Creates an engine over two fresh input streams, reading `x` first.
    #[must_use]
    pub fn new(x: Stream<M>, y: Stream<M>, state: GosperState<M>) -> Self {
        Self::with_order(x, y, state, PullOrder::LeftFirst)
    }

    /// Creates an engine that takes turns between its inputs.
    #[must_use]
    pub fn alternating(x: Stream<M>, y: Stream<M>, state: GosperState<M>) -> Self {
        Self::with_order(x, y, state, PullOrder::Alternating)
    }

    /// Creates an engine with an explicit pull order.
    #[must_use]
    pub fn with_order(
        x: Stream<M>,
        y: Stream<M>,
        state: GosperState<M>,
        order: PullOrder,
    ) -> Self {
        Self {
            x,
            y,
            state,
            x_live: true,
            y_live: true,
            order,
            next_side: Side::X,
            phase: Phase::Running,
            probe: None,
        }
    }

    /// Attaches a probe that observes every transition.
    #[must_use]
    pub fn with_probe<P>(mut self, probe: P) -> Self
    where
        P: Probe<GosperState<M>> + 'static,
    {
        self.probe = Some(Box::new(probe));
        self
    }

    /// The current coefficients.
    #[must_use]
    pub fn state(&self) -> &GosperState<M> {
        &self.state
    }

    fn record(&mut self, transition: Transition) {
        trace!(?transition, mass = %self.state.mass(), "gosper transition");
        if let Some(probe) = self.probe.as_mut() {
            probe.observe(transition, &self.state);
        }
    }

    fn halt(&mut self) {
        self.phase = Phase::Halted;
        debug!(mass = %self.state.mass(), "gosper engine halted");
        self.record(Transition::Halt);
    }

    /// Picks the next live input according to the pull order.
    fn pick_side(&self) -> Option<Side> {
        match (self.x_live, self.y_live) {
            (true, true) => match self.order {
                PullOrder::LeftFirst => Some(Side::X),
                PullOrder::Alternating => Some(self.next_side),
            },
            (true, false) => Some(Side::X),
            (false, true) => Some(Side::Y),
            (false, false) => None,
        }
    }

    /// Pulls one term into the state. Returns `Ok(false)` when both inputs
    /// are exhausted.
    fn pull(&mut self) -> Result<bool> {
        while let Some(side) = self.pick_side() {
            let stream = match side {
                Side::X => &mut self.x,
                Side::Y => &mut self.y,
            };

            match stream.consume() {
                Ok(term) => {
                    let transition = match side {
                        Side::X => {
                            self.state.ingest_x(&term);
                            self.next_side = Side::Y;
                            Transition::IngestX
                        }
                        Side::Y => {
                            self.state.ingest_y(&term);
                            self.next_side = Side::X;
                            Transition::IngestY
                        }
                    };
                    self.record(transition);
                    return Ok(true);
                }
                Err(Error::Exhausted) => match side {
                    Side::X => self.x_live = false,
                    Side::Y => self.y_live = false,
                },
                Err(err) => return Err(err),
            }
        }

        Ok(false)
    }
}

impl<M: Matter + 'static> Iterator for GosperEngine<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.phase == Phase::Halted {
                return None;
            }

            match self.state.consensus(self.x_live, self.y_live) {
                Ok(Some(term)) => {
                    self.state.emit(&term);
                    let transition = if self.phase == Phase::Draining {
                        Transition::Drain
                    } else {
                        Transition::Emit
                    };
                    self.record(transition);
                    return Some(Ok(term));
                }
                Ok(None) if self.phase == Phase::Draining => {
                    self.halt();
                    return None;
                }
                Ok(None) => {}
                Err(err) => {
                    self.halt();
                    return Some(Err(err));
                }
            }

            match self.pull() {
                Ok(true) => {}
                Ok(false) => {
                    trace!("both inputs exhausted, draining");
                    self.phase = Phase::Draining;
                }
                Err(err) => {
                    self.halt();
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<M: fmt::Debug> fmt::Debug for GosperEngine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GosperEngine")
            .field("state", &self.state)
            .field("x_live", &self.x_live)
            .field("y_live", &self.y_live)
            .field("order", &self.order)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
