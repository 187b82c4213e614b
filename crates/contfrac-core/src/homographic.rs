//! The GCF → SCF transducer.
//!
//! A generalized continued fraction `b₀ + a₁/(b₁ + a₂/(b₂ + …))` arrives as
//! `(aₙ, bₙ)` pairs. The transducer keeps the homographic form
//! `(A·t + B)/(C·t + D)` of the part consumed so far and emits a simple
//! continued-fraction term as soon as both ends of the range of `t` agree
//! on the integer part.

use std::fmt;
use std::mem;

use contfrac_matter::Matter;
use tracing::{debug, trace};

use crate::probe::{entropy, Probe, Transition};
use crate::{Mass, Result, Stream};

/// The four coefficients of a homographic form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomographicState<M> {
    /// Numerator `t` coefficient.
    pub a: M,
    /// Numerator constant.
    pub b: M,
    /// Denominator `t` coefficient.
    pub c: M,
    /// Denominator constant.
    pub d: M,
}

impl<M: Matter> HomographicState<M> {
    /// The identity map `t ↦ t`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: M::unit(),
            b: M::vacuum(),
            c: M::vacuum(),
            d: M::unit(),
        }
    }

    /// Absorbs one GCF pair: `t → denominator + numerator/t`.
    pub fn ingest(&mut self, numerator: &M, denominator: &M) {
        let a = self.a.clone() * denominator.clone() + self.b.clone();
        let c = self.c.clone() * denominator.clone() + self.d.clone();
        let b = self.a.clone() * numerator.clone();
        let d = self.c.clone() * numerator.clone();
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
    }

    /// The integer part shared by `A/C` and `B/D`, if both are defined and
    /// agree.
    ///
    /// # Errors
    ///
    /// Propagates a failing division of the underlying domain.
    pub fn digit(&self) -> Result<Option<M>> {
        if self.c.is_vacuum() || self.d.is_vacuum() {
            return Ok(None);
        }

        let (upper, _) = self.a.div_rem(&self.c)?;
        let (lower, _) = self.b.div_rem(&self.d)?;
        Ok((upper == lower).then_some(upper))
    }

    /// Removes the output term `k`: `z → 1/(z − k)`.
    pub fn emit(&mut self, k: &M) {
        let c = self.a.clone() - self.c.clone() * k.clone();
        let d = self.b.clone() - self.d.clone() * k.clone();
        self.a = mem::replace(&mut self.c, c);
        self.b = mem::replace(&mut self.d, d);
    }

    /// Sum of the masses of the four coefficients.
    #[must_use]
    pub fn mass(&self) -> Mass {
        [&self.a, &self.b, &self.c, &self.d]
            .into_iter()
            .fold(Mass::ZERO, |acc, m| acc + m.mass())
    }

    /// Natural logarithm of [`HomographicState::mass`].
    #[must_use]
    pub fn entropy(&self) -> f64 {
        entropy(&self.mass())
    }
}

impl<M: Matter + fmt::Display> fmt::Display for HomographicState<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} / {} {}]", self.a, self.b, self.c, self.d)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Running,
    Draining,
    Halted,
}

/// Lazy simple continued-fraction terms of a GCF source.
pub struct Homographic<M, I> {
    source: I,
    state: HomographicState<M>,
    phase: Phase,
    probe: Option<Box<dyn Probe<HomographicState<M>>>>,
}

impl<M, I> Homographic<M, I>
where
    M: Matter,
    I: Iterator<Item = (M, M)>,
{
    /// Starts transducing `source` from the identity state.
    pub fn new(source: I) -> Self {
        Self {
            source,
            state: HomographicState::identity(),
            phase: Phase::Running,
            probe: None,
        }
    }

    /// Attaches a probe that observes every transition.
    #[must_use]
    pub fn with_probe<P>(mut self, probe: P) -> Self
    where
        P: Probe<HomographicState<M>> + 'static,
    {
        self.probe = Some(Box::new(probe));
        self
    }

    /// The current coefficients.
    #[must_use]
    pub fn state(&self) -> &HomographicState<M> {
        &self.state
    }

    fn record(&mut self, transition: Transition) {
        trace!(?transition, mass = %self.state.mass(), "homographic transition");
        if let Some(probe) = self.probe.as_mut() {
            probe.observe(transition, &self.state);
        }
    }

    fn halt(&mut self) {
        self.phase = Phase::Halted;
        debug!(mass = %self.state.mass(), "homographic transducer halted");
        self.record(Transition::Halt);
    }

    fn drain(&mut self) -> Option<Result<M>> {
        if self.state.c.is_vacuum() {
            self.halt();
            return None;
        }

        match self.state.a.div_rem(&self.state.c) {
            Ok((term, _)) => {
                self.state.emit(&term);
                self.record(Transition::Drain);
                Some(Ok(term))
            }
            Err(err) => {
                self.halt();
                Some(Err(err.into()))
            }
        }
    }
}

impl<M, I> Iterator for Homographic<M, I>
where
    M: Matter,
    I: Iterator<Item = (M, M)>,
{
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Halted => return None,
                Phase::Draining => return self.drain(),
                Phase::Running => {}
            }

            match self.state.digit() {
                Ok(Some(term)) => {
                    self.state.emit(&term);
                    self.record(Transition::Emit);
                    return Some(Ok(term));
                }
                Ok(None) => {}
                Err(err) => {
                    self.halt();
                    return Some(Err(err));
                }
            }

            if let Some((numerator, denominator)) = self.source.next() {
                self.state.ingest(&numerator, &denominator);
                self.record(Transition::Ingest);
            } else {
                trace!("source exhausted, draining");
                self.phase = Phase::Draining;
            }
        }
    }
}

impl<M: fmt::Debug, I> fmt::Debug for Homographic<M, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Homographic")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Transduces a GCF pair source into a stream of simple terms.
pub fn gcf_to_scf<M, I>(source: I) -> Stream<M>
where
    M: Matter + 'static,
    I: IntoIterator<Item = (M, M)>,
    I::IntoIter: 'static,
{
    Stream::new(Homographic::new(source.into_iter()))
}
