//! Exact values as lazy term streams.

use std::ops::{Add, Div, Mul, Sub};

use contfrac_matter::Matter;

use crate::gosper::{GosperEngine, GosperState, Operation, PullOrder};
use crate::probe::Probe;
use crate::{euclid, Result, Stream};

/// A continued fraction `[a₀; a₁, a₂, …]`.
///
/// The value owns its term stream. Arithmetic consumes both operands, so a
/// stream can feed at most one computation.
///
/// The operators read the left operand to its end before the right one. Use
/// [`ContinuedFraction::combine_with`] and [`PullOrder::Alternating`] when
/// the left operand is infinite.
///
/// # Example
///
/// ```
/// use contfrac_core::ContinuedFraction;
/// use contfrac_matter::Integer;
///
/// let half = ContinuedFraction::from_ratio(Integer::new(1), Integer::new(2));
/// let third = ContinuedFraction::from_ratio(Integer::new(1), Integer::new(3));
/// let mut sum = half + third;
///
/// let terms: Vec<i64> = sum
///     .terms(10)
///     .unwrap()
///     .iter()
///     .filter_map(Integer::to_i64)
///     .collect();
/// assert_eq!(terms, vec![0, 1, 5]);
/// ```
#[derive(Debug)]
pub struct ContinuedFraction<M> {
    stream: Stream<M>,
}

impl<M: Matter + 'static> ContinuedFraction<M> {
    /// Wraps an existing term stream.
    #[must_use]
    pub fn from_stream(stream: Stream<M>) -> Self {
        Self { stream }
    }

    /// The expansion of `numerator / denominator`.
    #[must_use]
    pub fn from_ratio(numerator: M, denominator: M) -> Self {
        Self::from_stream(Stream::new(euclid(numerator, denominator)))
    }

    /// A fraction with the given terms.
    pub fn from_terms<T>(terms: T) -> Self
    where
        T: IntoIterator<Item = M>,
        T::IntoIter: 'static,
    {
        Self::from_stream(Stream::from_terms(terms))
    }

    /// Runs the bihomographic form `state` over `x` and `y`.
    #[must_use]
    pub fn combine(x: Self, y: Self, state: GosperState<M>) -> Self {
        Self::from_stream(Stream::new(GosperEngine::new(x.stream, y.stream, state)))
    }

    /// Runs `state` over `x` and `y` with an explicit pull order.
    #[must_use]
    pub fn combine_with(x: Self, y: Self, state: GosperState<M>, order: PullOrder) -> Self {
        Self::from_stream(Stream::new(GosperEngine::with_order(
            x.stream, y.stream, state, order,
        )))
    }

    /// Like [`ContinuedFraction::combine`], reporting every engine
    /// transition to `probe`.
    #[must_use]
    pub fn combine_observed<P>(x: Self, y: Self, state: GosperState<M>, probe: P) -> Self
    where
        P: Probe<GosperState<M>> + 'static,
    {
        let engine = GosperEngine::new(x.stream, y.stream, state).with_probe(probe);
        Self::from_stream(Stream::new(engine))
    }

    /// The next term, without consuming it.
    #[must_use]
    pub fn head(&self) -> Option<&M> {
        self.stream.head()
    }

    /// Takes the next term.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`](crate::Error::Exhausted) once the
    /// expansion has ended, or the error of a failing producer.
    pub fn consume(&mut self) -> Result<M> {
        self.stream.consume()
    }

    /// Takes up to `n` more terms.
    ///
    /// # Errors
    ///
    /// Propagates any producer error.
    pub fn terms(&mut self, n: usize) -> Result<Vec<M>> {
        self.stream.take_terms(n)
    }

    /// Carries every term into another domain.
    #[must_use]
    pub fn map_terms<N>(self) -> ContinuedFraction<N>
    where
        N: Matter + From<M> + 'static,
    {
        ContinuedFraction::from_stream(Stream::new(self.stream.map(|term| term.map(N::from))))
    }

    /// Releases the underlying stream.
    #[must_use]
    pub fn into_stream(self) -> Stream<M> {
        self.stream
    }
}

impl<M: Matter + 'static> From<Stream<M>> for ContinuedFraction<M> {
    fn from(stream: Stream<M>) -> Self {
        Self::from_stream(stream)
    }
}

impl<M: Matter + 'static> Iterator for ContinuedFraction<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<M: Matter + 'static> $trait for ContinuedFraction<M> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self::combine(self, rhs, $op.state())
            }
        }
    };
}

impl_binary_op!(Add, add, Operation::Add);
impl_binary_op!(Sub, sub, Operation::Sub);
impl_binary_op!(Mul, mul, Operation::Mul);
impl_binary_op!(Div, div, Operation::Div);
