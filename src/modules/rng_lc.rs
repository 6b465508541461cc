use log::debug;

use crate::constants::lcg_params::*;
use crate::error::PrngResult;
use crate::modules::seed_source::SeedSource;
use crate::types::seed::*;
use crate::types::snapshot::Snapshot;

/// Linear congruential generator, `X(n+1) = (a * X(n) + c) mod m`.
///
/// Fast and reproducible, not suitable for anything security related.
/// A single instance is not meant to be shared between threads; give each
/// worker its own generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RngLC {
    state: State,
    multiplier: State,
    increment: State,
    modulus: State,
}

impl RngLC {
    /// The seed is stored as is and only reduced by the first `next`.
    pub fn new(seed: Seed) -> Self {
        debug!("lcg seeded with {:#x}", seed);

        Self {
            state: seed,
            multiplier: MULTIPLIER,
            increment: INCREMENT,
            modulus: MODULUS,
        }
    }

    pub fn from_source<S: SeedSource + ?Sized>(source: &mut S) -> Self {
        return Self::new(source.seed());
    }

    pub fn state(&self) -> State {
        return self.state;
    }

    pub fn next(&mut self) -> State {
        // m divides 2^64, so the wrapped product reduces to the exact value
        let next_state = self
            .multiplier
            .wrapping_mul(self.state)
            .wrapping_add(self.increment);
        self.state = next_state % self.modulus;
        return self.state;
    }

    pub fn set_seed(&mut self, seed: Seed) {
        debug!("lcg reseeded with {:#x}", seed);
        self.state = seed;
    }

    /// Uniform-ish value in `[min, max]`; the bounds may come in either order.
    ///
    /// Plain `next() % span`, so low offsets are slightly favored whenever the
    /// span does not divide the modulus. See [`RngLC::range_unbiased`].
    pub fn range(&mut self, min: Bound, max: Bound) -> Bound {
        let (min, span) = normalize_bounds(min, max);

        if span == 0 {
            return min;
        }

        let offset = self.next() % span as State;
        return offset_from(min, offset);
    }

    /// Rejection-sampling counterpart of [`RngLC::range`].
    ///
    /// Draws falling in the incomplete last block of the modulus are thrown
    /// away, so this may advance the state more than once. Spans wider than
    /// the modulus cannot be covered at all and fall back to the plain mapping.
    pub fn range_unbiased(&mut self, min: Bound, max: Bound) -> Bound {
        let (min, span) = normalize_bounds(min, max);

        if span == 0 {
            return min;
        }

        let span = span as State;
        if self.modulus < span {
            return offset_from(min, self.next() % span);
        }

        let limit = self.modulus - self.modulus % span;
        loop {
            let draw = self.next();
            if draw < limit {
                return offset_from(min, draw % span);
            }
        }
    }

    /// Endless stream of `next` values borrowing the generator.
    pub fn values(&mut self) -> impl Iterator<Item = State> + '_ {
        return std::iter::from_fn(move || Some(self.next()));
    }

    pub fn snapshot(&self) -> Snapshot {
        return Snapshot {
            state: self.state,
            multiplier: self.multiplier,
            increment: self.increment,
            modulus: self.modulus,
        };
    }

    pub fn restore(snapshot: &Snapshot) -> PrngResult<Self> {
        snapshot.check_parameters()?;
        debug!("lcg restored at state {:#x}", snapshot.state);

        return Ok(Self {
            state: snapshot.state,
            multiplier: snapshot.multiplier,
            increment: snapshot.increment,
            modulus: snapshot.modulus,
        });
    }
}

/// Orders the bounds and returns `(min, max - min + 1)`.
pub(crate) fn normalize_bounds(min: Bound, max: Bound) -> (Bound, Span) {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let span = (max as Span) - (min as Span) + 1;
    return (min, span);
}

fn offset_from(min: Bound, offset: State) -> Bound {
    // offset < span, so the sum never leaves [min, max]
    return (min as Span + offset as Span) as Bound;
}
