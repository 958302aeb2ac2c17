//! Candidate order enumeration for the grid search.

use std::fmt;
use std::ops::RangeInclusive;

/// Non-seasonal model orders (p, d, q).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order {
    /// Autoregressive order.
    pub p: usize,
    /// Differencing order.
    pub d: usize,
    /// Moving-average order.
    pub q: usize,
}

impl Order {
    /// Create a new non-seasonal order triple.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.p, self.d, self.q)
    }
}

/// Seasonal model orders (P, D, Q) with the seasonal period.
///
/// A period of 0 or 1 disables seasonality; the seasonal orders are forced to
/// zero in that case so the model carries no inert parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonalOrder {
    /// Seasonal autoregressive order.
    pub p: usize,
    /// Seasonal differencing order.
    pub d: usize,
    /// Seasonal moving-average order.
    pub q: usize,
    /// Observations per seasonal cycle.
    pub period: usize,
}

impl SeasonalOrder {
    /// Create a seasonal order, zeroing the orders when the period disables
    /// seasonality.
    pub fn new(p: usize, d: usize, q: usize, period: usize) -> Self {
        if period > 1 {
            Self { p, d, q, period }
        } else {
            Self::none(period)
        }
    }

    /// The disabled seasonal component for a given period.
    pub fn none(period: usize) -> Self {
        Self {
            p: 0,
            d: 0,
            q: 0,
            period,
        }
    }

    /// Whether any seasonal structure is active.
    pub fn is_active(&self) -> bool {
        self.period > 1 && (self.p > 0 || self.d > 0 || self.q > 0)
    }
}

impl fmt::Display for SeasonalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})[{}]", self.p, self.d, self.q, self.period)
    }
}

/// One grid point: a non-seasonal and a seasonal order pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub order: Order,
    pub seasonal: SeasonalOrder,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SARIMA{}{}", self.order, self.seasonal)
    }
}

/// Value ranges searched for each non-seasonal order dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRanges {
    pub p: RangeInclusive<usize>,
    pub d: RangeInclusive<usize>,
    pub q: RangeInclusive<usize>,
}

impl OrderRanges {
    /// Explicit ranges per dimension.
    pub fn new(
        p: RangeInclusive<usize>,
        d: RangeInclusive<usize>,
        q: RangeInclusive<usize>,
    ) -> Self {
        Self { p, d, q }
    }

    /// Ranges `0..=max` per dimension.
    pub fn up_to(max_p: usize, max_d: usize, max_q: usize) -> Self {
        Self::new(0..=max_p, 0..=max_d, 0..=max_q)
    }

    /// Number of (p, d, q) triplets the ranges span.
    pub fn cardinality(&self) -> usize {
        let span = |r: &RangeInclusive<usize>| {
            if r.is_empty() {
                0
            } else {
                r.end() - r.start() + 1
            }
        };
        span(&self.p) * span(&self.d) * span(&self.q)
    }

    fn triplets(&self) -> Vec<Order> {
        let mut orders = Vec::with_capacity(self.cardinality());
        for p in self.p.clone() {
            for d in self.d.clone() {
                for q in self.q.clone() {
                    orders.push(Order::new(p, d, q));
                }
            }
        }
        orders
    }
}

impl Default for OrderRanges {
    fn default() -> Self {
        Self::up_to(1, 1, 1)
    }
}

/// How seasonal orders are paired with non-seasonal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonalSearch {
    /// The seasonal (P, D, Q) mirrors the non-seasonal (p, d, q) of the same
    /// grid point, giving one candidate per triplet.
    #[default]
    Coupled,
    /// Seasonal and non-seasonal triplets are searched independently, giving
    /// the full cross product of the triplet set with itself.
    CrossProduct,
}

/// The ordered, immutable set of candidates searched by [`GridSearch`].
///
/// Enumeration is a pure function of its inputs: the same ranges, period and
/// search mode always produce the same candidates in the same order. Empty
/// ranges yield an empty space.
///
/// [`GridSearch`]: crate::models::sarima::GridSearch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    candidates: Vec<Candidate>,
}

impl CandidateSpace {
    /// Enumerate the candidate space.
    pub fn enumerate(ranges: &OrderRanges, period: usize, search: SeasonalSearch) -> Self {
        let triplets = ranges.triplets();
        let mut candidates = Vec::new();

        match search {
            _ if period <= 1 => {
                // Seasonality disabled: both modes reduce to the triplet set.
                for order in &triplets {
                    candidates.push(Candidate {
                        order: *order,
                        seasonal: SeasonalOrder::none(period),
                    });
                }
            }
            SeasonalSearch::Coupled => {
                for order in &triplets {
                    candidates.push(Candidate {
                        order: *order,
                        seasonal: SeasonalOrder::new(order.p, order.d, order.q, period),
                    });
                }
            }
            SeasonalSearch::CrossProduct => {
                for order in &triplets {
                    for seasonal in &triplets {
                        candidates.push(Candidate {
                            order: *order,
                            seasonal: SeasonalOrder::new(
                                seasonal.p, seasonal.d, seasonal.q, period,
                            ),
                        });
                    }
                }
            }
        }

        Self { candidates }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the space holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in enumeration order.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterate over candidates in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }
}
