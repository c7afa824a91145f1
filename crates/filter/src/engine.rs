use serde::Serialize;

use crate::item::Card;
use crate::query::Query;

/// Visibility decided for each card, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub query: String,
    pub visible: Vec<bool>,
}

impl FilterOutcome {
    pub fn shown(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn hidden(&self) -> usize {
        self.visible.len() - self.shown()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Stateless substring filter over a fixed set of cards.
///
/// Every call recomputes visibility for every card from scratch.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    query: Query,
}

impl FilterEngine {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: Query::new(query),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Decide visibility without touching the cards.
    pub fn evaluate<C: Card>(&self, cards: &[C]) -> FilterOutcome {
        let visible = cards
            .iter()
            .map(|card| self.query.matches(card.tags(), card.text()))
            .collect();
        let outcome = FilterOutcome {
            query: self.query.as_str().to_string(),
            visible,
        };
        log::debug!(
            "filter query={:?} shown={} hidden={}",
            outcome.query,
            outcome.shown(),
            outcome.hidden()
        );
        outcome
    }

    /// Decide visibility and write it back to each card.
    pub fn apply<C: Card>(&self, cards: &mut [C]) -> FilterOutcome {
        let outcome = self.evaluate(cards);
        for (card, visible) in cards.iter_mut().zip(&outcome.visible) {
            card.set_visible(*visible);
        }
        outcome
    }
}

pub fn compute_visibility<C: Card>(query: Option<&str>, cards: &[C]) -> FilterOutcome {
    FilterEngine::new(query).evaluate(cards)
}

pub fn apply_filter<C: Card>(query: Option<&str>, cards: &mut [C]) -> FilterOutcome {
    FilterEngine::new(query).apply(cards)
}
