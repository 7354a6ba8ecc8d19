//! Array registry and formula accumulation.

use serde::Serialize;
use shoal_core::{CostExpression, Direction, ProductTerm};
use std::collections::HashMap;

/// Accumulated read and write cost of one array.
///
/// Either side stays `None` until a record of that direction arrives; the
/// emitters decide how to render a missing side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArrayCost {
    pub reads: Option<CostExpression>,
    pub writes: Option<CostExpression>,
}

impl ArrayCost {
    pub fn get(&self, direction: Direction) -> Option<&CostExpression> {
        match direction {
            Direction::Read => self.reads.as_ref(),
            Direction::Write => self.writes.as_ref(),
        }
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<CostExpression> {
        match direction {
            Direction::Read => &mut self.reads,
            Direction::Write => &mut self.writes,
        }
    }
}

/// Distinct arrays in first-seen order, each with its accumulated costs.
#[derive(Debug, Clone, Default)]
pub struct ArrayRegistry {
    /// Array names in order of first appearance
    order: Vec<String>,
    costs: HashMap<String, ArrayCost>,
}

impl ArrayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one access of `array` costing `term`.
    ///
    /// New arrays are appended to the registry order whatever the direction.
    /// The term is appended to the expression for `(array, direction)`, so
    /// accumulation order is exactly the order of calls.
    pub fn observe(&mut self, array: &str, direction: Direction, term: ProductTerm) {
        if !self.costs.contains_key(array) {
            self.order.push(array.to_string());
        }
        let slot = self
            .costs
            .entry(array.to_string())
            .or_default()
            .slot_mut(direction);

        match slot {
            Some(expr) => expr.push(term),
            None => *slot = Some(CostExpression::new(term)),
        }
    }

    pub fn get(&self, array: &str) -> Option<&ArrayCost> {
        self.costs.get(array)
    }

    /// Shorthand for the expression of one array in one direction.
    pub fn expression(&self, array: &str, direction: Direction) -> Option<&CostExpression> {
        self.get(array).and_then(|cost| cost.get(direction))
    }

    /// Array names in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Arrays with their costs, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArrayCost)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.costs.get(name).map(|cost| (name.as_str(), cost)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoal_core::CostSymbol::{Constant, Edges, Nodes};

    fn term(symbols: &[shoal_core::CostSymbol]) -> ProductTerm {
        ProductTerm::new(symbols.to_vec())
    }

    #[test]
    fn test_accumulates_per_direction() {
        let mut registry = ArrayRegistry::new();
        registry.observe("A", Direction::Write, term(&[Constant, Nodes]));
        registry.observe("A", Direction::Write, term(&[Edges]));
        registry.observe("A", Direction::Read, term(&[Nodes]));

        assert_eq!(
            registry.expression("A", Direction::Write).unwrap().to_string(),
            "k*N + E"
        );
        assert_eq!(registry.expression("A", Direction::Read).unwrap().to_string(), "N");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_first_seen_order() {
        let mut registry = ArrayRegistry::new();
        registry.observe("G_b", Direction::Read, term(&[Nodes]));
        registry.observe("G_a", Direction::Write, term(&[Nodes]));
        registry.observe("G_b", Direction::Write, term(&[Edges]));
        registry.observe("G_c", Direction::Read, term(&[Constant]));
        registry.observe("G_a", Direction::Read, term(&[Edges]));

        assert_eq!(registry.names(), ["G_b", "G_a", "G_c"]);
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["G_b", "G_a", "G_c"]);
    }

    #[test]
    fn test_missing_direction_stays_absent() {
        let mut registry = ArrayRegistry::new();
        registry.observe("A", Direction::Read, term(&[Nodes]));

        let cost = registry.get("A").unwrap();
        assert!(cost.writes.is_none());
        assert!(cost.reads.is_some());
        assert!(registry.get("B").is_none());
    }

    #[test]
    fn test_other_arrays_do_not_affect_order_within_array() {
        let mut first = ArrayRegistry::new();
        first.observe("A", Direction::Read, term(&[Nodes]));
        first.observe("B", Direction::Read, term(&[Constant]));
        first.observe("A", Direction::Read, term(&[Edges]));
        first.observe("B", Direction::Read, term(&[Nodes]));

        let mut second = ArrayRegistry::new();
        second.observe("A", Direction::Read, term(&[Nodes]));
        second.observe("A", Direction::Read, term(&[Edges]));
        second.observe("B", Direction::Read, term(&[Constant]));
        second.observe("B", Direction::Read, term(&[Nodes]));

        for name in ["A", "B"] {
            assert_eq!(first.get(name), second.get(name));
        }
    }
}
