//! Symbolic cost algebra.
//!
//! A [`CostExpression`] is a sum of [`ProductTerm`]s, each an ordered product of
//! [`CostSymbol`]s. Terms and factors keep the order they were observed in, so
//! rendering the same sequence of observations always yields the same text.

use crate::error::UnknownToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw token for a loop executed a constant number of times.
pub const LOOP_CONSTANT: &str = "LOOP_CONSTANT";
/// Raw token for a loop over all nodes.
pub const LOOP_NODES: &str = "LOOP_NODES";
/// Raw token for a loop over all edges.
pub const LOOP_EDGES: &str = "LOOP_EDGES";
/// Raw token for a loop over the neighbours of every node, i.e. all edges.
pub const LOOP_EDGES_NBS: &str = "LOOP_EDGES_NBS";

/// A single problem-size factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostSymbol {
    /// A fixed constant, `k`.
    Constant,
    /// Node count, `N`.
    Nodes,
    /// Edge count, `E`.
    Edges,
}

impl CostSymbol {
    /// The one-character symbol used in every rendering.
    pub fn as_char(self) -> char {
        match self {
            CostSymbol::Constant => 'k',
            CostSymbol::Nodes => 'N',
            CostSymbol::Edges => 'E',
        }
    }
}

impl TryFrom<&str> for CostSymbol {
    type Error = UnknownToken;

    /// Resolve a raw trace token. The vocabulary is closed: anything else is an error.
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        match token {
            LOOP_CONSTANT => Ok(CostSymbol::Constant),
            LOOP_NODES => Ok(CostSymbol::Nodes),
            LOOP_EDGES | LOOP_EDGES_NBS => Ok(CostSymbol::Edges),
            other => Err(UnknownToken(other.to_string())),
        }
    }
}

impl fmt::Display for CostSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The cost of one kind of array access: factors multiplied in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTerm {
    factors: Vec<CostSymbol>,
}

impl ProductTerm {
    pub fn new(factors: Vec<CostSymbol>) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &[CostSymbol] {
        &self.factors
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Render with `separator` between factors (`"*"` for plain text, `""` for LaTeX).
    pub fn render(&self, separator: &str) -> String {
        self.factors
            .iter()
            .map(|symbol| symbol.as_char().to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<CostSymbol> for ProductTerm {
    fn from_iter<I: IntoIterator<Item = CostSymbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ProductTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("*"))
    }
}

/// Accumulated cost of one array in one direction.
///
/// Never empty: an expression only exists once its first term has been seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostExpression {
    terms: Vec<ProductTerm>,
}

impl CostExpression {
    pub fn new(first: ProductTerm) -> Self {
        Self { terms: vec![first] }
    }

    /// Append a term; terms are never reordered or merged.
    pub fn push(&mut self, term: ProductTerm) {
        self.terms.push(term);
    }

    pub fn terms(&self) -> &[ProductTerm] {
        &self.terms
    }

    /// Render terms joined by `" + "`, factors joined by `factor_separator`.
    pub fn render(&self, factor_separator: &str) -> String {
        self.terms
            .iter()
            .map(|term| term.render(factor_separator))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl fmt::Display for CostExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary() {
        assert_eq!(CostSymbol::try_from("LOOP_CONSTANT"), Ok(CostSymbol::Constant));
        assert_eq!(CostSymbol::try_from("LOOP_NODES"), Ok(CostSymbol::Nodes));
        assert_eq!(CostSymbol::try_from("LOOP_EDGES"), Ok(CostSymbol::Edges));
        assert_eq!(CostSymbol::try_from("LOOP_EDGES_NBS"), Ok(CostSymbol::Edges));
        assert_eq!(
            CostSymbol::try_from("LOOP_UNKNOWN_TOKEN"),
            Err(UnknownToken("LOOP_UNKNOWN_TOKEN".to_string()))
        );
        // Lookup is case sensitive
        assert!(CostSymbol::try_from("loop_nodes").is_err());
    }

    #[test]
    fn test_render_expression() {
        let mut expr = CostExpression::new(
            [CostSymbol::Constant, CostSymbol::Nodes].into_iter().collect(),
        );
        assert_eq!(expr.to_string(), "k*N");

        expr.push(ProductTerm::new(vec![CostSymbol::Edges]));
        assert_eq!(expr.to_string(), "k*N + E");
        assert_eq!(expr.render(""), "kN + E");
        assert_eq!(expr.terms().len(), 2);
    }

    #[test]
    fn test_repeated_factors_are_kept() {
        let term = ProductTerm::new(vec![CostSymbol::Nodes, CostSymbol::Nodes]);
        assert_eq!(term.to_string(), "N*N");
        assert_eq!(term.factors().len(), 2);
    }
}
