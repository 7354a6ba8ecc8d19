//! Translation of raw cost descriptors into product terms.

use shoal_core::{AccessRecord, CostSymbol, Error, ProductTerm, Result};

/// Translate the cost descriptor of `record`, found on trace line `line`.
///
/// The leading marker is discarded; each remaining `TAG=TOKEN` item contributes
/// one factor, in encounter order. Any failure is fatal for the pass: a cost
/// model missing a term would be silently wrong.
pub fn translate(record: &AccessRecord, line: usize) -> Result<ProductTerm> {
    let term = record
        .cost_tokens()
        .iter()
        .map(|item| translate_item(item, line))
        .collect::<Result<ProductTerm>>()?;

    if term.is_empty() {
        return Err(Error::EmptyCostProduct {
            array: record.array.clone(),
            line,
        });
    }
    Ok(term)
}

fn translate_item(item: &str, line: usize) -> Result<CostSymbol> {
    let token = item.split('=').nth(1).ok_or_else(|| Error::MalformedCostItem {
        item: item.to_string(),
        line,
    })?;

    CostSymbol::try_from(token).map_err(|e| Error::UnknownCostToken { token: e.0, line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoal_core::Direction;

    fn record(items: &[&str]) -> AccessRecord {
        AccessRecord {
            array: "A".to_string(),
            indexed: false,
            direction: Direction::Write,
            cost_items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_translate_product() {
        let term = translate(&record(&["cost", "t=LOOP_CONSTANT", "t=LOOP_NODES"]), 1).unwrap();
        assert_eq!(term.to_string(), "k*N");

        let term = translate(&record(&["cost", "t=LOOP_EDGES_NBS"]), 1).unwrap();
        assert_eq!(term.factors(), [CostSymbol::Edges]);
    }

    #[test]
    fn test_marker_is_never_translated() {
        // The marker is dropped even when it looks like a cost item
        let term = translate(&record(&["t=LOOP_NODES", "t=LOOP_EDGES"]), 1).unwrap();
        assert_eq!(term.to_string(), "E");
    }

    #[test]
    fn test_unknown_token_is_fatal() {
        let err = translate(&record(&["cost", "t=LOOP_NODES", "t=LOOP_UNKNOWN_TOKEN"]), 7)
            .unwrap_err();
        match err {
            Error::UnknownCostToken { token, line } => {
                assert_eq!(token, "LOOP_UNKNOWN_TOKEN");
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_item() {
        let err = translate(&record(&["cost", "LOOP_NODES"]), 3).unwrap_err();
        assert!(matches!(err, Error::MalformedCostItem { line: 3, .. }));
    }

    #[test]
    fn test_empty_product_is_rejected() {
        assert!(matches!(
            translate(&record(&["cost"]), 2),
            Err(Error::EmptyCostProduct { line: 2, .. })
        ));
        assert!(matches!(
            translate(&record(&[]), 2),
            Err(Error::EmptyCostProduct { .. })
        ));
    }
}
