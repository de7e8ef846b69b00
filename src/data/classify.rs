use thiserror::Error;

use super::model::{AttrValue, Block, BlockModel};

/// Derived column holding `value - cost` per block.
pub const PROFIT_COLUMN: &str = "profit";
/// Derived column holding `profit > 0` per block.
pub const IN_PIT_COLUMN: &str = "in_pit";

// ---------------------------------------------------------------------------
// Classification errors
// ---------------------------------------------------------------------------

/// An invalid column selection.  The model is left untouched when this is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("unknown column '{0}': not present in the block model")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// UPL classification
// ---------------------------------------------------------------------------

/// Classify each block as in-pit or out-of-pit from the selected value and
/// cost columns.
///
/// Writes (or overwrites) two derived columns on every block:
/// * `profit` = value − cost
/// * `in_pit` = profit > 0 (strict; zero-profit blocks stay out of pit)
///
/// Both column names are resolved against the model's schema before any
/// mutation, so an `Err` means the model is unchanged.  Non-numeric or null
/// cells yield a NaN profit, which classifies out-of-pit.  Re-running with
/// the same columns recomputes both derived columns identically.
pub fn classify(
    model: &mut BlockModel,
    value_col: &str,
    cost_col: &str,
) -> Result<(), ClassifyError> {
    for col in [value_col, cost_col] {
        if !model.has_column(col) {
            return Err(ClassifyError::UnknownColumn(col.to_string()));
        }
    }

    for block in &mut model.blocks {
        let value = block
            .attr(value_col)
            .and_then(AttrValue::as_f64)
            .unwrap_or(f64::NAN);
        let cost = block
            .attr(cost_col)
            .and_then(AttrValue::as_f64)
            .unwrap_or(f64::NAN);

        let profit = value - cost;
        block
            .attributes
            .insert(PROFIT_COLUMN.to_string(), AttrValue::Float(profit));
        block
            .attributes
            .insert(IN_PIT_COLUMN.to_string(), AttrValue::Bool(profit > 0.0));
    }

    model.rebuild_columns();
    Ok(())
}

/// Whether the model already carries both derived columns.
pub fn is_classified(model: &BlockModel) -> bool {
    model.has_column(PROFIT_COLUMN) && model.has_column(IN_PIT_COLUMN)
}

/// A block's in-pit flag, or `None` when the model is unclassified.
pub fn in_pit(block: &Block) -> Option<bool> {
    match block.attr(IN_PIT_COLUMN) {
        Some(AttrValue::Bool(b)) => Some(*b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::Block;

    fn model_with(rows: &[(f64, f64)]) -> BlockModel {
        let blocks = rows
            .iter()
            .enumerate()
            .map(|(i, &(value, cost))| {
                let mut attributes = BTreeMap::new();
                attributes.insert("value".to_string(), AttrValue::Float(value));
                attributes.insert("cost".to_string(), AttrValue::Float(cost));
                Block {
                    position: [i as f64, 0.0, 0.0],
                    attributes,
                }
            })
            .collect();
        BlockModel::from_blocks(blocks)
    }

    fn profit_of(model: &BlockModel, i: usize) -> f64 {
        match model.blocks[i].attr(PROFIT_COLUMN) {
            Some(AttrValue::Float(p)) => *p,
            other => panic!("expected profit column, got {other:?}"),
        }
    }

    #[test]
    fn profit_and_in_pit_follow_the_sign_rule() {
        let mut model = model_with(&[(100.0, 40.0), (30.0, 30.0), (10.0, 50.0)]);
        classify(&mut model, "value", "cost").unwrap();

        assert_eq!(profit_of(&model, 0), 60.0);
        assert_eq!(in_pit(&model.blocks[0]), Some(true));

        // Zero profit is out-of-pit: the comparison is strict.
        assert_eq!(profit_of(&model, 1), 0.0);
        assert_eq!(in_pit(&model.blocks[1]), Some(false));

        assert_eq!(profit_of(&model, 2), -40.0);
        assert_eq!(in_pit(&model.blocks[2]), Some(false));
    }

    #[test]
    fn derived_columns_join_the_schema() {
        let mut model = model_with(&[(1.0, 2.0)]);
        assert!(!is_classified(&model));
        classify(&mut model, "value", "cost").unwrap();
        assert!(is_classified(&model));
        assert!(model.has_column(PROFIT_COLUMN));
        assert!(model.has_column(IN_PIT_COLUMN));
    }

    #[test]
    fn classification_is_idempotent() {
        let mut once = model_with(&[(100.0, 40.0), (30.0, 30.0), (10.0, 50.0)]);
        classify(&mut once, "value", "cost").unwrap();

        let mut twice = once.clone();
        classify(&mut twice, "value", "cost").unwrap();

        for (a, b) in once.blocks.iter().zip(&twice.blocks) {
            assert_eq!(a.attributes, b.attributes);
        }
    }

    #[test]
    fn unknown_column_leaves_the_model_untouched() {
        let mut model = model_with(&[(100.0, 40.0)]);
        let before = model.clone();

        let err = classify(&mut model, "nonexistent", "cost").unwrap_err();
        assert_eq!(err, ClassifyError::UnknownColumn("nonexistent".to_string()));

        assert_eq!(model.column_names, before.column_names);
        assert!(!model.has_column(PROFIT_COLUMN));
        assert!(!model.has_column(IN_PIT_COLUMN));
        for (a, b) in model.blocks.iter().zip(&before.blocks) {
            assert_eq!(a.attributes, b.attributes);
        }
    }

    #[test]
    fn unknown_cost_column_is_also_rejected() {
        let mut model = model_with(&[(100.0, 40.0)]);
        let err = classify(&mut model, "value", "missing").unwrap_err();
        assert_eq!(err, ClassifyError::UnknownColumn("missing".to_string()));
        assert!(!is_classified(&model));
    }

    #[test]
    fn non_numeric_cells_classify_out_of_pit() {
        let mut attributes = BTreeMap::new();
        attributes.insert("value".to_string(), AttrValue::String("n/a".to_string()));
        attributes.insert("cost".to_string(), AttrValue::Float(40.0));
        let mut model = BlockModel::from_blocks(vec![Block {
            position: [0.0; 3],
            attributes,
        }]);

        classify(&mut model, "value", "cost").unwrap();
        assert!(profit_of(&model, 0).is_nan());
        assert_eq!(in_pit(&model.blocks[0]), Some(false));
    }

    #[test]
    fn every_block_lands_in_exactly_one_series() {
        let mut model = model_with(&[(100.0, 40.0), (30.0, 30.0), (10.0, 50.0), (0.0, 0.0)]);
        classify(&mut model, "value", "cost").unwrap();

        let in_count = model
            .blocks
            .iter()
            .filter(|b| in_pit(b) == Some(true))
            .count();
        let out_count = model
            .blocks
            .iter()
            .filter(|b| in_pit(b) == Some(false))
            .count();
        assert_eq!(in_count + out_count, model.len());
    }

    #[test]
    fn reclassifying_overwrites_stale_derived_columns() {
        let mut model = model_with(&[(100.0, 40.0)]);
        classify(&mut model, "value", "cost").unwrap();
        assert_eq!(in_pit(&model.blocks[0]), Some(true));

        // Swap the roles: profit flips sign and the flag follows.
        classify(&mut model, "cost", "value").unwrap();
        assert_eq!(profit_of(&model, 0), -60.0);
        assert_eq!(in_pit(&model.blocks[0]), Some(false));
    }
}
