use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// AttrValue – a single cell in an attribute column
// ---------------------------------------------------------------------------

/// A dynamically-typed attribute value, mirroring the property types a
/// geospatial vector file can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::String(s) => write!(f, "{s}"),
            AttrValue::Integer(i) => write!(f, "{i}"),
            AttrValue::Float(v) => write!(f, "{v:.4}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Null => write!(f, "<null>"),
        }
    }
}

impl AttrValue {
    /// Try to interpret the value as an `f64` for profit arithmetic.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            AttrValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Block – one row of the block model
// ---------------------------------------------------------------------------

/// A single block: a 3D centroid plus its attribute cells.
#[derive(Debug, Clone)]
pub struct Block {
    /// Centroid coordinates (x, y, z).
    pub position: [f64; 3],
    /// Dynamic attribute columns: column_name → value.
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Block {
    /// Look up an attribute cell by column name.
    pub fn attr(&self, column: &str) -> Option<&AttrValue> {
        self.attributes.get(column)
    }
}

// ---------------------------------------------------------------------------
// BlockModel – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed block model with a pre-computed column index.
#[derive(Debug, Clone)]
pub struct BlockModel {
    /// All blocks (rows).
    pub blocks: Vec<Block>,
    /// Ordered list of attribute column names (excludes geometry).
    pub column_names: Vec<String>,
}

impl BlockModel {
    /// Build the column index from the loaded blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut model = BlockModel {
            blocks,
            column_names: Vec::new(),
        };
        model.rebuild_columns();
        model
    }

    /// Recompute `column_names` as the ordered union of all attribute keys.
    /// Must be called after any operation that adds or removes columns.
    pub fn rebuild_columns(&mut self) {
        let names: BTreeSet<String> = self
            .blocks
            .iter()
            .flat_map(|b| b.attributes.keys().cloned())
            .collect();
        self.column_names = names.into_iter().collect();
    }

    /// Whether `column` exists in the model's column set.
    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the model is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Axis-aligned bounding box of all block centroids, or `None` when the
    /// model is empty.  Used to center and scale the 3D scene.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let first = self.blocks.first()?;
        let mut min = first.position;
        let mut max = first.position;
        for b in &self.blocks {
            for axis in 0..3 {
                min[axis] = min[axis].min(b.position[axis]);
                max[axis] = max[axis].max(b.position[axis]);
            }
        }
        Some((min, max))
    }
}
