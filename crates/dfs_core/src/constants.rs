/// Edge weight type
pub type Weight = f64;

/// Weight given to edges created without an explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;
