pub mod filter;

pub use filter::{
    classify::{Classified, DateSlot, Slot},
    error::{ClassificationError, PathError},
    operator::{Combinator, Operator},
    path::FilterPath,
    tree::{Comparison, Composite, FilterTree},
    value::{FilterValue, GeoRange},
};
