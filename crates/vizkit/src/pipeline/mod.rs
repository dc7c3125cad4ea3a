//! The column-standardization and aggregation pipeline.

mod standardize;
mod transform;

pub use standardize::{StandardFrame, coerce_time_any, standardize};
pub use transform::{
    DEFAULT_IQR_MULTIPLIER, OTHER_BUCKET, category_totals, topk_bucket, trim_outliers_iqr,
};
