//! Main Dashboard struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::charts::{Chart, box_by_period, category_mix, histogram, trend_line};
use crate::config::ViewOptions;
use crate::error::{Result, VizkitError};
use crate::input::{
    DataTable, ParseCache, Parser, ParserConfig, SourceMetadata, content_hash, sample_table,
};
use crate::insights::bullets;
use crate::pipeline::{DEFAULT_IQR_MULTIPLIER, standardize, topk_bucket, trim_outliers_iqr};
use crate::roles::Roles;

/// Configuration for a dashboard session.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// View options applied to every render.
    pub options: ViewOptions,
}

/// Result of rendering one view of a table.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResult {
    /// Rows in the loaded table.
    pub raw_row_count: usize,
    /// Rows remaining after the optional transforms.
    pub row_count: usize,
    /// The role mapping used.
    pub roles: Roles,
    /// The options used.
    pub options: ViewOptions,
    /// Built charts, in display order.
    pub charts: Vec<Chart>,
    /// Insight bullets.
    pub bullets: Vec<String>,
}

/// The dashboard engine: loads tables and renders views.
///
/// Each render reprocesses the full pipeline from the loaded table; the only
/// state carried between calls is the content-addressed parse cache.
pub struct Dashboard {
    config: DashboardConfig,
    parser: Parser,
    cache: ParseCache,
}

impl Dashboard {
    /// Create a dashboard with default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    /// Create a dashboard with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            cache: ParseCache::new(),
        }
    }

    /// The view options applied on render.
    pub fn options(&self) -> &ViewOptions {
        &self.config.options
    }

    /// Replace the view options for subsequent renders.
    pub fn set_options(&mut self, options: ViewOptions) {
        self.config.options = options;
    }

    /// Load a CSV file, reusing a cached parse of identical contents.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(Arc<DataTable>, SourceMetadata)> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| VizkitError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table = self.cache.get_or_parse(&self.parser, &bytes)?;
        let source = SourceMetadata::new(
            path.to_path_buf(),
            content_hash(&bytes),
            bytes.len() as u64,
            table.format_name().to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, source))
    }

    /// Load raw CSV bytes (e.g. an upload body) through the parse cache.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<Arc<DataTable>> {
        self.cache.get_or_parse(&self.parser, bytes)
    }

    /// The built-in synthetic sample dataset.
    pub fn load_sample(&self) -> DataTable {
        sample_table()
    }

    /// Render one view: standardize, transform, build charts and bullets.
    pub fn render(&self, table: &DataTable, roles: &Roles) -> Result<ViewResult> {
        let opts = &self.config.options;

        let mut frame = standardize(table, roles)?;
        if opts.trim_outliers {
            frame = trim_outliers_iqr(&frame, DEFAULT_IQR_MULTIPLIER);
        }
        let frame = topk_bucket(&frame, opts.top_k);

        let mut charts = vec![
            Chart::Histogram(histogram(&frame, opts)),
            category_mix(&frame, opts),
        ];
        if let Some(chart) = box_by_period(&frame, opts.granularity) {
            charts.push(Chart::BoxByPeriod(chart));
        }
        if let Some(chart) = trend_line(&frame, opts.granularity, opts.aggregate) {
            charts.push(Chart::TrendLine(chart));
        }

        Ok(ViewResult {
            raw_row_count: table.row_count(),
            row_count: frame.row_count(),
            roles: roles.clone(),
            options: opts.clone(),
            bullets: bullets(&frame),
            charts,
        })
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
