use crate::models::HistogramConfig;

pub const DEFAULT_HISTOGRAM_CONFIG: HistogramConfig = HistogramConfig {
    case_sensitive: true,
    ignore_whitespace: false,
};
