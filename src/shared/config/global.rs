use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::shared::config::model::{Settings, load_settings};

/// Process settings, read on first access from `$MULTICOL_PUT_CONFIG`
/// (default `config.*`) with `MULTICOL_PUT__SECTION__KEY` overrides.
pub static CONFIG: Lazy<Arc<Settings>> = Lazy::new(|| match load_settings() {
    Ok(settings) => Arc::new(settings),
    Err(e) => panic!("Failed to load multicol_put settings: {e}"),
});
