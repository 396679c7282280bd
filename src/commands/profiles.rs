use anyhow::Result;
use tracing::info;

use crate::profile::REGISTRY;

pub fn run() -> Result<()> {
    for spec in REGISTRY {
        info!(
            book_type = spec.kind.as_str(),
            name = spec.name,
            mode = spec.mode.as_str(),
            front_matter_pages = spec.front_matter_pages,
            back_matter_pages = spec.back_matter_pages,
            pattern_set = spec.patterns.name,
            watermark = spec.patterns.ignored_text.unwrap_or("none"),
            "book profile"
        );
    }

    Ok(())
}
