use std::fs;
use std::path::Path;

use anyhow::Context;
use paper_golf_core as game;

pub(crate) fn load_course(path: &Path) -> anyhow::Result<game::Course> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read course file {}", path.display()))?;
    parse_course(&text).with_context(|| format!("Invalid course file {}", path.display()))
}

pub(crate) fn parse_course(text: &str) -> anyhow::Result<game::Course> {
    let config: game::CourseConfig = toml::from_str(text)?;
    log::debug!("Loaded course {:?}, hole {} of {}", config.name, config.hole, config.total_holes);
    Ok(config.into_course()?)
}
