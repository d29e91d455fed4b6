// crates/rdvz-cli/src/io/tikz.rs

use std::path::Path;

use anyhow::Context;
use rdvz_core::export::number::NumberFormat;
use rdvz_core::export::render_all;
use rdvz_core::trajectory::Trajectory;

/// Render all five views, then create/overwrite their files in `dir`.
pub fn write_views(dir: &Path, traj: &Trajectory, fmt: &NumberFormat) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir: {}", dir.display()))?;

    for (view, text) in render_all(traj, fmt) {
        let path = dir.join(view.file_name());
        std::fs::write(&path, &text)
            .with_context(|| format!("write {:?} view: {}", view, path.display()))?;
        log::debug!("wrote {} ({} bytes)", path.display(), text.len());
    }
    Ok(())
}
