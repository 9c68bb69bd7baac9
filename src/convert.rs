//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use ethcal_render::RenderConfig;

use crate::config::RenderToml;

/// Builds a [`RenderConfig`] from the TOML render section.
///
/// `month` restricts output to one month; `hide_ethiopian` forces the
/// Ethiopian row off regardless of the file setting.
pub fn build_render_config(
    render: &RenderToml,
    month: Option<u8>,
    hide_ethiopian: bool,
) -> Result<RenderConfig> {
    let cfg = RenderConfig::default()
        .with_cell_width(render.cell_width)
        .with_ethiopian_row(render.ethiopian_row && !hide_ethiopian)
        .with_month(month);
    cfg.validate().context("invalid [render] settings")?;
    Ok(cfg)
}
