use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::images::{ImageArchives, resolve_image};
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::{info, success};
use crate::utils::path::{expand_tilde, require_absolute};
use std::fs;

/// Handle the `image` command: archives in the given order, then the local folder.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Image {
        program,
        zips,
        images_dir,
        out,
        force,
    } = cmd
    {
        let archives = ImageArchives::extract(zips.as_slice())?;
        let local = images_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.images_path());
        let dirs = archives.search_dirs(Some(local.as_path()))?;

        let Some(image) = resolve_image(program, dirs.as_slice(), &cfg.image_extensions)? else {
            info(format!("No image found for program '{program}'."));
            return Ok(());
        };

        println!("{}", image.filename);

        if let Some(out) = out {
            let dest = require_absolute(out)?;
            ensure_writable(&dest, *force)?;
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, &image.bytes)?;
            success(format!("Image written to {}", dest.display()));
        }
    }
    Ok(())
}
