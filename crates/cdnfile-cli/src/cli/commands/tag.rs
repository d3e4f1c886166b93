//! `cdnfile tag` – print the include tag, after confirming the file exists.

use anyhow::Result;

use cdnfile_core::config::CdnConfig;
use cdnfile_core::loader;
use cdnfile_core::markup::RenderMode;
use cdnfile_core::probe::CurlProbe;
use cdnfile_core::LibraryRequest;

pub fn run_tag(req: &LibraryRequest, cfg: &CdnConfig, debug: bool, no_check: bool) -> Result<()> {
    let mode = if debug {
        RenderMode::Debug
    } else {
        RenderMode::Markup
    };
    let html = if no_check {
        loader::render_unchecked(req, mode)
    } else {
        loader::load(req, &CurlProbe::from_config(&cfg.probe), mode)?
    };
    println!("{html}");
    Ok(())
}
