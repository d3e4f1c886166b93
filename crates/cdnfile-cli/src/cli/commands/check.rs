//! `cdnfile check` – probe the resolved URL.

use anyhow::Result;

use cdnfile_core::config::CdnConfig;
use cdnfile_core::loader;
use cdnfile_core::probe::CurlProbe;
use cdnfile_core::LibraryRequest;

pub fn run_check(req: &LibraryRequest, cfg: &CdnConfig) -> Result<()> {
    let probe = CurlProbe::from_config(&cfg.probe);
    let code = loader::ensure_available(req.url(), &probe)?;
    println!("available  HTTP {code}  {}", req.url());
    Ok(())
}
