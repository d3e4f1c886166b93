//! `cdnfile list` – show the hosted library catalog.

use anyhow::Result;

use cdnfile_core::catalog::HOSTED_LIBRARIES;

pub fn run_list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(HOSTED_LIBRARIES)?);
        return Ok(());
    }

    println!("{:<18} {:<18} CSS", "NAME", "KEY");
    for lib in HOSTED_LIBRARIES {
        let css = if lib.has_stylesheet { "yes" } else { "-" };
        println!("{:<18} {:<18} {}", lib.name, lib.key, css);
    }
    Ok(())
}
