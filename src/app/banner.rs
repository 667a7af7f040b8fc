//! Startup banner and version line.

use std::io::{self, Write};

use crate::config::BANNER_VERSION_WIDTH;

const BANNER: &str = r"
            __                                      __
 _      __ / /_   ____   _  __ __  __ _____ __  __ / /_   _____
| | /| / // __ \ / __ \ | |/_// / / // ___// / / // __ \ / ___/
| |/ |/ // / / // /_/ /_>  < / /_/ /(__  )/ /_/ // /_/ /(__  )
|__/|__//_/ /_/ \____//_/|_| \__, //____/ \__,_//_.___//____/
                            /____/";

/// Returns `Current whoxysubs version <version>`.
pub fn version_line() -> String {
    format!("Current whoxysubs version {}", env!("CARGO_PKG_VERSION"))
}

/// Writes the ASCII banner followed by the right-aligned version line.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    write!(
        out,
        "{}\n{:>width$}\n\n",
        BANNER,
        version_line(),
        width = BANNER_VERSION_WIDTH
    )
}

/// Prints the banner to stderr, leaving stdout for JSON results.
pub fn print_banner() {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    if let Err(e) = write_banner(&mut handle) {
        log::debug!("Failed to print banner: {}", e);
    }
}
