//! Version banner.
//!
//! Date and commit are stamped by the build script.

use std::io::{self, Write};

/// Build date, or `none` when it could not be determined.
pub const BUILD_DATE: &str = env!("ABLS_BUILD_DATE");

/// Short commit hash, or `none` when it could not be determined.
pub const BUILD_COMMIT: &str = env!("ABLS_BUILD_COMMIT");

/// Render the banner for `program`.
pub fn banner(program: &str) -> String {
    format!(
        "{program}\nVersion: {}\nDate: {BUILD_DATE}\nCommit: {BUILD_COMMIT}\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write the banner for `program` to `out`.
pub fn write_banner<W: Write>(program: &str, out: &mut W) -> io::Result<()> {
    out.write_all(banner(program).as_bytes())?;
    out.flush()
}
