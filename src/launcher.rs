//! Open a directory or URL with the platform's default handler

use std::io;
use std::process::{Command, Stdio};

/// Command used to open `target` on this platform
fn opener(target: &str) -> io::Result<Command> {
    let cmd = if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "start", "", target]);
        cmd
    } else if cfg!(unix) {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    } else {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("unsupported operating system: {}", std::env::consts::OS),
        ));
    };
    Ok(cmd)
}

/// Open `target` (a path or a URL); callers treat failure as non-fatal
pub fn open(target: &str) -> io::Result<()> {
    let mut cmd = opener(target)?;
    log::debug!("opening {} with {:?}", target, cmd.get_program());

    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("opener exited with {}", status)))
    }
}
