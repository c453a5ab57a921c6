use std::env;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::error::{GblogError, Result};

/// Environment variable overriding the GitHub CLI executable
pub const GH_ENV: &str = "GBLOG_GH";

/// Operations gblog needs from the gist host
pub trait GistHost {
    /// Whether the host CLI has working credentials
    fn is_authenticated(&self) -> bool;

    /// Create a gist from `files`, returning the raw output of the host
    fn create_gist(&self, files: &[PathBuf], public: bool, description: &str) -> Result<String>;

    /// Replace the files of an existing gist
    fn update_gist(&self, id: &str, files: &[PathBuf]) -> Result<()>;

    /// Create a repository from the current blog directory and push it
    fn create_repo(&self, name: &str, public: bool, description: &str) -> Result<()>;
}

/// [`GistHost`] backed by the `gh` command line tool
pub struct GhCli {
    program: String,
    workdir: PathBuf,
}

impl GhCli {
    /// Use `gh` (or `$GBLOG_GH`) from within `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        let program = env::var(GH_ENV).unwrap_or_else(|_| "gh".to_string());
        Self {
            program,
            workdir: workdir.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        log::debug!("running {} {}", self.program, args.join(" "));
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.workdir);
        cmd
    }

    /// Run and capture output, turning a non-zero exit into `Remote`
    fn run(&self, mut cmd: Command, action: &str) -> Result<Output> {
        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| GblogError::Remote(format!("failed to {}: {}", action, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GblogError::Remote(format!("failed to {}: {}", action, stderr)));
        }

        Ok(output)
    }
}

fn path_args(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.to_string_lossy().to_string())
        .collect()
}

impl GistHost for GhCli {
    fn is_authenticated(&self) -> bool {
        self.command(&["auth", "status"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn create_gist(&self, files: &[PathBuf], public: bool, description: &str) -> Result<String> {
        let mut args = vec!["gist", "create"];
        if public {
            args.push("--public");
        }
        if !description.is_empty() {
            args.push("--desc");
            args.push(description);
        }

        let files = path_args(files);
        args.extend(files.iter().map(String::as_str));

        let output = self.run(self.command(&args), "create gist")?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn update_gist(&self, id: &str, files: &[PathBuf]) -> Result<()> {
        let mut args = vec!["gist", "edit", id];
        let files = path_args(files);
        args.extend(files.iter().map(String::as_str));

        self.run(self.command(&args), "update gist")?;
        Ok(())
    }

    fn create_repo(&self, name: &str, public: bool, description: &str) -> Result<()> {
        let visibility = if public { "--public" } else { "--private" };
        let args = [
            "repo",
            "create",
            name,
            visibility,
            "--description",
            description,
            "--source=.",
            "--remote=origin",
            "--push",
        ];

        self.run(self.command(&args), "create repository")?;
        Ok(())
    }
}
