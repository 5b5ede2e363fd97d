use crate::core::VersionControl;
use crate::utils::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Version control through the system `git` binary.
///
/// Each operation is one or two blocking subprocess calls run from the
/// repository's working directory. Nothing is ever pushed.
#[derive(Debug, Clone)]
pub struct SystemGit {
    repo_path: PathBuf,
}

impl SystemGit {
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    fn git_cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.repo_path);
        cmd.arg("-c").arg("core.quotePath=false");
        cmd
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        tracing::info!("Running: {}", command);

        let output = self
            .git_cmd()
            .args(args)
            .output()
            .map_err(|e| ReleaseError::VersionControlFailure {
                command: command.clone(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseError::VersionControlFailure {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if !stdout.trim().is_empty() {
            tracing::debug!("{}", stdout.trim_end());
        }
        Ok(stdout)
    }
}

impl VersionControl for SystemGit {
    fn list_tags(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["tag"])?;
        Ok(parse_tag_list(&stdout))
    }

    fn commit_path(&self, path: &str, message: &str) -> Result<()> {
        self.run(&["add", path])?;
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name])?;
        Ok(())
    }
}

/// Newline-separated `git tag` output, blank lines dropped.
pub fn parse_tag_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
