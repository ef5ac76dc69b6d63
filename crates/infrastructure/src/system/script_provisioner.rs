use async_trait::async_trait;
use radarr_kodi_application::ports::ScriptProvisioner;
use radarr_kodi_domain::DomainError;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Local filesystem provisioner
pub struct FsScriptProvisioner;

impl FsScriptProvisioner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsScriptProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScriptProvisioner for FsScriptProvisioner {
    async fn seed_file(&self, template: &str, target: &str) -> Result<bool, DomainError> {
        if fs::try_exists(target).await.map_err(|e| io_error(target, e))? {
            return Ok(false);
        }

        if !fs::try_exists(template).await.map_err(|e| io_error(template, e))? {
            return Err(DomainError::TemplateNotFound(template.to_string()));
        }

        if let Some(parent) = Path::new(target).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| io_error(&parent.display().to_string(), e))?;
            }
        }

        fs::copy(template, target)
            .await
            .map_err(|e| io_error(target, e))?;

        debug!(template, target, "Copied default config");
        Ok(true)
    }

    async fn ensure_executable(&self, path: &str) -> Result<bool, DomainError> {
        let metadata = match fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::ScriptNotFound(path.to_string()));
            }
            Err(e) => return Err(io_error(path, e)),
        };

        if !metadata.is_file() {
            return Err(DomainError::ScriptNotFound(path.to_string()));
        }

        set_executable(path, metadata.permissions()).await
    }
}

#[cfg(unix)]
async fn set_executable(path: &str, permissions: std::fs::Permissions) -> Result<bool, DomainError> {
    use std::os::unix::fs::PermissionsExt;

    let mode = permissions.mode();
    let wanted = mode | 0o111;
    if wanted == mode {
        return Ok(false);
    }

    fs::set_permissions(path, std::fs::Permissions::from_mode(wanted))
        .await
        .map_err(|e| io_error(path, e))?;

    debug!(path, mode = format!("{:o}", wanted & 0o7777), "Made script executable");
    Ok(true)
}

#[cfg(not(unix))]
async fn set_executable(_path: &str, _permissions: std::fs::Permissions) -> Result<bool, DomainError> {
    Ok(false)
}

fn io_error(path: &str, e: std::io::Error) -> DomainError {
    DomainError::IoError(format!("{}: {}", path, e))
}
