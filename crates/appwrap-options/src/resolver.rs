//! Resolution entry point.

use crate::defaults::{apply_defaults, ResolveEnv};
use crate::error::Result;
use crate::normalize::normalize;
use crate::options::{RawOptions, ResolvedOptions};
use crate::orchestrator::InferenceOrchestrator;
use crate::sanitize::sanitize_name;
use appwrap_core::AppConfig;
use appwrap_infer::Collaborators;

/// Resolve a raw request into a complete configuration.
///
/// Runs defaulting, platform/dimension normalization, inference and name
/// sanitization in that order. Either every invariant of
/// [`ResolvedOptions`] holds on the result or an error is returned; a
/// partially resolved value is never handed out.
///
/// # Errors
/// Returns error if the target URL is missing or invalid, host detection
/// fails for a field the request left out, or user agent inference fails.
pub async fn resolve_options(
    raw: &RawOptions,
    collaborators: &Collaborators,
    env: &ResolveEnv,
) -> Result<ResolvedOptions> {
    let options = apply_defaults(raw, env, collaborators.host.as_ref())?;
    let options = normalize(options);

    let default_name = env.defaults.app_name.as_str();
    let options = InferenceOrchestrator::new(collaborators, default_name)
        .run(options)
        .await?;

    let name = sanitize_name(options.name.as_deref().unwrap_or_default(), default_name);
    let resolved = options.into_resolved(name);
    tracing::info!(
        "Resolved options for '{}' ({} {}, Electron {})",
        resolved.name,
        resolved.platform,
        resolved.arch,
        resolved.electron_version
    );
    Ok(resolved)
}

/// Collaborators and environment bundled for repeated resolution.
#[derive(Debug, Clone)]
pub struct OptionsResolver {
    collaborators: Collaborators,
    env: ResolveEnv,
}

impl OptionsResolver {
    /// Create a resolver from explicit parts.
    #[must_use]
    pub fn new(collaborators: Collaborators, env: ResolveEnv) -> Self {
        Self { collaborators, env }
    }

    /// Create a resolver with the standard collaborators for the current
    /// process and configuration.
    pub fn standard(config: &AppConfig) -> appwrap_core::Result<Self> {
        let collaborators = Collaborators::standard(&config.inference)?;
        let env = ResolveEnv::from_process(config.defaults.clone())?;
        Ok(Self::new(collaborators, env))
    }

    /// Resolve a request. See [`resolve_options`].
    pub async fn resolve(&self, raw: &RawOptions) -> Result<ResolvedOptions> {
        resolve_options(raw, &self.collaborators, &self.env).await
    }

    /// Environment requests are resolved in.
    #[must_use]
    pub fn env(&self) -> &ResolveEnv {
        &self.env
    }
}
