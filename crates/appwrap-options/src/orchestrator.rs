//! Inference orchestrator for the asynchronous enrichment steps.
//!
//! User agent, icon and title are inferred one after another, never
//! concurrently: each step may hit the same target site and a later step
//! only starts once the previous collaborator call has settled. Only a user
//! agent failure aborts resolution.

use crate::error::{ResolveError, Result};
use crate::options::PartialOptions;
use crate::sanitize::kebab_case;
use appwrap_core::Platform;
use appwrap_infer::Collaborators;

/// Position of the orchestrator in the enrichment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceStage {
    /// Waiting for the user agent lookup
    AwaitingUserAgent,
    /// Waiting for the icon lookup
    AwaitingIcon,
    /// Waiting for the title lookup
    AwaitingTitle,
    /// All steps settled
    Finished,
}

impl InferenceStage {
    /// Stage that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::AwaitingUserAgent => Self::AwaitingIcon,
            Self::AwaitingIcon => Self::AwaitingTitle,
            Self::AwaitingTitle | Self::Finished => Self::Finished,
        }
    }
}

/// Runs the enrichment steps against a set of collaborators.
pub struct InferenceOrchestrator<'a> {
    collaborators: &'a Collaborators,
    default_name: &'a str,
}

impl<'a> InferenceOrchestrator<'a> {
    /// Create an orchestrator. `default_name` replaces a title that cannot
    /// be inferred.
    #[must_use]
    pub fn new(collaborators: &'a Collaborators, default_name: &'a str) -> Self {
        Self {
            collaborators,
            default_name,
        }
    }

    /// Run user agent, icon and title inference in that order.
    ///
    /// # Errors
    /// Returns [`ResolveError::UserAgent`] if the user agent lookup fails;
    /// the icon and title steps are not attempted in that case.
    pub async fn run(&self, mut options: PartialOptions) -> Result<PartialOptions> {
        let mut stage = InferenceStage::AwaitingUserAgent;
        loop {
            match stage {
                InferenceStage::AwaitingUserAgent => self.infer_user_agent(&mut options).await?,
                InferenceStage::AwaitingIcon => self.infer_icon(&mut options).await,
                InferenceStage::AwaitingTitle => self.infer_name(&mut options).await,
                InferenceStage::Finished => return Ok(options),
            }
            stage = stage.next();
        }
    }

    async fn infer_user_agent(&self, options: &mut PartialOptions) -> Result<()> {
        if options.user_agent.is_some() {
            tracing::debug!("User agent supplied, skipping inference");
            return Ok(());
        }

        let user_agent = self
            .collaborators
            .user_agent
            .user_agent(&options.electron_version, &options.platform)
            .await
            .map_err(ResolveError::UserAgent)?;

        tracing::debug!("Inferred user agent: {}", user_agent);
        options.user_agent = Some(user_agent);
        Ok(())
    }

    async fn infer_icon(&self, options: &mut PartialOptions) {
        if options.icon.is_some() {
            tracing::debug!("Icon supplied, skipping inference");
            return;
        }

        match self
            .collaborators
            .icon
            .icon(&options.target_url, &options.platform)
            .await
        {
            Ok(path) => {
                tracing::debug!("Inferred icon: {}", path.display());
                options.icon = Some(path);
            }
            Err(e) => {
                tracing::warn!("Cannot automatically retrieve the app icon: {}", e);
            }
        }
    }

    async fn infer_name(&self, options: &mut PartialOptions) {
        if options.name.as_ref().is_some_and(|name| !name.is_empty()) {
            tracing::debug!("Name supplied, skipping title inference");
            return;
        }

        let mut name = match self.collaborators.title.title(&options.target_url).await {
            Ok(title) => title.trim().to_string(),
            Err(e) => {
                tracing::warn!(
                    "Unable to automatically determine app name, falling back to '{}': {}",
                    self.default_name,
                    e
                );
                self.default_name.to_string()
            }
        };

        if options.platform == Platform::Linux {
            // Spaces break pinning the app to desktop launchers
            name = kebab_case(&name);
        }

        options.name = Some(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let mut stage = InferenceStage::AwaitingUserAgent;
        let mut seen = vec![stage];
        while stage != InferenceStage::Finished {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                InferenceStage::AwaitingUserAgent,
                InferenceStage::AwaitingIcon,
                InferenceStage::AwaitingTitle,
                InferenceStage::Finished,
            ]
        );
        assert_eq!(InferenceStage::Finished.next(), InferenceStage::Finished);
    }
}
