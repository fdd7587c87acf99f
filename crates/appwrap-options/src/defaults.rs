//! Defaulting: merge a raw request with static and host-derived defaults.
//!
//! Precedence per field is caller value, then static default, then a value
//! derived from the host. A value counts as supplied only when it is
//! "truthy": empty strings and zero dimensions are treated as absent.

use crate::error::{ResolveError, Result};
use crate::options::{PartialOptions, RawOptions, WebOptions, WindowOptions};
use appwrap_core::{Arch, DefaultsConfig, Platform, Verbosity};
use appwrap_infer::{normalize_url, HostInspector};
use std::path::PathBuf;

/// Environment a request is resolved in.
#[derive(Debug, Clone)]
pub struct ResolveEnv {
    /// Output directory used when the request does not name one
    pub working_dir: PathBuf,
    /// Static defaults
    pub defaults: DefaultsConfig,
}

impl ResolveEnv {
    /// Create an environment from explicit parts.
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>, defaults: DefaultsConfig) -> Self {
        Self {
            working_dir: working_dir.into(),
            defaults,
        }
    }

    /// Environment of the current process.
    ///
    /// # Errors
    /// Returns error if the current working directory is unavailable.
    pub fn from_process(defaults: DefaultsConfig) -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, defaults))
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

fn flag(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

/// Apply defaults to a raw request.
///
/// Host detection is consulted only for the platform or architecture the
/// request leaves out.
pub fn apply_defaults(
    raw: &RawOptions,
    env: &ResolveEnv,
    host: &dyn HostInspector,
) -> Result<PartialOptions> {
    let target_url = non_empty(raw.target_url.as_ref()).ok_or(ResolveError::MissingTargetUrl)?;
    let target_url = normalize_url(&target_url).map_err(ResolveError::InvalidUrl)?;

    let platform = match non_empty(raw.platform.as_ref()) {
        Some(platform) => Platform::from_identifier(&platform),
        None => {
            let platform = host.platform().map_err(ResolveError::HostDetection)?;
            tracing::debug!("No platform requested, using host platform {}", platform);
            platform
        }
    };

    let arch = match non_empty(raw.arch.as_ref()) {
        Some(arch) => Arch::from_identifier(&arch),
        None => {
            let arch = host.arch().map_err(ResolveError::HostDetection)?;
            tracing::debug!("No arch requested, using host arch {}", arch);
            arch
        }
    };

    let flash_plugin_dir = raw
        .flash_plugin_dir
        .clone()
        .filter(|dir| !dir.as_os_str().is_empty());

    let mut insecure = flag(raw.insecure);
    if flash_plugin_dir.is_some() {
        // Flash needs plugins enabled, which the secure defaults forbid
        insecure = true;
    }

    let mut user_agent = non_empty(raw.user_agent.as_ref());
    if flag(raw.honest) {
        // Forces the user agent to be inferred even when one was supplied
        user_agent = None;
    }

    let window = WindowOptions {
        width: non_zero(raw.width).unwrap_or(env.defaults.width),
        height: non_zero(raw.height).unwrap_or(env.defaults.height),
        min_width: raw.min_width,
        min_height: raw.min_height,
        max_width: raw.max_width,
        max_height: raw.max_height,
        full_screen: flag(raw.full_screen),
        maximize: flag(raw.maximize),
        show_menu_bar: flag(raw.show_menu_bar),
        hide_window_frame: flag(raw.hide_window_frame),
        hide_title_bar: flag(raw.hide_title_bar),
    };

    let web = WebOptions {
        counter: flag(raw.counter),
        fast_quit: flag(raw.fast_quit),
        ignore_certificate: flag(raw.ignore_certificate),
        insecure,
        flash_plugin_dir,
        inject: raw.inject.clone().unwrap_or_default(),
        proxy_rules: non_empty(raw.proxy_rules.as_ref()),
        disable_context_menu: flag(raw.disable_context_menu),
        disable_dev_tools: flag(raw.disable_dev_tools),
        crash_reporter: non_empty(raw.crash_reporter.as_ref()),
        zoom: raw.zoom.filter(|z| *z > 0.0).unwrap_or(1.0),
        internal_urls: non_empty(raw.internal_urls.as_ref()),
    };

    Ok(PartialOptions {
        name: non_empty(raw.name.as_ref()),
        target_url,
        platform,
        arch,
        electron_version: non_empty(raw.electron_version.as_ref())
            .unwrap_or_else(|| env.defaults.electron_version.clone()),
        app_dir: env.defaults.app_dir.clone(),
        out: raw
            .out
            .clone()
            .filter(|out| !out.as_os_str().is_empty())
            .unwrap_or_else(|| env.working_dir.clone()),
        overwrite: flag(raw.overwrite),
        asar: flag(raw.conceal),
        icon: raw.icon.clone().filter(|icon| !icon.as_os_str().is_empty()),
        user_agent,
        verbosity: Verbosity::from_flag(flag(raw.verbose)),
        window,
        web,
    })
}
