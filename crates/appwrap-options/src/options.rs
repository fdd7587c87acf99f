//! Request and result types for options resolution.
//!
//! [`RawOptions`] is what a caller hands in: every field optional.
//! [`PartialOptions`] is the working value threaded through the pipeline.
//! [`ResolvedOptions`] is the finished configuration for the packager.

use crate::error::Result;
use appwrap_core::{Arch, Platform, Verbosity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ignore pattern handed to the packager so the template sources are skipped.
pub const PACKAGER_IGNORE: &str = "src";

/// Version stamp recorded in every resolved configuration.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A partially specified packaging request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub name: Option<String>,
    pub target_url: Option<String>,
    pub platform: Option<String>,
    pub arch: Option<String>,
    pub electron_version: Option<String>,
    pub out: Option<PathBuf>,
    pub overwrite: Option<bool>,
    /// Pack the app sources into an asar archive
    pub conceal: Option<bool>,
    pub icon: Option<PathBuf>,
    pub counter: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub show_menu_bar: Option<bool>,
    pub fast_quit: Option<bool>,
    pub user_agent: Option<String>,
    /// Discard any supplied user agent so one is always inferred
    pub honest: Option<bool>,
    pub ignore_certificate: Option<bool>,
    pub insecure: Option<bool>,
    pub flash_plugin_dir: Option<PathBuf>,
    pub inject: Option<Vec<PathBuf>>,
    pub proxy_rules: Option<String>,
    pub full_screen: Option<bool>,
    pub maximize: Option<bool>,
    pub hide_window_frame: Option<bool>,
    pub hide_title_bar: Option<bool>,
    pub verbose: Option<bool>,
    pub disable_context_menu: Option<bool>,
    pub disable_dev_tools: Option<bool>,
    /// Crash report submission URL
    pub crash_reporter: Option<String>,
    pub zoom: Option<f64>,
    /// Regular expression of URLs that stay inside the app window
    pub internal_urls: Option<String>,
}

impl RawOptions {
    /// Start a request for a target URL.
    #[must_use]
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: Some(target_url.into()),
            ..Self::default()
        }
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the application name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the target platform (aliases such as `mac` are accepted).
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Set the target architecture.
    #[must_use]
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    /// Pin the Electron version.
    #[must_use]
    pub fn with_electron_version(mut self, version: impl Into<String>) -> Self {
        self.electron_version = Some(version.into());
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the honest flag.
    #[must_use]
    pub fn with_honest(mut self, honest: bool) -> Self {
        self.honest = Some(honest);
        self
    }

    /// Set the icon path.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the requested window size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the maximum window size.
    #[must_use]
    pub fn with_max_size(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = Some(max_width);
        self.max_height = Some(max_height);
        self
    }

    /// Set the Flash plugin directory.
    #[must_use]
    pub fn with_flash_plugin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.flash_plugin_dir = Some(dir.into());
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = Some(out.into());
        self
    }

    /// Set the verbose flag.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
}

/// Window geometry and chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub full_screen: bool,
    pub maximize: bool,
    pub show_menu_bar: bool,
    pub hide_window_frame: bool,
    pub hide_title_bar: bool,
}

/// Browser behavior of the packaged app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct WebOptions {
    pub counter: bool,
    pub fast_quit: bool,
    pub ignore_certificate: bool,
    pub insecure: bool,
    pub flash_plugin_dir: Option<PathBuf>,
    pub inject: Vec<PathBuf>,
    pub proxy_rules: Option<String>,
    pub disable_context_menu: bool,
    pub disable_dev_tools: bool,
    pub crash_reporter: Option<String>,
    pub zoom: f64,
    pub internal_urls: Option<String>,
}

/// Working value threaded through the resolution pipeline.
///
/// `name`, `user_agent` and `icon` stay `None` until supplied or inferred.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialOptions {
    pub name: Option<String>,
    pub target_url: String,
    pub platform: Platform,
    pub arch: Arch,
    pub electron_version: String,
    pub app_dir: PathBuf,
    pub out: PathBuf,
    pub overwrite: bool,
    pub asar: bool,
    pub icon: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub verbosity: Verbosity,
    pub window: WindowOptions,
    pub web: WebOptions,
}

impl PartialOptions {
    /// Finish resolution with the sanitized application name.
    #[must_use]
    pub fn into_resolved(self, name: String) -> ResolvedOptions {
        ResolvedOptions {
            name,
            target_url: self.target_url,
            platform: self.platform,
            arch: self.arch,
            electron_version: self.electron_version,
            tool_version: TOOL_VERSION.to_string(),
            app_dir: self.app_dir,
            out: self.out,
            overwrite: self.overwrite,
            asar: self.asar,
            icon: self.icon,
            user_agent: self.user_agent,
            ignore: PACKAGER_IGNORE.to_string(),
            verbosity: self.verbosity,
            window: self.window,
            web: self.web,
        }
    }
}

/// Fully resolved configuration for the packager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    /// Sanitized, non-empty, ASCII application name
    pub name: String,
    pub target_url: String,
    pub platform: Platform,
    pub arch: Arch,
    pub electron_version: String,
    /// Version of appwrap that resolved these options
    pub tool_version: String,
    /// Placeholder application template
    pub app_dir: PathBuf,
    pub out: PathBuf,
    pub overwrite: bool,
    pub asar: bool,
    /// `None` when no icon was supplied and none could be inferred
    pub icon: Option<PathBuf>,
    pub user_agent: Option<String>,
    /// Packager ignore pattern
    pub ignore: String,
    pub verbosity: Verbosity,
    pub window: WindowOptions,
    pub web: WebOptions,
}

impl ResolvedOptions {
    /// Serialize for the packaging step.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&PartialOptions> for RawOptions {
    fn from(options: &PartialOptions) -> Self {
        let window = &options.window;
        let web = &options.web;
        Self {
            name: options.name.clone(),
            target_url: Some(options.target_url.clone()),
            platform: Some(options.platform.to_string()),
            arch: Some(options.arch.to_string()),
            electron_version: Some(options.electron_version.clone()),
            out: Some(options.out.clone()),
            overwrite: Some(options.overwrite),
            conceal: Some(options.asar),
            icon: options.icon.clone(),
            counter: Some(web.counter),
            width: Some(window.width),
            height: Some(window.height),
            min_width: window.min_width,
            min_height: window.min_height,
            max_width: window.max_width,
            max_height: window.max_height,
            show_menu_bar: Some(window.show_menu_bar),
            fast_quit: Some(web.fast_quit),
            user_agent: options.user_agent.clone(),
            honest: None,
            ignore_certificate: Some(web.ignore_certificate),
            insecure: Some(web.insecure),
            flash_plugin_dir: web.flash_plugin_dir.clone(),
            inject: Some(web.inject.clone()),
            proxy_rules: web.proxy_rules.clone(),
            full_screen: Some(window.full_screen),
            maximize: Some(window.maximize),
            hide_window_frame: Some(window.hide_window_frame),
            hide_title_bar: Some(window.hide_title_bar),
            verbose: Some(options.verbosity.is_verbose()),
            disable_context_menu: Some(web.disable_context_menu),
            disable_dev_tools: Some(web.disable_dev_tools),
            crash_reporter: web.crash_reporter.clone(),
            zoom: Some(web.zoom),
            internal_urls: web.internal_urls.clone(),
        }
    }
}

impl From<&ResolvedOptions> for RawOptions {
    fn from(options: &ResolvedOptions) -> Self {
        let partial = PartialOptions {
            name: Some(options.name.clone()),
            target_url: options.target_url.clone(),
            platform: options.platform.clone(),
            arch: options.arch.clone(),
            electron_version: options.electron_version.clone(),
            app_dir: options.app_dir.clone(),
            out: options.out.clone(),
            overwrite: options.overwrite,
            asar: options.asar,
            icon: options.icon.clone(),
            user_agent: options.user_agent.clone(),
            verbosity: options.verbosity,
            window: options.window.clone(),
            web: options.web.clone(),
        };
        Self::from(&partial)
    }
}
