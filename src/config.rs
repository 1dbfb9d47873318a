//! Route and session-resolution configuration.
//!
//! Values are fixed at build time: the WASM bundle has no process environment,
//! so overrides are read with `option_env!` while compiling. Every path here
//! is also what `app` mounts, so a redirect can only target a mounted route.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SIGNIN_PATH: &str = "/signin";
pub const DEFAULT_REGISTER_PATH: &str = "/register";
pub const DEFAULT_SIGNOUT_PATH: &str = "/signout";
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
pub const DEFAULT_COURSES_PATH: &str = "/my-courses";
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 10_000;

/// Paths the session gate redirects between, plus the deadline for resolving
/// the session on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteConfig {
    /// Where unauthenticated users are sent; also the sign-out destination.
    pub signin_path: &'static str,
    pub register_path: &'static str,
    pub signout_path: &'static str,
    pub dashboard_path: &'static str,
    pub courses_path: &'static str,
    /// Landing route for authenticated users arriving without a saved intent.
    /// Always one of `protected_paths()`.
    pub default_redirect: &'static str,
    pub session_timeout_ms: u64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            signin_path: DEFAULT_SIGNIN_PATH,
            register_path: DEFAULT_REGISTER_PATH,
            signout_path: DEFAULT_SIGNOUT_PATH,
            dashboard_path: DEFAULT_DASHBOARD_PATH,
            courses_path: DEFAULT_COURSES_PATH,
            default_redirect: DEFAULT_DASHBOARD_PATH,
            session_timeout_ms: DEFAULT_SESSION_TIMEOUT_MS,
        }
    }
}

impl RouteConfig {
    /// Build config from compile-time environment overrides.
    ///
    /// Optional:
    /// - `EDULEARN_SIGNIN_PATH`: default `/signin`
    /// - `EDULEARN_DASHBOARD_PATH`: default `/dashboard`
    /// - `EDULEARN_DEFAULT_REDIRECT`: one of the protected paths, default the dashboard
    /// - `EDULEARN_SESSION_TIMEOUT_MS`: default 10000
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("EDULEARN_SIGNIN_PATH"),
            option_env!("EDULEARN_DASHBOARD_PATH"),
            option_env!("EDULEARN_DEFAULT_REDIRECT"),
            option_env!("EDULEARN_SESSION_TIMEOUT_MS"),
        )
    }

    fn from_overrides(
        signin: Option<&'static str>,
        dashboard: Option<&'static str>,
        default_redirect: Option<&'static str>,
        timeout_ms: Option<&str>,
    ) -> Self {
        let mut cfg = Self {
            signin_path: path_or_default(signin, DEFAULT_SIGNIN_PATH),
            dashboard_path: path_or_default(dashboard, DEFAULT_DASHBOARD_PATH),
            session_timeout_ms: parse_timeout_ms(timeout_ms, DEFAULT_SESSION_TIMEOUT_MS),
            ..Self::default()
        };
        cfg.default_redirect = mounted_or(default_redirect, &cfg.protected_paths(), cfg.dashboard_path);
        cfg
    }

    /// Routes wrapped in `ProtectedRoute`.
    pub fn protected_paths(&self) -> [&'static str; 2] {
        [self.dashboard_path, self.courses_path]
    }

    /// Every path `app` mounts a route for, apart from `/`.
    pub fn mounted_paths(&self) -> [&'static str; 5] {
        [self.signin_path, self.register_path, self.signout_path, self.dashboard_path, self.courses_path]
    }

    /// Whether `path` is one of the auth forms guarded by `PublicRoute`.
    pub fn is_public_path(&self, path: &str) -> bool {
        path == self.signin_path || path == self.register_path
    }
}

/// Router segment for a configured absolute path.
pub fn segment(path: &'static str) -> &'static str {
    path.trim_start_matches('/')
}

fn path_or_default(raw: Option<&'static str>, default: &'static str) -> &'static str {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && path.len() > 1 => path,
        _ => default,
    }
}

fn mounted_or(raw: Option<&'static str>, mounted: &[&'static str], default: &'static str) -> &'static str {
    let path = path_or_default(raw, default);
    if mounted.contains(&path) { path } else { default }
}

fn parse_timeout_ms(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}
