// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Locale used when neither the command line nor the desktop provides one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Log directive added to the environment filter.
pub const DEFAULT_LOG_DIRECTIVE: &str = "textkey=info";
