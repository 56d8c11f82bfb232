// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast entry, lifetime and exit timings
//! - **Forms**: Simulated login latency and credential plausibility
//! - **Animations**: Reveal, button loading, gallery press and scrolling

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a freshly attached toast starts sliding in (ms).
pub const DEFAULT_ENTER_DELAY_MS: u64 = 100;

/// Lifetime of a toast that is not closed by the user (ms).
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

/// Duration of the toast slide transition (ms).
pub const DEFAULT_EXIT_MS: u64 = 300;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Simulated round-trip before login credentials are judged (ms).
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;

/// Delay between a successful login and the welcome dialog (ms).
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;

/// Minimum password length accepted by the demo login.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the scroll reveal fade/slide (ms).
pub const DEFAULT_REVEAL_MS: u64 = 600;

/// Duration a busy button shows its loading state (ms).
pub const DEFAULT_BUTTON_LOADING_MS: u64 = 2000;

/// Duration of the gallery press feedback (ms).
pub const DEFAULT_GALLERY_PRESS_MS: u64 = 200;

/// Duration of an anchor smooth-scroll (ms).
pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 500;
