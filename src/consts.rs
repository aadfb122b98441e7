//! Shared numeric constants for the editor core.

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum presentation zoom, in percent.
pub const ZOOM_MIN_PERCENT: u32 = 50;

/// Maximum presentation zoom, in percent.
pub const ZOOM_MAX_PERCENT: u32 = 150;

/// Zoom change per `zoom_in` / `zoom_out` step, in percentage points.
pub const ZOOM_STEP_PERCENT: u32 = 10;

/// Default presentation zoom, in percent.
pub const ZOOM_DEFAULT_PERCENT: u32 = 100;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of undo checkpoints retained; oldest evicted first.
pub const HISTORY_CAP: usize = 20;

// ── Palette assets ──────────────────────────────────────────────

/// Intrinsic size of a dropped logo badge, in canvas units.
pub const LOGO_BADGE_SIZE: (f64, f64) = (80.0, 30.0);

/// Intrinsic size of a dropped price badge, in canvas units.
pub const PRICE_BADGE_SIZE: (f64, f64) = (120.0, 36.0);

/// Intrinsic size of a dropped availability tag, in canvas units.
pub const AVAILABILITY_TAG_SIZE: (f64, f64) = (150.0, 32.0);
