//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used by both
//! rendering and mouse hit-testing, so the two always agree.

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and one row for the title.
pub const TASK_CARD_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The board
/// needs its borders and one card, and the status bar its own rows.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 2 columns; each needs at least 15 characters for borders
/// and truncated titles to be readable.
pub const MIN_WIDTH: u16 = 30;
