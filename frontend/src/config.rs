/// Autoplay cadence in milliseconds.
pub const SLIDE_INTERVAL_MS: u32 = 2000;

// viewport widths in css pixels
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const TABLET_BREAKPOINT: f64 = 1200.0;

/// Where trunk copies `assets/` in both dev and release builds.
pub const ASSET_BASE: &str = "/assets";

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", ASSET_BASE, path.trim_start_matches('/'))
}
