//! Colors, sizes and fonts shared by every figure.

use plotters::style::RGBColor;

pub const FONT: &str = "sans-serif";
pub const TITLE_FONT_SIZE: u32 = 16;
pub const LABEL_FONT_SIZE: u32 = 13;

/// Pixels per centimetre of the nominal figure size
pub const PX_PER_CM: f64 = 60.0;
/// Pixels per inch of the nominal figure size
pub const PX_PER_INCH: f64 = 100.0;

/// One gauge panel: 15 cm x 5 cm
pub const GAUGE_PANEL_CM: (f64, f64) = (15.0, 5.0);

pub const SIMULATION: RGBColor = RGBColor(214, 39, 40);
pub const REFERENCE: RGBColor = RGBColor(0, 0, 0);
pub const STILL_WATER: RGBColor = RGBColor(31, 119, 180);
pub const SEDIMENT: RGBColor = RGBColor(255, 200, 0);
/// Light grey panel background with white grid lines
pub const PANEL_BACKGROUND: RGBColor = RGBColor(242, 242, 242);
pub const GRID: RGBColor = RGBColor(255, 255, 255);
pub const PLAIN_GRID: RGBColor = RGBColor(210, 210, 210);

/// Dash length and gap in pixels
pub const DASH: (u32, u32) = (6, 4);

/// Cycle for figures with an open number of curves
pub const CYCLE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub fn cycle_color(idx: usize) -> RGBColor {
    CYCLE[idx % CYCLE.len()]
}

/// Pixel size of a figure given in centimetres
pub fn cm(width: f64, height: f64) -> (u32, u32) {
    ((width * PX_PER_CM).round() as u32, (height * PX_PER_CM).round() as u32)
}

/// Pixel size of a figure given in inches
pub fn inches(width: f64, height: f64) -> (u32, u32) {
    (
        (width * PX_PER_INCH).round() as u32,
        (height * PX_PER_INCH).round() as u32,
    )
}
