//! Categorical colors for scatter series

/// Hex colors the scatter charts cycle through, one per series.
pub const SERIES_PALETTE: [&str; 7] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#D885F9", "#FF6B6B", "#6A4C93",
];

/// Color for the series at `index`, cycling past the palette end.
pub fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
