pub const PALETTE: [&str; 10] = [
    "#1ABC9C", "#2E86C1", "#9B59B6", "#F39C12", "#E74C3C", "#27AE60", "#8E44AD", "#FFC000",
    "#16A085", "#D35400",
];

/// Softer set used by the investment donut and price stacks.
pub const PASTEL: [&str; 5] = ["#60a5fa", "#34d399", "#f59e0b", "#06b6d4", "#a78bfa"];

/// Palette colour `i`, wrapping around.
pub fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

pub fn pastel(i: usize) -> &'static str {
    PASTEL[i % PASTEL.len()]
}
