pub const SPACING: &[&str] = &[
    "0", "px", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64", "72",
    "80", "96",
];

pub const BORDER_WIDTHS: &[&str] = &["", "0", "2", "4", "8"];
pub const DIVIDE_WIDTHS: &[&str] = &["", "0", "2", "4", "8", "reverse"];
pub const RING_WIDTHS: &[&str] = &["0", "1", "2", "4", "8"];
pub const OUTLINE_WIDTHS: &[&str] = &["0", "1", "2", "4", "8"];

pub const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

pub const CONTAINER_SIZES: &[&str] = &[
    "3xs", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl",
];

pub const BREAKPOINTS: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

pub const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

pub const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];

pub const TRACKING: &[&str] = &["tighter", "tight", "normal", "wide", "wider", "widest"];

pub const LEADING: &[&str] = &[
    "none", "tight", "snug", "normal", "relaxed", "loose", "3", "4", "5", "6", "7", "8", "9", "10",
];

pub const SHADOWS: &[&str] = &["", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
pub const DROP_SHADOWS: &[&str] = &["", "xs", "sm", "md", "lg", "xl", "2xl", "none"];
pub const BLURS: &[&str] = &["", "none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl"];
pub const RADII: &[&str] = &[
    "", "none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full",
];

pub const OPACITY: &[&str] = &[
    "0", "5", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55", "60", "65", "70", "75",
    "80", "85", "90", "95", "100",
];

pub const Z_INDEX: &[&str] = &["0", "10", "20", "30", "40", "50", "auto"];
pub const ORDER: &[&str] = &[
    "first", "last", "none", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
pub const GRID_TRACKS: &[&str] = &[
    "none", "subgrid", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
pub const GRID_SPANS: &[&str] = &[
    "auto", "full", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
pub const GRID_LINES: &[&str] = &[
    "auto", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
];

pub const DURATIONS: &[&str] = &["0", "75", "100", "150", "200", "300", "500", "700", "1000"];
pub const SCALES: &[&str] = &["0", "50", "75", "90", "95", "100", "105", "110", "125", "150"];
pub const ROTATIONS: &[&str] = &["0", "1", "2", "3", "6", "12", "45", "90", "180"];
pub const SKEWS: &[&str] = &["0", "1", "2", "3", "6", "12"];
pub const BRIGHTNESS: &[&str] = &[
    "0", "50", "75", "90", "95", "100", "105", "110", "125", "150", "200",
];
pub const CONTRAST: &[&str] = &["0", "50", "75", "100", "125", "150", "200"];
pub const SATURATE: &[&str] = &["0", "50", "100", "150", "200"];
pub const HUE_ROTATE: &[&str] = &["0", "15", "30", "60", "90", "180"];
pub const TOGGLE_FILTERS: &[&str] = &["", "0"];

pub const GRADIENT_STOPS: &[&str] = &[
    "0%", "5%", "10%", "15%", "20%", "25%", "30%", "35%", "40%", "45%", "50%", "55%", "60%",
    "65%", "70%", "75%", "80%", "85%", "90%", "95%", "100%",
];

pub const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

pub const COLOR_FAMILIES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

pub const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

pub fn is_color_name(value: &str) -> bool {
    SPECIAL_COLORS.contains(&value) || COLOR_FAMILIES.contains(&value)
}

pub fn is_shaded_color(value: &str) -> bool {
    let Some((family, shade)) = value.rsplit_once('-') else {
        return false;
    };
    COLOR_FAMILIES.contains(&family) && SHADES.contains(&shade)
}

pub fn is_spacing_value(value: &str) -> bool {
    SPACING.contains(&value)
}

pub fn is_fraction(token: &str) -> bool {
    let mut parts = token.split('/');
    let Some(a) = parts.next() else { return false };
    let Some(b) = parts.next() else { return false };
    parts.next().is_none()
        && !a.is_empty()
        && !b.is_empty()
        && a.chars().all(|c| c.is_ascii_digit())
        && b.chars().all(|c| c.is_ascii_digit())
}
