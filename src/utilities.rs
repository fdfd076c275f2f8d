use crate::scales::{
    BLURS, BORDER_WIDTHS, BRIGHTNESS, CONTAINER_SIZES, CONTRAST, DIVIDE_WIDTHS, DROP_SHADOWS,
    DURATIONS, FONT_FAMILIES, FONT_WEIGHTS, GRADIENT_STOPS, GRID_LINES, GRID_SPANS, GRID_TRACKS,
    HUE_ROTATE, LEADING, OPACITY, ORDER, OUTLINE_WIDTHS, RADII, RING_WIDTHS, ROTATIONS, SATURATE,
    SCALES, SHADOWS, SKEWS, TEXT_SIZES, TOGGLE_FILTERS, TRACKING, Z_INDEX,
};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

pub const ARBITRARY_VALUE_PREFIXES: &[&str] = &[
    "w", "h", "min-w", "max-w", "min-h", "max-h", "size", "basis", "p", "px", "py", "ps", "pe",
    "pt", "pr", "pb", "pl", "m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml", "gap", "gap-x",
    "gap-y", "space-x", "space-y", "top", "right", "bottom", "left", "inset", "inset-x", "inset-y",
    "start", "end", "z", "order", "grow", "shrink", "flex", "text", "font", "bg", "border",
    "border-x", "border-y", "border-s", "border-e", "border-t", "border-r", "border-b", "border-l",
    "ring", "ring-offset", "outline", "outline-offset", "fill", "stroke", "divide", "divide-x",
    "divide-y", "shadow", "drop-shadow", "opacity", "blur", "brightness", "contrast", "grayscale",
    "hue-rotate", "invert", "saturate", "sepia", "scale", "scale-x", "scale-y", "rotate",
    "translate-x", "translate-y", "skew-x", "skew-y", "origin", "backdrop-blur",
    "backdrop-brightness", "backdrop-contrast", "backdrop-grayscale", "backdrop-hue-rotate",
    "backdrop-invert", "backdrop-opacity", "backdrop-saturate", "backdrop-sepia", "transition",
    "duration", "delay", "ease", "animate", "rounded", "rounded-s", "rounded-e", "rounded-t",
    "rounded-r", "rounded-b", "rounded-l", "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
    "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl", "from", "via", "to", "accent", "caret",
    "placeholder", "scroll-m", "scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt",
    "scroll-mr", "scroll-mb", "scroll-ml", "scroll-p", "scroll-px", "scroll-py", "scroll-ps",
    "scroll-pe", "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl", "grid-cols", "grid-rows",
    "auto-cols", "auto-rows", "col-span", "col-start", "col-end", "row-span", "row-start",
    "row-end", "columns", "aspect", "border-spacing", "indent", "scroll", "snap", "will-change",
    "content", "cursor", "list", "object", "decoration", "underline-offset", "leading",
    "tracking", "line-clamp",
];

pub const NEGATIVE_VALUE_PREFIXES: &[&str] = &[
    "top", "right", "bottom", "left", "inset", "inset-x", "inset-y", "start", "end",
    "translate-x", "translate-y", "rotate", "skew-x", "skew-y", "scale", "scale-x", "scale-y", "m",
    "mx", "my", "ms", "me", "mt", "mr", "mb", "ml", "space-x", "space-y", "scroll-m", "scroll-mx",
    "scroll-my", "scroll-ms", "scroll-me", "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml",
    "indent", "order", "hue-rotate", "backdrop-hue-rotate",
];

const STANDALONE: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "inline-flex",
    "inline-table",
    "inline-grid",
    "flow-root",
    "grid",
    "contents",
    "list-item",
    "hidden",
    "container",
    "static",
    "fixed",
    "absolute",
    "relative",
    "sticky",
    "visible",
    "invisible",
    "collapse",
    "isolate",
    "italic",
    "not-italic",
    "uppercase",
    "lowercase",
    "capitalize",
    "normal-case",
    "truncate",
    "underline",
    "overline",
    "line-through",
    "no-underline",
    "antialiased",
    "subpixel-antialiased",
    "sr-only",
    "not-sr-only",
    "group",
    "peer",
    "space-x-reverse",
    "space-y-reverse",
    "bg-gradient-to-t",
    "bg-gradient-to-tr",
    "bg-gradient-to-r",
    "bg-gradient-to-br",
    "bg-gradient-to-b",
    "bg-gradient-to-bl",
    "bg-gradient-to-l",
    "bg-gradient-to-tl",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scale {
    Standalone,
    Suffixes(Suffixes),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suffixes {
    pub values: Vec<&'static str>,
    pub colors: bool,
    pub narrow: bool,
    pub integers: Option<RangeInclusive<u32>>,
}

impl Suffixes {
    fn of(groups: &[&[&'static str]]) -> Self {
        Self {
            values: groups.iter().flat_map(|group| group.iter().copied()).collect(),
            ..Self::default()
        }
    }

    fn colors(mut self) -> Self {
        self.colors = true;
        self
    }

    fn narrow(mut self) -> Self {
        self.narrow = true;
        self
    }

    fn integers(mut self, range: RangeInclusive<u32>) -> Self {
        self.integers = Some(range);
        self
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.values.contains(&suffix)
    }

    pub fn accepts_integer(&self, value: u32) -> bool {
        self.integers
            .as_ref()
            .is_some_and(|range| range.contains(&value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTable {
    entries: HashMap<&'static str, Scale>,
}

impl ScaleTable {
    pub fn get(&self, prefix: &str) -> Option<&Scale> {
        self.entries.get(prefix)
    }

    pub fn suffixes(&self, prefix: &str) -> Option<&Suffixes> {
        match self.entries.get(prefix) {
            Some(Scale::Suffixes(suffixes)) => Some(suffixes),
            _ => None,
        }
    }

    /// True when `name` is a complete utility on its own: a standalone entry,
    /// or a prefix whose vocabulary includes the empty suffix (`border`, `ring`).
    pub fn is_complete(&self, name: &str) -> bool {
        match self.entries.get(name) {
            Some(Scale::Standalone) => true,
            Some(Scale::Suffixes(suffixes)) => suffixes.contains(""),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn scale_table() -> &'static ScaleTable {
    static TABLE: OnceLock<ScaleTable> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

pub fn accepts_arbitrary_value(prefix: &str) -> bool {
    ARBITRARY_VALUE_PREFIXES.contains(&prefix)
}

pub fn accepts_negative_value(prefix: &str) -> bool {
    NEGATIVE_VALUE_PREFIXES.contains(&prefix)
}

fn build_table() -> ScaleTable {
    let mut entries = HashMap::new();
    for name in STANDALONE {
        entries.insert(*name, Scale::Standalone);
    }
    let mut add = |prefixes: &[&'static str], suffixes: Suffixes| {
        for prefix in prefixes {
            entries.insert(*prefix, Scale::Suffixes(suffixes.clone()));
        }
    };

    // layout
    add(
        &["overflow", "overflow-x", "overflow-y"],
        Suffixes::of(&[&["auto", "hidden", "clip", "visible", "scroll"]]),
    );
    add(
        &["overscroll", "overscroll-x", "overscroll-y"],
        Suffixes::of(&[&["auto", "contain", "none"]]),
    );
    add(&["z"], Suffixes::of(&[Z_INDEX]));
    add(&["order"], Suffixes::of(&[ORDER]).integers(1..=12));
    add(&["isolation"], Suffixes::of(&[&["auto"]]));
    add(
        &["box"],
        Suffixes::of(&[&["border", "content", "decoration-clone", "decoration-slice"]]),
    );
    add(
        &["float"],
        Suffixes::of(&[&["right", "left", "none", "start", "end"]]),
    );
    add(
        &["clear"],
        Suffixes::of(&[&["left", "right", "both", "none", "start", "end"]]),
    );
    add(
        &["object"],
        Suffixes::of(&[&[
            "contain",
            "cover",
            "fill",
            "none",
            "scale-down",
            "bottom",
            "center",
            "left",
            "left-bottom",
            "left-top",
            "right",
            "right-bottom",
            "right-top",
            "top",
        ]]),
    );
    add(&["aspect"], Suffixes::of(&[&["auto", "square", "video"]]));
    add(
        &["columns"],
        Suffixes::of(&[&["auto"], CONTAINER_SIZES]).integers(1..=12),
    );
    add(
        &["break-after", "break-before"],
        Suffixes::of(&[&[
            "auto",
            "avoid",
            "all",
            "avoid-page",
            "page",
            "left",
            "right",
            "column",
        ]]),
    );
    add(
        &["break-inside"],
        Suffixes::of(&[&["auto", "avoid", "avoid-page", "avoid-column"]]),
    );
    add(&["break"], Suffixes::of(&[&["normal", "words", "all", "keep"]]));
    add(
        &["inset", "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        Suffixes::of(&[&["auto", "full", "px"]]),
    );

    // flexbox and grid
    add(
        &["flex"],
        Suffixes::of(&[&[
            "",
            "1",
            "auto",
            "initial",
            "none",
            "row",
            "row-reverse",
            "col",
            "col-reverse",
            "wrap",
            "wrap-reverse",
            "nowrap",
            "grow",
            "grow-0",
            "shrink",
            "shrink-0",
        ]]),
    );
    add(&["grow", "shrink", "flex-grow", "flex-shrink"], Suffixes::of(&[TOGGLE_FILTERS]));
    add(
        &["basis"],
        Suffixes::of(&[&["auto", "full", "px"], CONTAINER_SIZES]),
    );
    add(&["grid-cols", "grid-rows"], Suffixes::of(&[GRID_TRACKS]).integers(1..=12));
    add(&["col-span", "row-span"], Suffixes::of(&[GRID_SPANS]));
    add(
        &["col-start", "col-end", "row-start", "row-end"],
        Suffixes::of(&[GRID_LINES]),
    );
    add(&["col", "row"], Suffixes::of(&[&["auto"]]));
    add(
        &["grid-flow"],
        Suffixes::of(&[&["row", "col", "dense", "row-dense", "col-dense"]]),
    );
    add(
        &["auto-cols", "auto-rows"],
        Suffixes::of(&[&["auto", "min", "max", "fr"]]),
    );
    add(&["gap", "gap-x", "gap-y"], Suffixes::default());
    add(
        &["justify"],
        Suffixes::of(&[&[
            "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
        ]]),
    );
    add(
        &["justify-items", "place-items"],
        Suffixes::of(&[&["normal", "start", "end", "center", "stretch", "baseline"]]),
    );
    add(
        &["justify-self", "place-self", "self"],
        Suffixes::of(&[&["auto", "start", "end", "center", "stretch", "baseline"]]),
    );
    add(
        &["items"],
        Suffixes::of(&[&["start", "end", "center", "baseline", "stretch"]]),
    );
    add(
        &["content", "place-content"],
        Suffixes::of(&[&[
            "normal", "center", "start", "end", "between", "around", "evenly", "baseline",
            "stretch", "none",
        ]]),
    );

    // spacing
    add(
        &["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        Suffixes::default(),
    );
    add(
        &["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        Suffixes::of(&[&["auto"]]),
    );
    add(&["space-x", "space-y"], Suffixes::default());
    add(
        &[
            "scroll-m", "scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt",
            "scroll-mr", "scroll-mb", "scroll-ml", "scroll-p", "scroll-px", "scroll-py",
            "scroll-ps", "scroll-pe", "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
        ],
        Suffixes::default(),
    );

    // sizing
    add(
        &["w"],
        Suffixes::of(&[
            &[
                "auto", "full", "screen", "svw", "lvw", "dvw", "min", "max", "fit", "px",
            ],
            CONTAINER_SIZES,
        ]),
    );
    add(
        &["min-w"],
        Suffixes::of(&[&["auto", "full", "min", "max", "fit", "px"], CONTAINER_SIZES]),
    );
    add(
        &["max-w"],
        Suffixes::of(&[
            &[
                "none",
                "full",
                "min",
                "max",
                "fit",
                "px",
                "prose",
                "screen-sm",
                "screen-md",
                "screen-lg",
                "screen-xl",
                "screen-2xl",
            ],
            CONTAINER_SIZES,
        ]),
    );
    add(
        &["h"],
        Suffixes::of(&[&[
            "auto", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit", "px", "lh",
        ]]),
    );
    add(
        &["min-h", "max-h"],
        Suffixes::of(&[&[
            "auto", "none", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit", "px", "lh",
        ]]),
    );
    add(
        &["size"],
        Suffixes::of(&[&["auto", "full", "min", "max", "fit", "px"]]),
    );

    // typography
    add(&["font"], Suffixes::of(&[FONT_WEIGHTS, FONT_FAMILIES]));
    add(
        &["text"],
        Suffixes::of(&[
            TEXT_SIZES,
            &[
                "left", "center", "right", "justify", "start", "end", "wrap", "nowrap", "balance",
                "pretty", "ellipsis", "clip",
            ],
        ])
        .colors(),
    );
    add(&["leading"], Suffixes::of(&[LEADING]));
    add(&["tracking"], Suffixes::of(&[TRACKING]));
    add(
        &["line-clamp"],
        Suffixes::of(&[&["none", "1", "2", "3", "4", "5", "6"]]),
    );
    add(&["indent"], Suffixes::default());
    add(
        &["decoration"],
        Suffixes::of(&[&[
            "solid",
            "double",
            "dotted",
            "dashed",
            "wavy",
            "auto",
            "from-font",
            "0",
            "1",
            "2",
            "4",
            "8",
            "clone",
            "slice",
        ]])
        .colors(),
    );
    add(
        &["underline-offset"],
        Suffixes::of(&[&["auto", "0", "1", "2", "4", "8"]]),
    );
    add(
        &["whitespace"],
        Suffixes::of(&[&[
            "normal",
            "nowrap",
            "pre",
            "pre-line",
            "pre-wrap",
            "break-spaces",
        ]]),
    );
    add(&["hyphens"], Suffixes::of(&[&["none", "manual", "auto"]]));
    add(
        &["list"],
        Suffixes::of(&[&["inside", "outside", "none", "disc", "decimal"]]),
    );
    add(
        &["align"],
        Suffixes::of(&[&[
            "baseline",
            "top",
            "middle",
            "bottom",
            "text-top",
            "text-bottom",
            "sub",
            "super",
        ]]),
    );
    add(
        &["prose"],
        Suffixes::of(&[&["", "sm", "base", "lg", "xl", "2xl", "invert"]]),
    );

    // backgrounds and gradients
    add(
        &["bg"],
        Suffixes::of(&[&[
            "fixed",
            "local",
            "scroll",
            "auto",
            "cover",
            "contain",
            "repeat",
            "no-repeat",
            "repeat-x",
            "repeat-y",
            "repeat-round",
            "repeat-space",
            "bottom",
            "center",
            "left",
            "left-bottom",
            "left-top",
            "right",
            "right-bottom",
            "right-top",
            "top",
            "none",
            "clip-border",
            "clip-padding",
            "clip-content",
            "clip-text",
            "origin-border",
            "origin-padding",
            "origin-content",
        ]])
        .colors(),
    );
    add(&["from", "via", "to"], Suffixes::of(&[GRADIENT_STOPS]).colors());

    // borders
    add(
        &["border"],
        Suffixes::of(&[
            BORDER_WIDTHS,
            &[
                "solid", "dashed", "dotted", "double", "hidden", "none", "collapse", "separate",
            ],
        ])
        .colors()
        .narrow(),
    );
    add(
        &[
            "border-x", "border-y", "border-s", "border-e", "border-t", "border-r", "border-b",
            "border-l",
        ],
        Suffixes::of(&[BORDER_WIDTHS]).colors().narrow(),
    );
    add(
        &["border-spacing", "border-spacing-x", "border-spacing-y"],
        Suffixes::default(),
    );
    add(
        &["divide"],
        Suffixes::of(&[&["solid", "dashed", "dotted", "double", "none"]]).colors(),
    );
    add(&["divide-x", "divide-y"], Suffixes::of(&[DIVIDE_WIDTHS]).narrow());
    add(
        &["ring"],
        Suffixes::of(&[&[""], RING_WIDTHS, &["inset"]]).colors().narrow(),
    );
    add(&["ring-offset"], Suffixes::of(&[RING_WIDTHS]).colors().narrow());
    add(
        &["outline"],
        Suffixes::of(&[
            &["", "none", "hidden", "solid", "dashed", "dotted", "double"],
            OUTLINE_WIDTHS,
        ])
        .colors()
        .narrow(),
    );
    add(&["outline-offset"], Suffixes::of(&[OUTLINE_WIDTHS]).narrow());
    add(
        &[
            "rounded",
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        Suffixes::of(&[RADII]),
    );

    // svg and form colors
    add(&["fill"], Suffixes::of(&[&["none"]]).colors());
    add(&["stroke"], Suffixes::of(&[&["none", "0", "1", "2"]]).colors());
    add(&["accent"], Suffixes::of(&[&["auto"]]).colors());
    add(&["caret", "placeholder"], Suffixes::default().colors());

    // effects and filters
    add(&["shadow"], Suffixes::of(&[SHADOWS]).colors());
    add(&["drop-shadow"], Suffixes::of(&[DROP_SHADOWS]));
    add(&["opacity", "backdrop-opacity"], Suffixes::of(&[OPACITY]));
    add(
        &["mix-blend", "bg-blend"],
        Suffixes::of(&[&[
            "normal",
            "multiply",
            "screen",
            "overlay",
            "darken",
            "lighten",
            "color-dodge",
            "color-burn",
            "hard-light",
            "soft-light",
            "difference",
            "exclusion",
            "hue",
            "saturation",
            "color",
            "luminosity",
            "plus-darker",
            "plus-lighter",
        ]]),
    );
    add(&["filter", "backdrop-filter"], Suffixes::of(&[&["", "none"]]));
    add(&["blur", "backdrop-blur"], Suffixes::of(&[BLURS]));
    add(&["brightness", "backdrop-brightness"], Suffixes::of(&[BRIGHTNESS]));
    add(&["contrast", "backdrop-contrast"], Suffixes::of(&[CONTRAST]));
    add(&["saturate", "backdrop-saturate"], Suffixes::of(&[SATURATE]));
    add(&["hue-rotate", "backdrop-hue-rotate"], Suffixes::of(&[HUE_ROTATE]));
    add(
        &[
            "grayscale",
            "invert",
            "sepia",
            "backdrop-grayscale",
            "backdrop-invert",
            "backdrop-sepia",
        ],
        Suffixes::of(&[TOGGLE_FILTERS]),
    );

    // transforms
    add(&["transform"], Suffixes::of(&[&["", "none", "gpu", "cpu"]]));
    add(&["scale", "scale-x", "scale-y"], Suffixes::of(&[SCALES]));
    add(&["rotate"], Suffixes::of(&[ROTATIONS]));
    add(&["skew-x", "skew-y"], Suffixes::of(&[SKEWS]));
    add(
        &["translate-x", "translate-y"],
        Suffixes::of(&[&["full", "px"]]),
    );
    add(
        &["origin"],
        Suffixes::of(&[&[
            "center",
            "top",
            "top-right",
            "right",
            "bottom-right",
            "bottom",
            "bottom-left",
            "left",
            "top-left",
        ]]),
    );

    // transitions and animation
    add(
        &["transition"],
        Suffixes::of(&[&["", "none", "all", "colors", "opacity", "shadow", "transform"]]),
    );
    add(&["duration", "delay"], Suffixes::of(&[DURATIONS]));
    add(&["ease"], Suffixes::of(&[&["linear", "in", "out", "in-out"]]));
    add(
        &["animate"],
        Suffixes::of(&[&["none", "spin", "ping", "pulse", "bounce"]]),
    );

    // interactivity
    add(
        &["cursor"],
        Suffixes::of(&[&[
            "auto",
            "default",
            "pointer",
            "wait",
            "text",
            "move",
            "help",
            "not-allowed",
            "none",
            "context-menu",
            "progress",
            "cell",
            "crosshair",
            "vertical-text",
            "alias",
            "copy",
            "no-drop",
            "grab",
            "grabbing",
            "all-scroll",
            "col-resize",
            "row-resize",
            "n-resize",
            "e-resize",
            "s-resize",
            "w-resize",
            "ne-resize",
            "nw-resize",
            "se-resize",
            "sw-resize",
            "ew-resize",
            "ns-resize",
            "nesw-resize",
            "nwse-resize",
            "zoom-in",
            "zoom-out",
        ]]),
    );
    add(&["select"], Suffixes::of(&[&["none", "text", "all", "auto"]]));
    add(&["resize"], Suffixes::of(&[&["", "none", "y", "x"]]));
    add(&["scroll"], Suffixes::of(&[&["auto", "smooth"]]));
    add(
        &["snap"],
        Suffixes::of(&[&[
            "start",
            "end",
            "center",
            "align-none",
            "normal",
            "always",
            "x",
            "y",
            "both",
            "mandatory",
            "proximity",
            "none",
        ]]),
    );
    add(
        &["touch"],
        Suffixes::of(&[&[
            "auto",
            "none",
            "pan-x",
            "pan-left",
            "pan-right",
            "pan-y",
            "pan-up",
            "pan-down",
            "pinch-zoom",
            "manipulation",
        ]]),
    );
    add(&["pointer-events"], Suffixes::of(&[&["none", "auto"]]));
    add(&["appearance"], Suffixes::of(&[&["none", "auto"]]));
    add(
        &["will-change"],
        Suffixes::of(&[&["auto", "scroll", "contents", "transform"]]),
    );
    add(&["forced-color-adjust"], Suffixes::of(&[&["auto", "none"]]));

    // tables
    add(
        &["table"],
        Suffixes::of(&[&[
            "",
            "auto",
            "fixed",
            "caption",
            "cell",
            "column",
            "column-group",
            "footer-group",
            "header-group",
            "row-group",
            "row",
        ]]),
    );
    add(&["caption"], Suffixes::of(&[&["top", "bottom"]]));

    ScaleTable { entries }
}

#[cfg(test)]
mod tests {
    use super::{Scale, accepts_arbitrary_value, accepts_negative_value, scale_table};

    #[test]
    fn table_is_built_once() {
        let first = scale_table();
        let second = scale_table();
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }

    #[test]
    fn standalone_and_empty_suffix_entries_are_complete() {
        let table = scale_table();
        assert!(table.is_complete("flex"));
        assert!(table.is_complete("border"));
        assert!(table.is_complete("sr-only"));
        assert!(!table.is_complete("p"));
        assert!(!table.is_complete("text"));
        assert_eq!(table.get("hidden"), Some(&Scale::Standalone));
    }

    #[test]
    fn narrow_width_utilities_do_not_take_spacing() {
        let table = scale_table();
        for prefix in ["border", "border-t", "ring", "ring-offset", "divide-x", "outline"] {
            let suffixes = table.suffixes(prefix).expect("prefix should have suffixes");
            assert!(suffixes.narrow, "{} should keep its own scale", prefix);
        }
        let padding = table.suffixes("p").expect("padding should have suffixes");
        assert!(!padding.narrow);
    }

    #[test]
    fn integer_ranges_are_bounded() {
        let table = scale_table();
        let cols = table.suffixes("grid-cols").expect("grid-cols suffixes");
        assert!(cols.accepts_integer(12));
        assert!(!cols.accepts_integer(13));
        assert!(!cols.accepts_integer(0));
    }

    #[test]
    fn capability_lists() {
        assert!(accepts_arbitrary_value("w"));
        assert!(!accepts_arbitrary_value("foo"));
        assert!(accepts_negative_value("mt"));
        assert!(!accepts_negative_value("p"));
    }
}
