//! Direction-mirrored Tailwind class tables.
//!
//! Every builder here is total over [`Direction`]: `ltr` and `rtl` each map
//! to a complete table, and "start"/"end" tokens swap physical sides between
//! the two.

use ashbal_common::Direction;
use serde::Serialize;

/// A side named relative to the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalSide {
    /// Where reading begins.
    Start,
    /// Where reading ends.
    End,
}

/// A side on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalSide {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl PhysicalSide {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// One-letter Tailwind suffix (`l` or `r`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    /// Full name (`left` or `right`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Resolve a logical side to a physical one.
#[must_use]
pub const fn physical_side(side: LogicalSide, dir: Direction) -> PhysicalSide {
    match (side, dir) {
        (LogicalSide::Start, Direction::Ltr) | (LogicalSide::End, Direction::Rtl) => {
            PhysicalSide::Left
        }
        (LogicalSide::Start, Direction::Rtl) | (LogicalSide::End, Direction::Ltr) => {
            PhysicalSide::Right
        }
    }
}

/// Semantic class tokens for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionClasses {
    /// Text aligned to the start side.
    pub text_align: &'static str,
    /// Text aligned to the end side.
    pub text_align_reverse: &'static str,
    /// Row flex direction.
    pub flex_direction: &'static str,
    /// `space-x-reverse` in RTL, empty otherwise.
    pub space_reverse: &'static str,
    /// Margin on the start side.
    pub margin_start: &'static str,
    /// Margin on the end side.
    pub margin_end: &'static str,
    /// Padding on the start side.
    pub padding_start: &'static str,
    /// Padding on the end side.
    pub padding_end: &'static str,
    /// Border on the start side.
    pub border_start: &'static str,
    /// Border on the end side.
    pub border_end: &'static str,
    /// Rounded corners on the start side.
    pub rounded_start: &'static str,
    /// Rounded corners on the end side.
    pub rounded_end: &'static str,
    /// Float towards the start side.
    pub float_start: &'static str,
    /// Float towards the end side.
    pub float_end: &'static str,
}

const LTR_CLASSES: DirectionClasses = DirectionClasses {
    text_align: "text-left",
    text_align_reverse: "text-right",
    flex_direction: "flex-row",
    space_reverse: "",
    margin_start: "ml-4",
    margin_end: "mr-4",
    padding_start: "pl-4",
    padding_end: "pr-4",
    border_start: "border-l",
    border_end: "border-r",
    rounded_start: "rounded-l",
    rounded_end: "rounded-r",
    float_start: "float-left",
    float_end: "float-right",
};

const RTL_CLASSES: DirectionClasses = DirectionClasses {
    text_align: "text-right",
    text_align_reverse: "text-left",
    flex_direction: "flex-row-reverse",
    space_reverse: "space-x-reverse",
    margin_start: "mr-4",
    margin_end: "ml-4",
    padding_start: "pr-4",
    padding_end: "pl-4",
    border_start: "border-r",
    border_end: "border-l",
    rounded_start: "rounded-r",
    rounded_end: "rounded-l",
    float_start: "float-right",
    float_end: "float-left",
};

/// The class table for a direction.
#[must_use]
pub const fn rtl_classes(dir: Direction) -> DirectionClasses {
    match dir {
        Direction::Ltr => LTR_CLASSES,
        Direction::Rtl => RTL_CLASSES,
    }
}

/// Start-side spacing classes of a given Tailwind size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RtlSpacing {
    /// Start margin.
    pub margin_x: String,
    /// Start padding.
    pub padding_x: String,
    /// Horizontal gap between children.
    pub space_x: String,
}

/// Start-side spacing for `size` (a Tailwind spacing step such as `"4"`).
#[must_use]
pub fn rtl_spacing(dir: Direction, size: &str) -> RtlSpacing {
    let side = physical_side(LogicalSide::Start, dir).letter();
    RtlSpacing {
        margin_x: format!("m{side}-{size}"),
        padding_x: format!("p{side}-{size}"),
        space_x: match dir {
            Direction::Ltr => format!("space-x-{size}"),
            Direction::Rtl => format!("space-x-{size} space-x-reverse"),
        },
    }
}

/// Horizontal flip for directional icons (arrows, chevrons) in RTL.
#[must_use]
pub const fn icon_transform(dir: Direction, should_flip: bool) -> &'static str {
    if should_flip && dir.is_rtl() {
        "transform scale-x-[-1]"
    } else {
        ""
    }
}

/// Classes for a responsive grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridClasses {
    /// Grid container.
    pub container: String,
    /// Grid item alignment.
    pub item: &'static str,
    /// `dir` attribute for the container.
    pub direction: Direction,
}

/// Grid with `cols` columns from the `md` breakpoint up.
#[must_use]
pub fn grid_classes(dir: Direction, cols: u8) -> GridClasses {
    GridClasses {
        container: format!("grid grid-cols-1 md:grid-cols-{cols} gap-6"),
        item: rtl_classes(dir).text_align,
        direction: dir,
    }
}

/// Classes for a labelled form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormClasses {
    /// Field label.
    pub label: String,
    /// Input or textarea.
    pub input: String,
    /// Validation message.
    pub error: String,
    /// Help text under the field.
    pub help_text: String,
}

/// Form field classes; `has_error` switches the input border to red.
#[must_use]
pub fn form_classes(dir: Direction, has_error: bool) -> FormClasses {
    let align = rtl_classes(dir).text_align;
    let border = if has_error { "border-red-500" } else { "border-gray-300" };
    FormClasses {
        label: format!("block text-sm font-medium mb-2 {align}"),
        input: format!(
            "w-full px-4 py-2 border rounded-lg focus:ring-2 focus:ring-red-500 {align} {border}"
        ),
        error: format!("text-red-500 text-sm mt-1 {align}"),
        help_text: format!("text-gray-600 text-sm mt-1 {align}"),
    }
}

/// Classes for the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavClasses {
    /// Desktop container.
    pub container: String,
    /// Desktop item.
    pub item: &'static str,
    /// Mobile menu container.
    pub mobile_container: &'static str,
    /// Mobile menu item.
    pub mobile_item: String,
}

/// Navigation classes.
#[must_use]
pub fn nav_classes(dir: Direction) -> NavClasses {
    let table = rtl_classes(dir);
    NavClasses {
        container: match dir {
            Direction::Ltr => "flex items-center space-x-6".to_string(),
            Direction::Rtl => format!("flex items-center {} space-x-6", table.space_reverse),
        },
        item: "text-gray-800 hover:text-red-700 transition duration-150",
        mobile_container: "flex flex-col space-y-4",
        mobile_item: format!(
            "text-gray-800 hover:text-red-700 transition duration-150 py-2 {}",
            table.text_align
        ),
    }
}

/// Classes for a content card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardClasses {
    /// Card body.
    pub container: String,
    /// Icon and title row.
    pub header: String,
    /// Text block.
    pub content: &'static str,
    /// Icon wrapper.
    pub icon: &'static str,
}

/// Card classes.
#[must_use]
pub fn card_classes(dir: Direction) -> CardClasses {
    let table = rtl_classes(dir);
    CardClasses {
        container: format!("bg-white rounded-lg shadow-md p-6 {}", table.text_align),
        header: format!("flex items-start {} gap-4", table.flex_direction),
        content: "flex-1",
        icon: "flex-shrink-0",
    }
}

/// Classes for a main/sidebar layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsiveClasses {
    /// Outer flex container.
    pub flex_container: String,
    /// Main column.
    pub main_content: &'static str,
    /// Sidebar column.
    pub sidebar: &'static str,
    /// Stacking order on small screens.
    pub mobile_stack: &'static str,
}

/// Responsive layout classes.
#[must_use]
pub fn responsive_classes(dir: Direction) -> ResponsiveClasses {
    ResponsiveClasses {
        flex_container: rtl_class_name("flex flex-col lg:flex-row gap-6", "lg:flex-row-reverse", dir),
        main_content: "flex-1",
        sidebar: "lg:w-80",
        mobile_stack: match dir {
            Direction::Ltr => "flex-col",
            Direction::Rtl => "flex-col-reverse",
        },
    }
}

/// Slide and fade animation classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationClasses {
    /// Slide in from the start side.
    pub slide_in: &'static str,
    /// Slide out towards the end side.
    pub slide_out: &'static str,
    /// Fade in.
    pub fade_in: &'static str,
    /// Fade out.
    pub fade_out: &'static str,
}

/// Animation classes.
#[must_use]
pub const fn animation_classes(dir: Direction) -> AnimationClasses {
    let (slide_in, slide_out) = match dir {
        Direction::Ltr => ("animate-slide-in-left", "animate-slide-out-right"),
        Direction::Rtl => ("animate-slide-in-right", "animate-slide-out-left"),
    };
    AnimationClasses {
        slide_in,
        slide_out,
        fade_in: "animate-fade-in",
        fade_out: "animate-fade-out",
    }
}

/// `base` plus `rtl_extra` when the direction is RTL.
#[must_use]
pub fn rtl_class_name(base: &str, rtl_extra: &str, dir: Direction) -> String {
    let extra = if dir.is_rtl() { rtl_extra } else { "" };
    format!("{base} {extra}").trim().to_string()
}

/// CSS custom properties carrying the direction-dependent values.
#[must_use]
pub const fn css_custom_properties(dir: Direction) -> [(&'static str, &'static str); 6] {
    match dir {
        Direction::Ltr => [
            ("--text-align", "left"),
            ("--flex-direction", "row"),
            ("--margin-start", "0 0 0 1rem"),
            ("--margin-end", "0 1rem 0 0"),
            ("--border-radius-start", "0.5rem 0 0 0.5rem"),
            ("--border-radius-end", "0 0.5rem 0.5rem 0"),
        ],
        Direction::Rtl => [
            ("--text-align", "right"),
            ("--flex-direction", "row-reverse"),
            ("--margin-start", "0 1rem 0 0"),
            ("--margin-end", "0 0 0 1rem"),
            ("--border-radius-start", "0 0.5rem 0.5rem 0"),
            ("--border-radius-end", "0.5rem 0 0 0.5rem"),
        ],
    }
}
