//! Design tokens
//!
//! One constant table shared by every component. Sizes are in pixels.

/// Color palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    /// Focus ring glow
    pub focus: &'static str,
    pub font: &'static str,
    pub font_light: &'static str,
    pub theme: &'static str,
    pub theme_light: &'static str,
    pub lightest: &'static str,
    /// Primary action buttons
    pub action: &'static str,
    pub action_light: &'static str,
    /// Validation errors
    pub warn: &'static str,
    pub warn_light: &'static str,
    /// Confirmed registration
    pub success: &'static str,
    pub success_light: &'static str,
    pub white: &'static str,
    pub white_light: &'static str,
}

/// Control border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: &'static str,
    pub width: u32,
    pub style: &'static str,
    pub radius: u32,
}

impl Border {
    /// CSS `border` shorthand
    pub fn css(&self) -> String {
        format!("{}px {} {}", self.width, self.style, self.color)
    }
}

/// Box shadows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadows {
    pub box_shadow: &'static str,
    pub inset: &'static str,
    pub deep: &'static str,
}

/// The full token table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Breakpoint below which layouts stack
    pub small_screen: u32,
    pub font_family: &'static str,
    pub font_size: u32,
    pub line_height: f32,
    pub text_transform: &'static str,
    pub spacing: u32,
    pub small_spacing: u32,
    /// Widest a page's centered box grows
    pub content_max_width: u32,
    /// Widest a form column grows
    pub form_max_width: u32,
    pub color: Colors,
    pub border: Border,
    /// Thin divider between page sections
    pub border_simple: &'static str,
    pub shadow: Shadows,
}

impl Theme {
    /// Glow drawn around a focused element
    pub fn focus_ring(&self) -> String {
        let c = self.color.focus;
        format!("0 0 10px {c}, 0 0 1px {c}, 0 0 0px {c}")
    }

    /// Focus glow for inputs, keeping their inset shadow
    pub fn input_focus_ring(&self) -> String {
        format!("{}, {}", self.shadow.inset, self.focus_ring())
    }
}

pub const THEME: Theme = Theme {
    small_screen: 500,
    font_family: "\"Open Sans\", sans-serif",
    font_size: 14,
    line_height: 1.5,
    text_transform: "capitalize",
    spacing: 24,
    small_spacing: 12,
    content_max_width: 600,
    form_max_width: 400,
    color: Colors {
        focus: "rgba(133, 191, 253, 1)",
        font: "#333",
        font_light: "#777",
        theme: "#475B6E",
        theme_light: "#475B6E",
        lightest: "#f5f5f5",
        action: "#FF803A",
        action_light: "#FF9861",
        warn: "#F8342D",
        warn_light: "#F86761",
        success: "#B2FF55",
        success_light: "#475B6E",
        white: "#788595",
        white_light: "#FFF",
    },
    border: Border {
        color: "#ddd",
        width: 2,
        style: "solid",
        radius: 10,
    },
    border_simple: "1px solid #ddd",
    shadow: Shadows {
        box_shadow: "2px 2px 2px rgba(0, 0, 0, 0.25), 0px 0px 4px rgba(0, 0, 0, 0.1)",
        inset: "inset 2px 2px 3px rgba(0, 0, 0, 0.1)",
        deep: "0px 0px 2px rgba(0, 0, 0, 0.15), 5px 5px 5px rgba(0, 0, 0, 0.3)",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_shorthand() {
        assert_eq!(THEME.border.css(), "2px solid #ddd");
    }

    #[test]
    fn focus_rings_use_focus_color() {
        assert!(THEME.focus_ring().starts_with("0 0 10px rgba(133, 191, 253, 1)"));
        assert!(THEME.input_focus_ring().starts_with(THEME.shadow.inset));
    }

    #[test]
    fn small_spacing_is_half_spacing() {
        assert_eq!(THEME.small_spacing * 2, THEME.spacing);
    }
}
