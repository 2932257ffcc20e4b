// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the Pet Manager back-office: a teal brand color on a
slate neutral scale, status colors for sales, and a 4px spacing grid.

## Organization

- **Palette**: Brand, neutral and status colors
- **Opacity**: Backdrop and hover overlays
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Header, sidebar and toast dimensions
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pet_manager::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Backdrop behind the sidebar drawer
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::from_rgb(0.059, 0.090, 0.165); // slate-900
    pub const WHITE: Color = Color::WHITE;

    // Slate neutrals: secondary text, table headers, card borders
    pub const GRAY_400: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const GRAY_200: Color = Color::from_rgb(0.886, 0.910, 0.941);

    /// Brand teal: active menu entry, toast accent.
    pub const PRIMARY_500: Color = Color::from_rgb(0.051, 0.580, 0.533);

    // Status colors (sale status column, destructive toasts, form errors)
    pub const SUCCESS_500: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const WARNING_500: Color = Color::from_rgb(0.851, 0.467, 0.024);
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Hover tint on menu entries.
    pub const OVERLAY_SUBTLE: f32 = 0.15;
    /// Drawer and modal backdrops.
    pub const OVERLAY_MEDIUM: f32 = 0.45;
    pub const OVERLAY_HOVER: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (4px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 64.0;

    pub const SIDEBAR_WIDTH: f32 = 256.0;
    pub const TOAST_WIDTH: f32 = 356.0;

    /// Width of auth cards and the new-sale modal.
    pub const FORM_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page titles.
    pub const TITLE_LG: f32 = 30.0;

    /// Section titles, summary card values.
    pub const TITLE_MD: f32 = 20.0;

    /// Toast titles.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Descriptions, field errors.
    pub const BODY_SM: f32 = 13.0;

    /// Table headers.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Widths
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accent border.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Floating surfaces: toasts and the modal card.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_HOVER);
    assert!(opacity::OVERLAY_HOVER < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::MD > radius::SM);

    // The sidebar drawer and toasts must fit the minimum window width (360).
    assert!(sizing::SIDEBAR_WIDTH < 360.0);
    assert!(sizing::TOAST_WIDTH <= 360.0);
    assert!(sizing::FORM_WIDTH < 1024.0);
};
