// Slider catalogue: DOM ids, ranges and value-label formatting.

/// How a slider value is printed next to its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    Percent,
    Degrees,
    Decimal,
}

impl ValueFormat {
    pub fn format(self, value: f32) -> String {
        match self {
            ValueFormat::Percent => format!("{:.1}%", value),
            ValueFormat::Degrees => format!("{:.0}°", value),
            ValueFormat::Decimal => format!("{:.1}", value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    LightPosition,
    ArcLength,
    ArcCenterX,
    ArcCenterY,
    ArcCenterZ,
    ArcRotation,
    AmbientIntensity,
    DirectionalIntensity,
    PointIntensity,
    WindowWidth,
    WindowHeight,
    WindowPositionX,
    WindowPositionY,
}

impl ControlId {
    pub const ALL: [ControlId; 13] = [
        ControlId::LightPosition,
        ControlId::ArcLength,
        ControlId::ArcCenterX,
        ControlId::ArcCenterY,
        ControlId::ArcCenterZ,
        ControlId::ArcRotation,
        ControlId::AmbientIntensity,
        ControlId::DirectionalIntensity,
        ControlId::PointIntensity,
        ControlId::WindowWidth,
        ControlId::WindowHeight,
        ControlId::WindowPositionX,
        ControlId::WindowPositionY,
    ];

    /// Id of the `<input type="range">` element.
    pub fn input_id(self) -> &'static str {
        match self {
            ControlId::LightPosition => "lightPosition",
            ControlId::ArcLength => "arcLength",
            ControlId::ArcCenterX => "arcCenterX",
            ControlId::ArcCenterY => "arcCenterY",
            ControlId::ArcCenterZ => "arcCenterZ",
            ControlId::ArcRotation => "arcRotation",
            ControlId::AmbientIntensity => "ambientIntensity",
            ControlId::DirectionalIntensity => "directionalIntensity",
            ControlId::PointIntensity => "pointIntensity",
            ControlId::WindowWidth => "windowWidth",
            ControlId::WindowHeight => "windowHeight",
            ControlId::WindowPositionX => "windowPositionX",
            ControlId::WindowPositionY => "windowPositionY",
        }
    }

    /// Id of the element showing the formatted value.
    pub fn value_label_id(self) -> &'static str {
        match self {
            ControlId::LightPosition => "positionValue",
            ControlId::ArcLength => "arcValue",
            ControlId::ArcCenterX => "centerXValue",
            ControlId::ArcCenterY => "centerYValue",
            ControlId::ArcCenterZ => "centerZValue",
            ControlId::ArcRotation => "rotationValue",
            ControlId::AmbientIntensity => "ambientValue",
            ControlId::DirectionalIntensity => "directionalValue",
            ControlId::PointIntensity => "pointValue",
            ControlId::WindowWidth => "windowWidthValue",
            ControlId::WindowHeight => "windowHeightValue",
            ControlId::WindowPositionX => "windowPositionXValue",
            ControlId::WindowPositionY => "windowPositionYValue",
        }
    }

    /// Inclusive `(min, max)` accepted for this control.
    pub fn range(self) -> (f32, f32) {
        match self {
            ControlId::LightPosition => (0.0, 100.0),
            ControlId::ArcLength => (0.0, 360.0),
            ControlId::ArcCenterX | ControlId::ArcCenterZ => (-10.0, 10.0),
            ControlId::ArcCenterY => (0.0, 15.0),
            ControlId::ArcRotation => (0.0, 360.0),
            ControlId::AmbientIntensity
            | ControlId::DirectionalIntensity
            | ControlId::PointIntensity => (0.0, 2.0),
            ControlId::WindowWidth => (0.5, 10.0),
            ControlId::WindowHeight => (0.5, 8.0),
            ControlId::WindowPositionX => (-5.0, 5.0),
            ControlId::WindowPositionY => (0.0, 8.0),
        }
    }

    pub fn value_format(self) -> ValueFormat {
        match self {
            ControlId::LightPosition => ValueFormat::Percent,
            ControlId::ArcLength | ControlId::ArcRotation => ValueFormat::Degrees,
            _ => ValueFormat::Decimal,
        }
    }

    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        let (lo, hi) = self.range();
        value.clamp(lo, hi)
    }

    #[inline]
    pub fn format_value(self, value: f32) -> String {
        self.value_format().format(value)
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn from_input_id(id: &str) -> Option<ControlId> {
        Self::ALL.iter().copied().find(|c| c.input_id() == id)
    }
}

// Other DOM ids used by the control panel
pub const SHOW_PATH_ID: &str = "showPath";
pub const SAVE_BUTTON_ID: &str = "saveStateBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";
pub const ROOM_NAME_INPUT_ID: &str = "stateNameInput";
pub const SAVED_ROOMS_LIST_ID: &str = "savedStatesList";
pub const RESET_CAMERA_BUTTON_ID: &str = "resetCameraBtn";
pub const ENABLE_CAMERA_ID: &str = "enableCameraControls";
pub const CAMERA_MODE_SELECTOR: &str = "input[name=\"cameraMode\"]";

/// Top-left corner for a dragged panel, kept fully inside the viewport.
///
/// When the panel is larger than the viewport it pins to the top-left edge.
pub fn clamp_panel_position(
    x: f64,
    y: f64,
    panel_w: f64,
    panel_h: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> (f64, f64) {
    let max_x = (viewport_w - panel_w).max(0.0);
    let max_y = (viewport_h - panel_h).max(0.0);
    (x.min(max_x).max(0.0), y.min(max_y).max(0.0))
}
