// Shared layout, domain and animation tuning constants.

// Viewport (logical pixels)
pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 500.0;
pub const VIEW_PADDING: f64 = 60.0;

// Mathematical domain shown in the viewport
pub const X_MIN: f64 = -1.0;
pub const X_MAX: f64 = 5.0;
pub const Y_MIN: f64 = -2.0;
pub const Y_MAX: f64 = 10.0;

// Curve sampling
pub const CURVE_STEPS: usize = 200;
pub const CURVE_Y_MARGIN: f64 = 1.0; // samples beyond [Y_MIN - m, Y_MAX + m] are dropped

// Derivative mode
pub const DERIVATIVE_X0: f64 = 2.0; // anchor point of the secant
pub const DX_MIN: f64 = 0.1;
pub const DX_MAX: f64 = 2.0;
pub const DX_SLIDER_STEP: f64 = 0.05;
pub const DX_DEFAULT: f64 = 1.5;
pub const DX_ANIM_STEP: f64 = 0.02; // shrink per tick
pub const DX_EPSILON: f64 = 1e-9; // tolerance when detecting the floor
pub const TANGENT_EMPHASIS_DX: f64 = 0.3; // tangent is fully opaque below this dx
pub const SECANT_OVERHANG: f64 = 0.5; // secant extends this far past both points
pub const TANGENT_HALF_SPAN: f64 = 1.5;

// Integral mode
pub const INTEGRAL_A: f64 = 0.0;
pub const INTEGRAL_B: f64 = 3.0;
pub const N_MIN: u32 = 1;
pub const N_MAX: u32 = 50;
pub const N_DEFAULT: u32 = 5;

// Animation timer period (milliseconds)
pub const TICK_INTERVAL_MS: u64 = 100;

// Axis tick labels
pub const X_TICK_LABELS: [i32; 4] = [1, 2, 3, 4];
pub const Y_TICK_LABELS: [i32; 4] = [2, 4, 6, 8];

// Overlay pixel offsets
pub const MARKER_RADIUS: f64 = 6.0;
pub const BAR_OFFSET_PX: f64 = 5.0; // dx/dy bars sit this far from the triangle
pub const BAR_LABEL_OFFSET_PX: f64 = 25.0;
pub const BOUND_TICK_HALF_PX: f64 = 10.0;
pub const BOUND_LABEL_OFFSET_PX: f64 = 30.0;
pub const READOUT_INSET_PX: f64 = 10.0; // from the right edge of the graph area
pub const READOUT_FIRST_LINE_PX: f64 = 30.0;
pub const READOUT_LINE_SPACING_PX: f64 = 30.0;
pub const FUNCTION_LABEL_X: f64 = 2.2;
