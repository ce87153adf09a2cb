// Element ids the host page is expected to provide.

pub const PLOT_ID: &str = "plot";
pub const MODE_DERIVATIVE_ID: &str = "mode-derivative";
pub const MODE_INTEGRAL_ID: &str = "mode-integral";
pub const PARAM_SLIDER_ID: &str = "param-slider";
pub const PARAM_LABEL_ID: &str = "param-label";
pub const PARAM_HINT_ID: &str = "param-hint";
pub const START_BUTTON_ID: &str = "start-btn";
pub const RESET_BUTTON_ID: &str = "reset-btn";
pub const EXPLANATION_ID: &str = "explanation";

// Ids that must exist for the widget to mount at all
pub const REQUIRED_IDS: [&str; 5] = [
    PLOT_ID,
    MODE_DERIVATIVE_ID,
    MODE_INTEGRAL_ID,
    PARAM_SLIDER_ID,
    START_BUTTON_ID,
];
