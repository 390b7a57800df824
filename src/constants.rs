// Page wiring: element ids, colours and hero copy used by the web layer.

// Backdrop
pub const CANVAS_ID: &str = "particle-canvas";
pub const STAR_FILL: &str = "#f472b6"; // pink-400 accent
pub const LINK_RGB: (u8, u8, u8) = (244, 114, 182); // same accent as rgb
pub const LINK_WIDTH: f64 = 1.0;

// Hero typing effect
pub const TYPED_ROLE_ID: &str = "typed-role";
pub const HERO_ROLES: [&str; 3] = [
    "a Computer Science on Pre-Med Student",
    "a Product/Software Engineer",
    "an AI Enthusiast",
];

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const DARK_CLASS: &str = "dark";
pub const THEME_ICON_DARK: &str = "\u{2600}"; // sun: offers switching to light
pub const THEME_ICON_LIGHT: &str = "\u{263E}"; // moon

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const FIELD_ERROR_ID_SUFFIX: &str = "-error"; // e.g. "name-error"
pub const SUBMIT_LABEL_IDLE: &str = "Send Message";
pub const SUBMIT_LABEL_SENDING: &str = "Sending...";
pub const HIDDEN_CLASS: &str = "hidden";
pub const STATUS_OK_CLASS: &str = "status-ok";
pub const STATUS_ERR_CLASS: &str = "status-error";
