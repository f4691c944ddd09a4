// Page contract (ids, selectors, classes) and the inline CSS of the effects

pub const CANVAS_ID: &str = "bg-canvas";
pub const FORM_ID: &str = "contactForm";
pub const SUCCESS_ID: &str = "successMessage";

pub const FORM_CONTAINER_SELECTOR: &str = ".form-container";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-btn";
pub const BUTTON_TEXT_SELECTOR: &str = ".btn-text";
pub const FIELD_SELECTOR: &str = "input, textarea, select";
pub const FIELD_GROUP_SELECTOR: &str = ".form-group";
pub const FIELD_LABEL_SELECTOR: &str = ".code-comment";

pub const LOADING_CLASS: &str = "loading";
pub const SHOW_CLASS: &str = "show";

// Form fade-out target
pub const FORM_HIDDEN_SCALE: f64 = 0.8;

// Focus burst dots
pub const BURST_DOT_PX: u32 = 6;
pub const BURST_GRADIENT: &str = "linear-gradient(135deg, #00ff88, #00d4ff)";

// Confetti squares and circles
pub const CONFETTI_PX: u32 = 10;

pub const EFFECT_Z_INDEX: u32 = 9999;

// Typed console box, bottom-right corner
pub const TYPED_BOX_CSS: &str = "position:fixed;bottom:20px;right:20px;\
background:rgba(18, 18, 30, 0.95);padding:15px 20px;border-radius:10px;\
font-family:'Fira Code', monospace;color:#00ff88;font-size:14px;z-index:10000;\
border:1px solid rgba(0, 255, 136, 0.3);box-shadow:0 10px 30px rgba(0, 0, 0, 0.5);";

pub const ESCAPE_KEY: &str = "Escape";
