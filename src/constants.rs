// DOM hooks the page markup must provide.

// Carousel
pub const CONTAINER_SELECTOR: &str = ".coverflow-container";
pub const ITEM_SELECTOR: &str = ".coverflow-item";
pub const DOTS_ID: &str = "dots";
pub const TITLE_ID: &str = "title";
pub const DESCRIPTION_ID: &str = "description";
pub const PREV_BUTTON_SELECTOR: &str = ".nav-button.left";
pub const NEXT_BUTTON_SELECTOR: &str = ".nav-button.right";
pub const PLAY_PAUSE_SELECTOR: &str = ".play-pause-button";
pub const PLAY_ICON_SELECTOR: &str = ".play-icon";
pub const PAUSE_ICON_SELECTOR: &str = ".pause-icon";

// Configuration sources
pub const PARAMS_ATTRIBUTE: &str = "data-coverflow"; // JSON on the container
pub const SLIDES_SCRIPT_ID: &str = "coverflow-slides"; // <script type="application/json">

// Item internals
pub const REFLECTION_SELECTOR: &str = ".reflection";
pub const IMAGE_LOADING_CLASS: &str = "image-loading";

// Classes and animations
pub const ACTIVE_CLASS: &str = "active";
pub const DOT_CLASS: &str = "dot";
pub const CAPTION_FADE_ANIMATION: &str = "fadeIn 0.6s forwards";

// Page chrome
pub const SECTION_SELECTOR: &str = ".section";
pub const MENU_ITEM_SELECTOR: &str = ".menu-item";
pub const EXTERNAL_CLASS: &str = "external";
pub const HEADER_ID: &str = "header";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const SCROLL_TOP_ID: &str = "scrollToTop";
pub const VISIBLE_CLASS: &str = "visible";
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
