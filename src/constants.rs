// DOM ids, selectors and class names the front end binds to. Shared by the
// wiring code and the host tests.

// Root
pub const SMOOTH_SCROLL_CLASS: &str = "smooth-scroll"; // on <html> while the driver owns scrolling
pub const SCROLL_LOCKED_CLASS: &str = "scroll-locked";

// Hero
pub const HERO_ID: &str = "hero";
pub const HERO_CANVAS_ID: &str = "terrain-canvas";
pub const HERO_TITLE_LINE1_ID: &str = "hero-title-1";
pub const HERO_TITLE_LINE2_ID: &str = "hero-title-2";
pub const HERO_BIO_ID: &str = "hero-bio";

// Leaderboard
pub const LEADERBOARD_CONTAINER_ID: &str = "leaderboard-widget";
pub const LEADERBOARD_ROWS_ID: &str = "leaderboard-rows";

// Journey (photo gallery)
pub const JOURNEY_TITLE_ID: &str = "journey-title";
pub const JOURNEY_GRID_ID: &str = "journey-grid";
pub const GALLERY_LIGHTBOX_ID: &str = "gallery-lightbox";

// Projects
pub const PROJECTS_CONTAINER_ID: &str = "projects-bento";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const PROJECT_LINK_SELECTOR: &str = ".project-card a[href]"; // follows the link instead of opening the modal
pub const PROJECT_MODAL_ID: &str = "project-modal";

// Overlay parts, looked up inside an overlay root
pub const OVERLAY_CONTENT_SELECTOR: &str = ".overlay-content";
pub const OVERLAY_CLOSE_SELECTOR: &str = ".overlay-close";
pub const OVERLAY_IMAGE_SELECTOR: &str = ".overlay-image";
pub const OVERLAY_TITLE_SELECTOR: &str = ".overlay-title";
pub const OVERLAY_BODY_SELECTOR: &str = ".overlay-body";
pub const OVERLAY_TAG_SELECTOR: &str = ".overlay-tag";

// Data attributes carrying record ids on rendered items
pub const ITEM_ID_ATTR: &str = "data-item-id";
pub const RUNNER_ID_ATTR: &str = "data-runner-id";

// Mobile nav
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_MENU_LINKS_ID: &str = "nav-menu-links";
pub const NAV_MENU_FOOTER_ID: &str = "nav-menu-footer";
pub const NAV_MENU_LINKS: [(&str, &str); 5] = [
    ("MISSION", "#mission"),
    ("LEADERBOARD", "#leaderboard"),
    ("GALLERY", "#gallery"),
    ("OUR PROJECTS", "#projects"),
    ("JOIN THE CLUB", "#join"),
];

// In-page anchors handled by the smooth-scroll driver
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^='#']";
