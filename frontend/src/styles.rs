pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-5xl rounded-xl shadow-lg mt-16";
pub const CONTAINER_SM: &str = "container mx-auto px-4 py-6 max-w-3xl";

pub const CARD_HOVER_SCALE: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 transform transition-transform duration-200 hover:scale-105";
pub const CARD_SECTION: &str = "bg-gray-800 border border-gray-700 p-4 rounded-lg shadow-sm";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 focus:ring-2 focus:ring-blue-400 focus:outline-none";
pub const BUTTON_SECONDARY: &str = "bg-gray-600 hover:bg-gray-700 focus:ring-2 focus:ring-gray-400 focus:outline-none";

pub const VOTE_BUTTON: &str = "w-10 h-10 rounded-full flex items-center justify-center text-xl transition-all duration-150 ease-out disabled:cursor-wait";
pub const VOTE_UP_ACTIVE: &str = "bg-green-600 text-white ring-2 ring-green-400";
pub const VOTE_DOWN_ACTIVE: &str = "bg-red-600 text-white ring-2 ring-red-400";
pub const VOTE_IDLE: &str = "bg-gray-700 hover:bg-gray-600 text-gray-300";

pub const TAG: &str = "inline-block bg-gray-700 text-gray-300 text-xs font-medium px-2 py-1 rounded-full mr-1 mb-1";
pub const BADGE_PREMIUM: &str = "inline-block bg-yellow-500 text-gray-900 text-xs font-bold px-2 py-1 rounded";

pub const OVERLAY: &str = "fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4";
pub const MODAL: &str = "bg-gray-800 border border-gray-600 rounded-xl shadow-2xl p-8 max-w-md w-full text-white";

pub const TEXT_LABEL: &str = "block text-sm font-semibold text-gray-200";
pub const TEXT_ERROR: &str = "text-sm text-red-500 font-semibold";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-4 text-center text-gray-100";
pub const HEADING_MD: &str = "text-2xl font-bold mb-5 text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const FLEX_BETWEEN: &str = "flex justify-between items-center";
pub const SPACE_Y_BASE: &str = "space-y-3";
pub const SPACE_Y_LG: &str = "space-y-6";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
}

pub fn button_secondary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_SECONDARY)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}
