pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dialog;
pub mod entry_list;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod toast;
pub mod validators;
