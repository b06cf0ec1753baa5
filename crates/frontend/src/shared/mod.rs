pub mod api_utils;
pub mod components;
pub mod data_table;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod number_format;
