pub mod form_fields;
pub mod modal;
pub mod pagination_controls;
pub mod table_checkbox;
