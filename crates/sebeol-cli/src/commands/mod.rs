pub mod config_ops;
pub mod keymap_ops;
pub mod type_ops;
