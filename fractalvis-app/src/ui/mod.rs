mod control_menu;
mod help;
mod settings;
mod status;
