mod config_tests;
mod display_tests;
