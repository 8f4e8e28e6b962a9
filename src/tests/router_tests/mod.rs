mod admin_tests;
mod preferences_tests;
mod roomchange_tests;
mod roomdetails_tests;
