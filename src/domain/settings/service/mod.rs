pub mod site_settings_service;
