pub mod site_settings_upsert_request;
