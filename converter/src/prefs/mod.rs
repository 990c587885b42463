pub mod widget_prefs;
