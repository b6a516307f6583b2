pub mod spawn_events;
pub mod event_listeners;
pub mod event_system_plugin;
pub mod spawn_macro;
