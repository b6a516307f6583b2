use std::collections::HashMap;
use std::sync::Mutex;
use std::fs::File;
use ron::de::{from_reader, SpannedError};
use lazy_static::lazy_static;
use crate::core::tunnel_config::TunnelConfig;

lazy_static! {
    static ref CONFIG_CACHE: Mutex<HashMap<String, TunnelConfig>> = Mutex::new(HashMap::new());
}

/// Loads a named tunnel configuration from `assets/tunnels/<name>.ron`,
/// caching the parsed result for later bakes of the same preset.
pub fn import_tunnel_config(config_name: String) -> Result<TunnelConfig, ron::Error> {
    let mut cache = CONFIG_CACHE.lock().unwrap();

    if let Some(cached_config) = cache.get(&config_name) {
        return Ok(cached_config.clone());
    }

    let file_path = format!("assets/tunnels/{}.ron", config_name);
    let file = File::open(&file_path)?;
    let deserialized: Result<TunnelConfig, SpannedError> = from_reader(file);

    match deserialized {
        Ok(config) => {
            cache.insert(config_name, config.clone());
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}
