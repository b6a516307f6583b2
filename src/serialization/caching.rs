use std::collections::HashMap;
use bevy::asset::Handle;
use bevy::prelude::Resource;
use bevy_pbr::StandardMaterial;

/// Material handles keyed by the names that tunnel configurations refer to
/// ([`crate::core::tmaterial::TMaterial`]). Filled by the autoloader, read
/// at mesh bake time.
#[derive(Resource, Default)]
pub struct MaterialCache {
    map: HashMap<String, Handle<StandardMaterial>>,
}

impl MaterialCache {
    pub fn new() -> Self {
        MaterialCache {
            map: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: String, handle: Handle<StandardMaterial>) {
        self.map.insert(name, handle);
    }

    pub fn get(&self, name: &str) -> Option<&Handle<StandardMaterial>> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
