use bevy::{
    prelude::*,
    pbr::StandardMaterial,
    utils::HashMap,
};
use bevy_asset_loader::prelude::*;
use crate::serialization::caching::MaterialCache;

/// Autoloads every texture under `assets/materials/<name>/` and turns each
/// material directory into a [`StandardMaterial`] registered in the
/// [`MaterialCache`] under `<name>`. Texture roles are recognized by file
/// suffix (`_albedo`, `_ao`, `_normal`, `_met_roughness`).
pub struct MaterialAutoloader;

#[derive(AssetCollection, Resource, Default)]
pub struct MaterialTextures {
    #[asset(path = "materials", collection(typed, mapped))]
    pub textures: HashMap<String, Handle<Image>>,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum TunnelAssetState {
    #[default]
    Loading,
    Ready,
}

impl Plugin for MaterialAutoloader {
    fn build(&self, app: &mut App) {
        app.init_state::<TunnelAssetState>()
            .add_loading_state(
                LoadingState::new(TunnelAssetState::Loading)
                    .continue_to_state(TunnelAssetState::Ready)
                    .load_collection::<MaterialTextures>(),
            )
            .add_systems(OnEnter(TunnelAssetState::Ready), preload_materials_system);
    }
}

fn preload_materials_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    material_textures: Res<MaterialTextures>,
) {
    let mut material_cache = MaterialCache::new();
    let mut material_sets: HashMap<String, MaterialPaths> = HashMap::new();

    for file_path in material_textures.textures.keys() {
        debug!("Loading material texture: {}", file_path);

        let (material_name, texture_role) = extract_tex_data(file_path);
        let Some(texture_role) = texture_role else {
            continue;
        };

        let entry = material_sets.entry(material_name).or_default();
        match texture_role {
            TextureRole::Albedo => entry.albedo = Some(file_path.to_string()),
            TextureRole::Occlusion => entry.occlusion = Some(file_path.to_string()),
            TextureRole::Normal => entry.normal = Some(file_path.to_string()),
            TextureRole::MetallicRoughness => entry.metallic_roughness = Some(file_path.to_string()),
        }
    }

    for (material_name, paths) in material_sets.iter() {
        let material_handle = materials.add(StandardMaterial {
            base_color_texture: paths.albedo.as_ref().map(|path| asset_server.load(path)),
            occlusion_texture: paths.occlusion.as_ref().map(|path| asset_server.load(path)),
            normal_map_texture: paths.normal.as_ref().map(|path| asset_server.load(path)),
            metallic_roughness_texture: paths
                .metallic_roughness
                .as_ref()
                .map(|path| asset_server.load(path)),
            metallic: 0.1,
            perceptual_roughness: 0.9,
            // Many texture libraries author normal maps for DirectX (-Y). Flip to match Bevy's expected +Y.
            flip_normal_map_y: true,
            ..Default::default()
        });

        material_cache.insert(material_name.clone(), material_handle);
    }

    info!("[Materials] {} materials registered", material_cache.len());
    commands.insert_resource(material_cache);
}

#[derive(Default)]
struct MaterialPaths {
    albedo: Option<String>,
    occlusion: Option<String>,
    normal: Option<String>,
    metallic_roughness: Option<String>,
}

#[derive(Clone, Copy, Debug)]
enum TextureRole {
    Albedo,
    Occlusion,
    Normal,
    MetallicRoughness,
}

fn extract_tex_data(tex_name: &str) -> (String, Option<TextureRole>) {
    let parts: Vec<&str> = tex_name.split('/').collect();
    let materials_index = parts.iter().position(|&part| part == "materials").unwrap_or(0);
    let material_name = parts.get(materials_index + 1).unwrap_or(&"").to_string();

    let role = if tex_name.contains("_albedo") {
        Some(TextureRole::Albedo)
    } else if tex_name.contains("_ao") {
        Some(TextureRole::Occlusion)
    } else if tex_name.contains("_normal") {
        Some(TextureRole::Normal)
    } else if tex_name.contains("_met_roughness") || tex_name.contains("_metallicRoughness") {
        Some(TextureRole::MetallicRoughness)
    } else {
        None
    };

    (material_name, role)
}
