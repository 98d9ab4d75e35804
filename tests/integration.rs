//! End-to-end scene loads.
//!
//! These tests write synthetic meshes, material files and textures, run the
//! pipeline and check the resolved materials and lights.

use std::fs;
use std::path::Path;

use glam::Vec3;
use scene_binder::config::{BinderConfig, ObjectSpec};
use scene_binder::engine::{MemoryContext, channel};
use scene_binder::error::SceneBinderError;
use scene_binder::Pipeline;

const QUAD_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

/// Write a flat `n x n` grid on the XZ plane, `(n+1)^2` vertices.
fn grid_obj(n: usize) -> String {
    let verts = n + 1;
    let mut obj = String::new();
    for z in 0..verts {
        for x in 0..verts {
            obj.push_str(&format!("v {} 0 {}\n", x as f32 / n as f32, z as f32 / n as f32));
        }
    }
    for z in 0..n {
        for x in 0..n {
            let tl = z * verts + x + 1;
            let tr = tl + 1;
            let bl = tl + verts;
            let br = bl + 1;
            obj.push_str(&format!("f {tl} {bl} {tr}\nf {tr} {bl} {br}\n"));
        }
    }
    obj
}

fn write_ppm(path: &Path) {
    let img = image::RgbImage::from_fn(8, 8, |x, y| {
        if (x / 2 + y / 2) % 2 == 0 {
            image::Rgb([200, 160, 90])
        } else {
            image::Rgb([90, 60, 30])
        }
    });
    img.save(path).unwrap();
}

/// Bowling alley: a quad side light, a pin, a ball and the lane floor.
fn write_bowling_scene(dir: &Path) {
    let meshes = dir.join("meshes");
    let textures = dir.join("textures");
    fs::create_dir_all(&meshes).unwrap();
    fs::create_dir_all(&textures).unwrap();

    fs::write(meshes.join("SideLight.obj"), QUAD_OBJ).unwrap();
    fs::write(meshes.join("SideLight.mtl"), "Kd 0 0 0\nKe 0\n").unwrap();

    fs::write(meshes.join("Pin.obj"), grid_obj(2)).unwrap();
    fs::write(meshes.join("Pin.mtl"), "Ka 0.1 0.1 0.1\nKd 0.9 0.9 0.9\nKs 0.3 0.3 0.3\n").unwrap();

    fs::write(meshes.join("BowlingBall.obj"), grid_obj(3)).unwrap();

    fs::write(meshes.join("MainFloor.obj"), grid_obj(4)).unwrap();
    fs::write(meshes.join("MainFloor.mtl"), "Kd 0.5 0.4 0.3\nillum 2\n").unwrap();

    write_ppm(&textures.join("pin-diffuse.ppm"));
    write_ppm(&textures.join("cellgn.ppm"));
    write_ppm(&textures.join("wood_floor.ppm"));

    let manifest = r#"{
        "scene": "bowling",
        "texture_dir": "textures",
        "objects": [
            { "mesh": "meshes/SideLight.obj" },
            { "mesh": "meshes/Pin.obj" },
            { "mesh": "meshes/BowlingBall.obj" },
            { "mesh": "meshes/MainFloor.obj" }
        ]
    }"#;
    fs::write(dir.join("bowling.json"), manifest).unwrap();
}

#[test]
fn bowling_scene_from_manifest() {
    let tmp = tempfile::tempdir().unwrap();
    write_bowling_scene(tmp.path());

    let config = BinderConfig {
        manifest: Some(tmp.path().join("bowling.json")),
        area_lights: true,
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();

    assert_eq!(result.scene, "bowling");
    assert_eq!(result.objects.len(), 4);

    // Side light: override supersedes the dark, non-emissive material file.
    let light = &result.objects[0];
    assert_eq!(light.id, "SideLight.obj");
    assert!(light.params.emissive);
    assert_eq!(light.params.emission, Vec3::ONE);
    assert_eq!(light.params.intensity, 30.0);
    assert_eq!(light.channels.int(channel::IS_EMISSIVE), Some(1));

    // Pin: parsed colors kept, override adds map and reflectance.
    let pin = &result.objects[1];
    assert_eq!(pin.params.diffuse, Vec3::splat(0.9));
    assert_eq!(pin.params.ambient, Vec3::splat(0.1));
    assert_eq!(pin.params.reflective, Vec3::splat(0.2));
    assert_eq!(pin.params.glossiness, 0.4);
    assert_eq!(pin.channels.int(channel::HAS_DIFFUSE_MAP), Some(1));
    let kd_map = pin.channels.texture(channel::KD_MAP).unwrap();
    assert!(kd_map.id.ends_with("pin-diffuse.ppm"));
    assert_eq!((kd_map.width, kd_map.height), (8, 8));

    // Ball: no material file at all, still fully configured.
    let ball = &result.objects[2];
    assert_eq!(ball.params.diffuse, Vec3::ZERO);
    assert_eq!(ball.params.diffuse_map, "cellgn.ppm");
    assert_eq!(ball.channels.float(channel::GLOSSINESS), Some(0.3));

    let floor = &result.objects[3];
    assert_eq!(floor.params.diffuse, Vec3::new(0.5, 0.4, 0.3));
    assert_eq!(floor.vertices, 25);

    // Only the quad emitter becomes an area light.
    assert_eq!(result.lights.len(), 1);
    let area = &result.lights[0];
    assert_eq!(area.object, "SideLight.obj");
    assert_eq!(area.light.origin, Vec3::ZERO);
    assert_eq!(area.light.edge1, Vec3::X);
    assert_eq!(area.light.edge2, Vec3::Y);
    assert_eq!(area.light.color, Vec3::ONE);
    assert_eq!(area.light.intensity, 30.0);
}

#[test]
fn report_serializes_to_json() {
    let tmp = tempfile::tempdir().unwrap();
    write_bowling_scene(tmp.path());

    let config = BinderConfig {
        manifest: Some(tmp.path().join("bowling.json")),
        area_lights: true,
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["scene"], "bowling");
    assert_eq!(json["objects"].as_array().unwrap().len(), 4);
    assert_eq!(json["objects"][0]["channels"]["is_emissive"], 1);
    assert_eq!(json["objects"][0]["channels"]["reflection_maxdepth"], 5);
    assert_eq!(json["lights"][0]["object"], "SideLight.obj");
    assert_eq!(json["lights"][0]["intensity"], 30.0);
    assert!(json.get("duration").is_none());
}

#[test]
fn missing_scene_texture_binds_flat_sampler() {
    let tmp = tempfile::tempdir().unwrap();
    write_bowling_scene(tmp.path());
    fs::remove_file(tmp.path().join("textures/cellgn.ppm")).unwrap();

    let config = BinderConfig {
        manifest: Some(tmp.path().join("bowling.json")),
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();

    let ball = &result.objects[2];
    assert_eq!(ball.id, "BowlingBall.obj");
    assert_eq!(ball.params.diffuse_map, "cellgn.ppm");
    assert_eq!(ball.channels.int(channel::HAS_DIFFUSE_MAP), Some(1));
    assert!(ball.channels.texture(channel::KD_MAP).unwrap().is_flat());

    // Other objects keep their real textures.
    let pin = &result.objects[1];
    assert!(!pin.channels.texture(channel::KD_MAP).unwrap().is_flat());
}

#[test]
fn unreadable_material_map_does_not_abort_scene() {
    let tmp = tempfile::tempdir().unwrap();
    let mesh = tmp.path().join("Vase.obj");
    fs::write(&mesh, QUAD_OBJ).unwrap();
    fs::write(tmp.path().join("Vase.mtl"), "Kd 0.5 0.5 0.5\nmap_Kd not_shipped.ppm\n").unwrap();

    let config = BinderConfig {
        scene: Some("concave".into()),
        objects: vec![ObjectSpec::new(&mesh)],
        texture_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();

    let obj = &result.objects[0];
    assert_eq!(obj.channels.float3(channel::K_DIFFUSE), Some(Vec3::splat(0.5)));
    assert_eq!(obj.channels.int(channel::HAS_DIFFUSE_MAP), Some(1));
    assert!(obj.channels.texture(channel::KD_MAP).unwrap().is_flat());
}

#[test]
fn non_quad_emitter_has_no_area_light() {
    let tmp = tempfile::tempdir().unwrap();
    let mesh = tmp.path().join("LightSource.obj");
    fs::write(&mesh, grid_obj(2)).unwrap();

    let config = BinderConfig {
        scene: Some("concave".into()),
        objects: vec![ObjectSpec::new(&mesh)],
        area_lights: true,
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();

    assert!(result.objects[0].params.emissive);
    assert_eq!(result.objects[0].params.intensity, 3.0);
    assert!(result.lights.is_empty());

    // Asking for the light directly is refused.
    let mut ctx = MemoryContext::new();
    let load = Pipeline::run_with(&mut ctx, &config).unwrap();
    assert!(matches!(
        load.objects[0].area_light().unwrap_err(),
        SceneBinderError::AreaLight(_)
    ));
}

#[test]
fn material_file_emission_without_override() {
    let tmp = tempfile::tempdir().unwrap();
    let mesh = tmp.path().join("Panel.obj");
    fs::write(&mesh, QUAD_OBJ).unwrap();
    fs::write(tmp.path().join("Panel.mtl"), "Ke 4\n").unwrap();

    let config = BinderConfig {
        scene: Some("kitchen".into()),
        objects: vec![ObjectSpec::new(&mesh)],
        area_lights: true,
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();

    let obj = &result.objects[0];
    assert!(obj.params.emissive);
    assert_eq!(obj.params.emission, Vec3::splat(4.0));
    assert_eq!(result.lights.len(), 1);
    assert_eq!(result.lights[0].light.color, Vec3::splat(4.0));
    assert_eq!(result.lights[0].light.attenuation, 0.1);
}

#[test]
fn unknown_scene_keeps_material_file() {
    let tmp = tempfile::tempdir().unwrap();
    let mesh = tmp.path().join("SideLight.obj");
    fs::write(&mesh, QUAD_OBJ).unwrap();
    let mtl = tmp.path().join("custom.mtl");
    fs::write(&mtl, "Kd 0.2 0.3 0.4\n").unwrap();

    let config = BinderConfig {
        scene: Some("garage".into()),
        objects: vec![ObjectSpec {
            mesh,
            material: Some(mtl),
        }],
        ..Default::default()
    };
    let result = Pipeline::run(&config).unwrap();

    assert!(!result.objects[0].params.emissive);
    assert_eq!(result.objects[0].params.diffuse, Vec3::new(0.2, 0.3, 0.4));
}
