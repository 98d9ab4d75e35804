//! Hand-authored per-scene material overrides.
//!
//! Each scene owns an ordered rule list. A rule matches when its pattern is
//! contained in the object identifier; the first match is the only one
//! applied, so more specific patterns must come before shorter ones that
//! they contain.

use glam::Vec3;

use crate::types::MaterialParams;

/// Field assignments applied on top of the parsed material.
///
/// `None` leaves the parsed (or default) value in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialOverride {
    pub emission: Option<Vec3>,
    pub intensity: Option<f32>,
    pub attenuation: Option<f32>,
    pub emissive: Option<bool>,
    pub diffuse: Option<Vec3>,
    pub reflective: Option<Vec3>,
    pub alpha: Option<Vec3>,
    pub subsurface: Option<Vec3>,
    pub subsurface_attenuation: Option<f32>,
    pub glossiness: Option<f32>,
    pub anisotropic: Option<bool>,
    pub diffuse_map: Option<&'static str>,
    pub specular_map: Option<&'static str>,
}

impl MaterialOverride {
    pub const NONE: MaterialOverride = MaterialOverride {
        emission: None,
        intensity: None,
        attenuation: None,
        emissive: None,
        diffuse: None,
        reflective: None,
        alpha: None,
        subsurface: None,
        subsurface_attenuation: None,
        glossiness: None,
        anisotropic: None,
        diffuse_map: None,
        specular_map: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Overwrite exactly the fields this override sets.
    pub fn apply(&self, params: &mut MaterialParams) {
        if let Some(v) = self.emission {
            params.emission = v;
        }
        if let Some(v) = self.intensity {
            params.intensity = v;
        }
        if let Some(v) = self.attenuation {
            params.attenuation = v;
        }
        if let Some(v) = self.emissive {
            params.emissive = v;
        }
        if let Some(v) = self.diffuse {
            params.diffuse = v;
        }
        if let Some(v) = self.reflective {
            params.reflective = v;
        }
        if let Some(v) = self.alpha {
            params.alpha = v;
        }
        if let Some(v) = self.subsurface {
            params.subsurface = v;
        }
        if let Some(v) = self.subsurface_attenuation {
            params.subsurface_attenuation = v;
        }
        if let Some(v) = self.glossiness {
            params.glossiness = v;
        }
        if let Some(v) = self.anisotropic {
            params.anisotropic = v;
        }
        if let Some(name) = self.diffuse_map {
            params.diffuse_map = name.to_string();
        }
        if let Some(name) = self.specular_map {
            params.specular_map = name.to_string();
        }
    }
}

/// One `(pattern, overrides)` entry of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverrideRule {
    pub pattern: &'static str,
    pub overrides: MaterialOverride,
}

impl OverrideRule {
    pub fn matches(&self, object_id: &str) -> bool {
        object_id.contains(self.pattern)
    }
}

/// Ordered rule list of one scene.
#[derive(Debug)]
pub struct SceneRules {
    pub scene: &'static str,
    pub rules: &'static [OverrideRule],
}

const fn rule(pattern: &'static str, overrides: MaterialOverride) -> OverrideRule {
    OverrideRule { pattern, overrides }
}

const fn gray(v: f32) -> Option<Vec3> {
    Some(Vec3::splat(v))
}

const fn rgb(r: f32, g: f32, b: f32) -> Option<Vec3> {
    Some(Vec3::new(r, g, b))
}

const NONE: MaterialOverride = MaterialOverride::NONE;

/// A white emitter of the given intensity.
const fn light(intensity: f32) -> MaterialOverride {
    MaterialOverride {
        emission: gray(1.0),
        intensity: Some(intensity),
        emissive: Some(true),
        ..NONE
    }
}

/// All scenes, each with its rules in match order.
pub static SCENES: &[SceneRules] = &[
    SceneRules {
        scene: "kitchen",
        rules: &[
            rule("MainLightSource", MaterialOverride { attenuation: Some(0.07), ..light(3.0) }),
            rule(
                "BalconyLightSource",
                MaterialOverride {
                    emission: rgb(0.25, 0.63, 0.80),
                    attenuation: Some(0.1),
                    ..light(1.0)
                },
            ),
            rule("MainStructure", MaterialOverride { diffuse: gray(0.9), ..NONE }),
            rule(
                "BackWall",
                MaterialOverride { diffuse: gray(1.0), reflective: gray(0.1), ..NONE },
            ),
            rule(
                "WindowFrame",
                MaterialOverride {
                    diffuse: gray(0.8),
                    reflective: gray(0.5),
                    glossiness: Some(0.4),
                    ..NONE
                },
            ),
            rule(
                "WindowGlass",
                MaterialOverride { reflective: gray(0.2), alpha: gray(0.9), ..NONE },
            ),
            rule(
                "Floor",
                MaterialOverride { diffuse_map: Some("wood_floor_interior_2.ppm"), ..NONE },
            ),
            rule("TableFrame", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "TableTop",
                MaterialOverride {
                    diffuse: gray(0.1),
                    reflective: gray(0.6),
                    glossiness: Some(0.2),
                    ..NONE
                },
            ),
            rule("ChairFrame", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "ChairTop",
                MaterialOverride {
                    diffuse: gray(0.1),
                    reflective: gray(0.6),
                    glossiness: Some(0.4),
                    ..NONE
                },
            ),
            rule(
                "Cabinet",
                MaterialOverride {
                    diffuse_map: Some("drawer_front_color.ppm"),
                    specular_map: Some("drawer_front_spec.ppm"),
                    ..NONE
                },
            ),
            rule(
                "PlantLeaves",
                MaterialOverride {
                    diffuse: rgb(0.6, 0.9, 0.2),
                    subsurface: rgb(0.5, 0.8, 0.15),
                    subsurface_attenuation: Some(2.0),
                    ..NONE
                },
            ),
            rule("FlowerPot", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule("Plates", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule("Bowls", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "Bottle",
                MaterialOverride { reflective: gray(0.3), alpha: gray(0.9), ..NONE },
            ),
            rule(
                "Milk",
                MaterialOverride {
                    diffuse: gray(1.0),
                    subsurface: gray(1.0),
                    subsurface_attenuation: Some(0.2),
                    ..NONE
                },
            ),
            rule("MetalContainer", MaterialOverride { reflective: gray(0.8), ..NONE }),
            rule("LampCover", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "WaterFaucet",
                MaterialOverride { reflective: gray(0.8), glossiness: Some(0.02), ..NONE },
            ),
            rule("BackBoards", MaterialOverride { diffuse: rgb(0.8, 0.56, 0.2), ..NONE }),
            rule(
                "Hood_Middle",
                MaterialOverride {
                    diffuse_map: Some("hood.ppm"),
                    reflective: gray(0.4),
                    glossiness: Some(0.02),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "dining_room",
        rules: &[
            rule("HungLightSource", light(0.2)),
            rule("SideRoofLight", NONE),
            rule("MiddleRoofLight", light(1.5)),
            rule(
                "OuterLight",
                MaterialOverride { emission: rgb(1.0, 0.95, 0.85), ..light(3.0) },
            ),
            rule(
                "MainFloor",
                MaterialOverride {
                    diffuse_map: Some("floor_COLOR.ppm"),
                    specular_map: Some("floor_SPEC.ppm"),
                    reflective: gray(0.7),
                    glossiness: Some(0.4),
                    ..NONE
                },
            ),
            rule("ChairFrame", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "ChairTop",
                MaterialOverride {
                    diffuse: gray(0.0),
                    reflective: gray(0.2),
                    glossiness: Some(0.1),
                    ..NONE
                },
            ),
            rule("MainStructure", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule("CabinetBody", MaterialOverride { diffuse: rgb(0.8, 0.7, 0.4), ..NONE }),
            rule(
                "CabinetGlass",
                MaterialOverride { alpha: gray(0.7), reflective: gray(0.5), ..NONE },
            ),
            rule("Drawers", MaterialOverride { diffuse: rgb(0.8, 0.7, 0.4), ..NONE }),
            rule("Painting", MaterialOverride { diffuse_map: Some("painting.ppm"), ..NONE }),
            rule(
                "WallWithPaper",
                MaterialOverride { diffuse_map: Some("congruent_pentagon.ppm"), ..NONE },
            ),
            rule(
                "WallLowerSide",
                MaterialOverride {
                    diffuse: gray(0.1),
                    reflective: gray(0.3),
                    glossiness: Some(0.2),
                    diffuse_map: Some("marble_wall_lower_COLOR.ppm"),
                    ..NONE
                },
            ),
            rule("WallPads", MaterialOverride { diffuse: rgb(0.85, 0.8, 0.6), ..NONE }),
            rule("RoofTop", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule("RoofStructure", MaterialOverride { diffuse: rgb(1.0, 0.9, 0.8), ..NONE }),
            rule(
                "HungLamps",
                MaterialOverride {
                    diffuse: gray(0.0),
                    reflective: gray(0.7),
                    glossiness: Some(0.2),
                    ..NONE
                },
            ),
            rule(
                "Bowl",
                MaterialOverride {
                    diffuse: gray(0.1),
                    reflective: gray(0.8),
                    glossiness: Some(0.1),
                    ..NONE
                },
            ),
            rule(
                "TableGlass",
                MaterialOverride { alpha: gray(0.7), reflective: gray(0.5), ..NONE },
            ),
            rule(
                "TablePillar",
                MaterialOverride {
                    diffuse: gray(0.1),
                    reflective: gray(0.6),
                    glossiness: Some(0.03),
                    ..NONE
                },
            ),
            rule(
                "Circle",
                MaterialOverride {
                    diffuse: gray(0.1),
                    reflective: gray(1.0),
                    glossiness: Some(0.5),
                    anisotropic: Some(true),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "bowling",
        rules: &[
            rule("SideLight", light(30.0)),
            rule(
                "Pin",
                MaterialOverride {
                    diffuse_map: Some("pin-diffuse.ppm"),
                    reflective: gray(0.2),
                    glossiness: Some(0.4),
                    ..NONE
                },
            ),
            rule(
                "BowlingBall",
                MaterialOverride {
                    diffuse_map: Some("cellgn.ppm"),
                    reflective: gray(0.4),
                    glossiness: Some(0.3),
                    ..NONE
                },
            ),
            rule(
                "MainFloor",
                MaterialOverride {
                    diffuse_map: Some("wood_floor.ppm"),
                    reflective: gray(0.4),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "milk",
        rules: &[
            rule(
                "LightSource",
                MaterialOverride { alpha: gray(0.7), reflective: gray(0.5), ..light(5.0) },
            ),
            rule(
                "Bottle",
                MaterialOverride { reflective: gray(0.3), alpha: gray(0.9), ..NONE },
            ),
            rule("Milk0", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "Milk1",
                MaterialOverride {
                    diffuse: gray(1.0),
                    subsurface: gray(1.0),
                    subsurface_attenuation: Some(0.1),
                    ..NONE
                },
            ),
            rule(
                "Ground",
                MaterialOverride {
                    diffuse_map: Some("marble_texture_milk.ppm"),
                    reflective: gray(0.4),
                    glossiness: Some(0.2),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "throw",
        rules: &[
            rule("TopLight", MaterialOverride { attenuation: Some(0.0), ..light(1.2) }),
            rule("Base", MaterialOverride { diffuse: gray(0.5), ..NONE }),
            rule("Pole", MaterialOverride { diffuse: gray(0.7), ..NONE }),
            rule(
                "Ground",
                MaterialOverride {
                    diffuse_map: Some("marble_texture_milk.ppm"),
                    reflective: gray(0.4),
                    glossiness: Some(0.1),
                    ..NONE
                },
            ),
            rule(
                "Glass",
                MaterialOverride {
                    reflective: gray(0.05),
                    alpha: gray(1.0),
                    glossiness: Some(0.0),
                    ..NONE
                },
            ),
            rule(
                "Milk1",
                MaterialOverride { diffuse: gray(1.0), subsurface: gray(1.0), ..NONE },
            ),
            rule("Milk2", MaterialOverride { diffuse: gray(1.0), ..NONE }),
            rule(
                "Angel",
                MaterialOverride {
                    diffuse: rgb(0.75, 0.5, 0.35),
                    subsurface: rgb(0.9, 0.6, 0.2),
                    subsurface_attenuation: Some(0.3),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "angel",
        rules: &[
            rule("TopLight", MaterialOverride { attenuation: Some(0.0), ..light(1.2) }),
            rule(
                "Ground",
                MaterialOverride {
                    diffuse_map: Some("marble_texture_milk.ppm"),
                    reflective: gray(0.4),
                    glossiness: Some(0.1),
                    ..NONE
                },
            ),
            rule(
                "Angel",
                MaterialOverride {
                    diffuse: rgb(0.75, 0.5, 0.35),
                    subsurface: rgb(0.9, 0.6, 0.2),
                    subsurface_attenuation: Some(0.3),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "lift",
        rules: &[
            rule(
                "Door",
                MaterialOverride {
                    diffuse_map: Some("brushed_metal.ppm"),
                    reflective: gray(1.0),
                    glossiness: Some(0.5),
                    anisotropic: Some(true),
                    ..NONE
                },
            ),
            rule("TopLight", MaterialOverride { attenuation: Some(0.03), ..light(0.6) }),
            rule("Monkey", MaterialOverride { diffuse: rgb(1.0, 0.7, 0.0), ..NONE }),
        ],
    },
    SceneRules {
        scene: "pot",
        rules: &[
            rule("LightSource", light(1.5)),
            rule(
                "PotBody",
                MaterialOverride {
                    reflective: gray(1.0),
                    glossiness: Some(0.5),
                    anisotropic: Some(true),
                    ..NONE
                },
            ),
            rule(
                "PotBar",
                MaterialOverride { reflective: gray(1.0), glossiness: Some(0.2), ..NONE },
            ),
            rule(
                "PotRing",
                MaterialOverride { reflective: gray(1.0), glossiness: Some(0.2), ..NONE },
            ),
            rule(
                "TopHandle",
                MaterialOverride { reflective: gray(0.1), glossiness: Some(1.0), ..NONE },
            ),
            rule(
                "PotGlass",
                MaterialOverride { reflective: gray(0.3), alpha: gray(0.8), ..NONE },
            ),
            rule(
                "Table",
                MaterialOverride {
                    diffuse_map: Some("marble-table_COLOR.ppm"),
                    reflective: gray(0.3),
                    glossiness: Some(0.3),
                    ..NONE
                },
            ),
        ],
    },
    SceneRules {
        scene: "bullet",
        rules: &[
            rule(
                "Droplet",
                MaterialOverride { alpha: gray(0.8), reflective: gray(0.3), ..NONE },
            ),
            rule(
                "Ground",
                MaterialOverride {
                    diffuse: gray(0.9),
                    reflective: gray(0.4),
                    glossiness: Some(0.2),
                    ..NONE
                },
            ),
            rule("LightSource", MaterialOverride { attenuation: Some(0.05), ..light(5.0) }),
        ],
    },
    SceneRules {
        scene: "concave",
        rules: &[
            rule("LightSource", light(3.0)),
            rule("Torus", MaterialOverride { reflective: gray(0.8), ..NONE }),
        ],
    },
];

/// Rule list of `scene`, if the scene is known.
pub fn rules_for(scene: &str) -> Option<&'static [OverrideRule]> {
    SCENES.iter().find(|s| s.scene == scene).map(|s| s.rules)
}

/// First rule of `scene` whose pattern occurs in `object_id`.
pub fn lookup(scene: &str, object_id: &str) -> Option<&'static OverrideRule> {
    rules_for(scene)?.iter().find(|r| r.matches(object_id))
}

/// Identifiers of every scene with overrides.
pub fn known_scenes() -> impl Iterator<Item = &'static str> {
    SCENES.iter().map(|s| s.scene)
}
