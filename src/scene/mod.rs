pub mod area_light;
pub mod overrides;
pub mod resolver;

pub use overrides::{MaterialOverride, OverrideRule, SceneRules};
pub use resolver::{SceneObject, object_id, resolve_object, resolve_params};
