//! The scene registry: scene identifiers mapped to scene behaviour.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{EngineError, EngineResult};
use crate::scene::{Scene, SceneId};

/// An immutable set of scenes with designated intro and defeat scenes.
pub struct SceneRegistry {
    scenes: BTreeMap<SceneId, Box<dyn Scene>>,
    intro: SceneId,
    defeat: SceneId,
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneRegistry")
            .field("scenes", &self.scenes.keys().collect::<Vec<_>>())
            .field("intro", &self.intro)
            .field("defeat", &self.defeat)
            .finish()
    }
}

impl SceneRegistry {
    /// Start building a registry.
    pub fn builder(intro: impl Into<SceneId>, defeat: impl Into<SceneId>) -> RegistryBuilder {
        RegistryBuilder {
            scenes: Vec::new(),
            intro: intro.into(),
            defeat: defeat.into(),
        }
    }

    /// Look up a scene.
    pub fn get(&self, id: &SceneId) -> Option<&dyn Scene> {
        self.scenes.get(id).map(|scene| &**scene)
    }

    /// Returns true if a scene is registered under `id`.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.scenes.contains_key(id)
    }

    /// The scene every run starts with.
    pub fn intro(&self) -> &SceneId {
        &self.intro
    }

    /// The scene played when the player fails.
    pub fn defeat(&self) -> &SceneId {
        &self.defeat
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &SceneId> {
        self.scenes.keys()
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if no scenes are registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Check that every declared exit of every scene is registered.
    pub fn validate(&self) -> EngineResult<()> {
        for (id, scene) in &self.scenes {
            if let Some(missing) = scene.exits().iter().find(|exit| !self.contains(exit)) {
                return Err(EngineError::DanglingExit {
                    from: id.clone(),
                    to: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`SceneRegistry`].
pub struct RegistryBuilder {
    scenes: Vec<Box<dyn Scene>>,
    intro: SceneId,
    defeat: SceneId,
}

impl RegistryBuilder {
    /// Register a scene.
    pub fn scene(mut self, scene: impl Scene + 'static) -> Self {
        self.scenes.push(Box::new(scene));
        self
    }

    /// Finish the registry.
    ///
    /// Fails on duplicate identifiers, a missing intro or defeat scene, or a
    /// declared exit to an unregistered scene.
    pub fn build(self) -> EngineResult<SceneRegistry> {
        let mut scenes = BTreeMap::new();
        for scene in self.scenes {
            let id = scene.id().clone();
            if scenes.insert(id.clone(), scene).is_some() {
                return Err(EngineError::DuplicateScene(id));
            }
        }

        for (role, id) in [("intro", &self.intro), ("defeat", &self.defeat)] {
            if !scenes.contains_key(id) {
                return Err(EngineError::MissingScene {
                    role,
                    id: id.clone(),
                });
            }
        }

        let registry = SceneRegistry {
            scenes,
            intro: self.intro,
            defeat: self.defeat,
        };
        registry.validate()?;
        Ok(registry)
    }
}
