//! In-memory scene

use crate::ports::outbound::SceneCollaborator;
use serde::{Deserialize, Serialize};
use shared_types::{CollaboratorError, ObjectHandle};
use std::collections::BTreeMap;

/// Scene mutation, in the order applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneEvent {
    Deactivated(ObjectHandle),
    Destroyed(ObjectHandle),
    StarRetired(ObjectHandle),
}

#[derive(Clone, Debug)]
struct SceneObject {
    name: String,
    active: bool,
    /// Light and audio still attached
    lit: bool,
}

/// Flat object table standing in for the engine scene.
#[derive(Clone, Debug, Default)]
pub struct InMemoryScene {
    objects: BTreeMap<ObjectHandle, SceneObject>,
    events: Vec<SceneEvent>,
    next_handle: u64,
}

impl InMemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active object and return its handle.
    pub fn spawn(&mut self, name: &str) -> ObjectHandle {
        self.next_handle += 1;
        let handle = ObjectHandle(self.next_handle);
        self.objects.insert(
            handle,
            SceneObject {
                name: name.to_string(),
                active: true,
                lit: false,
            },
        );
        handle
    }

    /// Add an active star with its light and audio attached.
    pub fn spawn_star(&mut self, name: &str) -> ObjectHandle {
        let handle = self.spawn(name);
        if let Some(obj) = self.objects.get_mut(&handle) {
            obj.lit = true;
        }
        handle
    }

    pub fn is_active(&self, handle: ObjectHandle) -> bool {
        self.objects.get(&handle).is_some_and(|o| o.active)
    }

    pub fn is_lit(&self, handle: ObjectHandle) -> bool {
        self.objects.get(&handle).is_some_and(|o| o.lit)
    }

    pub fn name_of(&self, handle: ObjectHandle) -> Option<&str> {
        self.objects.get(&handle).map(|o| o.name.as_str())
    }

    /// Objects still in the scene, active or not.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.objects.values().filter(|o| o.active).count()
    }

    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }
}

impl SceneCollaborator for InMemoryScene {
    fn object_exists(&self, handle: ObjectHandle) -> bool {
        self.is_active(handle)
    }

    fn deactivate(&mut self, handle: ObjectHandle) -> Result<(), CollaboratorError> {
        let obj = self
            .objects
            .get_mut(&handle)
            .ok_or(CollaboratorError::ObjectMissing(handle))?;
        if obj.active {
            obj.active = false;
            self.events.push(SceneEvent::Deactivated(handle));
        }
        Ok(())
    }

    fn destroy(&mut self, handle: ObjectHandle) -> Result<(), CollaboratorError> {
        self.objects
            .remove(&handle)
            .ok_or(CollaboratorError::ObjectMissing(handle))?;
        self.events.push(SceneEvent::Destroyed(handle));
        Ok(())
    }

    fn retire_star(&mut self, handle: ObjectHandle) -> Result<(), CollaboratorError> {
        let obj = self
            .objects
            .get_mut(&handle)
            .ok_or(CollaboratorError::ObjectMissing(handle))?;
        obj.lit = false;
        self.events.push(SceneEvent::StarRetired(handle));
        Ok(())
    }
}
