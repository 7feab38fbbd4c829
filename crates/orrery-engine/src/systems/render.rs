use crate::core::scene::Scene;
use crate::picking::Selection;
use crate::renderer::instance::{BodyInstance, InstanceBuffer};

/// Rebuild the instance buffer from the scene, flagging the selected body.
/// At most `max_instances` bodies are written; the rest are dropped with a warning.
pub fn build_instance_buffer(
    scene: &Scene,
    selection: &Selection,
    buffer: &mut InstanceBuffer,
    max_instances: usize,
) {
    buffer.clear();
    for body in scene.iter().filter(|b| b.active) {
        if buffer.instances.len() >= max_instances {
            log::warn!("instance buffer full ({max_instances}), skipping {}", body.name);
            break;
        }
        buffer.push(BodyInstance::from_body(body, selection.is(body.id)));
    }
}
