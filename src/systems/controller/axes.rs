use bevy::prelude::*;

use crate::resources::{AxisBindings, AxisName, AxisValues};

/// Polls the keyboard once per frame and publishes the value of every named axis.
pub fn poll_axes_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<AxisBindings>,
    mut values: ResMut<AxisValues>,
) {
    for axis in AxisName::ALL {
        values.set(axis, bindings.value(axis, &keyboard));
    }
}
