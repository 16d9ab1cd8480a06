use super::{CameraController, Direction};
use crate::Point2;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

/// Forwards pointer and arrow key events to the camera controller. Returns `true` if the event
/// was consumed.
pub fn process_window_event(controller: &mut CameraController, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            controller.on_pointer_moved(Point2::new(position.x as f32, position.y as f32));
            true
        }
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => {
            on_left_button(controller, *state);
            true
        }
        WindowEvent::KeyboardInput {
            input:
                KeyboardInput {
                    virtual_keycode: Some(keycode),
                    state,
                    ..
                },
            ..
        } => match arrow_direction(*keycode) {
            Some(direction) => {
                match state {
                    ElementState::Pressed => controller.on_key_down(direction),
                    ElementState::Released => controller.on_key_up(direction),
                }
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// The drag starts and ends wherever the cursor last moved to.
fn on_left_button(controller: &mut CameraController, state: ElementState) {
    let position = controller.pointer_position();
    match state {
        ElementState::Pressed => controller.on_pointer_pressed(position),
        ElementState::Released => controller.on_pointer_released(position),
    }
}

fn arrow_direction(keycode: VirtualKeyCode) -> Option<Direction> {
    match keycode {
        VirtualKeyCode::Up => Some(Direction::Up),
        VirtualKeyCode::Down => Some(Direction::Down),
        VirtualKeyCode::Left => Some(Direction::Left),
        VirtualKeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CameraParameters;

    // Pointer and keyboard events carry a `DeviceId`, which only winit itself can create, so
    // those paths are tested through the helpers they dispatch to.

    #[test]
    fn test_left_button_drag() {
        let mut controller = CameraController::new(&CameraParameters::default());
        controller.on_pointer_moved(Point2::new(120., 80.));

        on_left_button(&mut controller, ElementState::Pressed);
        assert!(controller.pointer_down());
        assert_eq!(controller.pointer_position(), Point2::new(120., 80.));

        controller.on_pointer_moved(Point2::new(150., 80.));
        on_left_button(&mut controller, ElementState::Released);
        assert!(!controller.pointer_down());
        assert_eq!(controller.pointer_position(), Point2::new(150., 80.));
    }

    #[test]
    fn test_arrow_direction() {
        assert_eq!(arrow_direction(VirtualKeyCode::Up), Some(Direction::Up));
        assert_eq!(arrow_direction(VirtualKeyCode::Down), Some(Direction::Down));
        assert_eq!(arrow_direction(VirtualKeyCode::Left), Some(Direction::Left));
        assert_eq!(arrow_direction(VirtualKeyCode::Right), Some(Direction::Right));
        assert_eq!(arrow_direction(VirtualKeyCode::W), None);
    }

    #[test]
    fn test_other_events_ignored() {
        let mut controller = CameraController::new(&CameraParameters::default());

        assert!(!process_window_event(&mut controller, &WindowEvent::Focused(true)));
        assert!(!process_window_event(&mut controller, &WindowEvent::ReceivedCharacter('a')));
        assert!(!controller.is_moving());
    }
}
