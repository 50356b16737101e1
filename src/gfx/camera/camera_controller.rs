use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
};

use crate::gfx::scene::{SceneState, ZoomDirection};

/// Mouse input adapter: left-drag rotates the scene, the wheel scales it
///
/// Cursor positions are tracked from window events so deltas are in window
/// pixels, the unit the drag sensitivity is expressed in.
#[derive(Debug, Default)]
pub struct InputController {
    is_dragging: bool,
    last_cursor: Option<PhysicalPosition<f64>>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Apply a window event to the scene state
    ///
    /// Returns true if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent, state: &mut SceneState) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: button_state,
                ..
            } => {
                self.set_dragging(*button_state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position, state),
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y,
                };
                self.wheel(scroll, state)
            }
            _ => false,
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        if self.is_dragging != dragging {
            log::trace!("Drag {}", if dragging { "started" } else { "stopped" });
        }
        self.is_dragging = dragging;
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>, state: &mut SceneState) -> bool {
        let previous = self.last_cursor.replace(position);
        match previous {
            Some(last) if self.is_dragging => {
                state.drag_rotate((position.x - last.x) as f32, (position.y - last.y) as f32);
                true
            }
            _ => false,
        }
    }

    /// Leaving the window ends the drag and forgets the cursor, so re-entry
    /// does not rotate by the distance travelled outside
    fn cursor_left(&mut self) {
        self.set_dragging(false);
        self.last_cursor = None;
    }

    /// Positive scroll (wheel away from the user) zooms in
    fn wheel(&mut self, scroll: f64, state: &mut SceneState) -> bool {
        if scroll == 0.0 {
            return false;
        }
        let direction = if scroll > 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        state.wheel_zoom(direction);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use winit::event::DeviceId;

    fn device() -> DeviceId {
        unsafe { DeviceId::dummy() }
    }

    fn left_button(state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button: MouseButton::Left,
        }
    }

    fn moved_to(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn at(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut controller = InputController::new();
        let mut state = SceneState::default();
        assert!(!controller.cursor_moved(at(10.0, 10.0), &mut state));
        assert!(!controller.cursor_moved(at(60.0, 30.0), &mut state));
        assert_eq!(state.transform().rotate, [0.0; 3]);
    }

    #[test]
    fn test_drag_rotates_by_pixel_delta() {
        let mut controller = InputController::new();
        let mut state = SceneState::default();
        controller.cursor_moved(at(100.0, 100.0), &mut state);
        controller.set_dragging(true);
        assert!(controller.cursor_moved(at(150.0, 80.0), &mut state));

        let rotate = state.transform().rotate;
        assert_abs_diff_eq!(rotate[1], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(rotate[0], -0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_release_stops_rotation() {
        let mut controller = InputController::new();
        let mut state = SceneState::default();
        controller.set_dragging(true);
        controller.cursor_moved(at(0.0, 0.0), &mut state);
        controller.cursor_moved(at(10.0, 0.0), &mut state);
        controller.set_dragging(false);
        controller.cursor_moved(at(90.0, 0.0), &mut state);
        assert_abs_diff_eq!(state.transform().rotate[1], 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_wheel_direction() {
        let mut controller = InputController::new();
        let mut state = SceneState::default();
        assert!(controller.wheel(1.0, &mut state));
        assert_abs_diff_eq!(state.uniform_scale(), 1.1, epsilon = 1e-6);
        assert!(controller.wheel(-3.0, &mut state));
        assert_abs_diff_eq!(state.uniform_scale(), 0.99, epsilon = 1e-6);
        assert!(!controller.wheel(0.0, &mut state));
    }

    #[test]
    fn test_cursor_leaving_window_stops_drag() {
        let mut controller = InputController::new();
        let mut state = SceneState::default();

        controller.process_window_event(&moved_to(100.0, 100.0), &mut state);
        controller.process_window_event(&left_button(ElementState::Pressed), &mut state);
        assert!(controller.is_dragging());
        assert!(controller.process_window_event(&moved_to(120.0, 100.0), &mut state));
        assert_abs_diff_eq!(state.transform().rotate[1], 0.2, epsilon = 1e-6);

        let left = WindowEvent::CursorLeft { device_id: device() };
        assert!(!controller.process_window_event(&left, &mut state));
        assert!(!controller.is_dragging());

        // Re-entering far away without a press does not rotate
        assert!(!controller.process_window_event(&moved_to(500.0, 400.0), &mut state));
        assert_abs_diff_eq!(state.transform().rotate[1], 0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(state.transform().rotate[0], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_drag_after_reentry_starts_from_new_position() {
        let mut controller = InputController::new();
        let mut state = SceneState::default();

        controller.process_window_event(&left_button(ElementState::Pressed), &mut state);
        controller.process_window_event(&moved_to(10.0, 10.0), &mut state);
        controller.process_window_event(&WindowEvent::CursorLeft { device_id: device() }, &mut state);

        // Button pressed again after coming back at a distant position
        controller.process_window_event(&left_button(ElementState::Pressed), &mut state);
        assert!(!controller.process_window_event(&moved_to(300.0, 200.0), &mut state));
        assert_eq!(state.transform().rotate, [0.0; 3]);

        assert!(controller.process_window_event(&moved_to(310.0, 200.0), &mut state));
        assert_abs_diff_eq!(state.transform().rotate[1], 0.1, epsilon = 1e-6);
    }
}
