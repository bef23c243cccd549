//! Platform abstraction layer
//!
//! Owns everything outside the simulation core:
//! - Termination signal
//! - Frame pacing
//! - The frame loop tying simulation and presenter together

pub mod headless;

pub use headless::HeadlessPlatform;

use crate::renderer::{Palette, Surface, render_with};
use crate::sim::{PhysicsParams, World, advance_with};

/// Frames between debug dumps of body state
const DEBUG_LOG_INTERVAL: u64 = 60;

/// Host services the frame loop needs
pub trait Platform {
    /// Returns true once the run should stop. Checked only at frame boundaries.
    fn poll_quit(&mut self) -> bool;
    /// Block until the next frame should start
    fn wait_for_next_frame(&mut self);
}

/// Run frames until the platform asks to quit. Returns the number of frames
/// completed.
///
/// Each frame steps the world once by `dt`, draws it, then waits. A frame is
/// never interrupted part way.
pub fn run<S, P>(
    world: &mut World,
    params: &PhysicsParams,
    dt: f32,
    palette: &Palette,
    surface: &mut S,
    platform: &mut P,
) -> u64
where
    S: Surface + ?Sized,
    P: Platform + ?Sized,
{
    log::info!("Frame loop starting ({} bodies, dt = {})", world.len(), dt);

    let mut frames = 0u64;
    while !platform.poll_quit() {
        advance_with(world, params, dt);
        render_with(surface, world, palette);
        frames += 1;

        log::trace!("Frame {} done", frames);
        if frames % DEBUG_LOG_INTERVAL == 0 {
            for (i, body) in world.iter().enumerate() {
                log::debug!(
                    "frame {} body {}: pos ({:.2}, {:.2}) vel ({:.2}, {:.2})",
                    frames,
                    i,
                    body.position.x,
                    body.position.y,
                    body.velocity.x,
                    body.velocity.y
                );
            }
        }

        platform.wait_for_next_frame();
    }

    log::info!("Frame loop stopped after {} frames", frames);
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::renderer::{DrawCommand, RecordingSurface, body_rect};
    use crate::sim::advance;

    /// Quits after a fixed number of polls, counting waits
    struct ScriptedPlatform {
        frames_left: u32,
        waits: u32,
    }

    impl Platform for ScriptedPlatform {
        fn poll_quit(&mut self) -> bool {
            if self.frames_left == 0 {
                return true;
            }
            self.frames_left -= 1;
            false
        }

        fn wait_for_next_frame(&mut self) {
            self.waits += 1;
        }
    }

    #[test]
    fn test_run_frames() {
        let mut world = World::demo();
        let mut surface = RecordingSurface::new();
        let mut platform = ScriptedPlatform {
            frames_left: 3,
            waits: 0,
        };

        let frames = run(
            &mut world,
            &PhysicsParams::default(),
            SIM_DT,
            &Palette::default(),
            &mut surface,
            &mut platform,
        );

        assert_eq!(frames, 3);
        assert_eq!(platform.waits, 3);
        assert_eq!(surface.frames(), 3);
        // clear + 2 bodies + present per frame
        assert_eq!(surface.commands().len(), 3 * 4);
    }

    #[test]
    fn test_run_updates_before_drawing() {
        let mut world = World::demo();
        let mut surface = RecordingSurface::new();
        let mut platform = ScriptedPlatform {
            frames_left: 1,
            waits: 0,
        };
        run(
            &mut world,
            &PhysicsParams::default(),
            SIM_DT,
            &Palette::default(),
            &mut surface,
            &mut platform,
        );

        let mut expected = World::demo();
        advance(&mut expected, SIM_DT);
        assert_eq!(world, expected);

        let drawn: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(r, _) => Some(*r),
                _ => None,
            })
            .collect();
        let wanted: Vec<_> = expected.iter().map(body_rect).collect();
        assert_eq!(drawn, wanted);
    }

    #[test]
    fn test_quit_before_first_frame() {
        let mut world = World::demo();
        let mut surface = RecordingSurface::new();
        let mut platform = ScriptedPlatform {
            frames_left: 0,
            waits: 0,
        };
        let frames = run(
            &mut world,
            &PhysicsParams::default(),
            SIM_DT,
            &Palette::default(),
            &mut surface,
            &mut platform,
        );

        assert_eq!(frames, 0);
        assert!(surface.commands().is_empty());
        assert_eq!(world, World::demo());
    }
}
