//! Lifecycle adapter between a drawing surface and the simulation.

use crate::{
    Config, Pos2, World,
    render_loop::{RenderLoop, SurfaceProvider, Tick},
};
use std::time::Instant;
use tracing::{debug, info};

/// Owns a [`World`] and the [`RenderLoop`] driving it, and translates the
/// events of the hosting surface (size, visibility, touches) into calls on
/// them
#[derive(Debug)]
pub struct Shell {
    world: World,
    render_loop: RenderLoop,
    config: Config,
}

impl Shell {
    /// Creates an empty world and enqueues the first tick
    pub fn new(config: Config, now: Instant) -> Self {
        let mut render_loop = RenderLoop::new(config.period);
        render_loop.start(now);
        Self {
            world: World::default(),
            render_loop,
            config,
        }
    }

    pub fn on_created(&mut self) {
        info!("surface created");
    }

    /// Recreates the grid so that it covers the surface
    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        let cell_size = self.config.cell_size.max(1);
        let cols = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;
        info!(width, height, cols, rows, "surface resized");
        self.world.create_matrix(cols, rows);
    }

    pub fn on_destroyed(&mut self) {
        info!("surface destroyed");
        self.render_loop.destroy();
    }

    pub fn on_visibility_changed(&mut self, visible: bool, now: Instant) {
        info!(visible, "visibility changed");
        self.render_loop.set_visible(visible, now);
    }

    /// Toggles the cell under the touched pixel and shows the result at once
    ///
    /// Returns whether a cell was toggled.
    pub fn on_touch<S>(&mut self, pixel: Pos2, surface: &mut S) -> bool
    where
        S: SurfaceProvider + ?Sized,
    {
        if !self.config.touch_enabled {
            return false;
        }
        let cell = pixel.pixel_to_cell(self.config.cell_size);
        debug!(x = cell.x, y = cell.y, "cell clicked");
        self.world.on_cell_clicked(cell.x, cell.y);
        self.render_loop.force_present(&self.world, surface);
        true
    }

    /// Draws the world outside the schedule
    pub fn force_present<S>(&self, surface: &mut S) -> bool
    where
        S: SurfaceProvider + ?Sized,
    {
        self.render_loop.force_present(&self.world, surface)
    }

    /// Fires the pending tick if it is due
    pub fn poll<S>(&mut self, now: Instant, surface: &mut S) -> Option<Tick>
    where
        S: SurfaceProvider + ?Sized,
    {
        self.render_loop.poll(now, &mut self.world, surface)
    }

    #[inline]
    pub fn next_due(&self) -> Option<Instant> {
        self.render_loop.next_due()
    }

    pub fn set_playing(&mut self, playing: bool) {
        info!(playing, "play state changed");
        self.render_loop.set_playing(playing);
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.render_loop.is_playing()
    }

    pub fn toggle_playing(&mut self) -> bool {
        let playing = !self.is_playing();
        self.set_playing(playing);
        playing
    }

    /// Replaces the configuration, a new period is used from the next tick on
    pub fn set_configuration(&mut self, config: Config) {
        debug!(?config, "configuration changed");
        self.render_loop.set_period(config.period);
        self.config = config;
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }
}
