//! The viewer engine: explicit view state, the current cage, camera and
//! options, driven by [`ViewerCommand`]s.
//!
//! A host drives it once per frame:
//! ```ignore
//! for event in events {
//!     let _ = engine.handle_input(event);
//! }
//! engine.update(dt);
//! let frame = engine.prepare_frame();
//! ```

mod command;
mod options;
mod state;

pub use command::ViewerCommand;
pub use state::ViewState;

use crate::camera::CameraController;
use crate::input::{InputEvent, InputProcessor};
use crate::molecule::{generate, Fullerene, MoleculeInfo, MoleculeKind};
use crate::options::Options;
use crate::renderer::{
    prepare_frame, BallAndStickInstances, PreparedFrame, PrimitiveMeshes,
};

/// Owns everything needed to turn input into frames for one viewport.
#[derive(Debug, Clone)]
pub struct ViewerEngine {
    state: ViewState,
    molecule: Fullerene,
    instances: BallAndStickInstances,
    meshes: PrimitiveMeshes,
    camera: CameraController,
    input: InputProcessor,
    options: Options,
    active_preset: Option<String>,
}

impl ViewerEngine {
    /// Build the startup cage named by `options.display` for a viewport of
    /// `size` physical pixels.
    #[must_use]
    pub fn new(options: Options, size: (u32, u32)) -> Self {
        let state = ViewState::new(&options.display);
        let molecule = generate(state.molecule);
        let instances = BallAndStickInstances::generate(
            &molecule,
            &options.geometry,
            &options.colors,
        );
        let meshes = PrimitiveMeshes::from_options(&options.geometry);
        let camera = CameraController::new(&options.camera, size.0, size.1);
        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());

        log::info!(
            "viewer ready: {} ({} atoms, {} bonds)",
            molecule.kind(),
            molecule.atoms().len(),
            molecule.bonds().len()
        );

        Self {
            state,
            molecule,
            instances,
            meshes,
            camera,
            input,
            options,
            active_preset: None,
        }
    }

    /// Perform one command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::SelectMolecule(kind) => self.select_molecule(kind),
            ViewerCommand::ResetView => self.reset_view(),
            ViewerCommand::ToggleWireframe => {
                let _ = self.toggle_wireframe();
            }
            ViewerCommand::ToggleAnimation => {
                let _ = self.toggle_animation();
            }
            ViewerCommand::Rotate { delta } => self
                .state
                .apply_drag(delta, self.options.interaction.rotate_sensitivity),
            ViewerCommand::Zoom { delta } => self.camera.zoom(delta),
            ViewerCommand::Resize { width, height } => {
                self.camera.resize(width, height);
            }
        }
    }

    /// Feed a raw input event through the processor, executing any command
    /// it yields. Returns whether a command ran.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Look up `key` in the bindings and execute its command. Returns
    /// whether the key was bound.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => false,
        }
    }

    /// Replace the displayed cage with a freshly generated `kind`.
    ///
    /// X/Y rotation carries over; spin restarts at zero.
    pub fn select_molecule(&mut self, kind: MoleculeKind) {
        self.molecule = generate(kind);
        self.refresh_instances();
        self.state.molecule = kind;
        self.state.spin = 0.0;
        log::info!(
            "switched to {kind}: {} atoms, {} bonds",
            self.molecule.atoms().len(),
            self.molecule.bonds().len()
        );
    }

    /// Zero rotation and spin and send the camera home.
    pub fn reset_view(&mut self) {
        self.state.reset_rotation();
        self.camera.reset();
    }

    /// Flip wireframe drawing. Returns the new value.
    pub fn toggle_wireframe(&mut self) -> bool {
        self.state.wireframe = !self.state.wireframe;
        self.state.wireframe
    }

    /// Flip the continuous spin. Returns the new value.
    pub fn toggle_animation(&mut self) -> bool {
        self.state.animating = !self.state.animating;
        self.state.animating
    }

    /// Frame the current cage, centering on its centroid.
    pub fn fit_camera_to_molecule(&mut self) {
        self.camera.fit_to_positions(self.molecule.atoms());
    }

    /// Advance easing and spin by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.state.advance(dt, &self.options.interaction);
    }

    /// Describe the current frame.
    #[must_use]
    pub fn prepare_frame(&self) -> PreparedFrame<'_> {
        prepare_frame(&self.state, &self.instances, &self.camera, &self.options)
    }

    fn refresh_instances(&mut self) {
        self.instances = BallAndStickInstances::generate(
            &self.molecule,
            &self.options.geometry,
            &self.options.colors,
        );
    }
}

// ── Accessors ──

impl ViewerEngine {
    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Cage currently displayed.
    #[must_use]
    pub fn molecule(&self) -> &Fullerene {
        &self.molecule
    }

    /// Info card for the current cage.
    #[must_use]
    pub fn info(&self) -> &'static MoleculeInfo {
        self.molecule.info()
    }

    /// Per-atom and per-bond instances for the current cage.
    #[must_use]
    pub fn instances(&self) -> &BallAndStickInstances {
        &self.instances
    }

    /// Unit sphere and cylinder meshes.
    #[must_use]
    pub fn meshes(&self) -> &PrimitiveMeshes {
        &self.meshes
    }

    /// Camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Input processor (drag state, key bindings).
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}
