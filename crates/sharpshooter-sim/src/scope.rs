//! Scope state machine with breathing sway and overlay recoil.
//!
//! Stored on `SimulationEngine`, not as an ECS entity.

use tracing::debug;

use sharpshooter_core::constants::*;
use sharpshooter_core::enums::ScopeMode;
use sharpshooter_core::state::ScopeView;
use sharpshooter_core::types::Vector2;

/// Lens and recoil parameters for the scope.
#[derive(Debug, Clone, Copy)]
pub struct ScopeSettings {
    pub default_fov_deg: f64,
    pub scoped_fov_deg: f64,
    pub recoil_kick: Vector2,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            default_fov_deg: DEFAULT_FOV_DEG,
            scoped_fov_deg: SCOPED_FOV_DEG,
            recoil_kick: OVERLAY_RECOIL_KICK,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScopeController {
    settings: ScopeSettings,
    mode: ScopeMode,
    field_of_view_deg: f64,
    /// Triangle wave in `[0, BREATHING_PHASE_MAX]`.
    breathing_phase: f64,
    breathing_rising: bool,
    recoil_offset: Vector2,
}

impl Default for ScopeController {
    fn default() -> Self {
        Self::new(ScopeSettings::default())
    }
}

impl ScopeController {
    pub fn new(settings: ScopeSettings) -> Self {
        Self {
            settings,
            mode: ScopeMode::Unscoped,
            field_of_view_deg: settings.default_fov_deg,
            breathing_phase: 0.0,
            breathing_rising: true,
            recoil_offset: Vector2::ZERO,
        }
    }

    /// Flip between scoped and unscoped. Leaving the scope drops breathing and recoil state.
    pub fn toggle(&mut self) -> ScopeMode {
        self.mode = self.mode.toggled();
        match self.mode {
            ScopeMode::Scoped => {
                self.field_of_view_deg = self.settings.scoped_fov_deg;
            }
            ScopeMode::Unscoped => {
                self.field_of_view_deg = self.settings.default_fov_deg;
                self.breathing_phase = 0.0;
                self.breathing_rising = true;
                self.recoil_offset = Vector2::ZERO;
            }
        }
        debug!(mode = ?self.mode, fov = self.field_of_view_deg, "scope toggled");
        self.mode
    }

    /// Kick the overlay. Only has an effect while scoped.
    pub fn on_fire(&mut self) {
        if self.is_scoped() {
            self.recoil_offset = self.settings.recoil_kick;
        }
    }

    /// Per-tick update: step the breathing wave and decay the recoil offset.
    pub fn advance(&mut self) {
        if !self.is_scoped() {
            return;
        }

        if self.breathing_rising {
            self.breathing_phase = (self.breathing_phase + BREATHING_STEP).min(BREATHING_PHASE_MAX);
            if self.breathing_phase >= BREATHING_PHASE_MAX {
                self.breathing_rising = false;
            }
        } else {
            self.breathing_phase = (self.breathing_phase - BREATHING_STEP).max(0.0);
            if self.breathing_phase <= 0.0 {
                self.breathing_rising = true;
            }
        }

        // Asymptotic; never snapped to zero.
        self.recoil_offset *= OVERLAY_RECOIL_DECAY;
    }

    pub fn mode(&self) -> ScopeMode {
        self.mode
    }

    pub fn is_scoped(&self) -> bool {
        self.mode == ScopeMode::Scoped
    }

    pub fn field_of_view_deg(&self) -> f64 {
        self.field_of_view_deg
    }

    pub fn breathing_phase(&self) -> f64 {
        self.breathing_phase
    }

    pub fn breathing_rising(&self) -> bool {
        self.breathing_rising
    }

    pub fn recoil_offset(&self) -> Vector2 {
        self.recoil_offset
    }

    /// Overlay scale from the breathing phase; exactly 1.0 when unscoped.
    pub fn breathing_scale(&self) -> f64 {
        if !self.is_scoped() {
            return 1.0;
        }
        1.0 + (self.breathing_phase - 1.0) * BREATHING_SCALE_GAIN
    }

    /// Translation that keeps the scaled overlay centred on the viewport.
    pub fn breathing_translation(&self) -> Vector2 {
        let scale = self.breathing_scale();
        Vector2::new(
            (scale - 1.0) * (-VIEWPORT_WIDTH / 2.0),
            (scale - 1.0) * (-VIEWPORT_HEIGHT / 2.0),
        )
    }

    pub fn overlay_translation(&self) -> Vector2 {
        self.breathing_translation() + self.recoil_offset
    }

    pub fn view(&self) -> ScopeView {
        ScopeView {
            mode: self.mode,
            overlay_visible: self.is_scoped(),
            breathing_phase: self.breathing_phase,
            overlay_scale: self.breathing_scale(),
            overlay_translation: self.overlay_translation(),
            recoil_offset: self.recoil_offset,
        }
    }
}
