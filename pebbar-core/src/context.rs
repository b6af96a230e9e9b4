//! Face context
//!
//! Owns the layout currently on screen and the collaborators that act on a
//! change. The transport calls [`FaceContext::on_message`] once per inbound
//! message; the call runs to completion and either replaces the layout
//! wholesale or leaves it untouched.

use pebbar_protocol::{DeliveryFailure, TupleSource};

use crate::config::FaceConfig;
use crate::decoder::DecodeOutcome;
use crate::layout::Layout;
use crate::traits::{Haptics, Renderer};

/// Current face state plus its render and feedback collaborators
pub struct FaceContext<R, H> {
    config: FaceConfig,
    current: Layout,
    renderer: R,
    haptics: H,
    dropped: u32,
}

impl<R: Renderer, H: Haptics> FaceContext<R, H> {
    /// Create a context showing the empty startup layout
    pub fn new(config: FaceConfig, renderer: R, haptics: H) -> Self {
        Self {
            config,
            current: Layout::new(),
            renderer,
            haptics,
            dropped: 0,
        }
    }

    /// Handle one inbound message
    ///
    /// On [`DecodeOutcome::Accepted`] the new layout becomes current, is
    /// rendered, and a short pulse is played. Skipped and rejected messages
    /// have no effect.
    pub fn on_message<S: TupleSource + ?Sized>(&mut self, message: &S) -> DecodeOutcome {
        let outcome = self.config.decoder().decode_traced(
            message,
            &self.current,
            self.config.suppress_duplicates,
            |correction| debug!("Corrected: {}", correction),
        );

        match &outcome {
            DecodeOutcome::Accepted(layout) => {
                info!("Face updated: {} element(s)", layout.count());
                self.current = layout.clone();
                self.renderer.render(&self.current);
                self.haptics.short_pulse();
            }
            DecodeOutcome::Skipped => {
                trace!("Duplicate face, skipped");
            }
            DecodeOutcome::Rejected => {
                debug!("Message without element count, ignored");
            }
        }

        outcome
    }

    /// Record a message the transport failed to deliver
    ///
    /// Dropped messages never reach the decoder; the face is unchanged.
    pub fn on_dropped(&mut self, reason: DeliveryFailure) {
        warn!("Message dropped: {}", reason);
        self.dropped = self.dropped.saturating_add(1);
    }

    /// Layout currently on screen
    pub fn current(&self) -> &Layout {
        &self.current
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Number of messages reported dropped since startup
    pub fn dropped_count(&self) -> u32 {
        self.dropped
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Give back the collaborators, e.g. on teardown
    pub fn into_parts(self) -> (R, H) {
        (self.renderer, self.haptics)
    }
}
