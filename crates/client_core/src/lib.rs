//! Client core: input sampling, first-person locomotion, reticle targeting,
//! and interaction dispatch.
//!
//! Everything here runs synchronously inside the host's per-frame callback;
//! the only asynchronous inputs are key/click events, which land on the
//! same logical thread via [`events::InputBus`].

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod input {
    //! Pressed-key sampling and per-frame movement axis derivation.

    use std::collections::HashSet;

    /// Key-code aliases per direction: primary binding plus arrow key.
    const FORWARD_KEYS: [&str; 2] = ["KeyW", "ArrowUp"];
    const BACK_KEYS: [&str; 2] = ["KeyS", "ArrowDown"];
    const LEFT_KEYS: [&str; 2] = ["KeyA", "ArrowLeft"];
    const RIGHT_KEYS: [&str; 2] = ["KeyD", "ArrowRight"];

    /// Movement intent for one frame, each axis in `{-1, 0, 1}`.
    ///
    /// Derived fresh from [`KeySet`] every frame, never stored.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MoveAxes {
        /// +1 forward, -1 back.
        pub forward: i8,
        /// +1 right, -1 left.
        pub strafe: i8,
    }

    impl MoveAxes {
        #[must_use]
        pub fn is_zero(self) -> bool {
            self.forward == 0 && self.strafe == 0
        }
    }

    /// Set of currently held logical key codes.
    ///
    /// Codes are the host's logical names (`"KeyW"`, `"ArrowUp"`, ...).
    /// Codes without a binding are held but never consulted, so unknown
    /// keys are silently ignored rather than rejected. Keys leave the set
    /// only on an explicit release.
    #[derive(Debug, Default, Clone)]
    pub struct KeySet {
        held: HashSet<String>,
    }

    impl KeySet {
        pub fn press(&mut self, code: &str) {
            self.held.insert(code.to_owned());
        }

        pub fn release(&mut self, code: &str) {
            self.held.remove(code);
        }

        pub fn clear(&mut self) {
            self.held.clear();
        }

        fn any(&self, codes: &[&str]) -> bool {
            codes.iter().any(|c| self.held.contains(*c))
        }

        /// Derive the movement axes for this frame.
        #[must_use]
        pub fn axes(&self) -> MoveAxes {
            let axis = |pos: &[&str], neg: &[&str]| -> i8 {
                i8::from(self.any(pos)) - i8::from(self.any(neg))
            };
            MoveAxes {
                forward: axis(&FORWARD_KEYS, &BACK_KEYS),
                strafe: axis(&RIGHT_KEYS, &LEFT_KEYS),
            }
        }
    }

}

pub mod events;
pub mod facade {
    pub mod controller;
}
pub mod session;
pub mod systems;
pub mod telemetry;
pub mod world;
