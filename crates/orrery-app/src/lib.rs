//! Orrery application layer.
//!
//! Composes the orbit solver, the camera animators and the label projection
//! into one scene driven by a frame clock. Rendering is left to the host; the
//! `orrery` binary runs the scene headless and logs what it would draw.

pub mod clock;
pub mod platform;
pub mod sbdb;
pub mod scene;

pub use clock::{FrameClock, MAX_FRAME_TIME};
pub use platform::{CATALOGUE_FILE_NAME, PlatformDirs, PlatformError};
pub use sbdb::{SbdbError, SbdbResponse, SmallBody, SmallBodyGroup};
pub use scene::{Body, BodyKind, Label, Orrery};
