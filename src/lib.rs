pub mod filter;
pub mod loading;
pub mod registry;
pub mod stats;
pub mod tilt;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod effects;
#[cfg(target_arch = "wasm32")]
pub mod trigger;
