//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, used by the runtime and
//! by integration tests in place of a real engine.

mod audio_library;
mod signalscope_buffer;

pub use audio_library::InMemoryAudioLibrary;
pub use signalscope_buffer::SignalscopeBuffer;
