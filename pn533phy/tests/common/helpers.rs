use std::sync::Arc;

use pn533phy::Phy;
use pn533phy::test_support::{RecordingEngine, built_phy};
use pn533phy::transport::MockBus;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Engine, mock bus handle and a Phy wired to both.
pub fn setup() -> (Arc<RecordingEngine>, MockBus, Phy) {
    init_logger();
    let engine = Arc::new(RecordingEngine::new());
    let bus = MockBus::new();
    let phy = built_phy(&bus, &engine).unwrap();
    (engine, bus, phy)
}

/// Like `setup`, with `frame_size_of` pinned to `size`.
pub fn setup_with_frame_size(size: usize) -> (Arc<RecordingEngine>, MockBus, Phy) {
    init_logger();
    let engine = Arc::new(RecordingEngine::with_frame_size(size));
    let bus = MockBus::new();
    let phy = built_phy(&bus, &engine).unwrap();
    (engine, bus, phy)
}
