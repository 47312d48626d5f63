use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_blockfall::core::{EngineConfig, GameSnapshot, GameState};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{InputAction, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test per binary: the counter is process-wide.
#[test]
fn frame_loop_is_allocation_free_after_warmup() {
    let config = EngineConfig {
        seed: Some(7),
        ..EngineConfig::default()
    };
    let mut game = GameState::new(config).unwrap();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();

    // Warm-up: sizes the snapshot board and the framebuffer.
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);
    game.apply_action(InputAction::ConfirmStart);
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for round in 0..40 {
            for _ in 0..20 {
                game.tick(TICK_MS);
            }
            game.apply_action(InputAction::MoveLeft);
            game.apply_action(InputAction::Rotate);
            game.apply_action(InputAction::MoveRight);
            game.apply_action(InputAction::MoveDown);
            if round % 2 == 0 {
                game.apply_action(InputAction::HardDrop);
            }
            if game.is_game_over() {
                game.apply_action(InputAction::Restart);
                game.apply_action(InputAction::ConfirmStart);
            }

            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
