use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use kid_tetris::core::GameState;
use kid_tetris::term::{FrameBuffer, GameView, HudView, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
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

#[test]
fn term_game_view_render_is_allocation_free_after_warmup() {
    let viewport = Viewport::new(100, 45);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = gs.snapshot();

    let hud = HudView {
        hint: "Great job! You've cleared 5 lines!",
        flash: true,
        ..HudView::default()
    };

    // Warm-up.
    GameView::for_viewport(true, viewport).render_into(&snap, &hud, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let _ = gs.tick(16);
            if i % 20 == 0 {
                let _ = gs.hard_drop();
            }
            gs.snapshot_into(&mut snap);
            let view = GameView::for_viewport(i % 2 == 0, viewport);
            view.render_into(&snap, &hud, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
