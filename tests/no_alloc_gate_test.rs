use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use strategos::core::{GameSnapshot, TurnController};
use strategos::term::{FrameBuffer, GameView, Viewport};
use strategos::types::{Direction, Intent, PieceKind};

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

/// Mix of accepted and rejected intents: moves, placements, selections, cancels.
const SCRIPT: [Intent; 16] = [
    Intent::Select,
    Intent::MoveCursor(Direction::Right),
    Intent::MoveCursor(Direction::Down),
    Intent::MoveToCursor,
    Intent::Place(PieceKind::Stone),
    Intent::MoveCursor(Direction::Down),
    Intent::Place(PieceKind::Rook),
    Intent::MoveCursor(Direction::Right),
    Intent::Select,
    Intent::Cancel,
    Intent::MoveToCursor,
    Intent::MoveCursor(Direction::Down),
    Intent::Place(PieceKind::Stone),
    Intent::MoveCursor(Direction::Left),
    Intent::Place(PieceKind::Knight),
    Intent::MoveCursor(Direction::Right),
];

fn play(
    ctl: &mut TurnController,
    snap: &mut GameSnapshot,
    view: &GameView,
    fb: &mut FrameBuffer,
    rounds: usize,
) {
    let vp = Viewport::new(80, 24);
    for round in 0..rounds {
        for intent in SCRIPT {
            let _ = ctl.apply(intent);
            ctl.snapshot_into(snap);
            view.render_into(snap, vp, fb);
        }
        if round % 4 == 3 {
            let _ = ctl.apply(Intent::Restart);
        }
    }
}

#[test]
fn intents_snapshots_and_rendering_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let view = GameView::default();
    let mut ctl = TurnController::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    // Warm-up on a copy of the same game.
    {
        let mut warm = ctl.clone();
        play(&mut warm, &mut snap, &view, &mut fb, 8);
    }

    let allocs = with_alloc_counting(|| {
        play(&mut ctl, &mut snap, &view, &mut fb, 8);
    });

    assert_eq!(allocs, 0);
}
