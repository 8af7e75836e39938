use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_life::core::{World, WorldSnapshot};
use tui_life::term::{
    encode_diff_into, encode_full_into, DriverStatus, FrameBuffer, LifeView, Viewport,
};

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

#[test]
fn frame_path_does_not_allocate_after_warmup() {
    // Two phases of the pulsar give the diff encoder real work every frame.
    let a = World::from_pattern("pulsar").unwrap();
    let b = {
        let mut b = a.clone();
        b.step();
        b
    };

    let view = LifeView::default();
    let vp = Viewport::new(100, 30);
    let status = DriverStatus {
        pattern: "pulsar",
        step_ms: 200,
        paused: false,
        adjust: true,
    };

    let mut snap = WorldSnapshot::default();
    let mut prev = FrameBuffer::new(0, 0);
    let mut next = FrameBuffer::new(0, 0);
    let mut out: Vec<u8> = Vec::new();

    // Warm-up (outside counting) sizes every reused buffer. A full-frame
    // encode is larger than any later diff, so the byte queue never grows.
    a.snapshot_into(&mut snap);
    view.render_into(&snap, &status, vp, &mut prev);
    b.snapshot_into(&mut snap);
    view.render_into(&snap, &status, vp, &mut next);
    encode_full_into(&next, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for i in 0..100 {
            let world = if i % 2 == 0 { &a } else { &b };
            world.snapshot_into(&mut snap);
            view.render_into(&snap, &status, vp, &mut next);

            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();

            std::mem::swap(&mut prev, &mut next);
        }
    });

    assert!(allocs == 0, "frame path allocated {allocs} times");
}
