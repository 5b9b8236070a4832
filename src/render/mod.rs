//! Rendering (§4.F, §4.H): per-column wall drawing plus the minimap
//! overlay. Grounded on the teacher's `renderer/software.rs` column-cursor
//! style, retargeted from the BSP draw-call pipeline to a per-column DDA
//! hit since this renderer has no segment list to sort.

pub mod column;
pub mod minimap;

pub use column::draw_frame;
pub use minimap::Minimap;

/// Composites the minimap's buffer onto `frame` at a fixed pixel offset,
/// clipped to the frame's bounds (§4.G tick order: overlay precedes
/// present; §6: the minimap occupies the top-left with a fixed offset).
pub fn blit_at(frame: &mut [u32], frame_width: usize, minimap: &Minimap, x_off: usize, y_off: usize) {
    let frame_height = frame.len() / frame_width;
    let mm_w = minimap.width();
    let mm_h = minimap.height();
    let buf = minimap.buffer();

    for my in 0..mm_h {
        let fy = y_off + my;
        if fy >= frame_height {
            break;
        }
        for mx in 0..mm_w {
            let fx = x_off + mx;
            if fx >= frame_width {
                break;
            }
            frame[fy * frame_width + fx] = buf[my * mm_w + mx];
        }
    }
}
