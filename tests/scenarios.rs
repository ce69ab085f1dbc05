//! End-to-end drawing scenarios exercising the public surface the way a
//! frame loop does: wrap or allocate a buffer, draw, inspect pixels.

use softraster::basics::{intersect_rects, Rect};
use softraster::blit::{blit_blended, pack_rgb_rows, pack_rgba_rows};
use softraster::color::{Pixel, BLACK, BLUE, GREEN, RED};
use softraster::raster_text::{draw_text, GlyphFont};
use softraster::rendering_buffer::PixelBuffer;
use softraster::renderer_primitives::{copy_line, fill_rect};

#[test]
fn fill_rect_scenario() {
    let mut buf = PixelBuffer::new(80, 60, 80).unwrap();
    buf.clear(BLACK);
    fill_rect(&mut buf, RED, 10, 15, 50, 45);
    for y in 0..60 {
        for x in 0..80 {
            let inside = (10..50).contains(&x) && (15..45).contains(&y);
            let want = if inside { RED } else { BLACK };
            assert_eq!(buf.get(x, y), want, "at ({x},{y})");
        }
    }
}

#[test]
fn diagonal_line_scenario() {
    let mut buf = PixelBuffer::new(64, 64, 64).unwrap();
    buf.clear(BLACK);
    copy_line(&mut buf, RED, 10, 10, 50, 50);
    for i in 10..50 {
        assert_eq!(buf.get(i, i), RED, "diagonal missing at ({i},{i})");
    }
    // The walk stops at the terminal column; (50,50) is never plotted.
    assert_eq!(buf.get(50, 50), BLACK);
    for i in 10..50 {
        assert_eq!(buf.get(i + 1, i), BLACK);
        assert_eq!(buf.get(i, i + 1), BLACK);
    }
}

#[test]
fn rect_intersection_scenario() {
    let a = Rect::new(40, 75, 100, 100);
    let b = Rect::new(20, 85, 60, 105);
    assert_eq!(intersect_rects(&a, &b), Some(Rect::new(40, 85, 60, 100)));
}

#[test]
fn composited_sprite_scenario() {
    // 20×20 sprite: left half transparent, right half opaque green.
    let mut sprite = PixelBuffer::new(20, 20, 20).unwrap();
    for y in 0..20 {
        for x in 10..20 {
            sprite.put(x, y, Pixel::from_rgba(0, 255, 0, 255));
        }
    }

    let mut dst = PixelBuffer::new(20, 20, 20).unwrap();
    for y in 0..20 {
        for x in 0..20 {
            dst.put(x, y, if (x + y) % 2 == 0 { RED } else { BLUE });
        }
    }
    let before: Vec<Pixel> = dst.pixels().to_vec();

    blit_blended(&sprite, &mut dst, 0, 0);
    for y in 0..20i32 {
        for x in 0..20i32 {
            let got = dst.get(x, y);
            if x < 10 {
                assert_eq!(got, before[(y * 20 + x) as usize], "at ({x},{y})");
            } else {
                assert_eq!(got.rgb(), (0, 255, 0), "at ({x},{y})");
            }
        }
    }
}

#[test]
fn padded_stride_scenario() {
    // Logical width 32, stride 64: row y lives at offset y×64 and the
    // padding columns are unreachable through the coordinate API.
    let mut backing = vec![Pixel(0); 64 * 8];
    let mut buf = PixelBuffer::wrap(&mut backing, 32, 8, 64);
    buf.clear(GREEN);
    for x in 32..64 {
        buf.put(x, 3, RED);
    }
    drop(buf);

    for y in 0..8 {
        assert!(backing[y * 64..y * 64 + 32].iter().all(|p| *p == GREEN));
        assert!(backing[y * 64 + 32..(y + 1) * 64]
            .iter()
            .all(|p| *p == Pixel(0)));
    }
}

#[test]
fn frame_wrap_and_ingest_scenario() {
    // Decode an external 2×2 RGBA byte image, then present it through a
    // wrapped "frame" the way a windowing layer hands one over.
    let bytes = [
        255, 0, 0, 255, /**/ 0, 255, 0, 128, //
        0, 0, 255, 255, /**/ 255, 255, 255, 0,
    ];
    let mut sprite_pixels = vec![Pixel(0); 4];
    pack_rgba_rows(&mut sprite_pixels, &bytes, 2, 2);
    assert_eq!(sprite_pixels[0], Pixel::from_rgba(255, 0, 0, 255));
    assert_eq!(sprite_pixels[3], Pixel::from_rgba(255, 255, 255, 0));

    let sprite = PixelBuffer::wrap(&mut sprite_pixels, 2, 2, 2);

    let mut frame = vec![BLACK; 16 * 16];
    let mut dst = PixelBuffer::wrap(&mut frame, 16, 16, 16);
    blit_blended(&sprite, &mut dst, 1, 1);
    assert_eq!(dst.get(1, 1), RED);
    assert_eq!(dst.get(2, 2), BLACK); // fully transparent source pixel
}

#[test]
fn rgb_rows_are_opaque() {
    let bytes = [9u8, 8, 7, 6, 5, 4];
    let mut pixels = vec![Pixel(0); 2];
    pack_rgb_rows(&mut pixels, &bytes, 2, 1);
    assert!(pixels.iter().all(|p| p.alpha() == 255));
}

#[test]
fn text_hud_scenario() {
    const DOT: [[u8; 8]; 1] = [[0, 0, 0, 0x18, 0x18, 0, 0, 0]];
    let font = GlyphFont::new(&DOT, b'.');

    let mut buf = PixelBuffer::new(32, 8, 32).unwrap();
    buf.clear(BLACK);
    draw_text(&mut buf, &font, GREEN, 0, 0, "..");
    // 0x18 sets columns 3 and 4.
    for cell in [0, 8] {
        assert_eq!(buf.get(cell + 3, 3), GREEN);
        assert_eq!(buf.get(cell + 4, 4), GREEN);
        assert_eq!(buf.get(cell + 2, 3), BLACK);
    }
}
