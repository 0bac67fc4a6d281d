use pixkern_core::{ImageSize, PixelBufferMut, RgbF32};
use pixkern_raster::{draw_line, draw_triangle, Vertex};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[rustfmt::skip]
#[test]
fn test_fill_into_buffer() {
    let size = ImageSize { width: 5, height: 5 };
    let mut data = vec![0.0f32; size.area()];
    let mut img = PixelBufferMut::new(size, data.as_mut_slice()).unwrap();

    draw_triangle(
        Vertex::new(0.0f32, 0.0, 1.0f32),
        Vertex::new(4.0, 0.0, 1.0),
        Vertex::new(0.0, 4.0, 1.0),
        |x, y, v| {
            img.set(x.into(), y.into(), v);
        },
    );

    assert_eq!(
        data,
        vec![
            1.0, 1.0, 1.0, 1.0, 0.0,
            1.0, 1.0, 1.0, 0.0, 0.0,
            1.0, 1.0, 0.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]
    );
}

#[test]
fn test_shared_edge_tiles_square() {
    // two triangles splitting a square along its diagonal
    let size = ImageSize {
        width: 8,
        height: 8,
    };
    let mut hits = vec![0u32; size.area()];
    let mut count = |x: i32, y: i32, _: f32| hits[y as usize * 8 + x as usize] += 1;

    let v = |x: f32, y: f32| Vertex::new(x, y, 0.0f32);
    draw_triangle(v(0.0, 0.0), v(8.0, 0.0), v(8.0, 8.0), &mut count);
    draw_triangle(v(0.0, 0.0), v(8.0, 8.0), v(0.0, 8.0), &mut count);

    assert!(hits.iter().all(|&h| h == 1), "{hits:?}");
}

#[test]
fn test_offscreen_geometry_is_clipped_by_writer() {
    let size = ImageSize {
        width: 16,
        height: 16,
    };
    let mut data = vec![RgbF32::ZERO; size.area()];
    let mut img = PixelBufferMut::new(size, data.as_mut_slice()).unwrap();
    let mut dropped = 0;

    draw_triangle(
        Vertex::new(-10.0f32, -4.0, RgbF32::ONE),
        Vertex::new(30.0, 6.0, RgbF32::ONE),
        Vertex::new(4.0, 40.0, RgbF32::ONE),
        |x, y, c| {
            if !img.set(x.into(), y.into(), c) {
                dropped += 1;
            }
        },
    );
    draw_line(
        Vertex::new(-5.0f32, 8.0, RgbF32::ONE),
        Vertex::new(25.0, 8.0, RgbF32::ONE),
        |x, y, c| {
            if !img.set(x.into(), y.into(), c) {
                dropped += 1;
            }
        },
    );

    assert!(dropped > 0);
    assert!(data.iter().any(|&c| c == RgbF32::ONE));
}

#[test]
fn test_random_triangles_stay_in_bounding_box() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        let pts: Vec<(f32, f32)> = (0..3)
            .map(|_| (rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0)))
            .collect();
        let xs = pts.iter().map(|p| p.0 as i32);
        let ys = pts.iter().map(|p| p.1 as i32);
        let (x_min, x_max) = (xs.clone().min().unwrap(), xs.max().unwrap());
        let (y_min, y_max) = (ys.clone().min().unwrap(), ys.max().unwrap());

        let mut last_row = i32::MIN;
        let mut pass = 0;
        draw_triangle(
            Vertex::new(pts[0].0, pts[0].1, 0.0f32),
            Vertex::new(pts[1].0, pts[1].1, 0.5),
            Vertex::new(pts[2].0, pts[2].1, 1.0),
            |x, y, c| {
                assert!((x_min..=x_max).contains(&x), "x = {x} outside {pts:?}");
                assert!((y_min..y_max).contains(&y), "y = {y} outside {pts:?}");
                assert!((-1e-4..=1.0 + 1e-4).contains(&c));
                // rows only go back up when the second short edge starts
                if y < last_row {
                    pass += 1;
                }
                last_row = y;
            },
        );
        assert!(pass <= 1);
    }
}

#[test]
fn test_line_pixel_count_follows_dominant_axis() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..200 {
        let (x1, y1) = (rng.random_range(-50..50) as f32, rng.random_range(-50..50) as f32);
        let (x2, y2) = (rng.random_range(-50..50) as f32, rng.random_range(-50..50) as f32);
        let mut count = 0usize;
        draw_line(
            Vertex::new(x1, y1, 0.0f32),
            Vertex::new(x2, y2, 1.0),
            |_, _, _| count += 1,
        );
        let steps = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
        assert_eq!(count, steps + 1, "({x1}, {y1}) -> ({x2}, {y2})");
    }
}
