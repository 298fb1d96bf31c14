//! Renders the de Casteljau construction of a curve at several points in its animation, one PNG per frame.
//!
//! Usage: `cargo run --example casteljau --features image -- [output-prefix]`

use gridline::{plot, Command, Config, CurveEditor, Target, Viewport};
use image_::{Rgb, RgbImage};
use log::info;
use vek::*;

const LEVEL_COLOURS: [Rgb<u8>; 4] = [
    Rgb([90, 90, 90]),
    Rgb([80, 160, 255]),
    Rgb([120, 220, 120]),
    Rgb([255, 180, 60]),
];

/// Points spaced roughly a pixel apart along a segment.
fn segment_points(viewport: Viewport, [a, b]: [Vec2<f32>; 2]) -> impl Iterator<Item = Vec2<f32>> {
    let pixels = ((b - a) * Vec2::new(viewport.width, viewport.height).map(|e| e as f32 * 0.5))
        .magnitude()
        .ceil()
        .max(1.0) as usize;
    (0..=pixels).map(move |i| a + (b - a) * (i as f32 / pixels as f32))
}

/// Every pixel centre covered by a handle quad.
fn quad_points(viewport: Viewport, quad: [Vec2<f32>; 4]) -> impl Iterator<Item = Vec2<f32>> {
    let [top_right, _, _, bottom_left] = quad;
    segment_points(viewport, [bottom_left, Vec2::new(bottom_left.x, top_right.y)]).flat_map(move |left| {
        segment_points(viewport, [left, Vec2::new(top_right.x, left.y)]).collect::<Vec<_>>()
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let prefix = std::env::args().nth(1).unwrap_or_else(|| "casteljau".into());
    let config = Config {
        handle_size: 0.012,
        ..Config::default()
    };
    let viewport = config.viewport;

    let mut editor = CurveEditor::new(&config)?;
    for cursor in [(120.0, 640.0), (220.0, 160.0), (560.0, 120.0), (690.0, 600.0)] {
        editor.push(Command::Append(viewport.cursor_to_ndc(Vec2::from(cursor))));
    }

    for (frame_index, seconds) in [0.5f32, 1.5, 2.5, 3.5].into_iter().enumerate() {
        let frame = editor.frame(seconds);

        let mut img = RgbImage::new(viewport.width, viewport.height);
        img.clear(Rgb([0, 0, 0]));

        plot(&mut img, frame.curve.iter().copied(), Rgb([255, 255, 255]));
        for (level, points) in frame.construction.levels().iter().enumerate() {
            let colour = LEVEL_COLOURS[level.min(LEVEL_COLOURS.len() - 1)];
            for w in points.windows(2) {
                plot(&mut img, segment_points(viewport, [w[0], w[1]]), colour);
            }
            for p in points {
                let quad = gridline::curve::handle_quad(*p, frame.handle_size);
                plot(&mut img, quad_points(viewport, quad), colour);
            }
        }

        let path = format!("{}-{}.png", prefix, frame_index);
        img.save(&path)?;
        info!("t = {:.2}: wrote {}", frame.t(), path);
    }
    Ok(())
}
