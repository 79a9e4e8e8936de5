mod common;

use embedded_graphics::{geometry::Point, geometry::Size, pixelcolor::BinaryColor};
use proptest::prelude::*;
use todo_display_core::{
    BoardContent, Canvas, CanvasGeometry, FontBook, FontMetrics, FontRole, LayoutConfig,
    ListLayoutEngine, ListMode, Mark, Orientation, Region, RegionAllocator, Renderer, Shape, Task,
    layout::capacity, orientation,
};

use common::{FixedMetrics, numbered_tasks};

fn region_strategy() -> impl Strategy<Value = Region> {
    (0..400i32, -100..500i32).prop_map(|(top_y, height)| Region {
        top_y,
        bottom_y: top_y + height,
        left_x: 20,
        right_x: 780,
    })
}

proptest! {
    #[test]
    fn capacity_law(region in region_strategy(), pitch in 20u32..80, n in 0usize..30) {
        let config = LayoutConfig { line_pitch: pitch, ..LayoutConfig::LANDSCAPE };
        let engine = ListLayoutEngine::new(&config, &FixedMetrics);
        let layout = engine.layout(&region, None, &numbered_tasks(n));

        let expected = if region.height() <= 0 { 0 } else { (region.height() as u32 / pitch) as usize };
        prop_assert_eq!(layout.plan.capacity, expected);
        prop_assert_eq!(layout.plan.capacity, capacity(region.height(), pitch));

        for row in &layout.rows {
            prop_assert!(region.contains_rect(&row.checkbox));
            prop_assert!(row.checkbox.top_left.y + pitch as i32 - 1 <= region.bottom_y);
            if let Some(strike) = row.strike {
                prop_assert!(strike.start.y >= region.top_y && strike.start.y <= region.bottom_y);
            }
        }
    }

    #[test]
    fn truncation_law(region in region_strategy(), n in 0usize..40) {
        let config = LayoutConfig::PORTRAIT;
        let engine = ListLayoutEngine::new(&config, &FixedMetrics);
        let tasks = numbered_tasks(n);
        let layout = engine.layout(&region, Some("Stacy"), &tasks);

        prop_assert_eq!(layout.total, n);
        prop_assert_eq!(layout.rendered, n.min(layout.plan.capacity));
        let drawn: Vec<&str> = layout.rows.iter().map(|row| row.text.as_str()).collect();
        let expected: Vec<&str> = tasks.iter().take(layout.rendered).map(Task::text).collect();
        prop_assert_eq!(drawn, expected);
    }

    #[test]
    fn dual_regions_are_balanced(height in 1u32..2000, portrait in any::<bool>()) {
        let orientation = if portrait { Orientation::Portrait } else { Orientation::Landscape };
        let config = LayoutConfig::for_orientation(orientation);
        // surface height is `height` in both orientations
        let geometry = match orientation {
            Orientation::Landscape => CanvasGeometry::new(800, height, orientation),
            Orientation::Portrait => CanvasGeometry::new(height, 800, orientation),
        }
        .unwrap();

        let allocation = RegionAllocator::new(&config).allocate(&geometry, ListMode::Dual).unwrap();
        let [first, second] = allocation.regions.as_slice() else {
            panic!("expected two regions");
        };
        let gap = config.region_gap as i32;
        prop_assert!((first.height() - second.height()).abs() <= 2 * gap + 1);
        prop_assert!(first.bottom_y < second.top_y);
        let divider = allocation.divider_y.unwrap();
        prop_assert!(first.bottom_y < divider && divider < second.top_y);
    }

    #[test]
    fn rotation_round_trip(width in 1u32..40, height in 1u32..40, seed in any::<u64>()) {
        let mut canvas = Canvas::new(Size::new(width, height));
        let mut state = seed | 1;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                if state & 1 == 1 {
                    canvas.set_pixel(Point::new(x, y), BinaryColor::On);
                }
            }
        }

        let portrait = orientation::transform(canvas.clone(), Orientation::Portrait);
        prop_assert_eq!((portrait.width(), portrait.height()), (height, width));
        prop_assert_eq!(portrait.ink_count(), canvas.ink_count());
        prop_assert_eq!(&orientation::rotate_cw(&portrait), &canvas);
        prop_assert_eq!(&orientation::transform(canvas.clone(), Orientation::Landscape), &canvas);
    }

    #[test]
    fn strike_is_exact_advance_width(text in "[ -~]{1,40}") {
        let geometry = CanvasGeometry::new(800, 480, Orientation::Landscape).unwrap();
        let config = LayoutConfig::LANDSCAPE;
        let fonts = FontBook::for_orientation(Orientation::Landscape);
        let tasks = [Task::new(text.clone(), true)];
        let composition = Renderer::new(&config, &fonts)
            .compose(&geometry, BoardContent::Single(&tasks), "now")
            .unwrap();

        let strikes: Vec<_> = composition.scene.marked(Mark::Strike).collect();
        prop_assert_eq!(strikes.len(), 1);
        let Shape::Line { line, .. } = strikes[0] else {
            panic!("strike is not a line");
        };
        prop_assert_eq!(
            (line.end.x - line.start.x + 1) as u32,
            fonts.advance_width(&text, FontRole::Task)
        );
    }
}
