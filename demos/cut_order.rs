use cutpath::{
    core::math::Affine2,
    plan::{NestingForest, Outline, plan_indices},
    polyline::Polyline,
    shape::{MaterialShape, PlacedShape, RectOutline},
};
use std::f64::consts::FRAC_PI_2;

fn main() {
    env_logger::init();
    nested_rectangles();
    shapes_with_holes();
}

fn print_forest(forest: &NestingForest, names: &[&str]) {
    fn visit(forest: &NestingForest, node: usize, names: &[&str]) {
        println!(
            "  {}{}",
            "  ".repeat(forest.depth(node)),
            names[forest.outline_index(node)]
        );
        for &child in forest.children(node) {
            visit(forest, child, names);
        }
    }

    for &root in forest.roots() {
        visit(forest, root, names);
    }
}

fn nested_rectangles() {
    println!("Planning five rectangles...");
    let names = ["small A", "small B", "medium A", "medium B", "sheet"];
    let outlines = [
        RectOutline::new(15.0, 15.0, 5.0, 5.0),
        RectOutline::new(35.0, 15.0, 5.0, 5.0),
        RectOutline::new(10.0, 10.0, 15.0, 15.0),
        RectOutline::new(30.0, 10.0, 15.0, 15.0),
        RectOutline::new(5.0, 5.0, 45.0, 45.0),
    ];

    print_forest(&NestingForest::build(&outlines), &names);
    let order: Vec<&str> = plan_indices(&outlines).into_iter().map(|i| names[i]).collect();
    println!("  cut order: {}", order.join(", "));
}

fn shapes_with_holes() {
    println!("\nPlanning a washer, a part in its hole and a rotated bar...");
    let names = ["washer", "part in hole", "tab", "bar", "part on bar"];
    let washer = MaterialShape::with_holes(
        Polyline::from_rect(0.0, 0.0, 10.0, 10.0),
        vec![Polyline::from_rect(3.0, 3.0, 4.0, 4.0)],
    );
    let in_hole = MaterialShape::new(Polyline::from_rect(4.0, 4.0, 2.0, 2.0));
    let tab = MaterialShape::new(Polyline::from_rect(1.0, 1.0, 1.0, 1.0));
    let bar = MaterialShape::new(Polyline::from_rect(0.0, 0.0, 20.0, 4.0));
    let on_bar = MaterialShape::new(Polyline::from_rect(0.0, 0.0, 2.0, 2.0));

    let outlines = [
        PlacedShape::new(washer, Affine2::identity()),
        PlacedShape::new(in_hole, Affine2::identity()),
        PlacedShape::new(tab, Affine2::identity()),
        PlacedShape::new(bar, Affine2::translate(20.0, 0.0) * Affine2::rotate(FRAC_PI_2)),
        PlacedShape::new(on_bar, Affine2::translate(17.0, 5.0)),
    ];
    for (name, o) in names.iter().zip(outlines.iter()) {
        let b = o.bounds();
        println!(
            "  {}: bounds ({}, {}) - ({}, {})",
            name, b.min_x, b.min_y, b.max_x, b.max_y
        );
    }

    print_forest(&NestingForest::build(&outlines), &names);
    let order: Vec<&str> = plan_indices(&outlines).into_iter().map(|i| names[i]).collect();
    println!("  cut order: {}", order.join(", "));
}
